// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `invert`: partial inversion of a [`Topology`] into 0..N inverted
//! topologies, one per maximal monotone run.

use core::cmp::Ordering;

use super::Topology;
use crate::mapping::Mapping;
use crate::trace::{InvertEvent, Tracer};

/// Partitions `t`'s mappings into maximal monotone runs (splitting any
/// non-monotone Bézier mapping first) and inverts each run independently.
///
/// Returns one topology per run, in the run's own original input order.
/// Returns an empty `Vec` if `t` is empty.
#[must_use]
pub fn invert(t: &Topology, tracer: &mut Tracer<'_>) -> Vec<Topology> {
    if t.is_empty() {
        tracer.invert(&InvertEvent {
            input_segments: 0,
            run_count: 0,
        });
        return Vec::new();
    }

    let monotone: Vec<Mapping> = t.mappings().iter().flat_map(Mapping::split_monotone).collect();

    let mut runs: Vec<Vec<Mapping>> = Vec::new();
    for m in monotone {
        let dir = direction(&m);
        let extends_current = match runs.last() {
            Some(run) => {
                let run_dir = direction(run.last().expect("run is never empty"));
                dir == Ordering::Equal || run_dir == Ordering::Equal || dir == run_dir
            }
            None => false,
        };
        if extends_current {
            runs.last_mut().expect("just checked non-empty").push(m);
        } else {
            runs.push(vec![m]);
        }
    }

    let run_count = runs.len();
    let result: Vec<Topology> = runs
        .into_iter()
        .map(|run| {
            let mut inverted: Vec<Mapping> = run.iter().flat_map(Mapping::inverted).collect();
            inverted.sort_by(|a, b| {
                a.input_bounds()
                    .start
                    .partial_cmp(&b.input_bounds().start)
                    .expect("ordinates are comparable")
            });
            Topology::new(inverted)
        })
        .collect();
    tracer.invert(&InvertEvent {
        input_segments: t.mappings().len(),
        run_count,
    });
    result
}

/// Whether `m`'s output increases, decreases, or stays flat from the start
/// of its domain to the end.
fn direction(m: &Mapping) -> Ordering {
    match m {
        Mapping::Empty => Ordering::Equal,
        Mapping::Affine { transform, .. } => transform
            .scale
            .partial_cmp(&crate::ordinate::Ordinate::ZERO)
            .unwrap_or(Ordering::Equal),
        Mapping::Linear(curve) => {
            let knots = curve.knots();
            knots[0]
                .output
                .partial_cmp(&knots[knots.len() - 1].output)
                .unwrap_or(Ordering::Equal)
        }
        Mapping::Bezier(curve) => {
            let segments = curve.segments();
            segments[0]
                .p0
                .output
                .partial_cmp(&segments[segments.len() - 1].p3.output)
                .unwrap_or(Ordering::Equal)
        }
    }
}
