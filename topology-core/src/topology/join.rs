// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `join`: binary composition of topologies, `A→B ∘ B→C → A→C`.

use super::Topology;
use crate::mapping::Mapping;
use crate::trace::{JoinEvent, Tracer};

/// Composes `ab` (A→B) with `bc` (B→C), producing A→C.
///
/// For each pair of overlapping segments, delegates to
/// [`Mapping::compose`] (which restricts the A-side segment to the
/// preimage of the overlap, splits any non-monotone B→C segment into
/// monotone runs, and composes each pair exactly where a closed form
/// exists). Segments are emitted in input order; an A-input with no valid
/// image under both stages is simply absent from the result rather than
/// represented explicitly (see [`Topology`]'s relaxed contiguity).
#[must_use]
pub fn join(ab: &Topology, bc: &Topology, tracer: &mut Tracer<'_>) -> Topology {
    if ab.is_empty() || bc.is_empty() {
        tracer.join(&JoinEvent {
            lhs_segments: ab.mappings().len(),
            rhs_segments: bc.mappings().len(),
            result_segments: 0,
        });
        return Topology::EMPTY;
    }
    let mut segments: Vec<Mapping> = Vec::new();
    for am in ab.mappings() {
        if am.is_empty() {
            continue;
        }
        for bm in bc.mappings() {
            if bm.is_empty() || !am.output_bounds().overlaps(bm.input_bounds()) {
                continue;
            }
            segments.extend(bm.compose(am, am.input_bounds()).mappings().iter().cloned());
        }
    }
    segments.sort_by(|a, b| {
        a.input_bounds()
            .start
            .partial_cmp(&b.input_bounds().start)
            .expect("ordinates are comparable")
    });
    tracer.join(&JoinEvent {
        lhs_segments: ab.mappings().len(),
        rhs_segments: bc.mappings().len(),
        result_segments: segments.len(),
    });
    Topology::new(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::ContinuousInterval;
    use crate::mapping::ProjectionResult;
    use crate::ordinate::Ordinate;
    use crate::transform1d::AffineTransform1D;

    fn affine(start: i64, end: i64, scale: i64, offset: i64) -> Mapping {
        Mapping::affine(
            ContinuousInterval::new(Ordinate::from(start), Ordinate::from(end)),
            AffineTransform1D {
                scale: Ordinate::from(scale),
                offset: Ordinate::from(offset),
            },
        )
    }

    #[test]
    fn identity_join_identity_is_identity() {
        let a = Topology::infinite_identity();
        let b = Topology::infinite_identity();
        let composed = join(&a, &b, &mut Tracer::none());
        assert_eq!(
            composed.project_instantaneous_cc(Ordinate::from(7)),
            ProjectionResult::Ordinate(Ordinate::from(7))
        );
    }

    #[test]
    fn affine_join_affine_composes_transforms() {
        // A->B: y = x + 1 on [0, 10). B->C: z = 2y on [0, 20).
        let ab = Topology::new(vec![affine(0, 10, 1, 1)]);
        let bc = Topology::new(vec![affine(0, 20, 2, 0)]);
        let ac = join(&ab, &bc, &mut Tracer::none());
        // x=3 -> y=4 -> z=8
        assert_eq!(
            ac.project_instantaneous_cc(Ordinate::from(3)),
            ProjectionResult::Ordinate(Ordinate::from(8))
        );
    }

    #[test]
    fn join_restricts_to_overlap() {
        // A->B covers [0,10) mapping onto B=[0,10) (identity).
        // B->C only defined on B=[5,10).
        let ab = Topology::new(vec![affine(0, 10, 1, 0)]);
        let bc = Topology::new(vec![affine(5, 10, 1, 100)]);
        let ac = join(&ab, &bc, &mut Tracer::none());
        assert_eq!(
            ac.project_instantaneous_cc(Ordinate::from(2)),
            ProjectionResult::OutOfBounds,
            "x=2 maps to y=2, outside B->C's domain"
        );
        assert_eq!(
            ac.project_instantaneous_cc(Ordinate::from(7)),
            ProjectionResult::Ordinate(Ordinate::from(107))
        );
    }

    #[test]
    fn join_with_empty_topology_is_empty() {
        let ab = Topology::infinite_identity();
        let ac = join(&ab, &Topology::EMPTY, &mut Tracer::none());
        assert!(ac.is_empty());
    }

    #[test]
    fn join_composes_affine_with_linear_exactly() {
        use crate::mapping::{Knot, LinearCurve};

        // A->B: identity on [0,10). B->C: a piecewise-linear curve through
        // (0,0), (5,50), (10,300) — composing should preserve every knot.
        let ab = Topology::new(vec![affine(0, 10, 1, 0)]);
        let curve = LinearCurve::new(vec![
            Knot { input: Ordinate::from(0), output: Ordinate::from(0) },
            Knot { input: Ordinate::from(5), output: Ordinate::from(50) },
            Knot { input: Ordinate::from(10), output: Ordinate::from(300) },
        ]);
        let bc = Topology::new(vec![Mapping::Linear(curve)]);
        let ac = join(&ab, &bc, &mut Tracer::none());
        assert_eq!(
            ac.project_instantaneous_cc(Ordinate::from(5)),
            ProjectionResult::Ordinate(Ordinate::from(50)),
            "the internal knot at x=5 must survive composition exactly"
        );
        assert_eq!(
            ac.project_instantaneous_cc(Ordinate::from(2)),
            ProjectionResult::Ordinate(Ordinate::from(20)),
            "linear interpolation between (0,0) and (5,50)"
        );
    }
}
