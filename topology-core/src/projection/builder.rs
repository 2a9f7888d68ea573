// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ProjectionBuilder`]: a sweep-line decomposition of one space's domain
//! into cut-point intervals, each already resolved to the clip media space
//! active over it (spec.md §4.7) — the structure a scrubber or resampler
//! builds once per edit and then queries many times without re-walking the
//! graph per sample.

use crate::composition::{ComposedValueRef, CompositionArena};
use crate::error::Error;
use crate::graph::SpaceGraph;
use crate::interval::ContinuousInterval;
use crate::ordinate::Ordinate;
use crate::space::{SpaceLabel, SpaceReference};
use crate::topology::Topology;
use crate::trace::{BuilderInitEvent, Tracer};

use super::operator::build_projection_operator;

/// One contiguous run of `source`'s domain that resolves to a single clip's
/// media space.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The run of `source`'s domain this segment covers.
    pub input_bounds: ContinuousInterval,
    /// The clip media space active over `input_bounds`.
    pub destination: SpaceReference,
    /// The composed topology from `source` to `destination`, restricted to
    /// `input_bounds`.
    pub topology: Topology,
}

/// A precomputed, sorted decomposition of `source`'s domain into
/// [`Segment`]s, one per media leaf reachable from `source`'s object.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionBuilder {
    source: SpaceReference,
    segments: Vec<Segment>,
}

impl ProjectionBuilder {
    /// Walks every clip reachable from `source.object_ref` and resolves the
    /// projection to each one's media space, producing cut points sorted
    /// along `source`'s axis.
    ///
    /// # Errors
    ///
    /// Propagates whatever [`build_projection_operator`] returns for any
    /// reachable clip (e.g. [`Error::SpaceNotInGraph`] if `source` itself
    /// was never placed).
    pub fn init_from(
        graph: &SpaceGraph,
        arena: &CompositionArena,
        source: SpaceReference,
        tracer: &mut Tracer<'_>,
    ) -> Result<Self, Error> {
        let mut segments = Vec::new();
        for leaf in media_leaves_under(source.object_ref, arena) {
            let destination = SpaceReference::new(leaf, SpaceLabel::Media);
            let op = build_projection_operator(graph, arena, source, destination, tracer)?;
            let bounds = op.topology().input_bounds();
            if bounds.is_empty() {
                continue;
            }
            segments.push(Segment {
                input_bounds: bounds,
                destination,
                topology: op.topology().clone(),
            });
        }
        segments.sort_by(|a, b| {
            a.input_bounds
                .start
                .partial_cmp(&b.input_bounds.start)
                .expect("ordinates are comparable")
        });
        tracer.builder_init(&BuilderInitEvent {
            source_object: source.object_ref,
            segment_count: segments.len(),
            first_cut: segments.first().map(|s| s.input_bounds.start),
        });
        Ok(Self { source, segments })
    }

    /// The space these segments are indexed along.
    #[must_use]
    pub fn source(&self) -> SpaceReference {
        self.source
    }

    /// The segments, sorted by `input_bounds.start`.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The segment containing `o`, if any cut point's bounds contain it.
    #[must_use]
    pub fn segment_at(&self, o: Ordinate) -> Option<&Segment> {
        self.segments.iter().find(|s| s.input_bounds.contains(o))
    }
}

/// Every `Clip` reachable from `obj` by descending through `Warp`/`Track`/
/// `Stack`/`Timeline` children, in traversal order. `Gap`s contribute
/// nothing; a bare `Clip` is its own one-element result.
fn media_leaves_under(obj: ComposedValueRef, arena: &CompositionArena) -> Vec<ComposedValueRef> {
    match obj {
        ComposedValueRef::Clip(_) => vec![obj],
        ComposedValueRef::Gap(_) => Vec::new(),
        ComposedValueRef::Warp(id) => media_leaves_under(arena.warp(id).child, arena),
        ComposedValueRef::Track(id) => arena
            .track(id)
            .children
            .iter()
            .flat_map(|&child| media_leaves_under(child, arena))
            .collect(),
        ComposedValueRef::Stack(id) => arena
            .stack(id)
            .children
            .iter()
            .flat_map(|&child| media_leaves_under(child, arena))
            .collect(),
        ComposedValueRef::Timeline(id) => {
            media_leaves_under(ComposedValueRef::Stack(arena.timeline(id).stack), arena)
        }
    }
}
