// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `build_transform`: the per-edge `Topology` a projection walker composes
//! along a path through a [`super::SpaceGraph`] (spec.md §4.3).

use crate::composition::{duration, ComposedValueRef, CompositionArena};
use crate::error::Error;
use crate::interval::ContinuousInterval;
use crate::mapping::Mapping;
use crate::ordinate::Ordinate;
use crate::space::{SpaceLabel, SpaceReference};
use crate::topology::Topology;
use crate::transform1d::AffineTransform1D;

/// Computes the `Topology` carried by one tree edge, given the space at the
/// near end (`from`), the space at the far end (`to`), and which child of
/// `from`'s node it is (`step`: `false` = left, `true` = right).
///
/// # Errors
///
/// Returns [`Error::UnsupportedSpace`] if `from`'s object does not own an
/// edge for this `(label, step)` combination.
pub fn build_transform(
    arena: &CompositionArena,
    from: SpaceReference,
    to: SpaceReference,
    step: bool,
) -> Result<Topology, Error> {
    use SpaceLabel::{Child, Intrinsic, Media, Presentation};

    match (from.object_ref, from.label, to.label) {
        // Internal-chain edges (always a left step; spec.md §4.1).
        (ComposedValueRef::Track(_) | ComposedValueRef::Stack(_) | ComposedValueRef::Timeline(_), Presentation, Intrinsic) => {
            Ok(Topology::infinite_identity())
        }
        (ComposedValueRef::Clip(id), Presentation, Media) => Ok(clip_presentation_to_media(arena, id)),

        // The first child-slot off an object's deepest internal space.
        (ComposedValueRef::Warp(id), Presentation, Child) => Ok(arena.warp(id).topology.clone()),
        (
            ComposedValueRef::Track(_) | ComposedValueRef::Stack(_) | ComposedValueRef::Timeline(_),
            Intrinsic,
            Child,
        ) => Ok(Topology::infinite_identity()),

        // Child-slot edges: left goes into the child's own subtree
        // (always identity); right advances to the next sibling slot.
        (_, Child, Child) if !step => Ok(Topology::infinite_identity()),
        (_, Child, Presentation) if !step => Ok(Topology::infinite_identity()),
        (ComposedValueRef::Track(id), Child, Child) if step => Ok(track_sibling_shift(arena, id, &from)),
        (ComposedValueRef::Stack(_) | ComposedValueRef::Timeline(_), Child, Child) if step => {
            Ok(Topology::infinite_identity())
        }

        _ => Err(Error::UnsupportedSpace {
            object: from.object_ref,
            label: to.label,
        }),
    }
}

/// `Clip` presentation→media: identity on presentation, then an affine
/// shift by the trim's start over `[0, trim.duration())` (spec.md §4.3).
fn clip_presentation_to_media(arena: &CompositionArena, id: crate::composition::ClipId) -> Topology {
    let clip = arena.clip(id);
    let (offset, bound_end) = match clip.bounds_s {
        Some(bounds) => (bounds.start, bounds.duration()),
        None => (Ordinate::ZERO, Ordinate::INF),
    };
    Topology::new(vec![Mapping::affine(
        ContinuousInterval::new(Ordinate::ZERO, bound_end),
        AffineTransform1D::translation(offset),
    )])
}

/// `Track` child-slot `k` → child-slot `k+1`: affine shift by `-duration(k)`
/// over `[duration(k), +inf)` (spec.md §4.3).
fn track_sibling_shift(arena: &CompositionArena, id: crate::composition::TrackId, from: &SpaceReference) -> Topology {
    let k = from.child_index.expect("Child-labeled space always carries an index") as usize;
    let prev = duration(arena, arena.track(id).children[k]);
    Topology::new(vec![Mapping::affine(
        ContinuousInterval::new(prev, Ordinate::INF),
        AffineTransform1D::translation(-prev),
    )])
}
