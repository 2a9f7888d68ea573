// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The six composition object kinds (spec.md §3.6) and the append-only
//! arena that owns them.
//!
//! A composition is a tree of [`ComposedValueRef`] handles rooted at a
//! [`Timeline`], each pointing into a [`CompositionArena`]. [`duration`]
//! computes the length of any object's `presentation` space, recursively
//! for containers — the quantity [`crate::graph::build_transform`] needs to
//! build a `Track`'s sequential child-shift edges.

pub mod arena;
pub mod clip;
pub mod gap;
pub mod stack;
pub mod timeline;
pub mod track;
pub mod warp;

pub use arena::{ClipId, ComposedValueRef, CompositionArena, GapId, StackId, TimelineId, TrackId, WarpId};
pub use clip::Clip;
pub use gap::Gap;
pub use stack::Stack;
pub use timeline::Timeline;
pub use track::Track;
pub use warp::Warp;

use crate::ordinate::Ordinate;

/// The duration of `obj`'s `presentation` space.
///
/// Leaves (`Clip`, `Gap`) carry their own duration directly; `Warp` derives
/// it from its topology's input bounds; `Track` sums its children's
/// durations (sequential playback); `Stack` and `Timeline` take the max (or
/// sole) of their children's, since parallel children share one origin.
#[must_use]
pub fn duration(arena: &CompositionArena, obj: ComposedValueRef) -> Ordinate {
    match obj {
        ComposedValueRef::Clip(id) => arena.clip(id).duration(),
        ComposedValueRef::Gap(id) => arena.gap(id).duration,
        ComposedValueRef::Warp(id) => arena.warp(id).duration(),
        ComposedValueRef::Track(id) => arena
            .track(id)
            .children
            .iter()
            .fold(Ordinate::ZERO, |acc, &child| acc + duration(arena, child)),
        ComposedValueRef::Stack(id) => arena
            .stack(id)
            .children
            .iter()
            .map(|&child| duration(arena, child))
            .fold(Ordinate::ZERO, |acc, d| if d > acc { d } else { acc }),
        ComposedValueRef::Timeline(id) => duration(arena, ComposedValueRef::Stack(arena.timeline(id).stack)),
    }
}
