// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The append-only arena owning every composition object, and the tagged
//! handle ([`ComposedValueRef`]) that lets a container's `children` list be
//! polymorphic over the six kinds.

use core::fmt;

use super::clip::Clip;
use super::gap::Gap;
use super::stack::Stack;
use super::timeline::Timeline;
use super::track::Track;
use super::warp::Warp;

macro_rules! object_id {
    ($name:ident) => {
        /// Opaque handle into a [`CompositionArena`]'s corresponding `Vec`.
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Builds a handle from a raw arena index.
            ///
            /// Exposed for callers that walk the arena directly (e.g.
            /// `topology-debug`); not otherwise needed by well-behaved
            /// callers, who receive handles from `CompositionArena::insert_*`.
            #[must_use]
            pub const fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// The raw arena index.
            #[must_use]
            pub const fn index(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

object_id!(ClipId);
object_id!(GapId);
object_id!(WarpId);
object_id!(TrackId);
object_id!(StackId);
object_id!(TimelineId);

/// A polymorphic reference to any one of the six composition object kinds.
///
/// This is the node payload of [`crate::graph::SpaceGraph`] (via
/// [`crate::space::SpaceReference::object_ref`]) and the element type of
/// every container's `children` list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposedValueRef {
    /// A leaf referencing source media.
    Clip(ClipId),
    /// A leaf representing a span of absent media.
    Gap(GapId),
    /// A single-child wrapper applying a `Topology` to its child.
    Warp(WarpId),
    /// A sequential container.
    Track(TrackId),
    /// A parallel container.
    Stack(StackId),
    /// The outermost object, wrapping a single `Stack`.
    Timeline(TimelineId),
}

impl fmt::Debug for ComposedValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clip(id) => write!(f, "{id:?}"),
            Self::Gap(id) => write!(f, "{id:?}"),
            Self::Warp(id) => write!(f, "{id:?}"),
            Self::Track(id) => write!(f, "{id:?}"),
            Self::Stack(id) => write!(f, "{id:?}"),
            Self::Timeline(id) => write!(f, "{id:?}"),
        }
    }
}

/// Owns every composition object ever constructed, one `Vec` per kind.
///
/// Build-once, append-only, mirroring [`crate::tree::BinaryTree`]: there is
/// no `remove`, since spec.md's Non-goals exclude editorial operations.
#[derive(Clone, Debug, Default)]
pub struct CompositionArena {
    clips: Vec<Clip>,
    gaps: Vec<Gap>,
    warps: Vec<Warp>,
    tracks: Vec<Track>,
    stacks: Vec<Stack>,
    timelines: Vec<Timeline>,
}

impl CompositionArena {
    /// An empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a clip and returns its handle.
    pub fn insert_clip(&mut self, clip: Clip) -> ClipId {
        let id = ClipId(u32::try_from(self.clips.len()).expect("arena overflow"));
        self.clips.push(clip);
        id
    }

    /// Inserts a gap and returns its handle.
    pub fn insert_gap(&mut self, gap: Gap) -> GapId {
        let id = GapId(u32::try_from(self.gaps.len()).expect("arena overflow"));
        self.gaps.push(gap);
        id
    }

    /// Inserts a warp and returns its handle.
    pub fn insert_warp(&mut self, warp: Warp) -> WarpId {
        let id = WarpId(u32::try_from(self.warps.len()).expect("arena overflow"));
        self.warps.push(warp);
        id
    }

    /// Inserts a track and returns its handle.
    pub fn insert_track(&mut self, track: Track) -> TrackId {
        let id = TrackId(u32::try_from(self.tracks.len()).expect("arena overflow"));
        self.tracks.push(track);
        id
    }

    /// Inserts a stack and returns its handle.
    pub fn insert_stack(&mut self, stack: Stack) -> StackId {
        let id = StackId(u32::try_from(self.stacks.len()).expect("arena overflow"));
        self.stacks.push(stack);
        id
    }

    /// Inserts a timeline and returns its handle.
    pub fn insert_timeline(&mut self, timeline: Timeline) -> TimelineId {
        let id = TimelineId(u32::try_from(self.timelines.len()).expect("arena overflow"));
        self.timelines.push(timeline);
        id
    }

    /// Looks up a clip by handle.
    #[must_use]
    pub fn clip(&self, id: ClipId) -> &Clip {
        &self.clips[id.0 as usize]
    }

    /// Looks up a gap by handle.
    #[must_use]
    pub fn gap(&self, id: GapId) -> &Gap {
        &self.gaps[id.0 as usize]
    }

    /// Looks up a warp by handle.
    #[must_use]
    pub fn warp(&self, id: WarpId) -> &Warp {
        &self.warps[id.0 as usize]
    }

    /// Looks up a track by handle.
    #[must_use]
    pub fn track(&self, id: TrackId) -> &Track {
        &self.tracks[id.0 as usize]
    }

    /// Looks up a stack by handle.
    #[must_use]
    pub fn stack(&self, id: StackId) -> &Stack {
        &self.stacks[id.0 as usize]
    }

    /// Looks up a timeline by handle.
    #[must_use]
    pub fn timeline(&self, id: TimelineId) -> &Timeline {
        &self.timelines[id.0 as usize]
    }
}
