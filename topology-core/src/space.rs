// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vocabulary for naming a coordinate space within a composition:
//! [`SpaceLabel`], [`SpaceReference`], and the discrete/continuous
//! bijection [`DiscreteInfo`].

use core::fmt;

use crate::composition::ComposedValueRef;
use crate::interval::ContinuousInterval;
use crate::ordinate::Ordinate;

/// The fixed set of coordinate-space roles a composition object can expose.
///
/// `Child` always carries a `child_index` in the owning [`SpaceReference`];
/// the others never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceLabel {
    /// The space a container or clip presents to its parent.
    Presentation,
    /// A container's own internal timeline, prior to child placement.
    Intrinsic,
    /// A clip's underlying media axis.
    Media,
    /// The k-th child edge of a container (`child_index` distinguishes which).
    Child,
}

/// One node of a [`crate::graph::SpaceGraph`]: a named coordinate space
/// belonging to a specific composition object.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceReference {
    /// The object this space belongs to.
    pub object_ref: ComposedValueRef,
    /// Which space, of the object's fixed enumeration (§4.1).
    pub label: SpaceLabel,
    /// `Some(k)` iff `label == Child`, identifying the k-th child edge.
    pub child_index: Option<u32>,
}

impl SpaceReference {
    /// Builds a non-`child` space reference.
    #[must_use]
    pub const fn new(object_ref: ComposedValueRef, label: SpaceLabel) -> Self {
        Self {
            object_ref,
            label,
            child_index: None,
        }
    }

    /// Builds a `child`-labeled space reference for child edge `k`.
    #[must_use]
    pub const fn child(object_ref: ComposedValueRef, k: u32) -> Self {
        Self {
            object_ref,
            label: SpaceLabel::Child,
            child_index: Some(k),
        }
    }
}

impl fmt::Debug for SpaceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.child_index {
            Some(k) => write!(f, "{:?}.child[{k}]", self.object_ref),
            None => write!(f, "{:?}.{:?}", self.object_ref, self.label),
        }
    }
}

/// Bijection between sample indices and continuous ordinates on one axis:
/// `continuous(i) = start + (i − start_index) / rate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscreteInfo {
    /// Samples per unit of continuous time.
    pub sample_rate_hz: Ordinate,
    /// The sample index mapped to ordinate zero (before any `start` shift).
    pub start_index: i64,
}

impl DiscreteInfo {
    /// The continuous ordinate corresponding to sample index `i`.
    #[must_use]
    pub fn continuous(&self, i: i64) -> Ordinate {
        Ordinate::Float((i - self.start_index) as f64) / self.sample_rate_hz
    }

    /// The half-open continuous interval of width `1/rate` that sample
    /// index `i` occupies when projected *from* a discrete index.
    #[must_use]
    pub fn continuous_interval(&self, i: i64) -> ContinuousInterval {
        let start = self.continuous(i);
        let width = Ordinate::ONE / self.sample_rate_hz;
        ContinuousInterval::new(start, start + width)
    }

    /// The sample index whose interval contains continuous ordinate `o`,
    /// if `o` falls within a representable index's interval.
    #[must_use]
    pub fn index_of(&self, o: Ordinate) -> i64 {
        let scaled = (o * self.sample_rate_hz).to_f64();
        scaled.floor() as i64 + self.start_index
    }
}
