// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Clip`]: a leaf referencing a span of source media.

use crate::interval::ContinuousInterval;
use crate::space::DiscreteInfo;

/// A leaf composition object exposing `presentation` and `media` spaces.
///
/// `bounds_s`, if present, trims the clip to a sub-range of its media:
/// `presentation` space covers `[0, bounds_s.duration())`, and the
/// `presentation`→`media` edge shifts by `bounds_s.start` (see
/// [`crate::graph::build_transform`]). With no `bounds_s`, the clip
/// presents its media untrimmed, one-to-one.
#[derive(Clone, Debug, PartialEq)]
pub struct Clip {
    /// Optional display name.
    pub name: Option<String>,
    /// Optional trim into the underlying media.
    pub bounds_s: Option<ContinuousInterval>,
    /// Optional sample-rate/start-index bijection for the clip's media axis.
    pub discrete_info: Option<DiscreteInfo>,
}

impl Clip {
    /// An untrimmed clip with no discrete sampling info.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            bounds_s: None,
            discrete_info: None,
        }
    }

    /// The duration of this clip's `presentation` space: `bounds_s`'s
    /// duration if trimmed, otherwise unbounded.
    #[must_use]
    pub fn duration(&self) -> crate::ordinate::Ordinate {
        self.bounds_s
            .map_or(crate::ordinate::Ordinate::INF, ContinuousInterval::duration)
    }
}

impl Default for Clip {
    fn default() -> Self {
        Self::new()
    }
}
