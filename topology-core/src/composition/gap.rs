// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Gap`]: a leaf representing a span of absent media.

use crate::ordinate::Ordinate;

/// A leaf composition object exposing only `presentation`, with a fixed
/// duration and no edges of its own (spec.md §3.6: "none (leaf)").
#[derive(Clone, Debug, PartialEq)]
pub struct Gap {
    /// Optional display name.
    pub name: Option<String>,
    /// The gap's duration, and the whole content of its `presentation`
    /// space's bounds (`[0, duration)`).
    pub duration: Ordinate,
}

impl Gap {
    /// Builds an unnamed gap of the given duration.
    #[must_use]
    pub const fn new(duration: Ordinate) -> Self {
        Self { name: None, duration }
    }
}
