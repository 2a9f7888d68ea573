// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Track`]: a sequential container.

use super::arena::ComposedValueRef;

/// A sequential container: children play back end-to-end.
///
/// Exposes `presentation`, `intrinsic`, and one `child[k]` space per child
/// (spec.md §3.6). `intrinsic` is identical to `presentation`; `child[k]` to
/// `child[k+1]` is an affine shift by the duration of child `k` (spec.md
/// §4.3), built by [`crate::graph::build_transform`].
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// Optional display name.
    pub name: Option<String>,
    /// Children in playback order.
    pub children: Vec<ComposedValueRef>,
}

impl Track {
    /// Builds an unnamed track with no children.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            children: Vec::new(),
        }
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
