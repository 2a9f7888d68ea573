// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Timeline`]: the outermost composition object, wrapping one [`Stack`].

use super::arena::StackId;
use crate::space::DiscreteInfo;

/// The root of a composition tree: exposes `presentation` and `intrinsic`
/// over a single [`Stack`] child (spec.md §3.6), both identities onto the
/// stack's own spaces.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    /// Optional display name.
    pub name: Option<String>,
    /// The wrapped stack.
    pub stack: StackId,
    /// Optional sample-rate/start-index bijection for the timeline's
    /// `presentation` space.
    pub discrete_info: Option<DiscreteInfo>,
}

impl Timeline {
    /// Builds an unnamed, non-discrete timeline wrapping `stack`.
    #[must_use]
    pub const fn new(stack: StackId) -> Self {
        Self {
            name: None,
            stack,
            discrete_info: None,
        }
    }
}
