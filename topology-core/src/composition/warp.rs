// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Warp`]: a single-child wrapper whose `presentation`→`child.presentation`
//! edge is an arbitrary stored [`Topology`].

use super::arena::ComposedValueRef;
use crate::topology::Topology;

/// Wraps exactly one child, reshaping time on the way in via `topology`.
///
/// `topology`'s own input bounds define the warp's `presentation` space;
/// its output lands in the child's `presentation` space.
#[derive(Clone, Debug, PartialEq)]
pub struct Warp {
    /// Optional display name.
    pub name: Option<String>,
    /// The `presentation` → `child.presentation` mapping.
    pub topology: Topology,
    /// The single wrapped child.
    pub child: ComposedValueRef,
}

impl Warp {
    /// Builds an unnamed warp.
    #[must_use]
    pub const fn new(topology: Topology, child: ComposedValueRef) -> Self {
        Self {
            name: None,
            topology,
            child,
        }
    }

    /// The duration of this warp's own `presentation` space: the topology's
    /// input bounds duration.
    #[must_use]
    pub fn duration(&self) -> crate::ordinate::Ordinate {
        self.topology.input_bounds().duration()
    }
}
