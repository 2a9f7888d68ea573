// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of recoverable, caller-surfaced conditions (spec.md §7).
//!
//! Out-of-bounds instantaneous projection is deliberately **not** an error
//! variant here: it is returned as [`crate::mapping::ProjectionResult::OutOfBounds`]
//! so bulk operations can continue past a boundary without a `Result` at
//! every step.

use crate::composition::ComposedValueRef;
use crate::space::{SpaceLabel, SpaceReference};

/// Recoverable errors raised by `graph` and `projection` operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A source or destination reference was never placed by
    /// [`crate::graph::build_space_graph`].
    #[error("{0:?} was not placed in the space graph")]
    SpaceNotInGraph(SpaceReference),

    /// Neither space's treecode is a prefix of the other's, so no walk
    /// connects them.
    #[error("no path between {from:?} and {to:?}")]
    NoPathBetweenSpaces {
        /// The requested source space.
        from: SpaceReference,
        /// The requested destination space.
        to: SpaceReference,
    },

    /// A [`crate::topology::join`] produced an empty topology where the
    /// caller required a non-empty result.
    #[error("join produced no projection result")]
    NoProjectionResult,

    /// A [`crate::topology::join`] found no overlap between the two
    /// topologies being composed.
    #[error("the two topologies being joined do not overlap")]
    NoOverlap,

    /// [`crate::graph::build_transform`] was asked for a space label the
    /// object does not expose.
    #[error("{object:?} does not expose the {label:?} space")]
    UnsupportedSpace {
        /// The object queried.
        object: ComposedValueRef,
        /// The space label it was asked for.
        label: SpaceLabel,
    },

    /// [`crate::topology::invert`] produced more than one branch where the
    /// caller expected a single forward operator.
    #[error("inversion produced more than one branch")]
    MoreThanOneInversionIsNotImplemented,
}
