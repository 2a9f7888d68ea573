// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a [`crate::graph::SpaceGraph`] into answers: a single composed
//! [`ProjectionOperator`] for one source→destination pair, or a
//! [`ProjectionBuilder`] precomputing every clip a source's domain touches.

pub mod builder;
pub mod operator;

pub use builder::{ProjectionBuilder, Segment};
pub use operator::{build_projection_operator, ProjectionOperator};
