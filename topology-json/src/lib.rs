// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON import boundary collaborator for `topology-core`.
//!
//! `topology-core` has no notion of JSON, schemas, or serialization (those
//! are explicit Non-goals of the core); this crate is the thing an
//! embedding application links against to turn an OTIO-style document into
//! composition objects in a [`topology_core::composition::CompositionArena`].
//!
//! [`import_timeline`] is the entry point. A single unrecognized or
//! malformed child does not fail the whole import: it's dropped and
//! reported in the returned [`error::SkippedChild`] list instead, per the
//! core's documented partial-failure policy for deserialization.

pub mod convert;
pub mod error;
pub mod schema;

pub use convert::import_timeline;
pub use error::{Error, SkippedChild};
