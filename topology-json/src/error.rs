// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised at the JSON import boundary.
//!
//! `topology-core`'s own [`topology_core::error::Error`] never raises
//! these; deserialization failures live entirely in this crate (spec.md §7).

/// Everything that can go wrong importing a composition from JSON.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A child object's `kind` tag did not match any of `clip`, `gap`,
    /// `warp`, `track`, or `stack`.
    #[error("no such schema: {name}")]
    NoSuchSchema {
        /// The unrecognized `kind` value.
        name: String,
    },

    /// A value tagged with a recognized `kind` did not match that schema's
    /// shape.
    #[error("malformed schema for {kind}: {source}")]
    MalformedSchema {
        /// The `kind` whose shape validation failed.
        kind: &'static str,
        /// The underlying `serde_json` error.
        #[source]
        source: serde_json::Error,
    },

    /// A composable child was not a JSON object at all (so it carries no
    /// `kind` to even look up).
    #[error("composable child at index {index} is not an otio schema object")]
    NotAnOtioSchemaObject {
        /// Position of the offending child within its parent's `children`.
        index: usize,
    },

    /// The top-level document failed to parse as a `Timeline`.
    #[error("malformed timeline document: {0}")]
    MalformedTimeline(#[source] serde_json::Error),
}

/// A child that failed to convert, recorded alongside the composition it
/// was dropped from rather than raised, per spec.md §7's "logged and the
/// child is omitted."
#[derive(Debug)]
pub struct SkippedChild {
    /// Position of the skipped child within its parent's `children` array.
    pub index: usize,
    /// Why it was skipped.
    pub reason: Error,
}
