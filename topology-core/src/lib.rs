// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Temporal coordinate algebra for hierarchical editorial compositions.
//!
//! `topology-core` answers one question: given a point, range, or sample
//! index in one named coordinate space of a composition, what are the
//! corresponding point(s), range, or sample index(es) in another space?
//!
//! # Architecture
//!
//! A client builds a composition tree out of [`composition`] objects, then
//! turns it into a [`graph::SpaceGraph`] by walking it once:
//!
//! ```text
//!   Composition tree (Timeline/Stack/Track/Clip/Gap/Warp)
//!       │
//!       ▼  graph::build_space_graph
//!   SpaceGraph ──► graph::build_transform (per edge)
//!       │
//!       ├──► projection::build_projection_operator(src, dst)
//!       │        └──► ProjectionOperator { composed Topology }
//!       │
//!       └──► projection::ProjectionBuilder::init_from(src)
//!                └──► sorted source-axis intervals, each tagged with the
//!                     destination mappings active on it
//! ```
//!
//! **[`ordinate`]** — [`ordinate::Ordinate`], an exact-rational-or-float
//! scalar along the temporal axis.
//!
//! **[`interval`]** — [`interval::ContinuousInterval`], a half-open `[start,
//! end)` range on that axis.
//!
//! **[`transform1d`]** — [`transform1d::AffineTransform1D`], the simplest
//! edge transform (`output = scale * input + offset`).
//!
//! **[`mapping`]** — [`mapping::Mapping`], a tagged variant over
//! empty/affine/linear-monotonic/bezier input→output functions.
//!
//! **[`topology`]** — [`topology::Topology`], an ordered, contiguous sequence
//! of `Mapping`s, closed under [`topology::join`] (composition) and
//! [`topology::invert`] (partial inversion).
//!
//! **[`treecode`]** — [`treecode::Treecode`], a variable-length left/right
//! bitstring addressing a node in an implicit binary tree.
//!
//! **[`tree`]** — [`tree::BinaryTree`], the columnar arena `SpaceGraph` is
//! built from.
//!
//! **[`space`]** — [`space::SpaceLabel`], [`space::SpaceReference`], and
//! [`space::DiscreteInfo`], the vocabulary for naming and discretizing a
//! space.
//!
//! **[`composition`]** — the six composition object kinds (Clip, Gap, Warp,
//! Track, Stack, Timeline) and the append-only arena that owns them.
//!
//! **[`graph`]** — [`graph::SpaceGraph`] construction
//! ([`graph::build_space_graph`]) and per-object edge transforms
//! ([`graph::build_transform`]).
//!
//! **[`projection`]** — [`projection::ProjectionOperator`]
//! ([`projection::build_projection_operator`]) for single source→destination
//! projection, and [`projection::ProjectionBuilder`] for the bulk
//! interval-decomposition acceleration structure.
//!
//! **[`error`]** — [`error::Error`], the closed set of recoverable,
//! caller-surfaced conditions.
//!
//! **[`trace`]** — [`trace::TraceSink`] trait and event types for pipeline
//! instrumentation, with a zero-overhead [`trace::Tracer`] wrapper gated by
//! the `trace` feature.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): enables the [`trace::Tracer`] method
//!   bodies (one branch per call site) inside `join`, `invert`,
//!   `build_space_graph`, `build_projection_operator`, and
//!   `ProjectionBuilder::init_from`.
//!
//! # Scope
//!
//! This crate is purely computational: no file I/O, no JSON/Ziggy
//! serialization, no CLI, no graph visualization beyond the label formatter
//! collaborators need (see `topology-debug`), no media decoding, no UI. Those
//! are external collaborators; see `topology-json` and `topology-debug`.

pub mod composition;
pub mod error;
pub mod graph;
pub mod interval;
pub mod mapping;
pub mod ordinate;
pub mod projection;
pub mod space;
pub mod topology;
pub mod trace;
pub mod transform1d;
pub mod treecode;
pub mod tree;

pub use error::Error;
pub use ordinate::Ordinate;
