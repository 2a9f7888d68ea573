// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics collaborator for `topology-core`: a human-readable
//! [`TraceSink`](topology_core::trace::TraceSink) implementation and a
//! dot-graph exporter for a built [`SpaceGraph`](topology_core::graph::SpaceGraph).
//!
//! Neither module is wired in by default; `topology-core` never depends on
//! this crate. An embedding application pulls in `topology-debug`, builds a
//! [`pretty::PrettyPrintSink`] around a [`Tracer`](topology_core::trace::Tracer),
//! and separately calls [`dot::export`] on a finished graph whenever it wants
//! a rendering.

pub mod dot;
pub mod pretty;
