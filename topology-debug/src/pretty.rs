// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use topology_core::trace::{
    BuilderInitEvent, InvertEvent, JoinEvent, ProjectionBuiltEvent, SpaceGraphBuiltEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_join(&mut self, e: &JoinEvent) {
        let _ = writeln!(
            self.writer,
            "[join] {} x {} -> {} segments",
            e.lhs_segments, e.rhs_segments, e.result_segments,
        );
    }

    fn on_invert(&mut self, e: &InvertEvent) {
        let _ = writeln!(
            self.writer,
            "[invert] {} segments -> {} runs",
            e.input_segments, e.run_count,
        );
    }

    fn on_space_graph_built(&mut self, e: &SpaceGraphBuiltEvent) {
        let _ = writeln!(
            self.writer,
            "[graph] root={:?} nodes={}",
            e.root, e.node_count,
        );
    }

    fn on_projection_built(&mut self, e: &ProjectionBuiltEvent) {
        match &e.outcome {
            Ok(edges) => {
                let _ = writeln!(
                    self.writer,
                    "[project] {:?} -> {:?} ok ({edges} edges)",
                    e.source, e.destination,
                );
            }
            Err(error) => {
                let _ = writeln!(
                    self.writer,
                    "[project] {:?} -> {:?} FAILED: {error}",
                    e.source, e.destination,
                );
            }
        }
    }

    fn on_builder_init(&mut self, e: &BuilderInitEvent) {
        let _ = writeln!(
            self.writer,
            "[builder] source={:?} segments={} first_cut={:?}",
            e.source_object, e.segment_count, e.first_cut,
        );
    }
}
