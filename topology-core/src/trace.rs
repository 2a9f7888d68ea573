// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the topology pipeline.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! `join`, `invert`, `build_space_graph`, `build_projection_operator`, and
//! `ProjectionBuilder::init_from` call at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::composition::ComposedValueRef;
use crate::error::Error;
use crate::ordinate::Ordinate;
use crate::space::SpaceReference;

/// Emitted after [`crate::topology::join`] composes two topologies.
#[derive(Clone, Copy, Debug)]
pub struct JoinEvent {
    /// Number of mappings in the left-hand operand.
    pub lhs_segments: usize,
    /// Number of mappings in the right-hand operand.
    pub rhs_segments: usize,
    /// Number of mappings in the composed result.
    pub result_segments: usize,
}

/// Emitted after [`crate::topology::invert`] partitions and inverts a
/// topology.
#[derive(Clone, Copy, Debug)]
pub struct InvertEvent {
    /// Number of mappings in the topology being inverted.
    pub input_segments: usize,
    /// Number of monotone runs the input was split into.
    pub run_count: usize,
}

/// Emitted after [`crate::graph::build_space_graph`] finishes walking a
/// composition.
#[derive(Clone, Copy, Debug)]
pub struct SpaceGraphBuiltEvent {
    /// The composition object the walk started from.
    pub root: ComposedValueRef,
    /// Total nodes placed, internal spaces and child slots combined.
    pub node_count: u32,
}

/// Emitted after [`crate::projection::build_projection_operator`] resolves
/// a source→destination path.
#[derive(Clone, Debug)]
pub struct ProjectionBuiltEvent {
    /// The requested source space.
    pub source: SpaceReference,
    /// The requested destination space.
    pub destination: SpaceReference,
    /// `Ok` with the edge count walked, or the error that aborted the walk.
    pub outcome: Result<usize, Error>,
}

/// Emitted after [`crate::projection::ProjectionBuilder::init_from`]
/// finishes its sweep.
#[derive(Clone, Copy, Debug)]
pub struct BuilderInitEvent {
    /// The source space the builder was initialized from.
    pub source_object: ComposedValueRef,
    /// Number of resolved segments.
    pub segment_count: usize,
    /// The leading cut point, if any segments were produced.
    pub first_cut: Option<Ordinate>,
}

/// Receives pipeline events. Every method defaults to a no-op; implement
/// only the ones a given sink cares about.
pub trait TraceSink {
    /// A topology composition completed.
    fn on_join(&mut self, _e: &JoinEvent) {}
    /// A topology inversion completed.
    fn on_invert(&mut self, _e: &InvertEvent) {}
    /// A space graph finished building.
    fn on_space_graph_built(&mut self, _e: &SpaceGraphBuiltEvent) {}
    /// A projection operator finished resolving (or failed to).
    fn on_projection_built(&mut self, _e: &ProjectionBuiltEvent) {}
    /// A projection builder finished its sweep.
    fn on_builder_init(&mut self, _e: &BuilderInitEvent) {}
}

/// A [`TraceSink`] that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`JoinEvent`].
    #[inline]
    pub fn join(&mut self, e: &JoinEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_join(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InvertEvent`].
    #[inline]
    pub fn invert(&mut self, e: &InvertEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_invert(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SpaceGraphBuiltEvent`].
    #[inline]
    pub fn space_graph_built(&mut self, e: &SpaceGraphBuiltEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_space_graph_built(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ProjectionBuiltEvent`].
    #[inline]
    pub fn projection_built(&mut self, e: &ProjectionBuiltEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_projection_built(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BuilderInitEvent`].
    #[inline]
    pub fn builder_init(&mut self, e: &BuilderInitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_builder_init(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
