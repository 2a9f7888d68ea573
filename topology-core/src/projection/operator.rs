// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ProjectionOperator`]: a composed `Topology` between two named spaces,
//! built once by walking the [`SpaceGraph`] and reusable for many queries.

use crate::composition::CompositionArena;
use crate::error::Error;
use crate::graph::{build_transform, SpaceGraph};
use crate::interval::ContinuousInterval;
use crate::mapping::ProjectionResult;
use crate::ordinate::Ordinate;
use crate::space::{DiscreteInfo, SpaceReference};
use crate::topology::Topology;
use crate::trace::{ProjectionBuiltEvent, Tracer};
use crate::treecode::Treecode;

/// The composed source→destination `Topology` between two spaces placed in
/// the same [`SpaceGraph`], plus the five query entry points spec.md §4.5
/// names: instantaneous and range projection, each continuous- or
/// discrete-destination, and discrete-to-discrete by index.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionOperator {
    source: SpaceReference,
    destination: SpaceReference,
    src_to_dst: Topology,
}

impl ProjectionOperator {
    /// The space queries are expressed in.
    #[must_use]
    pub fn source(&self) -> SpaceReference {
        self.source
    }

    /// The space results are expressed in.
    #[must_use]
    pub fn destination(&self) -> SpaceReference {
        self.destination
    }

    /// The composed topology itself, for callers that want to inspect or
    /// cache the path rather than call through the query methods.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.src_to_dst
    }

    /// Continuous source ordinate → continuous destination ordinate.
    #[must_use]
    pub fn project_instantaneous_cc(&self, o: Ordinate) -> ProjectionResult {
        self.src_to_dst.project_instantaneous_cc(o)
    }

    /// Continuous source ordinate → discrete destination sample index.
    ///
    /// The destination ordinate is carried back as an integer-valued
    /// [`Ordinate`] rather than a bare `i64`, so this stays a drop-in
    /// replacement for [`Self::project_instantaneous_cc`] at call sites that
    /// only care whether the query landed in bounds.
    #[must_use]
    pub fn project_instantaneous_cd(&self, o: Ordinate, destination_rate: DiscreteInfo) -> ProjectionResult {
        match self.src_to_dst.project_instantaneous_cc(o) {
            ProjectionResult::Ordinate(y) => ProjectionResult::Ordinate(Ordinate::from(destination_rate.index_of(y))),
            other => other,
        }
    }

    /// Continuous source range → continuous destination range: the image of
    /// `query` under this operator's topology.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOverlap`] if `query` does not overlap this
    /// operator's source domain at all.
    pub fn project_range_cc(&self, query: ContinuousInterval) -> Result<ContinuousInterval, Error> {
        let restriction = Topology::new(vec![crate::mapping::Mapping::affine(
            query,
            crate::transform1d::AffineTransform1D::IDENTITY,
        )]);
        let image = restriction.join(&self.src_to_dst, &mut Tracer::none());
        if image.is_empty() {
            return Err(Error::NoOverlap);
        }
        Ok(image.output_bounds())
    }

    /// Continuous source range → sorted list of destination sample indices:
    /// walks the image of `query` segment by segment (in source order) and,
    /// for each, lists every destination sample index whose cell overlaps
    /// that segment's continuous image, in the direction the segment
    /// traverses the destination axis.
    ///
    /// The same index can appear more than once, either within a segment
    /// (when the continuous image lingers at least one destination sample
    /// period on the same cell) or across a boundary between two segments
    /// of a non-monotone image; both are faithful to the continuous image
    /// and are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOverlap`] if `query` does not overlap this
    /// operator's source domain.
    pub fn project_range_cd(
        &self,
        query: ContinuousInterval,
        destination_rate: DiscreteInfo,
    ) -> Result<Vec<i64>, Error> {
        let restriction = Topology::new(vec![crate::mapping::Mapping::affine(
            query,
            crate::transform1d::AffineTransform1D::IDENTITY,
        )]);
        let image = restriction.join(&self.src_to_dst, &mut Tracer::none());
        if image.is_empty() {
            return Err(Error::NoOverlap);
        }
        let mut indices = Vec::new();
        for segment in image.mappings() {
            indices.extend(touched_indices(segment, destination_rate));
        }
        Ok(indices)
    }

    /// Discrete source sample index → sorted list of destination sample
    /// indices: expands `index` to its half-open continuous interval (width
    /// `1/source_rate`) and projects that range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOverlap`] if the source sample's continuous
    /// interval falls entirely outside this operator's topology.
    pub fn project_index_dd(
        &self,
        source_rate: DiscreteInfo,
        index: i64,
        destination_rate: DiscreteInfo,
    ) -> Result<Vec<i64>, Error> {
        self.project_range_cd(source_rate.continuous_interval(index), destination_rate)
    }
}

/// The destination index of the last sample cell touched by a half-open
/// range ending at `end`: the largest index `i` whose cell start is
/// strictly less than `end` (so a range landing exactly on a cell boundary
/// does not count that cell, but one straddling partway into it does).
fn last_touched_index(end: Ordinate, rate: DiscreteInfo) -> i64 {
    let scaled = (end * rate.sample_rate_hz).to_f64();
    (scaled.ceil() - 1.0) as i64 + rate.start_index
}

/// Every destination sample index `segment`'s continuous image touches, in
/// the direction `segment` traverses its output axis (ascending source-to-
/// destination, or descending if `segment` reverses direction).
fn touched_indices(segment: &crate::mapping::Mapping, rate: DiscreteInfo) -> Vec<i64> {
    let bounds = segment.output_bounds();
    if bounds.is_empty() {
        return Vec::new();
    }
    let first = rate.index_of(bounds.start);
    let last = last_touched_index(bounds.end, rate);
    if last < first {
        return Vec::new();
    }
    let mut indices: Vec<i64> = (first..=last).collect();
    if !segment_is_ascending(segment, bounds) {
        indices.reverse();
    }
    indices
}

/// Whether `segment` increases along the destination axis as its input
/// grows, determined by comparing the value at the start of its domain
/// against the two ends of `bounds` rather than by exact equality, since
/// Bézier evaluation is not guaranteed bit-exact at its own control points.
fn segment_is_ascending(segment: &crate::mapping::Mapping, bounds: ContinuousInterval) -> bool {
    let ProjectionResult::Ordinate(value) = segment.project_instantaneous(segment.input_bounds().start) else {
        return true;
    };
    let distance_to_start = (value - bounds.start).abs().to_f64();
    let distance_to_end = (value - bounds.end).abs().to_f64();
    distance_to_start <= distance_to_end
}

/// Builds the composed `source`→`destination` topology by walking the
/// unique path between them in `graph` (spec.md §4.6): up from `source` to
/// their lowest common ancestor, inverting each edge along the way, then
/// down from the ancestor to `destination` using edges directly.
///
/// # Errors
///
/// - [`Error::SpaceNotInGraph`] if either space was never placed by
///   [`crate::graph::build_space_graph`].
/// - [`Error::NoPathBetweenSpaces`] if the two spaces share no ancestor
///   (never happens for two spaces placed in the same graph walk, but
///   guards against a malformed graph).
/// - [`Error::MoreThanOneInversionIsNotImplemented`] if an upward edge is
///   non-monotone and splits into more than one inverted branch.
/// - Whatever [`build_transform`] returns for an edge it does not own.
pub fn build_projection_operator(
    graph: &SpaceGraph,
    arena: &CompositionArena,
    source: SpaceReference,
    destination: SpaceReference,
    tracer: &mut Tracer<'_>,
) -> Result<ProjectionOperator, Error> {
    let outcome = resolve_path(graph, arena, source, destination, tracer);
    tracer.projection_built(&ProjectionBuiltEvent {
        source,
        destination,
        outcome: outcome.as_ref().map(|t| t.mappings().len()).map_err(Clone::clone),
    });
    outcome.map(|topo| ProjectionOperator {
        source,
        destination,
        src_to_dst: topo,
    })
}

fn resolve_path(
    graph: &SpaceGraph,
    arena: &CompositionArena,
    source: SpaceReference,
    destination: SpaceReference,
    tracer: &mut Tracer<'_>,
) -> Result<Topology, Error> {
    let src_index = graph.index_of_value(&source).ok_or(Error::SpaceNotInGraph(source))?;
    let dst_index = graph
        .index_of_value(&destination)
        .ok_or(Error::SpaceNotInGraph(destination))?;
    let dst_code = graph.code(dst_index).clone();

    let src_path = path_to_root(graph, src_index);
    let lca = src_path
        .iter()
        .copied()
        .find(|&n| graph.code(n).is_prefix_of(&dst_code))
        .ok_or(Error::NoPathBetweenSpaces {
            from: source,
            to: destination,
        })?;

    let mut topo = Topology::infinite_identity();

    for &node in &src_path {
        if node == lca {
            break;
        }
        let parent = graph
            .parent_of(node)
            .expect("a node above the lowest common ancestor always has a parent");
        topo = topo.join(&inverted_edge(graph, arena, parent, node, tracer)?, tracer);
    }

    let mut dst_path = path_to_root(graph, dst_index);
    let lca_pos = dst_path
        .iter()
        .position(|&n| n == lca)
        .expect("the lowest common ancestor lies on destination's root path");
    dst_path.truncate(lca_pos);
    for &node in dst_path.iter().rev() {
        let parent = graph
            .parent_of(node)
            .expect("a node below the lowest common ancestor always has a parent");
        topo = topo.join(&direct_edge(graph, arena, parent, node)?, tracer);
    }

    Ok(topo)
}

/// `node`'s path from itself to the root, inclusive of both ends.
fn path_to_root(graph: &SpaceGraph, index: u32) -> Vec<u32> {
    let mut path = vec![index];
    let mut current = index;
    while let Some(parent) = graph.parent_of(current) {
        path.push(parent);
        current = parent;
    }
    path
}

fn direct_edge(graph: &SpaceGraph, arena: &CompositionArena, parent: u32, child: u32) -> Result<Topology, Error> {
    let step = step_towards(graph, parent, child);
    build_transform(arena, *graph.value(parent), *graph.value(child), step)
}

fn inverted_edge(
    graph: &SpaceGraph,
    arena: &CompositionArena,
    parent: u32,
    child: u32,
    tracer: &mut Tracer<'_>,
) -> Result<Topology, Error> {
    let mut branches = direct_edge(graph, arena, parent, child)?.inverted(tracer);
    match branches.len() {
        1 => Ok(branches.remove(0)),
        _ => Err(Error::MoreThanOneInversionIsNotImplemented),
    }
}

fn step_towards(graph: &SpaceGraph, parent: u32, child: u32) -> bool {
    let parent_code: &Treecode = graph.code(parent);
    parent_code.next_step_towards(graph.code(child))
}
