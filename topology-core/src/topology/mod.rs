// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Topology`]: an ordered, non-overlapping sequence of [`Mapping`]s, the
//! unit that [`join`] composes and [`invert`] partially inverts.

pub mod invert;
pub mod join;

pub use invert::invert;
pub use join::join;

use crate::interval::ContinuousInterval;
use crate::mapping::{Mapping, ProjectionResult};
use crate::ordinate::Ordinate;
use crate::trace::Tracer;
use crate::transform1d::AffineTransform1D;

/// An ordered sequence of [`Mapping`]s, sorted by input position and never
/// overlapping.
///
/// Topologies built directly from a composition (see [`crate::graph`]) are
/// fully contiguous end-to-end; [`join`] may legitimately produce a
/// topology with gaps where no input has a valid image under both stages.
/// The type enforces sort order and non-overlap, not strict adjacency.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Topology {
    mappings: Vec<Mapping>,
}

impl Topology {
    /// The empty topology (zero mappings).
    pub const EMPTY: Self = Self {
        mappings: Vec::new(),
    };

    /// `y = x` on `(-inf, +inf)`.
    #[must_use]
    pub fn infinite_identity() -> Self {
        Self {
            mappings: vec![Mapping::unbounded_affine(AffineTransform1D::IDENTITY)],
        }
    }

    /// Builds a topology from mappings already in sorted, non-overlapping
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the mappings overlap or are out of order.
    #[must_use]
    pub fn new(mappings: Vec<Mapping>) -> Self {
        for w in mappings.windows(2) {
            assert!(
                w[0].input_bounds().end <= w[1].input_bounds().start,
                "Topology::new: mappings must be sorted and non-overlapping"
            );
        }
        Self { mappings }
    }

    /// The mappings, in input order.
    #[must_use]
    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// `true` if this topology has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// `[first.input_bounds().start, last.input_bounds().end)`, or the
    /// canonical empty interval if there are no mappings.
    #[must_use]
    pub fn input_bounds(&self) -> ContinuousInterval {
        match (self.mappings.first(), self.mappings.last()) {
            (Some(first), Some(last)) => {
                ContinuousInterval::new(first.input_bounds().start, last.input_bounds().end)
            }
            _ => ContinuousInterval::EMPTY,
        }
    }

    /// The union of every mapping's output bounds.
    #[must_use]
    pub fn output_bounds(&self) -> ContinuousInterval {
        let mut iter = self.mappings.iter();
        let Some(first) = iter.next() else {
            return ContinuousInterval::EMPTY;
        };
        iter.fold(first.output_bounds(), |acc, m| acc.extend(m.output_bounds()))
    }

    /// Locates the mapping containing `o` and evaluates it; `OutOfBounds`
    /// if `o` falls in a gap or outside every mapping.
    #[must_use]
    pub fn project_instantaneous_cc(&self, o: Ordinate) -> ProjectionResult {
        match self
            .mappings
            .iter()
            .find(|m| m.input_bounds().contains(o))
        {
            Some(m) => m.project_instantaneous(o),
            None => ProjectionResult::OutOfBounds,
        }
    }

    /// Partitions this topology into maximal monotone runs and inverts
    /// each; see [`invert`].
    #[must_use]
    pub fn inverted(&self, tracer: &mut Tracer<'_>) -> Vec<Self> {
        invert(self, tracer)
    }

    /// Composes `self` (A→B) with `other` (B→C), producing A→C; see
    /// [`join`].
    #[must_use]
    pub fn join(&self, other: &Self, tracer: &mut Tracer<'_>) -> Self {
        join(self, other, tracer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Knot;

    fn affine_mapping(start: i64, end: i64, scale: i64, offset: i64) -> Mapping {
        Mapping::affine(
            ContinuousInterval::new(Ordinate::from(start), Ordinate::from(end)),
            AffineTransform1D {
                scale: Ordinate::from(scale),
                offset: Ordinate::from(offset),
            },
        )
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(Topology::default(), Topology::EMPTY);
        assert!(Topology::EMPTY.is_empty());
    }

    #[test]
    fn infinite_identity_is_identity_everywhere() {
        let t = Topology::infinite_identity();
        assert_eq!(
            t.project_instantaneous_cc(Ordinate::from(42)),
            ProjectionResult::Ordinate(Ordinate::from(42))
        );
    }

    #[test]
    fn bounds_span_first_to_last() {
        let t = Topology::new(vec![affine_mapping(0, 5, 1, 0), affine_mapping(5, 10, 1, 0)]);
        assert_eq!(
            t.input_bounds(),
            ContinuousInterval::new(Ordinate::from(0), Ordinate::from(10))
        );
    }

    #[test]
    fn project_instantaneous_cc_finds_containing_segment() {
        let t = Topology::new(vec![affine_mapping(0, 5, 1, 10), affine_mapping(5, 10, 1, 20)]);
        assert_eq!(
            t.project_instantaneous_cc(Ordinate::from(7)),
            ProjectionResult::Ordinate(Ordinate::from(27))
        );
    }

    #[test]
    fn gap_is_out_of_bounds() {
        let t = Topology::new(vec![affine_mapping(0, 2, 1, 0), affine_mapping(5, 10, 1, 0)]);
        assert_eq!(
            t.project_instantaneous_cc(Ordinate::from(3)),
            ProjectionResult::OutOfBounds
        );
    }

    #[test]
    #[should_panic(expected = "sorted and non-overlapping")]
    fn overlapping_mappings_panic() {
        let _ = Topology::new(vec![affine_mapping(0, 5, 1, 0), affine_mapping(4, 10, 1, 0)]);
    }

    #[test]
    fn linear_curve_topology_compiles_and_projects() {
        let curve = crate::mapping::LinearCurve::new(vec![
            Knot {
                input: Ordinate::from(0),
                output: Ordinate::from(0),
            },
            Knot {
                input: Ordinate::from(10),
                output: Ordinate::from(100),
            },
        ]);
        let t = Topology::new(vec![Mapping::Linear(curve)]);
        assert_eq!(
            t.project_instantaneous_cc(Ordinate::from(5)),
            ProjectionResult::Ordinate(Ordinate::from(50))
        );
    }
}
