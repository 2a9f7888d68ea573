// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Mapping`]: the tagged sum of input→output function kinds that make up
//! a [`Topology`](crate::topology::Topology).

pub mod bezier;
mod compose;
pub mod linear;

pub use bezier::{BezierCurve, BezierPoint, BezierSegment};
pub use linear::{Knot, LinearCurve};

use crate::interval::ContinuousInterval;
use crate::ordinate::Ordinate;
use crate::topology::Topology;
use crate::transform1d::AffineTransform1D;

/// The result of projecting a single point through a [`Mapping`] or
/// [`Topology`](crate::topology::Topology).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionResult {
    /// A single corresponding point.
    Ordinate(Ordinate),
    /// A range of corresponding points, returned when the segment being
    /// projected through is not injective.
    Interval(ContinuousInterval),
    /// The queried point lies outside every segment's domain.
    OutOfBounds,
}

/// One piece of a [`Topology`](crate::topology::Topology): an input→output
/// function over an explicit input domain.
///
/// Mappings are immutable once constructed; composition and splitting
/// produce new values rather than mutating in place.
#[derive(Clone, Debug, PartialEq)]
pub enum Mapping {
    /// No domain; projects nothing.
    Empty,
    /// `output = scale * input + offset`, optionally restricted to a
    /// sub-interval of the infinite input axis.
    Affine {
        /// The domain this mapping is defined on.
        input_bounds: ContinuousInterval,
        /// The linear function applied within that domain.
        transform: AffineTransform1D,
    },
    /// A piecewise-linear curve, monotone in both axes.
    Linear(LinearCurve),
    /// One or more cubic Bézier segments; may be non-monotone.
    Bezier(BezierCurve),
}

impl Mapping {
    /// The empty mapping.
    pub const EMPTY: Self = Self::Empty;

    /// Builds an affine mapping over an explicit domain.
    #[must_use]
    pub fn affine(input_bounds: ContinuousInterval, transform: AffineTransform1D) -> Self {
        Self::Affine {
            input_bounds,
            transform,
        }
    }

    /// Builds an affine mapping with unrestricted (infinite) domain.
    #[must_use]
    pub fn unbounded_affine(transform: AffineTransform1D) -> Self {
        Self::affine(ContinuousInterval::INFINITE, transform)
    }

    /// Returns `true` for [`Self::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The domain this mapping is defined over.
    #[must_use]
    pub fn input_bounds(&self) -> ContinuousInterval {
        match self {
            Self::Empty => ContinuousInterval::EMPTY,
            Self::Affine { input_bounds, .. } => *input_bounds,
            Self::Linear(curve) => curve.input_bounds(),
            Self::Bezier(curve) => curve.input_bounds(),
        }
    }

    /// The tightest interval containing every value this mapping can
    /// produce over its domain.
    #[must_use]
    pub fn output_bounds(&self) -> ContinuousInterval {
        match self {
            Self::Empty => ContinuousInterval::EMPTY,
            Self::Affine {
                input_bounds,
                transform,
            } => {
                let a = transform.apply(input_bounds.start);
                let b = transform.apply(input_bounds.end);
                if a <= b {
                    ContinuousInterval::new(a, b)
                } else {
                    ContinuousInterval::new(b, a)
                }
            }
            Self::Linear(curve) => curve.output_bounds(),
            Self::Bezier(curve) => curve.output_bounds(),
        }
    }

    /// Evaluates this mapping at `o`.
    #[must_use]
    pub fn project_instantaneous(&self, o: Ordinate) -> ProjectionResult {
        match self {
            Self::Empty => ProjectionResult::OutOfBounds,
            Self::Affine {
                input_bounds,
                transform,
            } => {
                if input_bounds.contains(o) {
                    ProjectionResult::Ordinate(transform.apply(o))
                } else {
                    ProjectionResult::OutOfBounds
                }
            }
            Self::Linear(curve) => curve.project_instantaneous(o),
            Self::Bezier(curve) => curve.project_instantaneous(o),
        }
    }

    /// Returns `true` if this mapping's input→output function is
    /// injective everywhere on its domain (and therefore invertible
    /// without splitting).
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        match self {
            Self::Empty | Self::Affine { .. } | Self::Linear(_) => true,
            Self::Bezier(curve) => curve.split_monotone(true).len() <= 1,
        }
    }

    /// Splits a non-monotone mapping into pieces that are each monotone
    /// in `output`, suitable for inversion. Monotone variants return a
    /// single-element vector containing a clone of `self`.
    #[must_use]
    pub fn split_monotone(&self) -> Vec<Self> {
        match self {
            Self::Bezier(curve) if !self.is_monotone() => curve
                .split_monotone(true)
                .into_iter()
                .map(Self::Bezier)
                .collect(),
            other => vec![other.clone()],
        }
    }

    /// Returns the partial inverse(s) of this mapping: `Empty` inverts to
    /// `[Empty]`, a monotone affine/linear mapping inverts to a single
    /// mapping, and a non-monotone Bézier curve inverts to one mapping per
    /// monotone run (see [`Self::split_monotone`]).
    #[must_use]
    pub fn inverted(&self) -> Vec<Self> {
        match self {
            Self::Empty => vec![Self::Empty],
            Self::Affine {
                input_bounds,
                transform,
            } => {
                if transform.scale == Ordinate::ZERO {
                    return vec![Self::Empty];
                }
                let inverse = transform.invert();
                let a = transform.apply(input_bounds.start);
                let b = transform.apply(input_bounds.end);
                let new_bounds = if a <= b {
                    ContinuousInterval::new(a, b)
                } else {
                    ContinuousInterval::new(b, a)
                };
                vec![Self::affine(new_bounds, inverse)]
            }
            Self::Linear(curve) => vec![Self::Linear(curve.inverted())],
            Self::Bezier(_) => self
                .split_monotone()
                .iter()
                .map(|piece| match piece {
                    Self::Bezier(curve) => Self::Bezier(curve.inverted()),
                    other => other.clone(),
                })
                .collect(),
        }
    }

    /// Pairwise composition with `inner`: `self ∘ inner`, restricted to
    /// `domain` (expressed in `inner`'s input axis). Produces a
    /// [`Topology`] rather than a single `Mapping` because a non-monotone
    /// `self` first splits into monotone runs (spec.md §4.4.1's "linear∘*
    /// or bezier∘* where the outer is non-monotone"), each of which may
    /// compose with a different sub-range of `domain`.
    ///
    /// This is the engine [`crate::topology::join`] runs per pair of
    /// overlapping segments; see [`compose::compose_pair`] for the
    /// per-type-pair exact composition rules.
    #[must_use]
    pub fn compose(&self, inner: &Self, domain: ContinuousInterval) -> Topology {
        if self.is_empty() || inner.is_empty() || domain.is_empty() {
            return Topology::EMPTY;
        }
        let mut segments: Vec<Self> = Vec::new();
        for outer_run in self.split_monotone() {
            if outer_run.is_empty() {
                continue;
            }
            let Some(target) = outer_run.input_bounds().intersect(inner.output_bounds()) else {
                continue;
            };
            let Some(pre) = compose::preimage(inner, target) else {
                continue;
            };
            let Some(final_domain) = pre.intersect(domain) else {
                continue;
            };
            if final_domain.is_empty() {
                continue;
            }
            let composed = compose::compose_pair(&outer_run, inner, final_domain);
            if !composed.is_empty() {
                segments.push(composed);
            }
        }
        if segments.is_empty() {
            return Topology::EMPTY;
        }
        segments.sort_by(|a, b| {
            a.input_bounds()
                .start
                .partial_cmp(&b.input_bounds().start)
                .expect("ordinates are comparable")
        });
        Topology::new(segments)
    }
}
