// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear monotone curve: one [`Mapping`](super::Mapping) variant.

use crate::interval::ContinuousInterval;
use crate::mapping::ProjectionResult;
use crate::ordinate::Ordinate;

/// A single `(input, output)` control point on a [`LinearCurve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Knot {
    /// Position on the input axis.
    pub input: Ordinate,
    /// Position on the output axis.
    pub output: Ordinate,
}

/// A piecewise-linear function built from knots strictly monotone in both
/// `input` and `output`.
///
/// Monotonicity in `output` (either direction) is required so the curve is
/// invertible without splitting; see [`Self::inverted`].
#[derive(Clone, Debug, PartialEq)]
pub struct LinearCurve {
    knots: Vec<Knot>,
}

impl LinearCurve {
    /// Builds a curve from knots.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two knots are given, if `input` is not strictly
    /// increasing across knots, or if `output` is not strictly monotone
    /// (in either direction) across knots.
    #[must_use]
    pub fn new(knots: Vec<Knot>) -> Self {
        assert!(
            knots.len() >= 2,
            "LinearCurve::new: need at least two knots, got {}",
            knots.len()
        );
        for w in knots.windows(2) {
            assert!(
                w[0].input < w[1].input,
                "LinearCurve::new: knot inputs must be strictly increasing"
            );
        }
        let increasing = knots[0].output < knots[1].output;
        for w in knots.windows(2) {
            let ok = if increasing {
                w[0].output < w[1].output
            } else {
                w[0].output > w[1].output
            };
            assert!(
                ok,
                "LinearCurve::new: knot outputs must be strictly monotone in one direction"
            );
        }
        Self { knots }
    }

    /// Returns the knots in input order.
    #[must_use]
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Half-open `[first.input, last.input)`.
    #[must_use]
    pub fn input_bounds(&self) -> ContinuousInterval {
        ContinuousInterval::new(self.knots[0].input, self.knots[self.knots.len() - 1].input)
    }

    /// The span of `output` covered, oriented so `start <= end` regardless
    /// of the curve's direction.
    #[must_use]
    pub fn output_bounds(&self) -> ContinuousInterval {
        let first = self.knots[0].output;
        let last = self.knots[self.knots.len() - 1].output;
        if first <= last {
            ContinuousInterval::new(first, last)
        } else {
            ContinuousInterval::new(last, first)
        }
    }

    /// Locates the segment containing `o` and linearly interpolates.
    #[must_use]
    pub fn project_instantaneous(&self, o: Ordinate) -> ProjectionResult {
        if !self.input_bounds().contains(o) {
            return ProjectionResult::OutOfBounds;
        }
        for w in self.knots.windows(2) {
            let (k0, k1) = (w[0], w[1]);
            if o >= k0.input && o < k1.input {
                let t = (o - k0.input) / (k1.input - k0.input);
                let out = k0.output + t * (k1.output - k0.output);
                return ProjectionResult::Ordinate(out);
            }
        }
        unreachable!("input_bounds().contains(o) guarantees a containing segment")
    }

    /// Restricts this curve to `domain`, inserting interpolated knots at
    /// `domain.start`/`domain.end` when they don't already land on one.
    ///
    /// # Panics
    ///
    /// Panics if `domain` is not a subset of [`Self::input_bounds`].
    #[must_use]
    pub fn restrict(&self, domain: ContinuousInterval) -> Self {
        let mut knots = vec![Knot {
            input: domain.start,
            output: self.value_at_closed(domain.start),
        }];
        knots.extend(
            self.knots
                .iter()
                .filter(|k| k.input > domain.start && k.input < domain.end),
        );
        knots.push(Knot {
            input: domain.end,
            output: self.value_at_closed(domain.end),
        });
        Self::new(knots)
    }

    /// Applies `f` to every knot's `output`. Used to compose an affine
    /// transform after this curve exactly.
    #[must_use]
    pub fn map_output<F: Fn(Ordinate) -> Ordinate>(&self, f: F) -> Self {
        Self::new(
            self.knots
                .iter()
                .map(|k| Knot {
                    input: k.input,
                    output: f(k.output),
                })
                .collect(),
        )
    }

    /// Applies `f` to every knot's `input`, re-sorting if `f` reverses
    /// order. Used to compose an affine transform before this curve
    /// exactly.
    #[must_use]
    pub fn map_input<F: Fn(Ordinate) -> Ordinate>(&self, f: F) -> Self {
        let mut knots: Vec<Knot> = self
            .knots
            .iter()
            .map(|k| Knot {
                input: f(k.input),
                output: k.output,
            })
            .collect();
        if knots.len() >= 2 && knots[0].input > knots[1].input {
            knots.reverse();
        }
        Self::new(knots)
    }

    /// Evaluates at `x`, treating the curve's own endpoints as closed
    /// (unlike [`Self::project_instantaneous`]) so boundary ordinates can
    /// be read back exactly when restricting.
    fn value_at_closed(&self, x: Ordinate) -> Ordinate {
        let last = self.knots.len() - 1;
        if x <= self.knots[0].input {
            return self.knots[0].output;
        }
        if x >= self.knots[last].input {
            return self.knots[last].output;
        }
        for w in self.knots.windows(2) {
            if x >= w[0].input && x <= w[1].input {
                let t = (x - w[0].input) / (w[1].input - w[0].input);
                return w[0].output + t * (w[1].output - w[0].output);
            }
        }
        unreachable!("x lies between the first and last knot's input")
    }

    /// Swaps the input and output axes, re-sorting knots into ascending
    /// input order if the curve was output-decreasing.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let mut knots: Vec<Knot> = self
            .knots
            .iter()
            .map(|k| Knot {
                input: k.output,
                output: k.input,
            })
            .collect();
        if knots.len() >= 2 && knots[0].input > knots[1].input {
            knots.reverse();
        }
        Self::new(knots)
    }
}
