// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier curve: the only [`Mapping`](super::Mapping) variant that may
//! be non-monotone.
//!
//! Curves are stored and evaluated as `f64` control points, the way
//! `bevy_animation::curves` evaluates keyframe splines; unlike
//! [`Ordinate`], a Bézier in `(in, out)` space has no useful exact-rational
//! representation.

use crate::interval::ContinuousInterval;
use crate::mapping::ProjectionResult;
use crate::ordinate::Ordinate;

const ROOT_EPSILON: f64 = 1e-9;

/// A control point in `(in, out)` space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierPoint {
    /// Position on the input axis.
    pub input: f64,
    /// Position on the output axis.
    pub output: f64,
}

impl BezierPoint {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            input: self.input + (other.input - self.input) * t,
            output: self.output + (other.output - self.output) * t,
        }
    }
}

/// One cubic Bézier segment, `p0..p3`, parameterized by `t in [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSegment {
    /// Start control point, `t = 0`.
    pub p0: BezierPoint,
    /// First tangent control point.
    pub p1: BezierPoint,
    /// Second tangent control point.
    pub p2: BezierPoint,
    /// End control point, `t = 1`.
    pub p3: BezierPoint,
}

impl BezierSegment {
    fn power_basis(v0: f64, v1: f64, v2: f64, v3: f64) -> [f64; 4] {
        [
            v0,
            -3.0 * v0 + 3.0 * v1,
            3.0 * v0 - 6.0 * v1 + 3.0 * v2,
            -v0 + 3.0 * v1 - 3.0 * v2 + v3,
        ]
    }

    fn eval_axis(t: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
        let mt = 1.0 - t;
        mt * mt * mt * v0 + 3.0 * mt * mt * t * v1 + 3.0 * mt * t * t * v2 + t * t * t * v3
    }

    /// Evaluates the `(in, out)` point at parameter `t`.
    #[must_use]
    pub fn eval(self, t: f64) -> BezierPoint {
        BezierPoint {
            input: Self::eval_axis(t, self.p0.input, self.p1.input, self.p2.input, self.p3.input),
            output: Self::eval_axis(
                t,
                self.p0.output,
                self.p1.output,
                self.p2.output,
                self.p3.output,
            ),
        }
    }

    /// Splits this segment into two at `t` via de Casteljau subdivision.
    #[must_use]
    pub fn subdivide(self, t: f64) -> (Self, Self) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);
        (
            Self {
                p0: self.p0,
                p1: p01,
                p2: p012,
                p3: p0123,
            },
            Self {
                p0: p0123,
                p1: p123,
                p2: p23,
                p3: self.p3,
            },
        )
    }

    /// Real roots in `[0, 1]` of `input(t) - o = 0`.
    fn input_roots(self, o: f64) -> Vec<f64> {
        let [a0, a1, a2, a3] =
            Self::power_basis(self.p0.input, self.p1.input, self.p2.input, self.p3.input);
        solve_cubic(a3, a2, a1, a0 - o)
            .into_iter()
            .filter(|t| *t >= -ROOT_EPSILON && *t <= 1.0 + ROOT_EPSILON)
            .map(|t| t.clamp(0.0, 1.0))
            .collect()
    }

    /// Parameters in `(0, 1)` where the chosen axis has a horizontal or
    /// vertical tangent (its derivative with respect to `t` is zero).
    fn critical_points(self, axis_is_output: bool) -> Vec<f64> {
        let [_, a1, a2, a3] = if axis_is_output {
            Self::power_basis(self.p0.output, self.p1.output, self.p2.output, self.p3.output)
        } else {
            Self::power_basis(self.p0.input, self.p1.input, self.p2.input, self.p3.input)
        };
        // derivative of a0 + a1 t + a2 t^2 + a3 t^3 is a1 + 2 a2 t + 3 a3 t^2
        solve_quadratic(3.0 * a3, 2.0 * a2, a1)
            .into_iter()
            .filter(|t| *t > ROOT_EPSILON && *t < 1.0 - ROOT_EPSILON)
            .collect()
    }
}

/// A Bézier curve made of one or more segments, possibly non-monotone.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurve {
    segments: Vec<BezierSegment>,
    input_bounds: ContinuousInterval,
}

impl BezierCurve {
    /// Builds a curve from segments and its declared input bounds.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn new(segments: Vec<BezierSegment>, input_bounds: ContinuousInterval) -> Self {
        assert!(
            !segments.is_empty(),
            "BezierCurve::new: need at least one segment"
        );
        Self {
            segments,
            input_bounds,
        }
    }

    /// The segments making up this curve, in authoring order.
    #[must_use]
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// The declared input domain.
    #[must_use]
    pub fn input_bounds(&self) -> ContinuousInterval {
        self.input_bounds
    }

    /// A coarse (convex-hull) bound on the output axis: the tightest
    /// interval containing every control point's `output`. Exact for
    /// monotone curves; conservative otherwise.
    #[must_use]
    pub fn output_bounds(&self) -> ContinuousInterval {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for seg in &self.segments {
            for p in [seg.p0, seg.p1, seg.p2, seg.p3] {
                lo = lo.min(p.output);
                hi = hi.max(p.output);
            }
        }
        ContinuousInterval::new(Ordinate::Float(lo), Ordinate::Float(hi))
    }

    /// Solves `input(t) = o` across every segment and reports the set of
    /// corresponding `output` values: a single value for an injective
    /// region, an interval hull for a non-injective one, `OutOfBounds` if
    /// no segment contains `o`.
    #[must_use]
    pub fn project_instantaneous(&self, o: Ordinate) -> ProjectionResult {
        if !self.input_bounds.contains(o) {
            return ProjectionResult::OutOfBounds;
        }
        let o = o.to_f64();
        let mut outputs = Vec::new();
        for seg in &self.segments {
            for t in seg.input_roots(o) {
                outputs.push(seg.eval(t).output);
            }
        }
        match outputs.len() {
            0 => ProjectionResult::OutOfBounds,
            _ => {
                let lo = outputs.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = outputs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                if (hi - lo).abs() <= ROOT_EPSILON.sqrt() {
                    ProjectionResult::Ordinate(Ordinate::Float(lo))
                } else {
                    ProjectionResult::Interval(ContinuousInterval::new(
                        Ordinate::Float(lo),
                        Ordinate::Float(hi),
                    ))
                }
            }
        }
    }

    /// Splits every segment at its critical points on the given axis
    /// (`axis_is_output = false` splits at vertical tangents, making the
    /// result monotone in `input`; `true` splits at horizontal tangents,
    /// making it monotone in `output`), producing one curve per monotone
    /// run.
    #[must_use]
    pub fn split_monotone(&self, axis_is_output: bool) -> Vec<Self> {
        let mut runs: Vec<BezierSegment> = Vec::new();
        for &seg in &self.segments {
            let mut cuts = seg.critical_points(axis_is_output);
            cuts.sort_by(|a, b| a.partial_cmp(b).expect("critical points are finite"));
            let mut remaining = seg;
            let mut last_t = 0.0;
            for cut in cuts {
                let local_t = (cut - last_t) / (1.0 - last_t);
                let (left, right) = remaining.subdivide(local_t);
                runs.push(left);
                remaining = right;
                last_t = cut;
            }
            runs.push(remaining);
        }
        // Each run is individually monotone; group them one-per-curve so
        // callers can invert/compose each independently.
        let mut bounds_start = self.input_bounds.start;
        let mut out = Vec::with_capacity(runs.len());
        let last = runs.len() - 1;
        for (i, seg) in runs.iter().enumerate() {
            let end = if i == last {
                self.input_bounds.end
            } else {
                Ordinate::Float(seg.p3.input)
            };
            let (lo, hi) = if bounds_start <= end {
                (bounds_start, end)
            } else {
                (end, bounds_start)
            };
            out.push(Self::new(vec![*seg], ContinuousInterval::new(lo, hi)));
            bounds_start = end;
        }
        out
    }

    /// Restricts this curve to `domain`, subdividing the segments that
    /// straddle the boundary via [`BezierSegment::subdivide`] and dropping
    /// whole segments that fall outside. Assumes each segment is monotone
    /// in `input` (not necessarily in `output`).
    #[must_use]
    pub fn restrict(&self, domain: ContinuousInterval) -> Self {
        let lo = domain.start.to_f64();
        let hi = domain.end.to_f64();
        let mut kept: Vec<BezierSegment> = Vec::new();
        for &seg in &self.segments {
            let (seg_lo, seg_hi) = if seg.p0.input <= seg.p3.input {
                (seg.p0.input, seg.p3.input)
            } else {
                (seg.p3.input, seg.p0.input)
            };
            if seg_hi < lo || seg_lo > hi {
                continue;
            }
            let mut piece = seg;
            if lo > seg_lo {
                if let Some(&t) = piece.input_roots(lo).first() {
                    let (_, right) = piece.subdivide(t);
                    piece = right;
                }
            }
            let piece_hi = if piece.p0.input <= piece.p3.input {
                piece.p3.input
            } else {
                piece.p0.input
            };
            if hi < piece_hi {
                if let Some(&t) = piece.input_roots(hi).first() {
                    let (left, _) = piece.subdivide(t);
                    piece = left;
                }
            }
            kept.push(piece);
        }
        if kept.is_empty() {
            kept.push(self.segments[self.segments.len() - 1]);
        }
        Self::new(kept, domain)
    }

    /// Applies `f` to every control point's `output`. Used to compose an
    /// affine transform after this curve exactly (affine maps commute with
    /// the Bézier blend, so transforming control points is exact).
    #[must_use]
    pub fn map_output<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|seg| BezierSegment {
                p0: BezierPoint { input: seg.p0.input, output: f(seg.p0.output) },
                p1: BezierPoint { input: seg.p1.input, output: f(seg.p1.output) },
                p2: BezierPoint { input: seg.p2.input, output: f(seg.p2.output) },
                p3: BezierPoint { input: seg.p3.input, output: f(seg.p3.output) },
            })
            .collect();
        Self::new(segments, self.input_bounds)
    }

    /// Applies `f` to every control point's `input`. Used to compose an
    /// affine transform before this curve exactly.
    #[must_use]
    pub fn map_input<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        let segments: Vec<BezierSegment> = self
            .segments
            .iter()
            .map(|seg| BezierSegment {
                p0: BezierPoint { input: f(seg.p0.input), output: seg.p0.output },
                p1: BezierPoint { input: f(seg.p1.input), output: seg.p1.output },
                p2: BezierPoint { input: f(seg.p2.input), output: seg.p2.output },
                p3: BezierPoint { input: f(seg.p3.input), output: seg.p3.output },
            })
            .collect();
        let a = f(self.input_bounds.start.to_f64());
        let b = f(self.input_bounds.end.to_f64());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self::new(segments, ContinuousInterval::new(Ordinate::Float(lo), Ordinate::Float(hi)))
    }

    /// Swaps the `input`/`output` axes of every control point. Only
    /// meaningful when the curve is already monotone in `output` (see
    /// [`Self::split_monotone`] with `axis_is_output = true`).
    #[must_use]
    pub fn inverted(&self) -> Self {
        let swapped: Vec<BezierSegment> = self
            .segments
            .iter()
            .map(|seg| BezierSegment {
                p0: BezierPoint {
                    input: seg.p0.output,
                    output: seg.p0.input,
                },
                p1: BezierPoint {
                    input: seg.p1.output,
                    output: seg.p1.input,
                },
                p2: BezierPoint {
                    input: seg.p2.output,
                    output: seg.p2.input,
                },
                p3: BezierPoint {
                    input: seg.p3.output,
                    output: seg.p3.input,
                },
            })
            .collect();
        let first = swapped[0].p0.input;
        let last = swapped[swapped.len() - 1].p3.input;
        let bounds = if first <= last {
            ContinuousInterval::new(Ordinate::Float(first), Ordinate::Float(last))
        } else {
            ContinuousInterval::new(Ordinate::Float(last), Ordinate::Float(first))
        };
        Self::new(swapped, bounds)
    }
}

/// Real roots of `a*t^2 + b*t + c = 0`, degrading to linear/empty as
/// coefficients vanish.
fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        Vec::new()
    } else if disc.abs() < 1e-12 {
        vec![-b / (2.0 * a)]
    } else {
        let sqrt_disc = disc.sqrt();
        vec![(-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)]
    }
}

/// Real roots of `a*t^3 + b*t^2 + c*t + d = 0` via the depressed-cubic
/// trigonometric/Cardano method.
fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    if a.abs() < 1e-12 {
        return solve_quadratic(b, c, d);
    }
    let pb = b / a;
    let pc = c / a;
    let pd = d / a;
    let shift = pb / 3.0;
    let p = pc - pb * pb / 3.0;
    let q = 2.0 * pb * pb * pb / 27.0 - pb * pc / 3.0 + pd;

    if p.abs() < 1e-12 && q.abs() < 1e-12 {
        return vec![-shift];
    }

    let discriminant = q * q / 4.0 + p * p * p / 27.0;
    if discriminant > 1e-12 {
        let sqrt_disc = discriminant.sqrt();
        let u = (-q / 2.0 + sqrt_disc).cbrt();
        let v = (-q / 2.0 - sqrt_disc).cbrt();
        vec![u + v - shift]
    } else if discriminant.abs() <= 1e-12 {
        let u = (-q / 2.0).cbrt();
        vec![2.0 * u - shift, -u - shift]
    } else {
        let r = (-p * p * p / 27.0).sqrt();
        let phi = (-q / (2.0 * r)).clamp(-1.0, 1.0).acos();
        let m = 2.0 * (-p / 3.0).sqrt();
        (0..3)
            .map(|k| m * ((phi + 2.0 * core::f64::consts::PI * f64::from(k)) / 3.0).cos() - shift)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(input: f64, output: f64) -> BezierPoint {
        BezierPoint { input, output }
    }

    /// A monotone-increasing "ease" curve from (0,0) to (1,1).
    fn ease() -> BezierCurve {
        let seg = BezierSegment {
            p0: pt(0.0, 0.0),
            p1: pt(0.3, 0.0),
            p2: pt(0.7, 1.0),
            p3: pt(1.0, 1.0),
        };
        BezierCurve::new(
            vec![seg],
            ContinuousInterval::new(Ordinate::Float(0.0), Ordinate::Float(1.0)),
        )
    }

    #[test]
    fn endpoints_project_exactly() {
        let c = ease();
        assert_eq!(
            c.project_instantaneous(Ordinate::Float(0.0)),
            ProjectionResult::Ordinate(Ordinate::Float(0.0))
        );
    }

    #[test]
    fn interior_point_is_in_output_bounds() {
        let c = ease();
        match c.project_instantaneous(Ordinate::Float(0.5)) {
            ProjectionResult::Ordinate(o) => {
                let v = o.to_f64();
                assert!((0.0..=1.0).contains(&v));
            }
            other => panic!("expected a single ordinate, got {other:?}"),
        }
    }

    #[test]
    fn out_of_bounds_outside_input_range() {
        let c = ease();
        assert_eq!(
            c.project_instantaneous(Ordinate::Float(2.0)),
            ProjectionResult::OutOfBounds
        );
    }

    #[test]
    fn non_monotone_curve_yields_interval_at_self_intersection() {
        // A curve whose `input` axis loops back: p0 and p3 share the same
        // input value with a bulge in between, so some `in` values are hit
        // by two distinct `t`, each with a different `out`.
        let seg = BezierSegment {
            p0: pt(0.0, 0.0),
            p1: pt(2.0, 1.0),
            p2: pt(-2.0, 2.0),
            p3: pt(0.0, 3.0),
        };
        let c = BezierCurve::new(
            vec![seg],
            ContinuousInterval::new(Ordinate::Float(-2.0), Ordinate::Float(3.0)),
        );
        match c.project_instantaneous(Ordinate::Float(0.0)) {
            ProjectionResult::Interval(iv) => {
                assert!(iv.duration().to_f64() > 0.0);
            }
            ProjectionResult::Ordinate(_) => {
                // Acceptable only if the solver happened to find a single
                // root at machine precision; the bulge is deliberately
                // large so this should not occur.
                panic!("expected multiple roots for a self-overlapping curve");
            }
            ProjectionResult::OutOfBounds => panic!("0.0 is within bounds"),
        }
    }

    #[test]
    fn split_monotone_by_input_yields_pieces_each_injective_in_input() {
        let seg = BezierSegment {
            p0: pt(0.0, 0.0),
            p1: pt(2.0, 1.0),
            p2: pt(-2.0, 2.0),
            p3: pt(0.0, 3.0),
        };
        let c = BezierCurve::new(
            vec![seg],
            ContinuousInterval::new(Ordinate::Float(-2.0), Ordinate::Float(3.0)),
        );
        let pieces = c.split_monotone(false);
        assert!(pieces.len() > 1, "the bulge has an interior vertical tangent");
    }

    #[test]
    fn inverted_swaps_axes() {
        let c = ease();
        let inv = c.inverted();
        assert_eq!(inv.segments()[0].p0.input, 0.0);
        assert_eq!(inv.segments()[0].p0.output, 0.0);
        assert_eq!(inv.segments()[0].p3.input, 1.0);
    }

    #[test]
    fn restrict_clips_interior_domain() {
        let c = ease();
        let r = c.restrict(ContinuousInterval::new(Ordinate::Float(0.25), Ordinate::Float(0.75)));
        assert_eq!(r.input_bounds().start, Ordinate::Float(0.25));
        assert_eq!(r.input_bounds().end, Ordinate::Float(0.75));
        let ProjectionResult::Ordinate(left) = r.project_instantaneous(Ordinate::Float(0.25)) else {
            panic!("expected an ordinate at the new start");
        };
        let ProjectionResult::Ordinate(original) = c.project_instantaneous(Ordinate::Float(0.25)) else {
            panic!("expected an ordinate");
        };
        assert_eq!(left, original);
    }

    #[test]
    fn map_output_scales_every_control_point() {
        let c = ease();
        let scaled = c.map_output(|o| o * 2.0 + 1.0);
        assert_eq!(scaled.segments()[0].p0.output, 1.0);
        assert_eq!(scaled.segments()[0].p3.output, 3.0);
        assert_eq!(scaled.segments()[0].p0.input, c.segments()[0].p0.input);
    }

    #[test]
    fn map_input_reverses_bounds_for_negative_scale() {
        let c = ease();
        let mapped = c.map_input(|i| -i);
        assert_eq!(mapped.input_bounds(), ContinuousInterval::new(Ordinate::Float(-1.0), Ordinate::Float(0.0)));
    }

    #[test]
    fn cubic_solver_finds_known_roots() {
        // (t - 0.25)(t - 0.5)(t - 0.75) = t^3 - 1.5t^2 + 0.6875t - 0.09375
        let mut roots = solve_cubic(1.0, -1.5, 0.6875, -0.09375);
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(roots.len(), 3);
        assert!((roots[0] - 0.25).abs() < 1e-6);
        assert!((roots[1] - 0.5).abs() < 1e-6);
        assert!((roots[2] - 0.75).abs() < 1e-6);
    }
}
