// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact (and, where no closed form exists, sampled) pairwise composition
//! of two [`Mapping`]s: the engine behind [`Mapping::compose`].

use super::{BezierCurve, BezierPoint, BezierSegment, LinearCurve, Mapping, ProjectionResult};
use crate::interval::ContinuousInterval;
use crate::ordinate::Ordinate;
use crate::transform1d::AffineTransform1D;

/// The tightest interval of `am`'s domain whose image under `am` lies in
/// `target`. Exact for affine mappings; otherwise a sampled approximation.
pub(super) fn preimage(am: &Mapping, target: ContinuousInterval) -> Option<ContinuousInterval> {
    match am {
        Mapping::Empty => None,
        Mapping::Affine { input_bounds, transform } => {
            if transform.scale == Ordinate::ZERO {
                return if target.contains(transform.offset) {
                    Some(*input_bounds)
                } else {
                    None
                };
            }
            let inverse = transform.invert();
            let a = inverse.apply(target.start);
            let b = inverse.apply(target.end);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            input_bounds.intersect(ContinuousInterval::new(lo, hi))
        }
        _ => preimage_numeric(am, target),
    }
}

const PREIMAGE_SAMPLES: usize = 64;

/// Numeric fallback for non-affine mappings: samples `am` across its
/// domain and keeps the tightest `x` range whose image falls in `target`.
fn preimage_numeric(am: &Mapping, target: ContinuousInterval) -> Option<ContinuousInterval> {
    let bounds = am.input_bounds();
    let start = bounds.start.to_f64();
    let end = bounds.end.to_f64();
    if bounds.is_empty() || !start.is_finite() || !end.is_finite() {
        return if bounds.is_empty() { None } else { Some(bounds) };
    }
    let step = (end - start) / PREIMAGE_SAMPLES as f64;
    let mut lo: Option<f64> = None;
    let mut hi: Option<f64> = None;
    for i in 0..PREIMAGE_SAMPLES {
        let x = start + step * i as f64;
        let y = match am.project_instantaneous(Ordinate::Float(x)) {
            ProjectionResult::Ordinate(y) => Some(y),
            ProjectionResult::Interval(iv) => Some(iv.start),
            ProjectionResult::OutOfBounds => None,
        };
        if let Some(y) = y {
            if target.contains(y) {
                lo = Some(lo.map_or(x, |l: f64| l.min(x)));
                hi = Some(hi.map_or(x + step, |h: f64| h.max(x + step)));
            }
        }
    }
    match (lo, hi) {
        (Some(l), Some(h)) => Some(ContinuousInterval::new(Ordinate::Float(l), Ordinate::Float(h.min(end)))),
        _ => None,
    }
}

/// Builds the composed mapping `outer ∘ inner` restricted to `domain`,
/// where `outer` is already known to be monotone (a caller splits a
/// non-monotone outer into runs before reaching here; see
/// [`Mapping::compose`]).
///
/// Affine transforms commute exactly with both curve kinds (an affine map
/// applied to one axis of a Bézier or piecewise-linear curve's control
/// points reproduces the composed curve exactly), so every pairing
/// involving at least one affine side composes exactly. A pairing of two
/// non-affine curves (linear∘linear, linear∘bezier, bezier∘linear,
/// bezier∘bezier) has no such closed form here and falls back to
/// [`sample_as_bezier`].
pub(super) fn compose_pair(outer: &Mapping, inner: &Mapping, domain: ContinuousInterval) -> Mapping {
    if outer.is_empty() || inner.is_empty() || domain.is_empty() {
        return Mapping::Empty;
    }
    match (outer, inner) {
        (Mapping::Affine { transform: ot, .. }, Mapping::Affine { transform: it, .. }) => {
            Mapping::affine(domain, ot.compose(*it))
        }
        (Mapping::Affine { transform: ot, .. }, Mapping::Linear(curve)) => {
            compose_affine_after_linear(*ot, curve, domain)
        }
        (Mapping::Affine { transform: ot, .. }, Mapping::Bezier(curve)) => {
            compose_affine_after_bezier(*ot, curve, domain)
        }
        (Mapping::Linear(curve), Mapping::Affine { transform: it, .. }) => {
            compose_linear_after_affine(curve, *it, domain)
        }
        (Mapping::Bezier(curve), Mapping::Affine { transform: it, .. }) => {
            compose_bezier_after_affine(curve, *it, domain)
        }
        _ => sample_as_bezier(outer, inner, domain),
    }
}

/// Collapses a 2-knot `LinearCurve` (a degenerate straight line) to the
/// equivalent `Mapping::Affine`, per spec's "affine if the linear is
/// degenerate-affine".
fn mapping_from_linear(curve: LinearCurve) -> Mapping {
    if curve.knots().len() == 2 {
        let k0 = curve.knots()[0];
        let k1 = curve.knots()[1];
        let scale = (k1.output - k0.output) / (k1.input - k0.input);
        let offset = k0.output - scale * k0.input;
        return Mapping::affine(curve.input_bounds(), AffineTransform1D { scale, offset });
    }
    Mapping::Linear(curve)
}

fn compose_affine_after_linear(ot: AffineTransform1D, curve: &LinearCurve, domain: ContinuousInterval) -> Mapping {
    if ot.scale == Ordinate::ZERO {
        return Mapping::affine(domain, AffineTransform1D { scale: Ordinate::ZERO, offset: ot.offset });
    }
    let restricted = curve.restrict(domain);
    mapping_from_linear(restricted.map_output(|o| ot.apply(o)))
}

fn compose_affine_after_bezier(ot: AffineTransform1D, curve: &BezierCurve, domain: ContinuousInterval) -> Mapping {
    if ot.scale == Ordinate::ZERO {
        return Mapping::affine(domain, AffineTransform1D { scale: Ordinate::ZERO, offset: ot.offset });
    }
    let restricted = curve.restrict(domain);
    Mapping::Bezier(restricted.map_output(|o| ot.apply(Ordinate::Float(o)).to_f64()))
}

fn compose_linear_after_affine(curve: &LinearCurve, it: AffineTransform1D, domain: ContinuousInterval) -> Mapping {
    if it.scale == Ordinate::ZERO {
        return match curve.project_instantaneous(it.offset) {
            ProjectionResult::Ordinate(value) => {
                Mapping::affine(domain, AffineTransform1D { scale: Ordinate::ZERO, offset: value })
            }
            _ => Mapping::Empty,
        };
    }
    let y_start = it.apply(domain.start);
    let y_end = it.apply(domain.end);
    let (y_lo, y_hi) = if y_start <= y_end { (y_start, y_end) } else { (y_end, y_start) };
    let Some(y_domain) = curve.input_bounds().intersect(ContinuousInterval::new(y_lo, y_hi)) else {
        return Mapping::Empty;
    };
    let inverse = it.invert();
    mapping_from_linear(curve.restrict(y_domain).map_input(|y| inverse.apply(y)))
}

fn compose_bezier_after_affine(curve: &BezierCurve, it: AffineTransform1D, domain: ContinuousInterval) -> Mapping {
    if it.scale == Ordinate::ZERO {
        return match curve.project_instantaneous(it.offset) {
            ProjectionResult::Ordinate(value) => {
                Mapping::affine(domain, AffineTransform1D { scale: Ordinate::ZERO, offset: value })
            }
            _ => Mapping::Empty,
        };
    }
    let y_start = it.apply(domain.start);
    let y_end = it.apply(domain.end);
    let (y_lo, y_hi) = if y_start <= y_end { (y_start, y_end) } else { (y_end, y_start) };
    let Some(y_domain) = curve.input_bounds().intersect(ContinuousInterval::new(y_lo, y_hi)) else {
        return Mapping::Empty;
    };
    let inverse = it.invert();
    Mapping::Bezier(curve.restrict(y_domain).map_input(|y| inverse.apply(Ordinate::Float(y)).to_f64()))
}

const COMPOSE_SAMPLES: usize = 8;

fn eval_chain(outer: &Mapping, inner: &Mapping, x: Ordinate) -> f64 {
    let y = match inner.project_instantaneous(x) {
        ProjectionResult::Ordinate(y) => y,
        ProjectionResult::Interval(iv) => iv.start + (iv.end - iv.start) * Ordinate::Float(0.5),
        ProjectionResult::OutOfBounds => return x.to_f64(),
    };
    match outer.project_instantaneous(y) {
        ProjectionResult::Ordinate(z) => z.to_f64(),
        ProjectionResult::Interval(iv) => iv.start.to_f64(),
        ProjectionResult::OutOfBounds => y.to_f64(),
    }
}

/// Last-resort fallback for a pair of non-affine curves with no closed-form
/// composition here: resamples the composed chain at `COMPOSE_SAMPLES`
/// evenly-spaced points across `domain` and fits linear-interpolant Bézier
/// segments between them.
fn sample_as_bezier(outer: &Mapping, inner: &Mapping, domain: ContinuousInterval) -> Mapping {
    let start = domain.start.to_f64();
    let end = domain.end.to_f64();
    let xs: Vec<f64> = (0..=COMPOSE_SAMPLES)
        .map(|i| {
            if i == COMPOSE_SAMPLES {
                end
            } else {
                start + (end - start) * (i as f64 / COMPOSE_SAMPLES as f64)
            }
        })
        .collect();
    let ys: Vec<f64> = xs.iter().map(|&x| eval_chain(outer, inner, Ordinate::Float(x))).collect();
    let segments: Vec<BezierSegment> = (0..COMPOSE_SAMPLES)
        .map(|i| {
            let p0 = BezierPoint { input: xs[i], output: ys[i] };
            let p3 = BezierPoint { input: xs[i + 1], output: ys[i + 1] };
            let p1 = BezierPoint {
                input: p0.input + (p3.input - p0.input) / 3.0,
                output: p0.output + (p3.output - p0.output) / 3.0,
            };
            let p2 = BezierPoint {
                input: p0.input + (p3.input - p0.input) * 2.0 / 3.0,
                output: p0.output + (p3.output - p0.output) * 2.0 / 3.0,
            };
            BezierSegment { p0, p1, p2, p3 }
        })
        .collect();
    Mapping::Bezier(BezierCurve::new(segments, domain))
}
