// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `serde::Deserialize` shapes mirroring spec.md §6's JSON import contract.
//!
//! These types are a direct transcription of the wire shapes; no
//! validation or composition-building happens here (see
//! [`crate::convert`]). Composable children (`Track`/`Stack` members) are
//! kept as raw [`serde_json::Value`] rather than an eagerly-tagged enum, so
//! a single unrecognized child can be skipped without failing the whole
//! parse (spec.md §7's "unknown schema on a single child... logged and the
//! child is omitted").

use serde::Deserialize;
use topology_core::interval::ContinuousInterval;
use topology_core::mapping::Mapping;
use topology_core::ordinate::Ordinate;
use topology_core::space::DiscreteInfo;
use topology_core::topology::Topology;
use topology_core::transform1d::AffineTransform1D;

/// A time value: either a literal float, or a `{value, rate}` rational-time
/// object read as `value/rate`.
///
/// Both fields of the rational form are integers in practice (frame counts
/// over a sample rate); when they are, the conversion is exact via
/// [`Ordinate::rational`] rather than routing through `f64`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrdinateSchema {
    /// `{value, rate}`, read as `value/rate`.
    Rational {
        /// Numerator of the rational time value.
        value: i64,
        /// Denominator (the sample rate).
        rate: i64,
    },
    /// A literal float.
    Float(f64),
}

impl From<&OrdinateSchema> for Ordinate {
    fn from(schema: &OrdinateSchema) -> Self {
        match *schema {
            OrdinateSchema::Rational { value, rate } => Self::rational(value, rate),
            OrdinateSchema::Float(f) => Self::from(f),
        }
    }
}

/// `Interval { start, end }`.
#[derive(Debug, Deserialize)]
pub struct IntervalSchema {
    start: OrdinateSchema,
    end: OrdinateSchema,
}

impl From<&IntervalSchema> for ContinuousInterval {
    fn from(schema: &IntervalSchema) -> Self {
        Self::new(Ordinate::from(&schema.start), Ordinate::from(&schema.end))
    }
}

/// `{sample_rate_hz, start_index}`.
#[derive(Debug, Deserialize)]
pub struct DiscreteInfoSchema {
    sample_rate_hz: OrdinateSchema,
    start_index: i64,
}

impl From<&DiscreteInfoSchema> for DiscreteInfo {
    fn from(schema: &DiscreteInfoSchema) -> Self {
        Self {
            sample_rate_hz: Ordinate::from(&schema.sample_rate_hz),
            start_index: schema.start_index,
        }
    }
}

/// `Clip.media`: `{bounds_s?, discrete_info?, ref?}`. `ref` (the media
/// locator) is accepted and retained only as an opaque string; the core has
/// no concept of a media reference, so it plays no further role once a
/// `Clip` is built.
#[derive(Debug, Deserialize, Default)]
pub struct MediaSchema {
    pub(crate) bounds_s: Option<IntervalSchema>,
    #[serde(default)]
    pub(crate) discrete_info: Option<DiscreteInfoSchema>,
    #[serde(rename = "ref")]
    #[serde(default)]
    #[allow(dead_code, reason = "retained for schema fidelity, not consumed by the core")]
    media_ref: Option<String>,
}

/// `Clip { name?, bounds_s?, media? }`.
#[derive(Debug, Deserialize)]
pub struct ClipSchema {
    pub(crate) name: Option<String>,
    pub(crate) bounds_s: Option<IntervalSchema>,
    #[serde(default)]
    pub(crate) media: Option<MediaSchema>,
}

/// `Gap { duration_seconds }`.
#[derive(Debug, Deserialize)]
pub struct GapSchema {
    pub(crate) duration_seconds: OrdinateSchema,
}

/// One piece of a [`TopologySchema`], mirroring [`Mapping`]'s variants that
/// have a JSON representation. Only `Affine` is importable; `Linear` and
/// `Bezier` curves have no documented wire shape in spec.md §6 and are left
/// for a future schema revision.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MappingSchema {
    /// An affine segment.
    Affine {
        /// The domain this segment applies over.
        input_bounds: IntervalSchema,
        /// `scale`.
        scale: OrdinateSchema,
        /// `offset`.
        offset: OrdinateSchema,
    },
}

impl From<&MappingSchema> for Mapping {
    fn from(schema: &MappingSchema) -> Self {
        match schema {
            MappingSchema::Affine { input_bounds, scale, offset } => Self::affine(
                ContinuousInterval::from(input_bounds),
                AffineTransform1D {
                    scale: Ordinate::from(scale),
                    offset: Ordinate::from(offset),
                },
            ),
        }
    }
}

/// `Topology`'s JSON representation: its mappings, already sorted and
/// non-overlapping (the same invariant `Topology::new` enforces).
#[derive(Debug, Deserialize)]
pub struct TopologySchema {
    pub(crate) mappings: Vec<MappingSchema>,
}

impl From<&TopologySchema> for Topology {
    fn from(schema: &TopologySchema) -> Self {
        Self::new(schema.mappings.iter().map(Mapping::from).collect())
    }
}

/// `Warp { child, transform }`. `child` is kept raw; see [`crate::convert`].
#[derive(Debug, Deserialize)]
pub struct WarpSchema {
    pub(crate) name: Option<String>,
    pub(crate) child: serde_json::Value,
    pub(crate) transform: TopologySchema,
}

/// `Track { name?, children }`. `children` is kept raw; see
/// [`crate::convert`].
#[derive(Debug, Deserialize)]
pub struct TrackSchema {
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) children: Vec<serde_json::Value>,
}

/// `Stack { name?, children }`. `children` is kept raw; see
/// [`crate::convert`].
#[derive(Debug, Deserialize)]
pub struct StackSchema {
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) children: Vec<serde_json::Value>,
}

/// `Timeline { name?, tracks }`: the top-level document shape.
#[derive(Debug, Deserialize)]
pub struct TimelineSchema {
    pub(crate) name: Option<String>,
    pub(crate) tracks: StackSchema,
}
