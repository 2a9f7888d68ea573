// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converts a parsed [`TimelineSchema`] into `topology-core` composition
//! objects via the append-only construction API (`CompositionArena::insert_*`).
//!
//! Composable children are tagged by an `OTIO_SCHEMA` string field (e.g.
//! `"Clip.2"`); the version suffix is accepted but ignored. A child whose
//! tag names a kind this crate doesn't know, or whose value isn't even a
//! JSON object, is skipped rather than failing the whole import: its index
//! and reason are appended to the `Vec<SkippedChild>` returned alongside
//! the composition (spec.md §7).

use serde_json::Value;

use topology_core::composition::{
    Clip, ComposedValueRef, CompositionArena, Gap, Stack, StackId, Timeline, Track, Warp,
};
use topology_core::topology::Topology;

use crate::error::{Error, SkippedChild};
use crate::schema::{ClipSchema, GapSchema, StackSchema, TimelineSchema, TrackSchema, WarpSchema};

/// Parses and converts a whole timeline document.
///
/// # Errors
///
/// Returns `Err` if the top-level document doesn't even match
/// [`TimelineSchema`]'s shape. Malformed or unrecognized *children* are not
/// errors: they're dropped and reported in the returned `Vec<SkippedChild>`.
pub fn import_timeline(
    json: &str,
    arena: &mut CompositionArena,
) -> Result<(ComposedValueRef, Vec<SkippedChild>), Error> {
    let schema: TimelineSchema = serde_json::from_str(json).map_err(Error::MalformedTimeline)?;
    let mut skipped = Vec::new();
    let stack = convert_stack(&schema.tracks, arena, &mut skipped);
    let timeline = arena.insert_timeline(Timeline {
        name: schema.name,
        stack,
        discrete_info: None,
    });
    Ok((ComposedValueRef::Timeline(timeline), skipped))
}

fn convert_stack(schema: &StackSchema, arena: &mut CompositionArena, skipped: &mut Vec<SkippedChild>) -> StackId {
    let children = convert_children(&schema.children, arena, skipped);
    arena.insert_stack(Stack {
        name: schema.name.clone(),
        children,
    })
}

fn convert_track(schema: &TrackSchema, arena: &mut CompositionArena, skipped: &mut Vec<SkippedChild>) -> ComposedValueRef {
    let children = convert_children(&schema.children, arena, skipped);
    ComposedValueRef::Track(arena.insert_track(Track {
        name: schema.name.clone(),
        children,
    }))
}

fn convert_children(
    values: &[Value],
    arena: &mut CompositionArena,
    skipped: &mut Vec<SkippedChild>,
) -> Vec<ComposedValueRef> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| convert_one(index, value, arena, skipped))
        .collect()
}

fn convert_clip(schema: &ClipSchema) -> Clip {
    Clip {
        name: schema.name.clone(),
        bounds_s: schema.bounds_s.as_ref().map(Into::into),
        discrete_info: schema
            .media
            .as_ref()
            .and_then(|media| media.discrete_info.as_ref())
            .map(Into::into),
    }
}

fn convert_gap(schema: &GapSchema) -> Gap {
    Gap::new((&schema.duration_seconds).into())
}

/// Converts one composable value, given its position in the parent's
/// `children` array (used only to label a skip).
fn convert_one(
    index: usize,
    value: &Value,
    arena: &mut CompositionArena,
    skipped: &mut Vec<SkippedChild>,
) -> Option<ComposedValueRef> {
    let Some(tag) = value.get("OTIO_SCHEMA").and_then(Value::as_str) else {
        skipped.push(SkippedChild {
            index,
            reason: Error::NotAnOtioSchemaObject { index },
        });
        return None;
    };
    let kind = tag.split('.').next().unwrap_or(tag);

    match kind {
        "Clip" => match parse::<ClipSchema>(value, "Clip") {
            Ok(schema) => Some(ComposedValueRef::Clip(arena.insert_clip(convert_clip(&schema)))),
            Err(reason) => {
                skipped.push(SkippedChild { index, reason });
                None
            }
        },
        "Gap" => match parse::<GapSchema>(value, "Gap") {
            Ok(schema) => Some(ComposedValueRef::Gap(arena.insert_gap(convert_gap(&schema)))),
            Err(reason) => {
                skipped.push(SkippedChild { index, reason });
                None
            }
        },
        "Warp" => match parse::<WarpSchema>(value, "Warp") {
            Ok(schema) => {
                convert_warp(index, &schema, arena, skipped).map(|warp| ComposedValueRef::Warp(arena.insert_warp(warp)))
            }
            Err(reason) => {
                skipped.push(SkippedChild { index, reason });
                None
            }
        },
        "Track" => match parse::<TrackSchema>(value, "Track") {
            Ok(schema) => Some(convert_track(&schema, arena, skipped)),
            Err(reason) => {
                skipped.push(SkippedChild { index, reason });
                None
            }
        },
        "Stack" => match parse::<StackSchema>(value, "Stack") {
            Ok(schema) => Some(ComposedValueRef::Stack(convert_stack(&schema, arena, skipped))),
            Err(reason) => {
                skipped.push(SkippedChild { index, reason });
                None
            }
        },
        _ => {
            skipped.push(SkippedChild {
                index,
                reason: Error::NoSuchSchema { name: tag.to_owned() },
            });
            None
        }
    }
}

/// Deserializes `value` into `S`, mapping a shape mismatch to a
/// `MalformedSchema` naming `kind`.
fn parse<S>(value: &Value, kind: &'static str) -> Result<S, Error>
where
    S: serde::de::DeserializeOwned,
{
    serde_json::from_value(value.clone()).map_err(|source| Error::MalformedSchema { kind, source })
}

/// A `Warp`'s `child` is a single composable value, not an array; it's
/// converted through the same [`convert_one`] dispatch, attributed to the
/// warp's own index if it's skipped.
fn convert_warp(
    index: usize,
    schema: &WarpSchema,
    arena: &mut CompositionArena,
    skipped: &mut Vec<SkippedChild>,
) -> Option<Warp> {
    let child = convert_one(index, &schema.child, arena, skipped)?;
    Some(Warp {
        name: schema.name.clone(),
        topology: Topology::from(&schema.transform),
        child,
    })
}
