// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SpaceGraph`] construction ([`build_space_graph`]) and per-object edge
//! transforms ([`build_transform`]).

pub mod transform;

pub use transform::build_transform;

use crate::composition::{ComposedValueRef, CompositionArena};
use crate::space::{SpaceLabel, SpaceReference};
use crate::trace::{SpaceGraphBuiltEvent, Tracer};
use crate::tree::BinaryTree;

/// A [`crate::tree::BinaryTree`] specialized to [`SpaceReference`] payloads:
/// every node is a named coordinate space, reachable from the root by a
/// unique [`crate::treecode::Treecode`] path (spec.md §3.9).
pub type SpaceGraph = BinaryTree<SpaceReference>;

/// The fixed, ordered chain of internal spaces an object occupies before
/// any child-slot nodes (spec.md §4.1).
fn internal_spaces(obj: ComposedValueRef) -> &'static [SpaceLabel] {
    match obj {
        ComposedValueRef::Clip(_) => &[SpaceLabel::Presentation, SpaceLabel::Media],
        ComposedValueRef::Gap(_) | ComposedValueRef::Warp(_) => &[SpaceLabel::Presentation],
        ComposedValueRef::Track(_) | ComposedValueRef::Stack(_) | ComposedValueRef::Timeline(_) => {
            &[SpaceLabel::Presentation, SpaceLabel::Intrinsic]
        }
    }
}

/// `obj`'s children, in container order (empty for leaves, one element for
/// `Warp`/`Timeline`).
fn children_of(obj: ComposedValueRef, arena: &CompositionArena) -> Vec<ComposedValueRef> {
    match obj {
        ComposedValueRef::Clip(_) | ComposedValueRef::Gap(_) => Vec::new(),
        ComposedValueRef::Warp(id) => vec![arena.warp(id).child],
        ComposedValueRef::Track(id) => arena.track(id).children.clone(),
        ComposedValueRef::Stack(id) => arena.stack(id).children.clone(),
        ComposedValueRef::Timeline(id) => vec![ComposedValueRef::Stack(arena.timeline(id).stack)],
    }
}

/// Walks the composition tree rooted at `root` depth-first, placing one
/// node per internal space and one per child-slot (spec.md §4.2).
///
/// Each object's internal-space chain is a run of left steps off the
/// object's own node; each child-slot is a right step off the previous
/// child-slot (or off the deepest internal space, for the first child),
/// with the child object's own chain anchored one left step further in.
#[must_use]
pub fn build_space_graph(root: ComposedValueRef, arena: &CompositionArena, tracer: &mut Tracer<'_>) -> SpaceGraph {
    let mut graph = SpaceGraph::new();
    // (object, Some(parent_index) to attach its first internal space as a
    // left child of, or None for the root object itself).
    let mut stack: Vec<(ComposedValueRef, Option<u32>)> = vec![(root, None)];

    while let Some((obj, parent_index)) = stack.pop() {
        let labels = internal_spaces(obj);
        let mut node = match parent_index {
            None => graph.insert_root(SpaceReference::new(obj, labels[0])),
            Some(parent) => graph.insert_child(parent, false, SpaceReference::new(obj, labels[0])),
        };
        for &label in &labels[1..] {
            node = graph.insert_child(node, false, SpaceReference::new(obj, label));
        }

        let mut slot_parent = node;
        for (k, &child) in children_of(obj, arena).iter().enumerate() {
            let k = u32::try_from(k).expect("composition has fewer than u32::MAX children");
            let slot = graph.insert_child(slot_parent, true, SpaceReference::child(obj, k));
            stack.push((child, Some(slot)));
            slot_parent = slot;
        }
    }

    tracer.space_graph_built(&SpaceGraphBuiltEvent {
        root,
        node_count: graph.len(),
    });
    graph
}
