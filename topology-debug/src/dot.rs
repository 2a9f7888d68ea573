// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot-graph export for a built [`SpaceGraph`].
//!
//! [`export`] walks a frozen graph and writes `digraph { ... }` lines: one
//! node per graph node, one edge per parent/child link, using the label
//! formatter `"{object_kind}.{space_label}.{treecode_bits}"`.

use std::io::{self, Write};

use topology_core::composition::ComposedValueRef;
use topology_core::graph::SpaceGraph;
use topology_core::space::SpaceLabel;
use topology_core::treecode::Treecode;

/// Writes `graph` to `writer` as a Graphviz `digraph`.
///
/// # Errors
///
/// Propagates any I/O error from `writer`.
pub fn export(graph: &SpaceGraph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "digraph topology {{")?;
    if let Some(root) = graph.root() {
        for index in 0..graph.len() as u32 {
            let label = node_label(graph, index);
            writeln!(writer, "  n{index} [label=\"{label}\"];")?;
        }
        for index in 0..graph.len() as u32 {
            if let Some(parent) = graph.parent_of(index) {
                writeln!(writer, "  n{parent} -> n{index};")?;
            }
        }
        debug_assert_eq!(root, 0, "SpaceGraph roots are always index 0");
    }
    writeln!(writer, "}}")
}

fn node_label(graph: &SpaceGraph, index: u32) -> String {
    let space = graph.value(index);
    format!(
        "{}.{}.{}",
        object_kind(space.object_ref),
        space_label(space.label, space.child_index),
        treecode_bits(graph.code(index)),
    )
}

fn object_kind(obj: ComposedValueRef) -> &'static str {
    match obj {
        ComposedValueRef::Clip(_) => "clip",
        ComposedValueRef::Gap(_) => "gap",
        ComposedValueRef::Warp(_) => "warp",
        ComposedValueRef::Track(_) => "track",
        ComposedValueRef::Stack(_) => "stack",
        ComposedValueRef::Timeline(_) => "timeline",
    }
}

fn space_label(label: SpaceLabel, child_index: Option<u32>) -> String {
    match (label, child_index) {
        (SpaceLabel::Presentation, _) => "presentation".to_owned(),
        (SpaceLabel::Intrinsic, _) => "intrinsic".to_owned(),
        (SpaceLabel::Media, _) => "media".to_owned(),
        (SpaceLabel::Child, Some(k)) => format!("child[{k}]"),
        (SpaceLabel::Child, None) => "child".to_owned(),
    }
}

/// The treecode's appended bits, most significant first, e.g. `1011`. The
/// root renders as the empty string.
fn treecode_bits(code: &Treecode) -> String {
    // `Treecode`'s own `Debug` impl already renders exactly this sequence
    // (`Treecode(1011)`); reuse it rather than duplicating the bit walk.
    let rendered = format!("{code:?}");
    rendered
        .strip_prefix("Treecode(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(&rendered)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use topology_core::composition::{Clip, CompositionArena};
    use topology_core::graph::build_space_graph;
    use topology_core::trace::Tracer;

    #[test]
    fn single_clip_exports_two_nodes_and_one_edge() {
        let mut arena = CompositionArena::new();
        let clip = ComposedValueRef::Clip(arena.insert_clip(Clip::new()));
        let graph = build_space_graph(clip, &arena, &mut Tracer::none());

        let mut buf = Vec::new();
        export(&graph, &mut buf).expect("writing to a Vec never fails");
        let text = String::from_utf8(buf).expect("export only writes ASCII");

        assert!(text.starts_with("digraph topology {"), "got: {text}");
        assert!(text.contains("n0 [label=\"clip.presentation.\"];"), "got: {text}");
        assert!(text.contains("n1 [label=\"clip.media.1\"];"), "got: {text}");
        assert!(text.contains("n0 -> n1;"), "got: {text}");
    }

    #[test]
    fn empty_graph_exports_an_empty_digraph() {
        let graph = SpaceGraph::new();
        let mut buf = Vec::new();
        export(&graph, &mut buf).expect("writing to a Vec never fails");
        let text = String::from_utf8(buf).expect("export only writes ASCII");
        assert_eq!(text, "digraph topology {\n}\n");
    }
}
