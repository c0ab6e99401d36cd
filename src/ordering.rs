//! Removal ordering from a pairwise local comparator.
//!
//! A total removal order over all present ids is approximated by repeated
//! positional insertion: each id, taken in ascending order, is spliced
//! backwards past prefix elements it "should precede" according to a purely
//! local judgment about the connecting edge and the two current colors. The
//! order is then replayed against a fresh copy, banking only the ids that
//! still qualify at their turn.
//!
//! Like the greedy scan (and unlike the state-space search), the score is the
//! total number of matching removals, not a consecutive streak.

use crate::graph::Color;
use crate::path::PathGraph;

/// Whether removing `first` before `second` is locally color-correct.
///
/// Defined only for adjacent ids with a present connecting edge; everything
/// else is `false`. Two situations qualify:
/// - the edge goes out of `first` carrying the target color, so removing
///   `first` first pushes the target onto `second`;
/// - the edge goes out of `second` carrying the other color while `first`
///   already holds the target, so removing `second` first would spoil it.
fn should_precede(graph: &PathGraph, first: usize, second: usize, target: Color) -> bool {
    if first.abs_diff(second) != 1 {
        return false;
    }
    let Some(edge) = graph.edge_between(first, second) else {
        return false;
    };
    if edge.source == first {
        edge.color == target
    } else {
        graph.node_color(first) == Some(target) && edge.color == target.opposite()
    }
}

/// Builds a removal order by comparator-driven insertion, replays it against
/// a fresh copy of `graph`, and returns the ids actually removed.
///
/// During the replay an id is removed only if it is still present and holds
/// `target` at that moment; ids that no longer qualify are skipped. The
/// result length is this heuristic's achieved match count.
pub fn ordered_heuristic_max_run(graph: &PathGraph, target: Color) -> Vec<usize> {
    let mut order: Vec<usize> = Vec::with_capacity(graph.size());
    for id in 0..graph.capacity() {
        if !graph.node_exists(id) {
            continue;
        }
        let mut pos = order.len();
        while pos > 0 && should_precede(graph, id, order[pos - 1], target) {
            pos -= 1;
        }
        order.insert(pos, id);
    }

    let mut copy = graph.clone();
    let mut removed = Vec::with_capacity(order.len());
    for id in order {
        if copy.node_color(id) == Some(target) {
            // Present with the target color; removal cannot fail.
            let _ = copy.remove_node(id);
            removed.push(id);
        }
    }
    removed
}

// ============================================================================
// Tests
// ============================================================================
