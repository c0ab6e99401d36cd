//! Single-pass greedy scan specialized to path graphs.
//!
//! The scan walks left to right over a private copy, removing the node under
//! the cursor whenever a local predicate says the removal is "interesting":
//! it would usefully push the target color onto a neighbor. Before such a
//! removal, a lookahead flush clears a chain of already-qualifying nodes on
//! the anchored side so they are still counted at the target color.
//!
//! Unlike the state-space search, the score here is the **total** number of
//! removals made while the node held the target color (which, under this
//! policy, is every removal in the returned order), not a consecutive streak.

use crate::graph::Color;
use crate::path::PathGraph;

/// Which incident edge of the cursor node a probe looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Whether removing `id` right now is locally useful on `side`:
/// the edge on that side exists and points outward from `id`, both the node
/// and the edge carry the target color, and the neighbor on that side does
/// not (so the removal flips it toward the target).
fn is_interesting_to_remove(graph: &PathGraph, id: usize, target: Color, side: Side) -> bool {
    let neighbor = match side {
        Side::Left => {
            if id == 0 {
                return false;
            }
            id - 1
        }
        Side::Right => id + 1,
    };
    let Some(edge) = graph.edge_between(id, neighbor) else {
        return false;
    };
    edge.source == id
        && edge.color == target
        && graph.node_color(id) == Some(target)
        && graph.node_color(neighbor) == Some(target.opposite())
}

/// Extends a flush chain from `from` to `to` (adjacent ids): `from` must
/// currently hold the target color, and removing it must not recolor `to`
/// away from the target. Edges sourced at `to` never fire during the flush,
/// so only a target-colored outward edge keeps the chain safe.
fn chain_link_ok(graph: &PathGraph, from: usize, to: usize, target: Color) -> bool {
    if graph.node_color(from) != Some(target) {
        return false;
    }
    match graph.edge_between(from, to) {
        Some(edge) => edge.source != from || edge.color == target,
        None => false,
    }
}

/// Leftward flush: removes the maximal qualifying chain directly left of
/// `anchor`, farthest node first, appending each removal to `order`.
fn flush_before(graph: &mut PathGraph, anchor: usize, target: Color, order: &mut Vec<usize>) {
    let mut chain = Vec::new();
    let mut upper = anchor;
    while upper > 0 && chain_link_ok(graph, upper - 1, upper, target) {
        upper -= 1;
        chain.push(upper);
    }
    for &id in chain.iter().rev() {
        // Farthest first: chain links guarantee the next member keeps the
        // target color until its own removal.
        let _ = graph.remove_node(id);
        order.push(id);
    }
}

/// Rightward flush, symmetric to [`flush_before`].
fn flush_after(graph: &mut PathGraph, anchor: usize, target: Color, order: &mut Vec<usize>) {
    let mut chain = Vec::new();
    let mut lower = anchor;
    while lower + 1 < graph.capacity() && chain_link_ok(graph, lower + 1, lower, target) {
        lower += 1;
        chain.push(lower);
    }
    for &id in chain.iter().rev() {
        let _ = graph.remove_node(id);
        order.push(id);
    }
}

/// Runs the greedy scan against a private copy of `graph` and returns the
/// removal order.
///
/// Every id in the order held `target` at the instant it was removed, so the
/// order's length is the achieved match count of this heuristic.
pub fn greedy_max_run(graph: &PathGraph, target: Color) -> Vec<usize> {
    let mut graph = graph.clone();
    let mut order = Vec::with_capacity(graph.size());
    let mut current = 0usize;

    while current < graph.capacity() {
        if !graph.node_exists(current) {
            current += 1;
            continue;
        }
        let left = is_interesting_to_remove(&graph, current, target, Side::Left);
        let right = is_interesting_to_remove(&graph, current, target, Side::Right);
        match (left, right) {
            (false, true) => {
                // Count the already-colored chain behind us before the
                // removal propagates to the right.
                flush_before(&mut graph, current, target, &mut order);
                let _ = graph.remove_node(current);
                order.push(current);
                current += 1;
            }
            (true, false) => {
                flush_after(&mut graph, current, target, &mut order);
                let _ = graph.remove_node(current);
                order.push(current);
                // The landscape left of the cursor changed; re-examine it.
                current = current.saturating_sub(1);
            }
            (true, true) => {
                let _ = graph.remove_node(current);
                order.push(current);
                current = current.saturating_sub(1);
            }
            (false, false) => {
                if graph.node_color(current) == Some(target) {
                    flush_before(&mut graph, current, target, &mut order);
                    let _ = graph.remove_node(current);
                    order.push(current);
                }
                current += 1;
            }
        }
    }

    // Cleanup pass: whatever still holds the target color is banked in
    // ascending id order.
    for id in 0..graph.capacity() {
        if graph.node_color(id) == Some(target) {
            let _ = graph.remove_node(id);
            order.push(id);
        }
    }
    order
}

// ============================================================================
// Tests
// ============================================================================
