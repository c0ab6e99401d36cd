//! Best-first state-space search over [`ColoredGraph`] copies.
//!
//! Every queue entry owns an independent full copy of the graph, so a branch
//! expansion costs at least `O(capacity)` and queue memory is the product of
//! explored branches and graph size. This is the dominant cost of the exact
//! search and the reason the path-specialized heuristics exist.
//!
//! The score is the longest **consecutive** streak of target-colored removals
//! along an explored path: a mismatching removal resets the streak to zero,
//! it does not merely pause it.

use crate::graph::{Color, ColoredGraph};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// ============================================================================
// Search state
// ============================================================================

/// One explored branch: a private graph copy, the current streak length, and
/// the removal path that produced it.
#[derive(Clone, Debug)]
struct SearchState {
    graph: ColoredGraph,
    run: usize,
    path: Vec<usize>,
}

impl SearchState {
    /// Upper bound on any streak still reachable from this state.
    #[inline]
    fn bound(&self) -> usize {
        self.run + self.graph.size()
    }
}

// Heap ordering: best current streak first. Graphs are deliberately ignored;
// two states with equal streaks are interchangeable for ordering purposes.
impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.run == other.run
    }
}

impl Eq for SearchState {}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.run.cmp(&other.run)
    }
}

/// Pushes one successor per present node of `state`'s graph.
fn expand(state: &SearchState, target: Color, queue: &mut BinaryHeap<SearchState>) {
    let ids: Vec<usize> = state.graph.present_ids().collect();
    for id in ids {
        let mut graph = state.graph.clone();
        let matched = graph.node_color(id) == Some(target);
        // `id` comes from the same graph's present set; removal cannot fail.
        let _ = graph.remove_node(id);
        let run = if matched { state.run + 1 } else { 0 };
        let mut path = state.path.clone();
        path.push(id);
        queue.push(SearchState { graph, run, path });
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Searches for a removal order achieving a streak of exactly `k`
/// target-colored removals in a row.
///
/// Returns the removal path (ordered node ids) of the first state reaching
/// the streak, or `None` when the whole reachable state space is exhausted.
/// `k = 0` succeeds trivially with an empty path; `k` beyond the graph's
/// capacity can never be reached.
///
/// Branches whose remaining node count cannot close the gap to `k` are
/// pruned, which keeps the exact query tractable on small instances.
pub fn exists_run(graph: &ColoredGraph, target: Color, k: usize) -> Option<Vec<usize>> {
    if k > graph.capacity() {
        return None;
    }
    let mut queue = BinaryHeap::new();
    queue.push(SearchState {
        graph: graph.clone(),
        run: 0,
        path: Vec::new(),
    });

    while let Some(state) = queue.pop() {
        if state.run == k {
            return Some(state.path);
        }
        if k > state.bound() {
            continue;
        }
        expand(&state, target, &mut queue);
    }
    None
}

/// Best-effort maximization of the streak length.
///
/// Best-first expansion with an aggressive cut: a popped state whose bound
/// (`streak + remaining nodes`) cannot beat the best streak recorded so far,
/// or the streak at the top of the remaining queue, is treated as a terminal
/// leaf instead of being expanded. The leaf still updates the recorded best
/// (ties broken towards the longer explored path).
///
/// This is a heuristic, not a certified-optimal search: the cut trades
/// completeness for runtime, and its output should be read as a strong
/// candidate rather than a proof of maximality.
pub fn maximize_run(graph: &ColoredGraph, target: Color) -> (usize, Vec<usize>) {
    let mut best_run = 0usize;
    let mut best_path: Vec<usize> = Vec::new();
    let mut queue = BinaryHeap::new();
    queue.push(SearchState {
        graph: graph.clone(),
        run: 0,
        path: Vec::new(),
    });

    while let Some(state) = queue.pop() {
        if state.run > best_run || (state.run == best_run && state.path.len() > best_path.len()) {
            best_run = state.run;
            best_path = state.path.clone();
        }
        if state.graph.is_empty() {
            continue;
        }
        let rival = queue.peek().map_or(0, |next| next.run);
        if state.bound() <= best_run || state.bound() <= rival {
            continue;
        }
        expand(&state, target, &mut queue);
    }
    (best_run, best_path)
}

// ============================================================================
// Tests
// ============================================================================
