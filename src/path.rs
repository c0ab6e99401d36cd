//! Fixed-capacity, array-backed path graph.
//!
//! Node slots sit at ids `0..capacity`; edge slots sit between adjacent ids,
//! stored at the lower endpoint with a flag recording whether the source is
//! the higher-id endpoint ("pointing left"). The layout keeps clones cheap
//! (two flat `Vec`s) and makes the left/right scan heuristics O(1) per probe.

use crate::graph::{Color, ColoredGraph, GraphError};
use rand::Rng;
use std::fmt;

// ============================================================================
// Edge view
// ============================================================================

/// Stored edge slot: color plus direction flag.
///
/// `from_high == true` means the source is the higher-id endpoint, i.e. the
/// edge points left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EdgeSlot {
    color: Color,
    from_high: bool,
}

/// A directed colored edge between two adjacent node slots, as returned by
/// [`PathGraph::edge_between`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// The edge's color.
    pub color: Color,
    /// The endpoint whose removal propagates `color` onto `target`.
    pub source: usize,
    /// The endpoint that gets recolored when `source` is removed.
    pub target: usize,
}

// ============================================================================
// PathGraph
// ============================================================================

/// Path-shaped colored graph: `capacity` node slots and `capacity - 1` edge
/// slots, each optionally occupied.
///
/// Edges exist only between ids differing by exactly one, at most one per
/// adjacent pair. Ids are never recycled: once removed, a slot stays empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathGraph {
    capacity: usize,
    size: usize,
    nodes: Vec<Option<Color>>,
    edges: Vec<Option<EdgeSlot>>,
}

impl PathGraph {
    /// Creates an empty path graph with node slots `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            size: 0,
            nodes: vec![None; capacity],
            edges: vec![None; capacity.saturating_sub(1)],
        }
    }

    /// Creates a fully populated random instance.
    ///
    /// Samples every node and edge from `rng` with the given probabilities;
    /// see [`PathGraph::regenerate`].
    pub fn new_random<R: Rng + ?Sized>(
        capacity: usize,
        rng: &mut R,
        p_red_node: f64,
        p_red_edge: f64,
        p_left: f64,
    ) -> Self {
        let mut graph = Self::new(capacity);
        graph.regenerate(rng, p_red_node, p_red_edge, p_left);
        graph
    }

    /// Creates a node with the given color at `id`.
    ///
    /// # Errors
    /// `OutOfRange` if `id >= capacity`; `DuplicateNode` if the slot is taken.
    pub fn create_node(&mut self, color: Color, id: usize) -> Result<(), GraphError> {
        if id >= self.capacity {
            return Err(GraphError::OutOfRange {
                id,
                capacity: self.capacity,
            });
        }
        if self.nodes[id].is_some() {
            return Err(GraphError::DuplicateNode { id });
        }
        self.nodes[id] = Some(color);
        self.size += 1;
        Ok(())
    }

    /// Adds a directed colored edge from `from` to `to`.
    ///
    /// The direction is derived: the stored flag records whether the source
    /// is the higher-id endpoint.
    ///
    /// # Errors
    /// `OutOfRange` for ids beyond capacity, `NodeMissing` if either endpoint
    /// is absent, `NotAdjacent` unless `|from - to| == 1`, `DuplicateEdge` if
    /// the adjacent pair is already connected.
    pub fn add_edge(&mut self, from: usize, to: usize, color: Color) -> Result<(), GraphError> {
        for id in [from, to] {
            if id >= self.capacity {
                return Err(GraphError::OutOfRange {
                    id,
                    capacity: self.capacity,
                });
            }
            if self.nodes[id].is_none() {
                return Err(GraphError::NodeMissing { id });
            }
        }
        if from.abs_diff(to) != 1 {
            return Err(GraphError::NotAdjacent { from, to });
        }
        let slot = from.min(to);
        if self.edges[slot].is_some() {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        self.edges[slot] = Some(EdgeSlot {
            color,
            from_high: from > to,
        });
        Ok(())
    }

    /// Whether a node is currently present at `id`.
    #[inline]
    pub fn node_exists(&self, id: usize) -> bool {
        id < self.capacity && self.nodes[id].is_some()
    }

    /// The current color of the node at `id`, if present.
    #[inline]
    pub fn node_color(&self, id: usize) -> Option<Color> {
        self.nodes.get(id).copied().flatten()
    }

    /// The directed edge connecting `a` and `b`, if the pair is adjacent and
    /// connected.
    pub fn edge_between(&self, a: usize, b: usize) -> Option<Edge> {
        if a.abs_diff(b) != 1 {
            return None;
        }
        let lo = a.min(b);
        let slot = self.edges.get(lo).copied().flatten()?;
        let (source, target) = if slot.from_high {
            (lo + 1, lo)
        } else {
            (lo, lo + 1)
        };
        Some(Edge {
            color: slot.color,
            source,
            target,
        })
    }

    /// Neighbors that would be recolored by removing `id`: for each incident
    /// edge whose source is `id`, the would-be new color of its target.
    ///
    /// At most two results (left and right). Empty for absent ids.
    pub fn neighbors_affected_by_removal(&self, id: usize) -> Vec<(Color, usize)> {
        let mut affected = Vec::with_capacity(2);
        if !self.node_exists(id) {
            return affected;
        }
        if id > 0 {
            if let Some(edge) = self.edge_between(id - 1, id) {
                if edge.source == id {
                    affected.push((edge.color, id - 1));
                }
            }
        }
        if let Some(edge) = self.edge_between(id, id + 1) {
            if edge.source == id {
                affected.push((edge.color, id + 1));
            }
        }
        affected
    }

    /// Removes the node at `id`: overwrites each affected neighbor's color,
    /// then deletes both incident edge slots and the node slot.
    ///
    /// # Errors
    /// `OutOfRange` / `NodeMissing` when there is no node to remove.
    pub fn remove_node(&mut self, id: usize) -> Result<(), GraphError> {
        if id >= self.capacity {
            return Err(GraphError::OutOfRange {
                id,
                capacity: self.capacity,
            });
        }
        if self.nodes[id].is_none() {
            return Err(GraphError::NodeMissing { id });
        }
        for (color, neighbor) in self.neighbors_affected_by_removal(id) {
            if let Some(slot) = self.nodes[neighbor].as_mut() {
                *slot = color;
            }
        }
        if id > 0 {
            self.edges[id - 1] = None;
        }
        if id < self.capacity.saturating_sub(1) {
            self.edges[id] = None;
        }
        self.nodes[id] = None;
        self.size -= 1;
        Ok(())
    }

    /// Discards the current contents and resamples every node and edge.
    ///
    /// Each node is red with probability `p_red_node`; each edge is red with
    /// probability `p_red_edge` and points left (source = higher id) with
    /// probability `p_left`. Afterwards every slot is occupied and `size`
    /// equals `capacity`.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        p_red_node: f64,
        p_red_edge: f64,
        p_left: f64,
    ) {
        debug_assert!((0.0..=1.0).contains(&p_red_node));
        debug_assert!((0.0..=1.0).contains(&p_red_edge));
        debug_assert!((0.0..=1.0).contains(&p_left));
        for slot in &mut self.nodes {
            *slot = Some(if rng.random_bool(p_red_node) {
                Color::Red
            } else {
                Color::Blue
            });
        }
        for slot in &mut self.edges {
            let color = if rng.random_bool(p_red_edge) {
                Color::Red
            } else {
                Color::Blue
            };
            *slot = Some(EdgeSlot {
                color,
                from_high: rng.random_bool(p_left),
            });
        }
        self.size = self.capacity;
    }

    /// Number of currently present nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether no node is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The fixed number of node slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for PathGraph {
    /// Renders the path left to right: `[RED]-BLUE->[BLUE]`, with `<-RED-`
    /// for left-pointing edges and three-space gaps for absent slots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in 0..self.capacity {
            if id > 0 {
                match self.edges[id - 1] {
                    Some(edge) if edge.from_high => write!(f, "<-{}-", edge.color)?,
                    Some(edge) => write!(f, "-{}->", edge.color)?,
                    None => write!(f, "   ")?,
                }
            }
            match self.nodes[id] {
                Some(color) => write!(f, "[{color}]")?,
                None => write!(f, "   ")?,
            }
        }
        Ok(())
    }
}

impl From<&PathGraph> for ColoredGraph {
    /// Builds an equivalent general graph: same node colors, and one directed
    /// adjacency-map edge per occupied edge slot.
    fn from(path: &PathGraph) -> Self {
        let mut graph = ColoredGraph::new(path.capacity());
        for id in 0..path.capacity() {
            if let Some(color) = path.node_color(id) {
                // Slots are visited once each; creation cannot collide.
                let _ = graph.create_node(color, id);
            }
        }
        for lo in 0..path.capacity().saturating_sub(1) {
            if let Some(edge) = path.edge_between(lo, lo + 1) {
                let _ = graph.add_edge(edge.source, edge.target, edge.color);
            }
        }
        graph
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    /// `[RED]-RED->[BLUE]<-BLUE-[RED]`
    fn three_node_path() -> PathGraph {
        let mut g = PathGraph::new(3);
        g.create_node(Color::Red, 0).unwrap();
        g.create_node(Color::Blue, 1).unwrap();
        g.create_node(Color::Red, 2).unwrap();
        g.add_edge(0, 1, Color::Red).unwrap();
        g.add_edge(2, 1, Color::Blue).unwrap();
        g
    }

    #[test]
    fn add_edge_rejects_non_adjacent_pairs() {
        let mut g = PathGraph::new(4);
        for id in 0..4 {
            g.create_node(Color::Red, id).unwrap();
        }
        assert_eq!(
            g.add_edge(0, 2, Color::Red),
            Err(GraphError::NotAdjacent { from: 0, to: 2 })
        );
        assert_eq!(
            g.add_edge(3, 3, Color::Red),
            Err(GraphError::NotAdjacent { from: 3, to: 3 })
        );
    }

    #[test]
    fn add_edge_rejects_missing_endpoints_and_duplicates() {
        let mut g = PathGraph::new(3);
        g.create_node(Color::Red, 0).unwrap();
        assert_eq!(
            g.add_edge(0, 1, Color::Red),
            Err(GraphError::NodeMissing { id: 1 })
        );
        g.create_node(Color::Blue, 1).unwrap();
        g.add_edge(0, 1, Color::Red).unwrap();
        // Same pair, either direction: the slot is taken.
        assert_eq!(
            g.add_edge(1, 0, Color::Blue),
            Err(GraphError::DuplicateEdge { from: 1, to: 0 })
        );
        assert_eq!(
            g.add_edge(0, 5, Color::Red),
            Err(GraphError::OutOfRange { id: 5, capacity: 3 })
        );
    }

    #[test]
    fn edge_direction_is_derived_from_the_source() {
        let g = three_node_path();
        let right = g.edge_between(0, 1).unwrap();
        assert_eq!(right.source, 0);
        assert_eq!(right.target, 1);
        assert_eq!(right.color, Color::Red);
        // Argument order does not matter for the query.
        assert_eq!(g.edge_between(1, 0), Some(right));

        let left = g.edge_between(1, 2).unwrap();
        assert_eq!(left.source, 2);
        assert_eq!(left.target, 1);
        assert_eq!(left.color, Color::Blue);

        assert_eq!(g.edge_between(0, 2), None);
    }

    #[test]
    fn affected_neighbors_report_sources_only() {
        let g = three_node_path();
        assert_eq!(
            g.neighbors_affected_by_removal(0),
            vec![(Color::Red, 1)]
        );
        // Node 1 is the target of both incident edges, never the source.
        assert_eq!(g.neighbors_affected_by_removal(1), vec![]);
        assert_eq!(
            g.neighbors_affected_by_removal(2),
            vec![(Color::Blue, 1)]
        );
        assert_eq!(g.neighbors_affected_by_removal(7), vec![]);
    }

    #[test]
    fn affected_neighbors_yields_each_side_exactly_once() {
        let mut g = PathGraph::new(3);
        for id in 0..3 {
            g.create_node(Color::Blue, id).unwrap();
        }
        g.add_edge(1, 0, Color::Red).unwrap();
        g.add_edge(1, 2, Color::Blue).unwrap();
        assert_eq!(
            g.neighbors_affected_by_removal(1),
            vec![(Color::Red, 0), (Color::Blue, 2)]
        );
    }

    #[test]
    fn removal_propagates_and_clears_incident_slots() {
        let mut g = three_node_path();
        g.remove_node(0).unwrap();
        assert!(!g.node_exists(0));
        assert_eq!(g.size(), 2);
        // Edge 0->1 was red, so node 1 flipped to red before deletion.
        assert_eq!(g.node_color(1), Some(Color::Red));
        assert_eq!(g.edge_between(0, 1), None);
        // The far edge is untouched.
        assert!(g.edge_between(1, 2).is_some());
    }

    #[test]
    fn removal_decrements_size_by_exactly_one() {
        let mut g = three_node_path();
        for (expected, id) in [(2, 1), (1, 0), (0, 2)] {
            g.remove_node(id).unwrap();
            assert_eq!(g.size(), expected);
            assert!(!g.node_exists(id));
        }
        assert!(g.is_empty());
    }

    #[test]
    fn removed_ids_cannot_be_operated_on_again() {
        let mut g = three_node_path();
        g.remove_node(1).unwrap();
        assert_eq!(g.remove_node(1), Err(GraphError::NodeMissing { id: 1 }));
        assert_eq!(
            g.add_edge(0, 1, Color::Red),
            Err(GraphError::NodeMissing { id: 1 })
        );
        assert!(!g.node_exists(1));
    }

    #[test]
    fn ascending_removal_of_built_path_terminates_empty() {
        let mut g = PathGraph::new(8);
        for id in 0..8 {
            g.create_node(Color::Red, id).unwrap();
        }
        for id in 0..7 {
            g.add_edge(id, id + 1, Color::Blue).unwrap();
        }
        for id in 0..8 {
            g.remove_node(id).unwrap();
        }
        assert!(g.is_empty());
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn regenerate_fills_every_slot() {
        let mut rng = XorShiftRng::seed_from_u64(0xA11CE);
        let mut g = PathGraph::new(10);
        g.create_node(Color::Red, 4).unwrap();
        g.regenerate(&mut rng, 0.5, 0.5, 0.5);
        assert_eq!(g.size(), 10);
        for id in 0..10 {
            assert!(g.node_exists(id));
        }
        for lo in 0..9 {
            assert!(g.edge_between(lo, lo + 1).is_some());
        }
    }

    #[test]
    fn regenerate_is_deterministic_for_a_fixed_seed() {
        let mut rng_a = XorShiftRng::seed_from_u64(0xDECADE);
        let mut rng_b = XorShiftRng::seed_from_u64(0xDECADE);
        let a = PathGraph::new_random(12, &mut rng_a, 0.3, 0.6, 0.5);
        let b = PathGraph::new_random(12, &mut rng_b, 0.3, 0.6, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn regenerate_honors_degenerate_probabilities() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let g = PathGraph::new_random(6, &mut rng, 1.0, 0.0, 1.0);
        for id in 0..6 {
            assert_eq!(g.node_color(id), Some(Color::Red));
        }
        for lo in 0..5 {
            let edge = g.edge_between(lo, lo + 1).unwrap();
            assert_eq!(edge.color, Color::Blue);
            assert_eq!(edge.source, lo + 1, "p_left = 1.0 must point left");
        }
    }

    #[test]
    fn display_renders_brackets_and_arrows() {
        let g = three_node_path();
        assert_eq!(g.to_string(), "[RED]-RED->[BLUE]<-BLUE-[RED]");
    }

    #[test]
    fn display_leaves_gaps_for_absent_slots() {
        let mut g = three_node_path();
        g.remove_node(1).unwrap();
        assert_eq!(g.to_string(), "[RED]         [RED]");
    }

    #[test]
    fn conversion_to_general_graph_preserves_the_instance() {
        let path = three_node_path();
        let general = ColoredGraph::from(&path);
        assert_eq!(general.size(), 3);
        for id in 0..3 {
            assert_eq!(general.node_color(id), path.node_color(id));
        }
        // Directed edges land in the source's outgoing set.
        assert_eq!(
            general.node(0).unwrap().neighbors().collect::<Vec<_>>(),
            vec![(1, Color::Red)]
        );
        assert_eq!(general.node(1).unwrap().neighbor_count(), 0);
        assert_eq!(
            general.node(2).unwrap().neighbors().collect::<Vec<_>>(),
            vec![(1, Color::Blue)]
        );
    }

    #[test]
    fn conversion_keeps_removal_semantics_aligned() {
        let mut rng = XorShiftRng::seed_from_u64(0x5EED);
        for _ in 0..50 {
            let path = PathGraph::new_random(9, &mut rng, 0.5, 0.5, 0.5);
            let mut general = ColoredGraph::from(&path);
            let mut path_copy = path.clone();
            for id in 0..9 {
                path_copy.remove_node(id).unwrap();
                general.remove_node(id).unwrap();
                for rest in (id + 1)..9 {
                    assert_eq!(path_copy.node_color(rest), general.node_color(rest));
                }
            }
        }
    }
}
