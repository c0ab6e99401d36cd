//! General colored graph with color-propagating node removal.
//!
//! Nodes live in a dense index-based arena (`Vec<Option<Node>>`); every node
//! stores its own outgoing edges as a `{neighbor id -> edge color}` map, so
//! arbitrary directed topologies are supported. Removing a node first
//! propagates its outgoing edge colors onto the surviving targets, then
//! scrubs the node out of every other neighbor map.

use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Color
// ============================================================================

/// Node or edge color.
///
/// The removal game is symmetric in the two colors; a query simply fixes one
/// of them as the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
}

impl Color {
    /// Returns the other color.
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Upper-case name used by the text renderings.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by graph construction and removal.
///
/// All of these are synchronous, local failures: they indicate a malformed
/// build sequence (a programming error in the caller), never a transient
/// condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced an id with no present node.
    NodeMissing {
        /// The absent id.
        id: usize,
    },
    /// Node creation on an already occupied slot.
    DuplicateNode {
        /// The occupied id.
        id: usize,
    },
    /// Edge creation where an edge already connects the pair.
    DuplicateEdge {
        /// Source endpoint of the rejected edge.
        from: usize,
        /// Target endpoint of the rejected edge.
        to: usize,
    },
    /// An id at or beyond the graph's fixed capacity.
    OutOfRange {
        /// The offending id.
        id: usize,
        /// The graph's capacity.
        capacity: usize,
    },
    /// A path edge was requested between ids that do not differ by one.
    NotAdjacent {
        /// Source endpoint.
        from: usize,
        /// Target endpoint.
        to: usize,
    },
    /// Removal of a neighbor relation that does not exist.
    NeighborMissing {
        /// The node whose neighbor map was addressed.
        id: usize,
        /// The absent neighbor.
        neighbor: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeMissing { id } => write!(f, "node {id} does not exist"),
            GraphError::DuplicateNode { id } => write!(f, "node {id} already exists"),
            GraphError::DuplicateEdge { from, to } => {
                write!(f, "edge from {from} to {to} already exists")
            }
            GraphError::OutOfRange { id, capacity } => {
                write!(f, "id {id} is out of range (capacity {capacity})")
            }
            GraphError::NotAdjacent { from, to } => {
                write!(f, "ids {from} and {to} are not adjacent on the path")
            }
            GraphError::NeighborMissing { id, neighbor } => {
                write!(f, "node {id} has no neighbor with id {neighbor}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

// ============================================================================
// Node
// ============================================================================

/// A node of a [`ColoredGraph`]: an id, a current color, and the outgoing
/// edge set `{neighbor id -> edge color}`.
///
/// Nodes are owned by the graph that created them and referred to by integer
/// id only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    id: usize,
    color: Color,
    neighbors: BTreeMap<usize, Color>,
}

impl Node {
    fn new(id: usize, color: Color) -> Self {
        Self {
            id,
            color,
            neighbors: BTreeMap::new(),
        }
    }

    /// The node's id.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The node's current color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn add_neighbor(&mut self, neighbor: usize, color: Color) -> Result<(), GraphError> {
        if self.neighbors.contains_key(&neighbor) {
            return Err(GraphError::DuplicateEdge {
                from: self.id,
                to: neighbor,
            });
        }
        self.neighbors.insert(neighbor, color);
        Ok(())
    }

    /// Removes the outgoing relation to `neighbor`.
    ///
    /// # Errors
    /// `NeighborMissing` if no such relation is stored.
    pub fn remove_neighbor(&mut self, neighbor: usize) -> Result<(), GraphError> {
        match self.neighbors.remove(&neighbor) {
            Some(_) => Ok(()),
            None => Err(GraphError::NeighborMissing {
                id: self.id,
                neighbor,
            }),
        }
    }

    /// Outgoing edges as `(neighbor id, edge color)` pairs, ascending by id.
    pub fn neighbors(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.neighbors.iter().map(|(&id, &color)| (id, color))
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node {} ({}):", self.id, self.color)?;
        for (neighbor, color) in self.neighbors() {
            writeln!(f, "\t--- {color} ---> Node {neighbor}")?;
        }
        Ok(())
    }
}

// ============================================================================
// ColoredGraph
// ============================================================================

/// Adjacency-map colored graph over a fixed id space `[0, capacity)`.
///
/// Supports the same propagating-removal contract as
/// [`PathGraph`](crate::path::PathGraph) without the path restriction.
/// Cloning deep-copies every node and its neighbor map; the state-space
/// search clones once per explored branch, so a clone costs at least
/// `O(capacity)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColoredGraph {
    capacity: usize,
    size: usize,
    nodes: Vec<Option<Node>>,
}

impl ColoredGraph {
    /// Creates an empty graph able to hold ids in `[0, capacity)`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            size: 0,
            nodes: vec![None; capacity],
        }
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
        self.nodes[id] = Some(Node::new(id, color));
        self.size += 1;
        Ok(())
    }

    /// Adds a directed colored edge from `from` to `to`.
    ///
    /// The edge is stored in `from`'s outgoing set only; reverse storage is
    /// not implied, so asymmetric topologies are legal.
    ///
    /// # Errors
    /// `OutOfRange` for ids beyond capacity, `NodeMissing` if either endpoint
    /// is absent, `DuplicateEdge` if `from` already points at `to`.
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
        let node = self.nodes[from]
            .as_mut()
            .ok_or(GraphError::NodeMissing { id: from })?;
        node.add_neighbor(to, color)
    }

    /// Whether a node is currently present at `id`.
    ///
    /// Returns `false` for removed ids and for ids beyond capacity.
    #[inline]
    pub fn node_exists(&self, id: usize) -> bool {
        id < self.capacity && self.nodes[id].is_some()
    }

    /// Shared access to the node at `id`, if present.
    #[inline]
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    /// The current color of the node at `id`, if present.
    #[inline]
    pub fn node_color(&self, id: usize) -> Option<Color> {
        self.node(id).map(Node::color)
    }

    /// Removes the node at `id`, propagating its outgoing edge colors onto
    /// the surviving targets first, then scrubbing `id` from every other
    /// neighbor map.
    ///
    /// The scrub is best-effort: adjacency is stored per-node and symmetry is
    /// not guaranteed by construction, so a missing reverse relation is
    /// tolerated silently.
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
        let Some(node) = self.nodes[id].take() else {
            return Err(GraphError::NodeMissing { id });
        };
        for (neighbor, color) in node.neighbors() {
            if let Some(target) = self.nodes.get_mut(neighbor).and_then(Option::as_mut) {
                target.set_color(color);
            }
        }
        for slot in &mut self.nodes {
            if let Some(other) = slot.as_mut() {
                let _ = other.remove_neighbor(id);
            }
        }
        self.size -= 1;
        Ok(())
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

    /// The fixed id-space bound this graph was created with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ids of all present nodes, ascending.
    pub fn present_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| id))
    }
}

impl fmt::Display for ColoredGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.iter().flatten() {
            node.fmt(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_graph() -> ColoredGraph {
        let mut g = ColoredGraph::new(4);
        g.create_node(Color::Red, 0).unwrap();
        g.create_node(Color::Blue, 1).unwrap();
        g.add_edge(0, 1, Color::Red).unwrap();
        g
    }

    #[test]
    fn create_node_rejects_duplicates_and_out_of_range() {
        let mut g = ColoredGraph::new(3);
        g.create_node(Color::Red, 1).unwrap();
        assert_eq!(
            g.create_node(Color::Blue, 1),
            Err(GraphError::DuplicateNode { id: 1 })
        );
        assert_eq!(
            g.create_node(Color::Red, 3),
            Err(GraphError::OutOfRange { id: 3, capacity: 3 })
        );
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn add_edge_requires_both_endpoints() {
        let mut g = ColoredGraph::new(3);
        g.create_node(Color::Red, 0).unwrap();
        assert_eq!(
            g.add_edge(0, 1, Color::Blue),
            Err(GraphError::NodeMissing { id: 1 })
        );
        assert_eq!(
            g.add_edge(2, 0, Color::Blue),
            Err(GraphError::NodeMissing { id: 2 })
        );
    }

    #[test]
    fn add_edge_rejects_duplicate_direction() {
        let mut g = two_node_graph();
        assert_eq!(
            g.add_edge(0, 1, Color::Blue),
            Err(GraphError::DuplicateEdge { from: 0, to: 1 })
        );
        // The reverse direction is a distinct edge.
        g.add_edge(1, 0, Color::Blue).unwrap();
    }

    #[test]
    fn removal_propagates_outgoing_edge_color() {
        let mut g = two_node_graph();
        assert_eq!(g.node_color(1), Some(Color::Blue));
        g.remove_node(0).unwrap();
        assert_eq!(g.node_color(1), Some(Color::Red));
        assert!(!g.node_exists(0));
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn removal_does_not_propagate_incoming_edges() {
        let mut g = ColoredGraph::new(3);
        g.create_node(Color::Red, 0).unwrap();
        g.create_node(Color::Blue, 1).unwrap();
        g.add_edge(1, 0, Color::Blue).unwrap();
        // Node 0 has no outgoing edges; removing it recolors nothing.
        g.remove_node(0).unwrap();
        assert_eq!(g.node_color(1), Some(Color::Blue));
    }

    #[test]
    fn removal_scrubs_reverse_relations() {
        let mut g = ColoredGraph::new(3);
        g.create_node(Color::Red, 0).unwrap();
        g.create_node(Color::Blue, 1).unwrap();
        g.create_node(Color::Blue, 2).unwrap();
        g.add_edge(1, 0, Color::Red).unwrap();
        g.add_edge(2, 0, Color::Blue).unwrap();
        g.remove_node(0).unwrap();
        assert_eq!(g.node(1).unwrap().neighbor_count(), 0);
        assert_eq!(g.node(2).unwrap().neighbor_count(), 0);
    }

    #[test]
    fn removal_of_absent_node_fails() {
        let mut g = two_node_graph();
        g.remove_node(0).unwrap();
        assert_eq!(g.remove_node(0), Err(GraphError::NodeMissing { id: 0 }));
        assert_eq!(
            g.remove_node(9),
            Err(GraphError::OutOfRange { id: 9, capacity: 4 })
        );
    }

    #[test]
    fn queries_are_idempotent() {
        let g = two_node_graph();
        for _ in 0..3 {
            assert!(g.node_exists(0));
            assert!(!g.node_exists(2));
            assert!(!g.node_exists(100));
            assert_eq!(g.size(), 2);
            assert!(!g.is_empty());
        }
    }

    #[test]
    fn full_removal_empties_the_graph() {
        let mut g = ColoredGraph::new(5);
        for id in 0..5 {
            g.create_node(Color::Red, id).unwrap();
        }
        for id in 0..4 {
            g.add_edge(id, id + 1, Color::Blue).unwrap();
        }
        for id in 0..5 {
            g.remove_node(id).unwrap();
            assert!(!g.node_exists(id));
        }
        assert!(g.is_empty());
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn clone_is_independent() {
        let mut g = two_node_graph();
        let copy = g.clone();
        g.remove_node(0).unwrap();
        assert!(copy.node_exists(0));
        assert_eq!(copy.node_color(1), Some(Color::Blue));
        assert_eq!(copy.size(), 2);
    }

    #[test]
    fn remove_neighbor_reports_missing_relation() {
        let mut node = Node::new(3, Color::Red);
        node.add_neighbor(4, Color::Blue).unwrap();
        node.remove_neighbor(4).unwrap();
        assert_eq!(
            node.remove_neighbor(4),
            Err(GraphError::NeighborMissing { id: 3, neighbor: 4 })
        );
    }

    #[test]
    fn present_ids_are_ascending_and_exact() {
        let mut g = ColoredGraph::new(6);
        for id in [5, 1, 3] {
            g.create_node(Color::Blue, id).unwrap();
        }
        assert_eq!(g.present_ids().collect::<Vec<_>>(), vec![1, 3, 5]);
        g.remove_node(3).unwrap();
        assert_eq!(g.present_ids().collect::<Vec<_>>(), vec![1, 5]);
    }

    #[test]
    fn display_lists_nodes_and_outgoing_edges() {
        let g = two_node_graph();
        let rendered = g.to_string();
        assert!(rendered.contains("Node 0 (RED):"));
        assert!(rendered.contains("\t--- RED ---> Node 1"));
        assert!(rendered.contains("Node 1 (BLUE):"));
    }

    #[test]
    fn error_messages_name_the_offenders() {
        let e = GraphError::NotAdjacent { from: 2, to: 5 };
        assert_eq!(e.to_string(), "ids 2 and 5 are not adjacent on the path");
        let e = GraphError::OutOfRange { id: 7, capacity: 4 };
        assert!(e.to_string().contains('7'));
        assert!(e.to_string().contains('4'));
    }

    #[test]
    fn color_opposite_and_names() {
        assert_eq!(Color::Red.opposite(), Color::Blue);
        assert_eq!(Color::Blue.opposite(), Color::Red);
        assert_eq!(Color::Red.to_string(), "RED");
        assert_eq!(Color::Blue.to_string(), "BLUE");
    }
}
