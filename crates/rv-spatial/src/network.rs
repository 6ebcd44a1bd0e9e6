//! Road graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** adjacency.  Given a
//! `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Edges are sorted by source node with a *stable* sort, so each node's
//! neighbors appear in the order their roads were listed.  Search and the
//! random policy both depend on that order for reproducible tie-breaking.
//!
//! # Places
//!
//! Nodes are numbered in order of first appearance in the edge list; the
//! graph keeps the names for lookups and display.  A place only exists if it
//! appears in at least one road, so every node has at least one neighbor.

use std::collections::HashMap;

use rv_core::NodeId;

use crate::{Route, SpatialError, SpatialResult};

/// Separator between the two place names of a road entry.
pub const EDGE_SEPARATOR: char = '-';

/// Split a `"<A>-<B>"` road entry into its two place names.
///
/// Fails unless the entry splits into exactly two non-empty tokens.
pub fn parse_edge(entry: &str) -> SpatialResult<(&str, &str)> {
    let mut parts = entry.split(EDGE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Ok((a, b)),
        _ => Err(SpatialError::MalformedEdge { entry: entry.to_string() }),
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected, unweighted road graph in CSR format plus place names.
///
/// Write-once: there are no mutation methods.  Build with
/// [`RoadGraph::from_edges`] or [`RoadGraphBuilder`].
#[derive(Debug, Clone)]
pub struct RoadGraph {
    /// Place name of each node.  Indexed by `NodeId`.
    names: Vec<String>,

    /// Reverse lookup for `names`.
    index: HashMap<String, NodeId>,

    /// CSR row pointer.  Length = `node_count + 1`.
    node_out_start: Vec<u32>,

    /// Destination of each directed edge, grouped by source node.
    edge_to: Vec<NodeId>,
}

impl RoadGraph {
    /// Build a graph from `"<A>-<B>"` road strings.  Each road adds both
    /// directions.
    ///
    /// ```
    /// use rv_spatial::RoadGraph;
    ///
    /// let graph = RoadGraph::from_edges(["A-B", "B-C"]).unwrap();
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 4); // both directions
    /// ```
    pub fn from_edges<I, S>(edges: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut b = RoadGraphBuilder::new();
        for entry in edges {
            b.add_edge_str(entry.as_ref())?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed edges (twice the number of roads).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.names.len()
    }

    /// All nodes in first-appearance order.
    pub fn places(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.names.len()).map(|i| NodeId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `node` in road-listing order.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> SpatialResult<&[NodeId]> {
        if !self.contains(node) {
            return Err(SpatialError::UnknownNode(node));
        }
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        Ok(&self.edge_to[start..end])
    }

    /// `true` if a road joins `from` and `to`.  Unknown nodes are never
    /// adjacent.
    pub fn is_adjacent(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).is_ok_and(|n| n.contains(&to))
    }

    // ── Names ─────────────────────────────────────────────────────────────

    pub fn node_id(&self, name: &str) -> SpatialResult<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SpatialError::UnknownPlace(name.to_string()))
    }

    pub fn place_name(&self, node: NodeId) -> SpatialResult<&str> {
        self.names
            .get(node.index())
            .map(String::as_str)
            .ok_or(SpatialError::UnknownNode(node))
    }

    /// Resolve a list of place names (e.g. a configured tour) to a [`Route`].
    pub fn resolve_route<S: AsRef<str>>(&self, names: &[S]) -> SpatialResult<Route> {
        names
            .iter()
            .map(|n| self.node_id(n.as_ref()))
            .collect::<SpatialResult<Vec<_>>>()
            .map(Route::new)
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
pub struct RoadGraphBuilder {
    names:     Vec<String>,
    index:     HashMap<String, NodeId>,
    raw_edges: Vec<(NodeId, NodeId)>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { names: Vec::new(), index: HashMap::new(), raw_edges: Vec::new() }
    }

    /// Return the id of `name`, adding the place if it is new.
    pub fn add_place(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Add a road in both directions.
    ///
    /// Duplicate roads are kept; they appear twice in the adjacency.
    pub fn add_road(&mut self, a: NodeId, b: NodeId) {
        self.raw_edges.push((a, b));
        self.raw_edges.push((b, a));
    }

    /// Parse a `"<A>-<B>"` entry and add it as a road.
    pub fn add_edge_str(&mut self, entry: &str) -> SpatialResult<()> {
        let (a, b) = parse_edge(entry)?;
        let a = self.add_place(a);
        let b = self.add_place(b);
        self.add_road(a, b);
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.names.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadGraph`].
    pub fn build(self) -> RoadGraph {
        let node_count = self.names.len();

        // Stable: keeps per-node neighbor order equal to insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|&(from, _)| from.0);

        let edge_to: Vec<NodeId> = raw.iter().map(|&(_, to)| to).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_to.len());

        RoadGraph {
            names: self.names,
            index: self.index,
            node_out_start,
            edge_to,
        }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
