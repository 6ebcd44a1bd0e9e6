//! Routing trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! Policies call routing through the [`Router`] trait, so a test can swap in
//! a scripted router without touching the policies.  [`BfsRouter`] is the
//! default: every road has unit cost, so breadth-first search finds a
//! shortest route.
//!
//! # Contract
//!
//! - The returned [`Route`] excludes `from` and includes `to`.
//! - `from == to` yields the empty route.
//! - An unreachable `to` yields [`SpatialError::NoRoute`].

use tracing::trace;

use rv_core::NodeId;

use crate::network::RoadGraph;
use crate::{SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered walk from just after the start node up to and including the
/// goal node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub places: Vec<NodeId>,
}

impl Route {
    pub fn new(places: Vec<NodeId>) -> Self {
        Self { places }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of moves needed to walk the route.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// `true` if there is nothing left to walk (also: source equals goal).
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// The next node to move to.
    pub fn first(&self) -> Option<NodeId> {
        self.places.first().copied()
    }

    /// The goal node.
    pub fn destination(&self) -> Option<NodeId> {
        self.places.last().copied()
    }

    /// Split into the next node and the remaining route.
    pub fn into_step(self) -> Option<(NodeId, Route)> {
        let mut places = self.places;
        if places.is_empty() {
            return None;
        }
        let head = places.remove(0);
        Some((head, Route { places }))
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.places.iter().copied()
    }
}

impl From<Vec<NodeId>> for Route {
    fn from(places: Vec<NodeId>) -> Self {
        Self { places }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `from` to `to`.
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> SpatialResult<Route>;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over the road graph.
///
/// The work list is processed strictly in insertion order with an index
/// cursor while new entries are appended behind it.  Entries are therefore
/// visited in order of distance, and the first time `to` is seen the route
/// is of minimum length.  A node is appended only once (the start counts as
/// already scheduled), which also guarantees termination on cyclic graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> SpatialResult<Route> {
        bfs(graph, from, to)
    }
}

/// One work-list entry: a node and the index of the entry that discovered it.
struct WorkItem {
    at:     NodeId,
    parent: Option<usize>,
}

fn bfs(graph: &RoadGraph, from: NodeId, to: NodeId) -> SpatialResult<Route> {
    if !graph.contains(from) {
        return Err(SpatialError::UnknownNode(from));
    }
    if !graph.contains(to) {
        return Err(SpatialError::UnknownNode(to));
    }
    if from == to {
        return Ok(Route::empty());
    }

    let mut scheduled = vec![false; graph.node_count()];
    scheduled[from.index()] = true;

    let mut work = vec![WorkItem { at: from, parent: None }];
    let mut cursor = 0;

    while cursor < work.len() {
        let at = work[cursor].at;
        for &place in graph.neighbors(at)? {
            if place == to {
                let mut route = reconstruct(&work, cursor);
                route.places.push(to);
                return Ok(route);
            }
            if !scheduled[place.index()] {
                scheduled[place.index()] = true;
                work.push(WorkItem { at: place, parent: Some(cursor) });
            }
        }
        cursor += 1;
    }

    trace!(%from, %to, explored = work.len(), "bfs exhausted without reaching goal");
    Err(SpatialError::NoRoute { from, to })
}

/// Walk parent links back from `item` to the start, excluding the start.
fn reconstruct(work: &[WorkItem], item: usize) -> Route {
    let mut places = Vec::new();
    let mut cur = item;
    while let Some(parent) = work[cur].parent {
        places.push(work[cur].at);
        cur = parent;
    }
    places.reverse();
    Route { places }
}
