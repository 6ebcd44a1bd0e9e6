//! Read-only collaborators passed to every policy call.

use rv_spatial::{RoadGraph, Router};

/// The road graph and the router a policy may consult.
///
/// Built once by the driver and shared, immutably, across all turns.
#[derive(Clone, Copy)]
pub struct PolicyContext<'a> {
    pub graph:  &'a RoadGraph,
    pub router: &'a dyn Router,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(graph: &'a RoadGraph, router: &'a dyn Router) -> Self {
        Self { graph, router }
    }
}
