use crate::algorithms::common::{expand, goal_is_open, PathfindingAlgorithm, SearchOutcome};
use crate::grid::NodeCollection;
use crate::node::Position;
use log::debug;
use pathfinding::prelude::dijkstra;

/// Uninformed uniform-cost search, run alongside A* for comparison.
#[derive(Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl PathfindingAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn find_path<W>(
        &mut self,
        grid: &NodeCollection<W>,
        start: Position,
        goal: Position,
    ) -> SearchOutcome {
        let mut expanded = Vec::new();
        if !goal_is_open(grid, goal) || grid.node_at(start).is_none() {
            return SearchOutcome::default();
        }

        let result = dijkstra(&start, |p| expand(grid, p, &mut expanded), |p| *p == goal);
        debug!("dijkstra: {} -> {} expanded {} nodes", start, goal, expanded.len());

        let (path, cost) = result.unzip();
        SearchOutcome {
            path,
            expanded,
            cost,
        }
    }
}
