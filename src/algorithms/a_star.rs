use crate::algorithms::common::{expand, goal_is_open, PathfindingAlgorithm, SearchOutcome};
use crate::grid::NodeCollection;
use crate::node::Position;
use log::debug;
use pathfinding::prelude::astar;

/// A* over the 4-neighbor grid using the `pathfinding` crate.
#[derive(Default)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    /// Finds a shortest path from `start` to `goal`.
    ///
    /// Every step costs 1 and the heuristic is the Manhattan distance, which
    /// never overestimates on a grid without diagonals. The start cell is
    /// searched even if it is a wall; a walled goal is unreachable.
    fn find_path<W>(
        &mut self,
        grid: &NodeCollection<W>,
        start: Position,
        goal: Position,
    ) -> SearchOutcome {
        let mut expanded = Vec::new();
        if !goal_is_open(grid, goal) || grid.node_at(start).is_none() {
            debug!("a_star: {} -> {} has no open endpoint", start, goal);
            return SearchOutcome::default();
        }

        let result = astar(
            &start,
            |p| expand(grid, p, &mut expanded),
            |p| p.manhattan(&goal),
            |p| *p == goal,
        );

        debug!(
            "a_star: {} -> {} expanded {} nodes, found={}",
            start,
            goal,
            expanded.len(),
            result.is_some()
        );

        match result {
            Some((path, cost)) => SearchOutcome {
                path: Some(path),
                expanded,
                cost: Some(cost),
            },
            None => SearchOutcome {
                path: None,
                expanded,
                cost: None,
            },
        }
    }
}
