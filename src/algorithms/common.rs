use crate::grid::NodeCollection;
use crate::node::Position;

/// Result of a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start to goal inclusive, or `None` if the goal is unreachable.
    pub path: Option<Vec<Position>>,
    /// Positions in the order the search expanded them.
    pub expanded: Vec<Position>,
    pub cost: Option<u32>,
}

impl SearchOutcome {
    /// Number of moves along the path.
    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    fn find_path<W>(
        &mut self,
        grid: &NodeCollection<W>,
        start: Position,
        goal: Position,
    ) -> SearchOutcome;
}

/// Unit-cost open neighbors of `pos`, recording `pos` as expanded.
pub(crate) fn expand<W>(
    grid: &NodeCollection<W>,
    pos: &Position,
    expanded: &mut Vec<Position>,
) -> Vec<(Position, u32)> {
    expanded.push(*pos);
    grid.successors(*pos)
        .into_iter()
        .map(|next| (next.pos(), 1))
        .collect()
}

/// Whether the search can succeed at all: the goal must exist and be open.
pub(crate) fn goal_is_open<W>(grid: &NodeCollection<W>, goal: Position) -> bool {
    grid.node_at(goal).is_some_and(|node| !node.is_wall())
}
