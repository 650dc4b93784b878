use crate::config::GridConfig;
use crate::node::{Node, Position, SUCCESSOR_OFFSETS};
use crate::widget::GridPlacement;
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("node already exists at {0}")]
    DuplicateNode(Position),
    #[error("no node behind widget at row {row}, column {column}")]
    NoNodeForWidget { row: usize, column: usize },
}

/// All the nodes on the grid, indexed by position, plus the set of frames
/// that display them.
#[derive(Debug, Clone)]
pub struct NodeCollection<W> {
    dims: GridConfig,
    nodes: FxHashMap<Position, Node<W>>,
    widgets: FxHashSet<W>,
}

impl<W: Clone + Eq + Hash> NodeCollection<W> {
    pub fn new(dims: GridConfig) -> Self {
        NodeCollection {
            dims,
            nodes: FxHashMap::default(),
            widgets: FxHashSet::default(),
        }
    }

    /// Builds a fully populated grid, asking `make_frame` for the frame of
    /// each cell.
    pub fn populate<F>(dims: GridConfig, mut make_frame: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> W,
    {
        let mut collection = Self::new(dims);
        for y in 0..dims.rows {
            for x in 0..dims.cols {
                collection.add(Node::new(make_frame(x, y), x, y))?;
            }
        }
        debug!(
            "populated {}x{} grid with {} nodes",
            dims.cols,
            dims.rows,
            collection.len()
        );
        Ok(collection)
    }

    /// Adds a node. Fails if a node already occupies its position, in which
    /// case neither the index nor the frame set change.
    ///
    /// The node is expected to lie inside the grid bounds; this is not
    /// checked, and an out-of-bounds node is never returned by lookups.
    pub fn add(&mut self, node: Node<W>) -> Result<(), GridError> {
        let pos = node.pos();
        if self.nodes.contains_key(&pos) {
            return Err(GridError::DuplicateNode(pos));
        }
        self.widgets.insert(node.frame().clone());
        self.nodes.insert(pos, node);
        Ok(())
    }

    pub fn contains_widget(&self, widget: &W) -> bool {
        self.widgets.contains(widget)
    }

    pub fn widg_set(&self) -> &FxHashSet<W> {
        &self.widgets
    }
}

impl<W> NodeCollection<W> {
    pub fn dims(&self) -> GridConfig {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<W>> {
        self.nodes.values()
    }

    /// Returns the node at `(x, y)` (bottom left is `(0, 0)`), or `None` when
    /// the coordinates fall outside the grid.
    pub fn get_from_pos(&self, x: isize, y: isize) -> Option<&Node<W>> {
        if !self.dims.contains(x, y) {
            return None;
        }
        self.nodes.get(&Position::new(x as usize, y as usize))
    }

    pub fn get_from_pos_mut(&mut self, x: isize, y: isize) -> Option<&mut Node<W>> {
        if !self.dims.contains(x, y) {
            return None;
        }
        self.nodes.get_mut(&Position::new(x as usize, y as usize))
    }

    pub fn node_at(&self, pos: Position) -> Option<&Node<W>> {
        self.get_from_pos(pos.x as isize, pos.y as isize)
    }

    pub fn node_at_mut(&mut self, pos: Position) -> Option<&mut Node<W>> {
        self.get_from_pos_mut(pos.x as isize, pos.y as isize)
    }

    /// Open orthogonal neighbors of `pos`, clockwise from the one above.
    pub fn successors(&self, pos: Position) -> Vec<&Node<W>> {
        let (x, y) = (pos.x as isize, pos.y as isize);
        SUCCESSOR_OFFSETS
            .iter()
            .filter_map(|(dx, dy)| self.get_from_pos(x + dx, y + dy))
            .filter(|next| !next.is_wall())
            .collect()
    }

    pub fn wall_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_wall()).count()
    }

    pub fn clear_walls(&mut self) {
        for node in self.nodes.values_mut() {
            node.wall_off();
        }
    }

    /// Translates a GUI row/column placement into grid coordinates. Row 0 is
    /// the top of the grid, which is the highest y.
    ///
    /// Placements below the last row or beyond `isize::MAX` yield `None`.
    fn placement_to_pos(&self, widget: &impl GridPlacement) -> Option<(isize, isize)> {
        let info = widget.grid_info();
        let y = self.dims.rows.checked_sub(info.row)?.checked_sub(1)?;
        Some((isize::try_from(info.column).ok()?, isize::try_from(y).ok()?))
    }
}

impl<W: GridPlacement> NodeCollection<W> {
    /// Returns the node displayed by `widget`.
    pub fn get(&self, widget: &W) -> Option<&Node<W>> {
        let (x, y) = self.placement_to_pos(widget)?;
        self.get_from_pos(x, y)
    }

    pub fn get_mut(&mut self, widget: &W) -> Option<&mut Node<W>> {
        let (x, y) = self.placement_to_pos(widget)?;
        self.get_from_pos_mut(x, y)
    }

    /// Click handler: flips the wall under `widget` and returns its new state.
    pub fn toggle_wall_at(&mut self, widget: &W) -> Result<bool, GridError> {
        let info = widget.grid_info();
        let node = self.get_mut(widget).ok_or(GridError::NoNodeForWidget {
            row: info.row,
            column: info.column,
        })?;
        let wall = node.toggle_wall();
        trace!("toggled {} -> wall={}", node, wall);
        Ok(wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::CellFrame;

    fn full_grid(rows: usize, cols: usize) -> NodeCollection<CellFrame> {
        let dims = GridConfig::new(rows, cols);
        NodeCollection::populate(dims, |x, y| CellFrame::for_cell(dims, x, y)).unwrap()
    }

    fn succ_positions(
        grid: &NodeCollection<CellFrame>,
        x: isize,
        y: isize,
    ) -> Vec<(usize, usize)> {
        grid.get_from_pos(x, y)
            .unwrap()
            .get_succ(grid)
            .iter()
            .map(|n| (n.get_x(), n.get_y()))
            .collect()
    }

    #[test]
    fn every_added_node_is_retrievable() {
        let grid = full_grid(4, 5);
        assert_eq!(grid.len(), 20);
        for y in 0..4 {
            for x in 0..5 {
                let node = grid.get_from_pos(x, y).unwrap();
                assert_eq!((node.get_x() as isize, node.get_y() as isize), (x, y));
            }
        }
    }

    #[test]
    fn out_of_bounds_lookups_return_none() {
        let grid = full_grid(4, 5);
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 4), (100, 100), (-7, -7)] {
            assert!(grid.get_from_pos(x, y).is_none(), "({}, {})", x, y);
        }
    }

    #[test]
    fn duplicate_add_fails_and_keeps_original() {
        let dims = GridConfig::new(3, 3);
        let mut grid = NodeCollection::new(dims);
        let mut original = Node::new(CellFrame::new(2, 1), 1, 0);
        original.wall_on();
        grid.add(original).unwrap();

        let err = grid.add(Node::new(CellFrame::new(9, 9), 1, 0)).unwrap_err();
        assert_eq!(err, GridError::DuplicateNode(Position::new(1, 0)));

        let kept = grid.get_from_pos(1, 0).unwrap();
        assert!(kept.is_wall());
        assert_eq!(*kept.frame(), CellFrame::new(2, 1));
        assert!(!grid.contains_widget(&CellFrame::new(9, 9)));
        assert_eq!(grid.widg_set().len(), 1);
    }

    #[test]
    fn interior_node_has_four_successors_clockwise() {
        let grid = full_grid(5, 5);
        assert_eq!(
            succ_positions(&grid, 2, 2),
            vec![(2, 3), (3, 2), (2, 1), (1, 2)]
        );
    }

    #[test]
    fn corner_node_has_two_successors_and_walls_drop_out() {
        let mut grid = full_grid(5, 5);
        assert_eq!(succ_positions(&grid, 0, 0), vec![(0, 1), (1, 0)]);
        assert_eq!(succ_positions(&grid, 4, 4), vec![(4, 3), (3, 4)]);

        grid.get_from_pos_mut(0, 1).unwrap().wall_on();
        assert_eq!(succ_positions(&grid, 0, 0), vec![(1, 0)]);

        grid.get_from_pos_mut(0, 1).unwrap().wall_off();
        assert_eq!(succ_positions(&grid, 0, 0), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn widget_on_top_row_maps_to_highest_y() {
        let grid = full_grid(6, 4);
        let node = grid.get(&CellFrame::new(0, 3)).unwrap();
        assert_eq!((node.get_x(), node.get_y()), (3, 5));

        let node = grid.get(&CellFrame::new(5, 0)).unwrap();
        assert_eq!((node.get_x(), node.get_y()), (0, 0));
        assert!(grid.get(&CellFrame::new(6, 0)).is_none());
    }

    #[test]
    fn every_frame_is_registered() {
        let grid = full_grid(3, 4);
        assert_eq!(grid.widg_set().len(), 12);
        for node in grid.iter() {
            assert!(grid.contains_widget(node.frame()));
            assert_eq!(grid.get(node.frame()).unwrap(), node);
        }
        assert!(!grid.contains_widget(&CellFrame::new(3, 0)));
    }

    #[test]
    fn toggle_wall_at_flips_and_reports() {
        let mut grid = full_grid(3, 3);
        let frame = CellFrame::new(0, 0);
        assert_eq!(grid.toggle_wall_at(&frame), Ok(true));
        assert!(grid.get_from_pos(0, 2).unwrap().is_wall());
        assert_eq!(grid.wall_count(), 1);
        assert_eq!(grid.toggle_wall_at(&frame), Ok(false));

        assert_eq!(
            grid.toggle_wall_at(&CellFrame::new(7, 1)),
            Err(GridError::NoNodeForWidget { row: 7, column: 1 })
        );
    }

    #[test]
    fn huge_placements_miss_instead_of_overflowing() {
        let mut grid = full_grid(15, 25);
        let below_grid = CellFrame::new(usize::MAX, 0);
        let far_right = CellFrame::new(0, usize::MAX);
        let past_isize = CellFrame::new(9223372036854775808, 0);

        assert!(grid.get(&below_grid).is_none());
        assert!(grid.get(&far_right).is_none());
        assert!(grid.get_mut(&past_isize).is_none());
        assert_eq!(
            grid.toggle_wall_at(&below_grid),
            Err(GridError::NoNodeForWidget {
                row: usize::MAX,
                column: 0
            })
        );
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn sparse_collection_lookups() {
        let mut grid = NodeCollection::new(GridConfig::new(3, 3));
        grid.add(Node::new(CellFrame::new(2, 0), 0, 0)).unwrap();

        // in range but never added
        assert!(grid.get_from_pos(2, 2).is_none());
        assert!(grid.get_from_pos(0, 0).is_some());

        // outside the bounds: stored, never returned
        grid.add(Node::new(CellFrame::new(9, 9), 5, 5)).unwrap();
        assert_eq!(grid.len(), 2);
        assert!(grid.get_from_pos(5, 5).is_none());
        assert!(grid.node_at(Position::new(5, 5)).is_none());
    }

    #[test]
    fn clear_walls_opens_everything() {
        let mut grid = full_grid(3, 3);
        grid.get_from_pos_mut(1, 1).unwrap().wall_on();
        grid.get_from_pos_mut(2, 2).unwrap().wall_on();
        grid.clear_walls();
        assert_eq!(grid.wall_count(), 0);
    }
}
