use crate::grid::NodeCollection;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Clockwise neighbor offsets, starting with the cell above.
pub const SUCCESSOR_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Grid coordinates. The origin is the bottom-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Applies an offset, returning `None` if either coordinate goes negative.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Position> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position { x, y })
    }

    pub fn manhattan(&self, other: &Position) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One square on the grid.
///
/// Identity is positional: two nodes at the same coordinates compare equal and
/// hash identically, whatever their wall state or frame.
#[derive(Debug, Clone)]
pub struct Node<W> {
    frame: W,
    pos: Position,
    wall: bool,
}

impl<W> Node<W> {
    pub fn new(frame: W, x: usize, y: usize) -> Self {
        Node {
            frame,
            pos: Position { x, y },
            wall: false,
        }
    }

    pub fn wall_on(&mut self) {
        self.wall = true;
    }

    pub fn wall_off(&mut self) {
        self.wall = false;
    }

    /// Flips the wall flag and returns the new state.
    pub fn toggle_wall(&mut self) -> bool {
        self.wall = !self.wall;
        self.wall
    }

    pub fn is_wall(&self) -> bool {
        self.wall
    }

    pub fn frame(&self) -> &W {
        &self.frame
    }

    pub fn get_x(&self) -> usize {
        self.pos.x
    }

    pub fn get_y(&self) -> usize {
        self.pos.y
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Returns the open neighbors of this node, starting with the one above
    /// and going clockwise. Diagonals are never included, so there are at
    /// most 4 successors.
    pub fn get_succ<'a>(&self, map: &'a NodeCollection<W>) -> Vec<&'a Node<W>> {
        map.successors(self.pos)
    }
}

impl<W> PartialEq for Node<W> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<W> Eq for Node<W> {}

impl<W> Hash for Node<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl<W> fmt::Display for Node<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({}, {})", self.pos.x, self.pos.y)
    }
}
