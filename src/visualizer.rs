use crate::algorithms::SearchOutcome;
use crate::grid::NodeCollection;
use crate::node::Position;
use crate::widget::CellFrame;
use rustc_hash::FxHashSet;
use std::fmt::Write;
use std::thread;
use std::time::Duration;

pub const LEGEND: &str = "Legend: S=Start, G=Goal, #=Wall, *=Path, o=Expanded, .=Open";

/// Search progress drawn on top of the grid.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub start: Position,
    pub goal: Position,
    pub expanded: FxHashSet<Position>,
    pub path: FxHashSet<Position>,
}

impl Overlay {
    pub fn new(start: Position, goal: Position) -> Self {
        Overlay {
            start,
            goal,
            expanded: FxHashSet::default(),
            path: FxHashSet::default(),
        }
    }

    fn glyph(&self, pos: Position, wall: bool) -> char {
        if pos == self.start {
            'S'
        } else if pos == self.goal {
            'G'
        } else if wall {
            '#'
        } else if self.path.contains(&pos) {
            '*'
        } else if self.expanded.contains(&pos) {
            'o'
        } else {
            '.'
        }
    }
}

/// Draws the grid top row first, looking every cell up through its frame.
pub fn render(grid: &NodeCollection<CellFrame>, overlay: &Overlay) -> String {
    let dims = grid.dims();
    let mut out = String::new();

    let _ = writeln!(out, "{}", LEGEND);
    out.push_str("   ");
    for x in 0..dims.cols {
        let _ = write!(out, "{:2}", x % 10);
    }
    out.push('\n');

    for row in 0..dims.rows {
        let _ = write!(out, "{:2} ", dims.rows - row - 1);
        for column in 0..dims.cols {
            let glyph = match grid.get(&CellFrame::new(row, column)) {
                Some(node) => overlay.glyph(node.pos(), node.is_wall()),
                None => ' ',
            };
            let _ = write!(out, "{} ", glyph);
        }
        out.push('\n');
    }
    out
}

/// Terminal animation of a search: expanded cells in visit order, then the
/// path from start to goal.
pub struct Visualizer {
    delay: Duration,
    enabled: bool,
}

impl Visualizer {
    pub fn new(delay_ms: u64, enabled: bool) -> Self {
        Visualizer {
            delay: Duration::from_millis(delay_ms),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn show(&self, title: &str, grid: &NodeCollection<CellFrame>, overlay: &Overlay) {
        if !self.enabled {
            return;
        }
        clear_screen();
        println!("=== {} ===", title);
        print!("{}", render(grid, overlay));
    }

    pub fn animate(
        &self,
        algorithm: &str,
        grid: &NodeCollection<CellFrame>,
        start: Position,
        goal: Position,
        outcome: &SearchOutcome,
    ) -> Overlay {
        let mut overlay = Overlay::new(start, goal);

        for (step, pos) in outcome.expanded.iter().enumerate() {
            overlay.expanded.insert(*pos);
            if self.enabled {
                self.show(&format!("{} | expanded {}", algorithm, step + 1), grid, &overlay);
                thread::sleep(self.delay);
            }
        }

        if let Some(path) = &outcome.path {
            for pos in path {
                overlay.path.insert(*pos);
                if self.enabled {
                    self.show(&format!("{} | tracing path", algorithm), grid, &overlay);
                    thread::sleep(self.delay);
                }
            }
        }

        overlay
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn grid(rows: usize, cols: usize) -> NodeCollection<CellFrame> {
        let dims = GridConfig::new(rows, cols);
        NodeCollection::populate(dims, |x, y| CellFrame::for_cell(dims, x, y)).unwrap()
    }

    #[test]
    fn render_puts_highest_y_on_top() {
        let mut g = grid(3, 4);
        g.get_from_pos_mut(1, 1).unwrap().wall_on();
        let overlay = Overlay::new(Position::new(0, 0), Position::new(3, 2));

        let text = render(&g, &overlay);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 3);
        assert_eq!(lines[0], LEGEND);
        assert_eq!(lines[2], " 2 . . . G ");
        assert_eq!(lines[3], " 1 . # . . ");
        assert_eq!(lines[4], " 0 S . . . ");
    }

    #[test]
    fn path_wins_over_expanded() {
        let g = grid(1, 4);
        let mut overlay = Overlay::new(Position::new(0, 0), Position::new(3, 0));
        overlay.expanded.extend([Position::new(1, 0), Position::new(2, 0)]);
        overlay.path.insert(Position::new(1, 0));

        let text = render(&g, &overlay);
        assert_eq!(text.lines().last(), Some(" 0 S * o G "));
    }

    #[test]
    fn disabled_animation_still_builds_overlay() {
        let g = grid(2, 2);
        let outcome = SearchOutcome {
            path: Some(vec![Position::new(0, 0), Position::new(1, 0)]),
            expanded: vec![Position::new(0, 0)],
            cost: Some(1),
        };
        let overlay = Visualizer::new(0, false).animate(
            "a_star",
            &g,
            Position::new(0, 0),
            Position::new(1, 0),
            &outcome,
        );
        assert_eq!(overlay.expanded.len(), 1);
        assert_eq!(overlay.path.len(), 2);
    }
}
