use crate::node::Position;
use crate::widget::CellFrame;
use clap::Parser;

/// Fixed dimensions of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        GridConfig { rows, cols }
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Animated A* search on a walled grid", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 15)]
    pub rows: usize,

    #[arg(long, default_value_t = 25)]
    pub cols: usize,

    #[arg(long, default_value_t = 60)]
    pub num_walls: usize,

    /// Seed for wall placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// a_star, dijkstra or all
    #[arg(long, default_value = "a_star")]
    pub algorithm: String,

    #[arg(long, default_value_t = 30)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Toggle the wall under a frame, as ROW,COL (row 0 is the top)
    #[arg(long = "click", value_parser = parse_frame)]
    pub clicks: Vec<CellFrame>,

    /// Start cell as X,Y (origin bottom-left)
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,

    /// Goal cell as X,Y (origin bottom-left)
    #[arg(long, value_parser = parse_position)]
    pub goal: Option<Position>,
}

impl Config {
    pub fn dims(&self) -> GridConfig {
        GridConfig::new(self.rows, self.cols)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 15,
            cols: 25,
            num_walls: 60,
            seed: None,
            algorithm: "a_star".to_string(),
            delay_ms: 30,
            no_visualization: false,
            quiet: false,
            clicks: Vec::new(),
            start: None,
            goal: None,
        }
    }
}

fn parse_pair(s: &str) -> Result<(usize, usize), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma separated numbers, got '{}'", s))?;
    let a = a.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let b = b.trim().parse::<usize>().map_err(|e| e.to_string())?;
    Ok((a, b))
}

fn parse_frame(s: &str) -> Result<CellFrame, String> {
    parse_pair(s).map(|(row, column)| CellFrame::new(row, column))
}

fn parse_position(s: &str) -> Result<Position, String> {
    parse_pair(s).map(|(x, y)| Position::new(x, y))
}
