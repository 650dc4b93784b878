use crate::algorithms::{AStar, Dijkstra, PathfindingAlgorithm, SearchOutcome};
use crate::config::{Config, GridConfig};
use crate::grid::{GridError, NodeCollection};
use crate::node::Position;
use crate::statistics::SearchStatistics;
use crate::visualizer::{Overlay, Visualizer};
use crate::widget::CellFrame;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use thiserror::Error;

pub const ALGORITHMS: [&str; 2] = ["a_star", "dijkstra"];

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("endpoint {0} lies outside the grid")]
    InvalidEndpoint(Position),
    #[error("unknown algorithm '{0}', select 'a_star', 'dijkstra' or 'all'")]
    UnknownAlgorithm(String),
    #[error("grid must be at least 2x2, got {rows} rows and {cols} columns")]
    GridTooSmall { rows: usize, cols: usize },
}

/// A populated grid with its endpoints and the walls placed on it.
#[derive(Debug, Clone)]
pub struct Environment {
    pub grid: NodeCollection<CellFrame>,
    pub start: Position,
    pub goal: Position,
    pub seed: u64,
}

impl Environment {
    /// Builds the grid, picks endpoints and scatters walls.
    ///
    /// Start defaults to the bottom-left quadrant and goal to the top-right
    /// one. Walls never land on either endpoint; placement gives up after
    /// `num_walls * 3` attempts.
    pub fn generate(config: &Config, seed: Option<u64>) -> Result<Self, DemoError> {
        let dims = config.dims();
        if dims.rows < 2 || dims.cols < 2 {
            return Err(DemoError::GridTooSmall {
                rows: dims.rows,
                cols: dims.cols,
            });
        }

        let seed = seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut grid =
            NodeCollection::populate(dims, |x, y| CellFrame::for_cell(dims, x, y))?;

        let start = match config.start {
            Some(pos) => pos,
            None => Position::new(
                rng.gen_range(0..dims.cols / 2),
                rng.gen_range(0..dims.rows / 2),
            ),
        };
        let goal = match config.goal {
            Some(pos) => pos,
            None => Position::new(
                rng.gen_range(dims.cols / 2..dims.cols),
                rng.gen_range(dims.rows / 2..dims.rows),
            ),
        };
        for pos in [start, goal] {
            if grid.node_at(pos).is_none() {
                return Err(DemoError::InvalidEndpoint(pos));
            }
        }

        let placed = place_walls(&mut grid, &mut rng, config.num_walls, start, goal);
        info!(
            "generated environment - seed: {}, start: {}, goal: {}, walls: {}",
            seed, start, goal, placed
        );

        Ok(Environment {
            grid,
            start,
            goal,
            seed,
        })
    }

    /// Applies simulated clicks. Clicks outside the grid are skipped.
    pub fn apply_clicks(&mut self, clicks: &[CellFrame]) -> usize {
        let mut applied = 0;
        for frame in clicks {
            match self.grid.toggle_wall_at(frame) {
                Ok(wall) => {
                    debug!("click at row {}, column {} -> wall={}", frame.row, frame.column, wall);
                    applied += 1;
                }
                Err(e) => warn!("ignoring click: {}", e),
            }
        }
        applied
    }

    pub fn dims(&self) -> GridConfig {
        self.grid.dims()
    }

    pub fn open_cells(&self) -> usize {
        self.grid.len() - self.grid.wall_count()
    }
}

fn place_walls(
    grid: &mut NodeCollection<CellFrame>,
    rng: &mut StdRng,
    num_walls: usize,
    start: Position,
    goal: Position,
) -> usize {
    let dims = grid.dims();
    // start and goal always stay open
    let num_walls = num_walls.min(dims.cell_count().saturating_sub(2));
    let max_attempts = num_walls.saturating_mul(3);
    let mut walls_placed = 0;
    let mut attempts = 0;
    while walls_placed < num_walls && attempts < max_attempts {
        let pos = Position::new(rng.gen_range(0..dims.cols), rng.gen_range(0..dims.rows));
        if pos != start && pos != goal {
            if let Some(node) = grid.node_at_mut(pos) {
                if !node.is_wall() {
                    node.wall_on();
                    walls_placed += 1;
                }
            }
        }
        attempts += 1;
    }
    if walls_placed < num_walls {
        warn!("placed only {} of {} walls", walls_placed, num_walls);
    }
    walls_placed
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub statistics: SearchStatistics,
    pub outcome: SearchOutcome,
    pub overlay: Overlay,
}

pub struct Demo {
    config: Config,
    environment: Environment,
    visualizer: Visualizer,
}

impl Demo {
    pub fn new(config: Config) -> Result<Self, DemoError> {
        let mut environment = Environment::generate(&config, config.seed)?;
        environment.apply_clicks(&config.clicks);
        Ok(Self::with_environment(config, environment))
    }

    pub fn with_environment(config: Config, environment: Environment) -> Self {
        let visualizer = Visualizer::new(config.delay_ms, !config.no_visualization);
        Demo {
            config,
            environment,
            visualizer,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Runs the configured algorithm, or every algorithm for `all`.
    pub fn run(&self) -> Result<Vec<SearchReport>, DemoError> {
        let names: Vec<&str> = match self.config.algorithm.as_str() {
            "all" => ALGORITHMS.to_vec(),
            name if ALGORITHMS.contains(&name) => vec![name],
            other => return Err(DemoError::UnknownAlgorithm(other.to_string())),
        };

        let mut reports = Vec::with_capacity(names.len());
        for name in names {
            let report = match name {
                "a_star" => self.run_algorithm(AStar::new()),
                _ => self.run_algorithm(Dijkstra::new()),
            };
            reports.push(report);
        }
        Ok(reports)
    }

    fn run_algorithm<A: PathfindingAlgorithm>(&self, mut algorithm: A) -> SearchReport {
        let env = &self.environment;

        let started = Instant::now();
        let outcome = algorithm.find_path(&env.grid, env.start, env.goal);
        let elapsed = started.elapsed();

        let statistics = SearchStatistics::new(
            algorithm.name(),
            &outcome,
            env.grid.wall_count(),
            env.open_cells(),
            elapsed,
        );
        match outcome.path_length() {
            Some(len) => info!("{} found a path of {} moves", algorithm.name(), len),
            None => warn!("{} found no path from {} to {}", algorithm.name(), env.start, env.goal),
        }

        let overlay = self
            .visualizer
            .animate(algorithm.name(), &env.grid, env.start, env.goal, &outcome);
        if self.visualizer.enabled() {
            let verdict = if outcome.found() { "SUCCESS" } else { "NO PATH" };
            self.visualizer
                .show(&format!("{} | {}", algorithm.name(), verdict), &env.grid, &overlay);
        }

        SearchReport {
            statistics,
            outcome,
            overlay,
        }
    }
}
