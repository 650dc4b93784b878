pub mod algorithms;
pub mod config;
pub mod demo;
pub mod grid;
pub mod node;
pub mod statistics;
pub mod visualizer;
pub mod widget;

pub use config::{Config, GridConfig};
pub use grid::{GridError, NodeCollection};
pub use node::{Node, Position};
pub use widget::{CellFrame, GridPlacement, Placement};
