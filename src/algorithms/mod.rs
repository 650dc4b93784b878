pub mod a_star;
pub mod common;
pub mod dijkstra;

pub use a_star::AStar;
pub use common::{PathfindingAlgorithm, SearchOutcome};
pub use dijkstra::Dijkstra;
