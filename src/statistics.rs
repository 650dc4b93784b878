use crate::algorithms::SearchOutcome;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub algorithm: String,
    pub expanded: usize,
    pub path_length: Option<usize>,
    pub num_walls: usize,
    pub open_cells: usize,
    pub elapsed: Duration,
}

impl SearchStatistics {
    pub fn new(
        algorithm: &str,
        outcome: &SearchOutcome,
        num_walls: usize,
        open_cells: usize,
        elapsed: Duration,
    ) -> Self {
        SearchStatistics {
            algorithm: algorithm.to_string(),
            expanded: outcome.expanded.len(),
            path_length: outcome.path_length(),
            num_walls,
            open_cells,
            elapsed,
        }
    }

    /// Share of the open cells the search had to expand.
    pub fn coverage(&self) -> f64 {
        if self.open_cells == 0 {
            0.0
        } else {
            self.expanded as f64 / self.open_cells as f64
        }
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        match self.path_length {
            Some(len) => writeln!(f, "Path Length: {}", len)?,
            None => writeln!(f, "Path Length: no path")?,
        }
        writeln!(f, "Nodes Expanded: {}", self.expanded)?;
        writeln!(f, "Number of Walls: {}", self.num_walls)?;
        writeln!(f, "Coverage: {:.1}% of open cells", self.coverage() * 100.0)?;
        writeln!(f, "Search Time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Prints a comparison table for several runs on the same grid.
pub fn print_comparison(results: &[SearchStatistics]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<12} {:<8} {:<10} {:<10} {:<12}",
        "Algorithm", "Path", "Expanded", "Coverage", "Time"
    );
    println!("{}", "-".repeat(56));

    for result in results {
        let path_str = result
            .path_length
            .map(|len| len.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<8} {:<10} {:<10} {:<12}",
            result.algorithm,
            path_str,
            result.expanded,
            format!("{:.1}%", result.coverage() * 100.0),
            format!("{:.2?}", result.elapsed)
        );
    }

    if let Some(best) = results.iter().min_by_key(|r| r.expanded) {
        println!();
        println!("Fewest expansions: {} ({} nodes)", best.algorithm, best.expanded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Position;

    #[test]
    fn coverage_and_display() {
        let outcome = SearchOutcome {
            path: Some(vec![Position::new(0, 0), Position::new(0, 1)]),
            expanded: vec![Position::new(0, 0), Position::new(0, 1)],
            cost: Some(1),
        };
        let stats = SearchStatistics::new("a_star", &outcome, 3, 8, Duration::from_micros(5));
        assert_eq!(stats.path_length, Some(1));
        assert!((stats.coverage() - 0.25).abs() < f64::EPSILON);

        let text = stats.to_string();
        assert!(text.contains("Path Length: 1"));
        assert!(text.contains("Nodes Expanded: 2"));
    }

    #[test]
    fn no_path_and_no_open_cells() {
        let stats =
            SearchStatistics::new("dijkstra", &SearchOutcome::default(), 9, 0, Duration::ZERO);
        assert_eq!(stats.coverage(), 0.0);
        assert!(stats.to_string().contains("no path"));
    }
}
