use clap::Parser;
use log::LevelFilter;

use astar_grid::config::Config;
use astar_grid::demo::Demo;
use astar_grid::statistics::print_comparison;

fn main() {
    let config = Config::parse();

    let level = if config.quiet { LevelFilter::Warn } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    println!("Starting A* grid visualizer...");
    println!("Grid size: {}x{}", config.cols, config.rows);
    println!("Walls: {}, Clicks: {}", config.num_walls, config.clicks.len());
    println!("Algorithm: {}", config.algorithm);

    if config.no_visualization {
        println!("Visualization disabled - running in fast mode");
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
        std::thread::sleep(std::time::Duration::from_millis(1000));
    }
    println!();

    let demo = match Demo::new(config) {
        Ok(demo) => demo,
        Err(e) => {
            eprintln!("Failed to set up the grid: {}", e);
            std::process::exit(1);
        }
    };

    match demo.run() {
        Ok(reports) => {
            println!("\n=== FINAL RESULTS ===");
            println!("Seed: {} (for reproducibility)", demo.environment().seed);
            for report in &reports {
                println!("{}", report.statistics);
            }
            if reports.len() > 1 {
                let stats: Vec<_> = reports.iter().map(|r| r.statistics.clone()).collect();
                print_comparison(&stats);
            }
            if reports.iter().all(|r| !r.outcome.found()) {
                println!("No path exists - try reducing --num-walls or removing clicks");
            }
        }
        Err(e) => {
            eprintln!("Error running search: {}", e);
            std::process::exit(1);
        }
    }
}
