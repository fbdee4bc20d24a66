mod config;   // brings `config.rs` in as `crate::config`
mod render;   // brings `render.rs` in as `crate::render`
mod scenario; // brings `scenario.rs` in as `crate::scenario`

use anyhow::Context;
use gridstar_search::AStarSearch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let cfg = config::load_config(&path)
        .with_context(|| format!("failed to load configuration from {}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            cfg.log_level
                .parse()
                .with_context(|| format!("invalid log_level {:?}", cfg.log_level))?,
        ))
        .init();

    info!(config = %path, "Configuration loaded");

    if let Err(e) = run(&cfg) {
        error!("Search failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(cfg: &AppConfig) -> anyhow::Result<()> {
    let mut grid = cfg.grid.build().context("failed to build grid")?;
    let start = cfg.search.start;
    let dest = cfg.search.dest_for(&grid);
    info!(rows = grid.rows(), cols = grid.cols(), %start, %dest, "Grid ready");

    let mut search = AStarSearch::new(&mut grid, start, dest)?;
    if let Some(limit) = cfg.search.step_limit {
        search = search.with_step_limit(limit);
    }

    let result = if cfg.search.stepwise {
        loop {
            let step = search.step();
            if let Some(cell) = step.expanded {
                println!(
                    "step {:>5}: expanded {} (frontier {})",
                    search.nodes_expanded(),
                    cell,
                    search.frontier_len()
                );
            }
            if step.is_terminal {
                break;
            }
        }
        search.result()
    } else {
        search.run()
    };

    println!("{}", result);
    if result.is_success() {
        println!("Path: {:?}", result.path.iter().map(ToString::to_string).collect::<Vec<_>>());
    } else {
        println!("No path found.");
    }
    println!("\n{}", render::render(&grid, start, dest, &result.path));

    Ok(())
}
