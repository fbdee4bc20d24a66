use config::{Config, ConfigError, Environment, File, FileFormat};
use gridstar_search::{Grid, GridPos, SearchError};
use serde::Deserialize;

use crate::scenario::{self, ScenarioKind};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const CONFIG_PATH_ENV: &str = "GRIDSTAR_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Default tracing directive, e.g. "info" or "gridstar_search=trace".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub grid: GridSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub start: GridPos,
    /// Bottom-right cell when unset.
    #[serde(default)]
    pub dest: Option<GridPos>,
    #[serde(default)]
    pub step_limit: Option<usize>,
    /// Print every expansion as it happens.
    #[serde(default)]
    pub stepwise: bool,
}

impl SearchSettings {
    pub fn dest_for(&self, grid: &Grid) -> GridPos {
        self.dest
            .unwrap_or_else(|| GridPos::new(grid.rows() - 1, grid.cols() - 1))
    }
}

/// Either an explicit ASCII `layout` or a generated scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GridSettings {
    #[serde(default)]
    pub layout: Vec<String>,
    #[serde(default)]
    pub scenario: ScenarioKind,
    #[serde(default = "default_size")]
    pub rows: usize,
    #[serde(default = "default_size")]
    pub cols: usize,
    /// Probability that a cell is blocked in the random scenario.
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub seed: u64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            layout: Vec::new(),
            scenario: ScenarioKind::default(),
            rows: default_size(),
            cols: default_size(),
            density: default_density(),
            seed: 0,
        }
    }
}

impl GridSettings {
    pub fn build(&self) -> Result<Grid, SearchError> {
        if self.layout.is_empty() {
            scenario::generate(self.scenario, self.rows, self.cols, self.density, self.seed)
        } else {
            Grid::parse(&self.layout.join("\n"))
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_size() -> usize {
    10
}

fn default_density() -> f64 {
    0.3
}

/// Loads configuration from a TOML file, then applies `GRIDSTAR_*`
/// environment overrides (`GRIDSTAR_SEARCH__STEPWISE=true`, ...).
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix("GRIDSTAR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

/// Parses configuration from an in-memory TOML document.
pub fn load_config_str(toml: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = load_config_str("").unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.search.start, GridPos::new(0, 0));
        assert_eq!(cfg.search.dest, None);
        assert_eq!(cfg.search.step_limit, None);
        assert!(!cfg.search.stepwise);
        assert_eq!(cfg.grid.scenario, ScenarioKind::Open);
        assert_eq!((cfg.grid.rows, cfg.grid.cols), (10, 10));

        let grid = cfg.grid.build().unwrap();
        assert_eq!(cfg.search.dest_for(&grid), GridPos::new(9, 9));
    }

    #[test]
    fn test_layout_config() {
        let cfg = load_config_str(
            r##"
            log_level = "debug"

            [search]
            start = { row = 2, col = 0 }
            dest = { row = 2, col = 2 }
            step_limit = 50
            stepwise = true

            [grid]
            layout = [
                "...",
                ".#.",
                ".#.",
            ]
            "##,
        )
        .unwrap();

        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.search.start, GridPos::new(2, 0));
        assert_eq!(cfg.search.dest, Some(GridPos::new(2, 2)));
        assert_eq!(cfg.search.step_limit, Some(50));
        assert!(cfg.search.stepwise);

        let grid = cfg.grid.build().unwrap();
        assert_eq!(grid.rows(), 3);
        assert!(!grid.is_passable(GridPos::new(1, 1)));
        assert_eq!(cfg.search.dest_for(&grid), GridPos::new(2, 2));
    }

    #[test]
    fn test_scenario_config() {
        let cfg = load_config_str(
            r#"
            [grid]
            scenario = "wall"
            rows = 6
            cols = 8
            "#,
        )
        .unwrap();
        assert_eq!(cfg.grid.scenario, ScenarioKind::Wall);

        let grid = cfg.grid.build().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (6, 8));
        assert!(grid.is_passable(GridPos::new(0, 6)));
        assert!(!grid.is_passable(GridPos::new(1, 6)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config("does/not/exist.toml").is_err());
    }
}
