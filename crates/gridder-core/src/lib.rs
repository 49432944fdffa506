// ABOUTME: Shared types and configuration for grafana-gridder.
// ABOUTME: Defines grid rectangles, relative sizes, and config file handling.

pub mod config;
pub mod grid;
pub mod size;

pub use config::{Config, ConfigError, GridSettings, OutputSettings};
pub use grid::{GridPos, Positioned, GRID_WIDTH};
pub use size::{Layout, PanelSize, RelativeSize, RowHeights};
