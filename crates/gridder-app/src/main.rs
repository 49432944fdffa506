// ABOUTME: Main application entry point.
// ABOUTME: Lays out a dashboard description (or the built-in demo) and prints it as JSON.

mod dashboard;
mod description;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use gridder_core::Config;

use description::DashboardFile;

const INIT_CONFIG: &str = "--init-config";

fn main() -> Result<()> {
    // stdout carries the document, so logs go to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let arg = std::env::args_os().nth(1);
    if arg.as_deref() == Some(OsStr::new(INIT_CONFIG)) {
        let path = Config::default_path().context("no config directory on this platform")?;
        return init_config(&path);
    }

    let config = Config::load_or_default();
    tracing::info!(
        "Loaded config: grid width={}, row height={}",
        config.grid.width,
        config.grid.row_height
    );

    let dashboard = match arg.map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Reading dashboard description {}", path.display());
            DashboardFile::load(&path)?.into_dashboard(config.grid)?
        }
        None => {
            tracing::info!("No description given, laying out the demo dashboard");
            dashboard::demo(config.grid)?
        }
    };

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };
    println!("{json}");

    Ok(())
}

/// Write the default settings to `path`, leaving an existing file alone
fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config file {} already exists", path.display());
    }
    Config::default()
        .save(path)
        .with_context(|| format!("writing config file {}", path.display()))?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(())
}
