//! # packrs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration for the packrs CLI shell.
//! Configuration only affects how the shell behaves around a pipeline run
//! (spinner, benchmark timing, exit status). It never changes codec or
//! container parameters.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by `main.rs` after loading)
//! 2. Project-specific `.packrs.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/packrs/config.toml`
//! 4. Default values defined in the code
//!
//! The project search walks up from the current directory and stops at the
//! first directory containing `.git`.
//!
//! ## Examples
//!
//! ```toml
//! [output]
//! benchmark = true
//! progress = false
//! strict_exit = true
//! tick_interval_ms = 120
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! if cfg.output.benchmark {
//!     // time the run
//! }
//! ```
//!
use crate::core::error::Result;
use anyhow::{bail, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for the terminal-facing side of a run.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Print the elapsed wall-clock time after every run.
    #[serde(default)]
    pub benchmark: bool,
    /// Show a spinner while pipeline steps run.
    #[serde(default = "default_progress")]
    pub progress: bool,
    /// Exit with status 1 when the run fails.
    #[serde(default)]
    pub strict_exit: bool,
    /// Spinner redraw interval in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            benchmark: false,
            progress: default_progress(),
            strict_exit: false,
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_progress() -> bool {
    true
}
fn default_tick_interval_ms() -> u64 {
    80
}

const PROJECT_CONFIG_FILENAME: &str = ".packrs.toml";
const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Partial view of a config file. Every field is optional so a project file
/// only overrides what it actually sets.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    output: OutputLayer,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct OutputLayer {
    benchmark: Option<bool>,
    progress: Option<bool>,
    strict_exit: Option<bool>,
    tick_interval_ms: Option<u64>,
}

pub fn load_config() -> Result<Config> {
    let user_layer = load_user_config()?;
    let project_layer = load_project_config()?;
    let mut config = Config::default();
    for layer in [user_layer, project_layer].into_iter().flatten() {
        apply_layer(&mut config, layer);
    }
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "packrs", "packrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_layer_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_layer_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.packrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_layer_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn apply_layer(config: &mut Config, layer: ConfigLayer) {
    let out = layer.output;
    if let Some(benchmark) = out.benchmark {
        config.output.benchmark = benchmark;
    }
    if let Some(progress) = out.progress {
        config.output.progress = progress;
    }
    if let Some(strict_exit) = out.strict_exit {
        config.output.strict_exit = strict_exit;
    }
    if let Some(tick) = out.tick_interval_ms {
        config.output.tick_interval_ms = tick;
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let tick = config.output.tick_interval_ms;
    if tick == 0 || tick > MAX_TICK_INTERVAL_MS {
        bail!(
            "Invalid tick_interval_ms: {}. Expected a value between 1 and {}.",
            tick,
            MAX_TICK_INTERVAL_MS
        );
    }
    Ok(())
}
