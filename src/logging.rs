//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The game owns the terminal (raw mode, alternate screen), so log lines can
//! never go to stdout or stderr. Events are written to a file when one is
//! configured and dropped otherwise.
//!
//! # Log Levels
//!
//! - `warn`: picks outside the grid
//! - `info`: session start, lexicon load, scored words, resets
//! - `debug`: every word started, extended, abandoned or rejected
//! - `trace`: nothing extra today; enables dependency output

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose events follow the configured level.
const OWN_TARGETS: [&str; 5] = [
    "tui_boggle",
    "tui_boggle_core",
    "tui_boggle_input",
    "tui_boggle_term",
    "tui_boggle_types",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level for this workspace's crates. Everything else stays at `warn`.
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Log file path. `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    ///
    /// - 0 (no `-v`): info level
    /// - 1 (`-v`): debug level
    /// - 2+ (`-vv`): trace level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Default filter directives, used when `RUST_LOG` is unset.
    pub fn default_directives(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        let mut directives = String::from("warn");
        for target in OWN_TARGETS {
            directives.push(',');
            directives.push_str(target);
            directives.push('=');
            directives.push_str(&level);
        }
        directives
    }
}

/// Install the global subscriber. Call once at startup, before the terminal
/// switches to raw mode so open errors still print normally.
///
/// Returns `false` when no log file is configured and nothing was installed.
pub fn init_logging(config: &LogConfig) -> Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(true)
}
