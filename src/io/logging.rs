use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Env var holding the log filter, e.g. `NEXUS_LOG=nexus=trace`
pub const LOG_FILTER_ENV: &str = "NEXUS_LOG";
/// Env var naming a directory for per-process log files
pub const LOG_DIR_ENV: &str = "NEXUS_LOG_DIR";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// No subscriber at all
    Off,
}

/// Pick a log target. The TUI owns the terminal, so it only ever logs to a
/// file; other commands may fall back to stderr.
pub fn log_target(log_file: Option<&Path>, log_dir: Option<&Path>, tui: bool) -> LogTarget {
    if let Some(path) = log_file {
        return LogTarget::File(path.to_path_buf());
    }
    if let Some(dir) = log_dir {
        return LogTarget::File(dir.join(format!("nexus.{}.log", std::process::id())));
    }
    if tui { LogTarget::Off } else { LogTarget::Stderr }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("nexus=debug,info")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Install the global subscriber. Failing to open a log file is reported on
/// stderr and leaves logging off rather than aborting startup.
pub fn init_logging(target: &LogTarget, verbose: bool) {
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            let _ = tracing_subscriber::registry()
                .with(filter(verbose))
                .with(layer)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                eprintln!("warning: cannot create log dir {}: {}", parent.display(), e);
                return;
            }
            let file = match OpenOptions::new().create(true).append(true).open(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("warning: cannot open log file {}: {}", path.display(), e);
                    return;
                }
            };
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);
            if tracing_subscriber::registry()
                .with(filter(verbose))
                .with(layer)
                .try_init()
                .is_ok()
            {
                tracing::info!(path = %path.display(), "logging initialized");
            }
        }
    }
}
