use anyhow::{anyhow, Context};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILTER_ENV: &str = "SESSION_TESTER_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// The interactive UI owns the terminal and no log file was given.
    Disabled,
    Stderr,
    File(PathBuf),
}

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_logging(target: &LogTarget) -> anyhow::Result<()> {
    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter("warn"))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    installed.map_err(|error| anyhow!("failed to install log subscriber: {error}"))
}
