use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Where log lines go. The interactive mode owns stdout and stderr, so it logs to a file.
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

pub fn default_log_path() -> PathBuf {
    match dirs::cache_dir() {
        Some(cache_dir) => cache_dir.join("hexsync").join("hexsync.log"),
        None => PathBuf::from("hexsync.log"),
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default level.
pub fn init(target: LogTarget) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter("warn"))
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|err| anyhow!("failed to install logger: {err}"))
}
