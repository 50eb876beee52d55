//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Sets up a `tracing-subscriber` registry that:
/// 1. Filters events with an `EnvFilter` built from `config.trace_level`
///    (default `"info"`); `RUST_LOG` takes precedence when set
/// 2. Formats events with the `fmt` layer
/// 3. Writes to `config.trace_file` through a [`RotatingFileWriter`], or to
///    stderr when no file is configured
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if needed
/// - Falls back to stderr if that directory cannot be created
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use pagewise::observability::init_tracing;
/// use pagewise::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.trace_file.as_deref().and_then(prepare_log_file) {
        Some(path) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(RotatingFileWriter::new(path)),
            )
            .try_init(),
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Resolves the log path and makes sure its directory exists.
fn prepare_log_file(path: &str) -> Option<PathBuf> {
    let path = PathBuf::from(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("pagewise: cannot create log directory {}: {e}", parent.display());
            return None;
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_log_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("logs").join("pagewise.log");

        let prepared = prepare_log_file(target.to_str().unwrap());

        assert_eq!(prepared.as_deref(), Some(target.as_path()));
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_prepare_bare_file_name() {
        assert_eq!(prepare_log_file("pagewise.log"), Some(PathBuf::from("pagewise.log")));
    }
}
