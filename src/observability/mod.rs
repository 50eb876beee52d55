//! Structured logging for the data provider.
//!
//! Every layer emits `tracing` spans and events (recompute spans with item and
//! filter counts, selection changes, duplicate-key warnings). This module
//! installs a subscriber that renders them.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | RotatingFileWriter
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`crate::Config`]
//! 3. Default: `"info"`
//!
//! Output goes to stderr unless `trace_file` is set, in which case the file
//! rotates at 10 MB and keeps three backups.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - [`file_writer`]: Rotating file writer usable as a `MakeWriter`

pub mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::init_tracing;
