//! Pagewise: an in-memory data engine for list and table views.
//!
//! Pagewise is the model half of a paged, filterable, selectable table:
//! - Insertion-ordered item storage keyed by caller-defined identifiers
//! - Named, conjunctive filters with mutable arguments plus stable sorting
//! - Page window math with clamped navigation
//! - Single and multi selection that stays consistent with the filters
//! - Synchronous fan-out of page content and selection snapshots to displays

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  View code (tables, lists, pagers)                  │  ← Caller
//! └─────────────────────────────────────────────────────┘
//!                        │  Display / select handlers
//! ┌─────────────────────────────────────────────────────┐
//! │  Provider Layer (provider/)                         │  ← Composition root
//! │  - Update / refresh                                 │
//! │  - Display and selection fan-out                    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Store Layer   │   │ Filter Layer  │   │ Paging Layer  │
//! │ (store/)      │   │ (filter/)     │   │ (paging/)     │
//! │ - Keyed items │   │ - Predicates  │   │ - Page window │
//! │ - Unique ids  │   │ - Comparator  │   │ - Selection   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Error types                                      │
//! │  - PageInfo / SelectionInfo snapshots               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber setup                         │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Error type and snapshot value objects
//! - [`store`]: Keyed, insertion-ordered item storage
//! - [`filter`]: Filter values and the filter engine
//! - [`paging`]: Page window and selection state
//! - [`provider`]: The [`DataProvider`] and the [`Display`] trait
//! - [`observability`]: Tracing subscriber initialization
//!
//! # Configuration
//!
//! Settings come either from string key/value pairs handed over by a host
//! runtime ([`Config::from_map`]) or from a TOML file ([`Config::from_file`]):
//!
//! ```toml
//! page_size = 25
//! multiselect = true
//! trace_level = "debug"
//! trace_file = "/var/log/console/pagewise.log"
//! ```
//!
//! # Example
//!
//! ```rust
//! use pagewise::{Config, DataProvider, FilterValue};
//!
//! #[derive(Debug, PartialEq)]
//! struct Deployment { name: String, enabled: bool }
//!
//! let config = Config { page_size: 2, multiselect: true, ..Default::default() };
//! let mut provider = DataProvider::from_config(|d: &Deployment| d.name.clone(), &config);
//!
//! provider.update(vec![
//!     Deployment { name: "app.war".into(), enabled: true },
//!     Deployment { name: "batch.jar".into(), enabled: false },
//!     Deployment { name: "web.war".into(), enabled: true },
//! ])?;
//!
//! provider.add_filter("enabled", FilterValue::new(|d: &Deployment, _: &str| d.enabled, ""));
//! provider.select_all();
//!
//! assert_eq!(provider.page_info().total, 2);
//! assert_eq!(provider.selection_info().selected, vec!["app.war", "web.war"]);
//! # Ok::<(), pagewise::ProviderError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Positions, not clones
//!
//! Filtered and visible sequences are lists of positions into the store, so
//! items never need to be `Clone` and recomputing never copies them.
//!
//! ## Atomic updates
//!
//! A rejected update (duplicate identifiers) leaves the previous items,
//! selection and displays exactly as they were.
//!
//! ## Two notification channels
//!
//! Page content and selection snapshots travel separately. A selection change
//! never re-filters or re-pages.

pub mod domain;
pub mod filter;
pub mod observability;
pub mod paging;
pub mod provider;
pub mod store;

pub use domain::{PageInfo, ProviderError, Result, SelectionInfo, DEFAULT_PAGE_SIZE};
pub use filter::{FilterEngine, FilterValue};
pub use paging::PageSelector;
pub use provider::{DataProvider, Display};
pub use store::ItemStore;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Provider configuration.
///
/// # Example
///
/// ```toml
/// page_size = 25
/// multiselect = true
/// trace_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page. Default: 10
    pub page_size: usize,

    /// Whether more than one item may be selected. Default: `false`
    pub multiselect: bool,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Logs go to stderr when unset.
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            multiselect: false,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from string key/value pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: String → `usize`, falls back to 10 on parse error or 0
    /// - `multiselect`: `true`/`false`/`yes`/`no`/`1`/`0`, falls back to `false`
    /// - `trace_level`: String → `Option<String>`
    /// - `trace_file`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pagewise::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("multiselect".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert!(config.multiselect);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let multiselect = config
            .get("multiselect")
            .and_then(|s| parse_flag(s.as_str()))
            .unwrap_or(false);

        Self {
            page_size,
            multiselect,
            trace_level: config.get("trace_level").cloned(),
            trace_file: config.get("trace_file").cloned(),
        }
    }

    /// Loads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Io`] if the file cannot be read,
    /// [`ProviderError::Toml`] if it is not valid TOML, and
    /// [`ProviderError::Config`] if `page_size` is 0.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] if `page_size` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ProviderError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_from_map_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_from_map_falls_back_on_garbage() {
        let config = Config::from_map(&map(&[("page_size", "lots"), ("multiselect", "maybe")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(!config.multiselect);

        let zero = Config::from_map(&map(&[("page_size", "0")]));
        assert_eq!(zero.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_from_map_reads_tracing_keys() {
        let config = Config::from_map(&map(&[("trace_level", "debug"), ("trace_file", "/tmp/p.log")]));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.trace_file.as_deref(), Some("/tmp/p.log"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 25\nmultiselect = true").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 25);
        assert!(config.multiselect);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn test_from_file_rejects_zero_page_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 0").unwrap();

        assert!(matches!(Config::from_file(file.path()), Err(ProviderError::Config(_))));
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(Config::from_file("/nonexistent/pagewise.toml"), Err(ProviderError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = [").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(ProviderError::Toml(_))));
    }
}
