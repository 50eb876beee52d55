//! Error types for the data provider.
//!
//! This module defines the centralized error type [`ProviderError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The engine itself has exactly one failure mode, [`ProviderError::DuplicateKey`].
//! Every other variant belongs to configuration loading.

use thiserror::Error;

/// The main error type for data provider operations.
///
/// # Examples
///
/// ```
/// use pagewise::ProviderError;
///
/// let err = ProviderError::DuplicateKey { id: "a".to_string() };
/// assert_eq!(err.to_string(), "Duplicate item identifier: a");
/// ```
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Two items in one `update` call mapped to the same identifier.
    ///
    /// The update is rejected as a whole; the provider keeps its previous items.
    #[error("Duplicate item identifier: {id}")]
    DuplicateKey {
        /// The identifier produced twice.
        id: String,
    },

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. while reading a
    /// configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed as TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized `Result` type for data provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
