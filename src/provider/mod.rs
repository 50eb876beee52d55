//! Provider layer: the composition root views talk to.
//!
//! # Modules
//!
//! - [`data_provider`]: [`DataProvider`], wiring store, filters, paging and selection
//! - [`display`]: The [`Display`] callback trait and select handlers
//!
//! # Example
//!
//! ```rust
//! use pagewise::provider::DataProvider;
//!
//! let mut provider = DataProvider::new(|n: &u32| n.to_string(), false);
//! provider.update(1..=3)?;
//! provider.select(&2, true);
//! assert_eq!(provider.single_selection(), Some(&2));
//! # Ok::<(), pagewise::ProviderError>(())
//! ```

pub mod data_provider;
pub mod display;

pub use data_provider::DataProvider;
pub use display::{Display, SelectHandler};
