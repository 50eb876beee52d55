//! Domain layer for the data provider.
//!
//! This module contains the value types shared by every other layer,
//! independent of how items are stored, filtered or displayed.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`page`]: Page window snapshot and page math
//! - [`selection`]: Selection snapshot
//!
//! # Examples
//!
//! ```
//! use pagewise::domain::{PageInfo, Result};
//!
//! fn first_page() -> Result<PageInfo> {
//!     Ok(PageInfo { page: 0, page_size: 10, visible: 0, total: 0 })
//! }
//! ```

pub mod error;
pub mod page;
pub mod selection;

pub use error::{ProviderError, Result};
pub use page::{page_count, PageInfo, DEFAULT_PAGE_SIZE};
pub use selection::SelectionInfo;
