//! Shopmate Search - Shopping search and product normalization

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Queries a shopping-search provider and maps its heterogeneous results
//! into the stable [`ProductRecord`] shape consumed by the API and chat.

pub mod errors;
pub mod normalize;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::ProductSearchError;
pub use providers::{ProductSearchProvider, SerpApiProvider};
pub use service::ProductSearchService;
pub use types::{DEFAULT_SOURCE, ProductRecord};

/// Convenience type alias for Results with ProductSearchError.
pub type Result<T> = std::result::Result<T, ProductSearchError>;
