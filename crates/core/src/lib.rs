//! Split Categories Core - splits configured parent categories of a business
//! directory into their own admin panels, CSV export columns and content
//! blocks.
//!
//! The host directory is reached only through the traits in [`host`],
//! [`terms`] and [`settings`]; this crate holds the resolution and filtering
//! policy and never touches host storage directly.

pub mod constants;
pub mod errors;
pub mod extension;
pub mod host;
pub mod policy;
pub mod resolver;
pub mod settings;
pub mod terms;

pub use extension::{ExtensionConfig, ExtensionServices, SplitCategoriesExtension};
pub use resolver::{SplitCategoryResolver, SplitCategorySet};
pub use terms::{CategoryId, CategoryTerm};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
