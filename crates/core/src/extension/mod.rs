//! Extension facade - one entry point per host extension point.

mod extension_config;
mod split_categories;

pub use extension_config::ExtensionConfig;
pub use split_categories::{ExtensionServices, SplitCategoriesExtension};
