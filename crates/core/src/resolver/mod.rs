//! Category Split Resolver - turns the configured ids into terms.

mod split_resolver;

pub use split_resolver::{SplitCategoryResolver, SplitCategorySet};
