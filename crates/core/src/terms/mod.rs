//! Terms module - category terms owned by the host taxonomy.
//!
//! The extension never mutates terms; it looks them up by id, tests
//! ancestry, and asks the host for relationships and permalinks.

mod memory_store;
mod terms_model;
mod terms_traits;

pub use memory_store::InMemoryTermStore;
pub use terms_model::{CategoryId, CategoryTerm, DirectoryHome, EntryId};
pub use terms_traits::TermRepositoryTrait;
