//! Traits for the host taxonomy.

use crate::Result;

use super::{CategoryId, CategoryTerm, DirectoryHome, EntryId};

/// Read access to the host category taxonomy.
///
/// `get_term` returns `Ok(None)` for ids that no longer exist; `Err` is
/// reserved for the taxonomy itself being unavailable.
pub trait TermRepositoryTrait: Send + Sync {
    fn get_term(&self, id: CategoryId) -> Result<Option<CategoryTerm>>;

    /// Whether `ancestor` is a strict ancestor of `descendant`.
    fn is_ancestor_of(&self, ancestor: CategoryId, descendant: CategoryId) -> Result<bool>;

    /// Category ids attached to an entry.
    fn get_relationships(&self, entry_id: EntryId) -> Result<Vec<CategoryId>>;

    fn permalink(&self, term: &CategoryTerm, home: &DirectoryHome) -> Result<String>;

    /// Whether the site uses pretty permalinks.
    fn using_permalinks(&self) -> bool;
}
