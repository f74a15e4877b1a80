//! In-memory implementation of the host taxonomy.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::TermError;
use crate::Result;

use super::{CategoryId, CategoryTerm, DirectoryHome, EntryId, TermRepositoryTrait};

#[derive(Default)]
struct TermStoreState {
    terms: HashMap<CategoryId, CategoryTerm>,
    relationships: HashMap<EntryId, Vec<CategoryId>>,
}

/// Term store backed by a map, used for embedding and tests.
pub struct InMemoryTermStore {
    state: RwLock<TermStoreState>,
    base_url: String,
    using_permalinks: bool,
}

impl Default for InMemoryTermStore {
    fn default() -> Self {
        Self::new("")
    }
}

impl InMemoryTermStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(TermStoreState::default()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            using_permalinks: true,
        }
    }

    pub fn with_plain_permalinks(mut self) -> Self {
        self.using_permalinks = false;
        self
    }

    /// Builder form of [`insert_term`](Self::insert_term).
    pub fn with_term(mut self, term: CategoryTerm) -> Self {
        let state = match self.state.get_mut() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.terms.insert(term.id, term);
        self
    }

    pub fn insert_term(&self, term: CategoryTerm) -> Result<()> {
        self.write()?.terms.insert(term.id, term);
        Ok(())
    }

    pub fn remove_term(&self, id: CategoryId) -> Result<Option<CategoryTerm>> {
        Ok(self.write()?.terms.remove(&id))
    }

    /// Attaches categories to an entry, replacing any previous relationships.
    pub fn set_relationships(&self, entry_id: EntryId, ids: Vec<CategoryId>) -> Result<()> {
        self.write()?.relationships.insert(entry_id, ids);
        Ok(())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TermStoreState>> {
        self.state
            .write()
            .map_err(|e| TermError::WriteFailed(e.to_string()).into())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TermStoreState>> {
        self.state
            .read()
            .map_err(|e| TermError::LookupFailed(e.to_string()).into())
    }
}

impl TermRepositoryTrait for InMemoryTermStore {
    fn get_term(&self, id: CategoryId) -> Result<Option<CategoryTerm>> {
        Ok(self.read()?.terms.get(&id).cloned())
    }

    fn is_ancestor_of(&self, ancestor: CategoryId, descendant: CategoryId) -> Result<bool> {
        let state = self.read()?;
        let mut current = state.terms.get(&descendant).and_then(|t| t.parent);

        // A parent chain longer than the store means a cycle.
        for _ in 0..state.terms.len() {
            match current {
                Some(id) if id == ancestor => return Ok(true),
                Some(id) => current = state.terms.get(&id).and_then(|t| t.parent),
                None => return Ok(false),
            }
        }

        Ok(false)
    }

    fn get_relationships(&self, entry_id: EntryId) -> Result<Vec<CategoryId>> {
        Ok(self
            .read()?
            .relationships
            .get(&entry_id)
            .cloned()
            .unwrap_or_default())
    }

    fn permalink(&self, term: &CategoryTerm, home: &DirectoryHome) -> Result<String> {
        let url = match (self.using_permalinks, home.force_home) {
            (true, false) => format!("{}/cat/{}/", self.base_url, term.slug),
            (true, true) => format!("{}/?page_id={}&cn-cat-slug={}", self.base_url, home.page_id, term.slug),
            (false, _) => format!("{}/?page_id={}&cn-cat={}", self.base_url, home.page_id, term.id),
        };
        Ok(url)
    }

    fn using_permalinks(&self) -> bool {
        self.using_permalinks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::sync::Arc;

    fn store() -> InMemoryTermStore {
        InMemoryTermStore::new("https://example.com/")
            .with_term(CategoryTerm::new(10, "Food", "food"))
            .with_term(CategoryTerm::new(11, "Bakery", "bakery").with_parent(10))
            .with_term(CategoryTerm::new(12, "Bread", "bread").with_parent(11))
            .with_term(CategoryTerm::new(20, "Retail", "retail"))
    }

    #[test]
    fn test_is_ancestor_of_walks_parent_chain() {
        let store = store();
        let id = CategoryId::new;

        assert!(store.is_ancestor_of(id(10), id(11)).unwrap());
        assert!(store.is_ancestor_of(id(10), id(12)).unwrap());
        assert!(!store.is_ancestor_of(id(10), id(10)).unwrap());
        assert!(!store.is_ancestor_of(id(20), id(12)).unwrap());
        assert!(!store.is_ancestor_of(id(10), id(99)).unwrap());
    }

    #[test]
    fn test_is_ancestor_of_terminates_on_cycle() {
        let store = InMemoryTermStore::default()
            .with_term(CategoryTerm::new(1, "A", "a").with_parent(2))
            .with_term(CategoryTerm::new(2, "B", "b").with_parent(1));

        assert!(!store.is_ancestor_of(CategoryId::new(3), CategoryId::new(1)).unwrap());
    }

    #[test]
    fn test_removed_term_no_longer_resolves() {
        let store = store();
        assert!(store.remove_term(CategoryId::new(20)).unwrap().is_some());
        assert!(store.get_term(CategoryId::new(20)).unwrap().is_none());
    }

    #[test]
    fn test_permalink_formats() {
        let store = store();
        let term = store.get_term(CategoryId::new(10)).unwrap().unwrap();

        let pretty = store.permalink(&term, &DirectoryHome::default()).unwrap();
        assert_eq!(pretty, "https://example.com/cat/food/");

        let plain = InMemoryTermStore::new("https://example.com")
            .with_plain_permalinks()
            .permalink(
                &term,
                &DirectoryHome {
                    force_home: false,
                    page_id: 7,
                },
            )
            .unwrap();
        assert_eq!(plain, "https://example.com/?page_id=7&cn-cat=10");
    }

    #[test]
    fn test_poisoned_store_reports_writes_and_reads() {
        let store = Arc::new(store());
        let holder = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = holder.state.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        let insert = store.insert_term(CategoryTerm::new(30, "Services", "services"));
        assert!(matches!(insert, Err(Error::Term(TermError::WriteFailed(_)))));

        let relate = store.set_relationships(1, vec![CategoryId::new(10)]);
        assert!(matches!(relate, Err(Error::Term(TermError::WriteFailed(_)))));

        assert!(store.remove_term(CategoryId::new(10)).is_err());
        assert!(matches!(
            store.get_term(CategoryId::new(10)),
            Err(Error::Term(TermError::LookupFailed(_)))
        ));
    }
}
