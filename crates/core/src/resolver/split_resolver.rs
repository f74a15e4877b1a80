use std::sync::Arc;

use serde::Serialize;

use crate::errors::Result;
use crate::settings::SplitCategorySettings;
use crate::terms::{CategoryId, CategoryTerm, TermRepositoryTrait};

/// The split categories of one request, in configuration order.
///
/// Recomputed on every resolution and never persisted, so deleted terms drop
/// out as soon as the host taxonomy forgets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitCategorySet {
    terms: Vec<CategoryTerm>,
}

impl SplitCategorySet {
    pub fn new(terms: Vec<CategoryTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[CategoryTerm] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTerm> {
        self.terms.iter()
    }

    pub fn ids(&self) -> Vec<CategoryId> {
        self.terms.iter().map(|t| t.id).collect()
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryTerm> {
        self.terms.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<'a> IntoIterator for &'a SplitCategorySet {
    type Item = &'a CategoryTerm;
    type IntoIter = std::slice::Iter<'a, CategoryTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

pub struct SplitCategoryResolver {
    terms: Arc<dyn TermRepositoryTrait>,
}

impl SplitCategoryResolver {
    pub fn new(terms: Arc<dyn TermRepositoryTrait>) -> Self {
        Self { terms }
    }

    /// Looks up each configured id in order. Ids without a term are skipped
    /// silently; the configuration is not deduplicated here.
    pub fn resolve(&self, settings: &SplitCategorySettings) -> Result<SplitCategorySet> {
        let mut terms = Vec::with_capacity(settings.categories.len());

        for id in &settings.categories {
            if let Some(term) = self.terms.get_term(*id)? {
                terms.push(term);
            }
        }

        Ok(SplitCategorySet::new(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, TermError};
    use crate::terms::{DirectoryHome, EntryId, InMemoryTermStore};

    fn settings(ids: &[u64]) -> SplitCategorySettings {
        SplitCategorySettings {
            categories: ids.iter().copied().map(CategoryId::new).collect(),
            display_category_metabox: None,
        }
    }

    fn resolver() -> SplitCategoryResolver {
        let store = InMemoryTermStore::default()
            .with_term(CategoryTerm::new(10, "Food", "food"))
            .with_term(CategoryTerm::new(20, "Retail", "retail"));
        SplitCategoryResolver::new(Arc::new(store))
    }

    #[test]
    fn test_resolve_keeps_configuration_order() {
        let set = resolver().resolve(&settings(&[20, 10])).unwrap();
        assert_eq!(set.ids(), vec![CategoryId::new(20), CategoryId::new(10)]);
        assert_eq!(set.terms()[0].name, "Retail");
    }

    #[test]
    fn test_resolve_skips_stale_ids() {
        let set = resolver().resolve(&settings(&[99, 10, 98])).unwrap();
        assert_eq!(set.ids(), vec![CategoryId::new(10)]);
    }

    #[test]
    fn test_resolve_empty_configuration() {
        let set = resolver().resolve(&settings(&[])).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_resolve_does_not_deduplicate() {
        let set = resolver().resolve(&settings(&[10, 10])).unwrap();
        assert_eq!(set.len(), 2);
    }

    struct FailingTerms;

    impl TermRepositoryTrait for FailingTerms {
        fn get_term(&self, _id: CategoryId) -> Result<Option<CategoryTerm>> {
            Err(TermError::LookupFailed("taxonomy offline".into()).into())
        }

        fn is_ancestor_of(&self, _a: CategoryId, _d: CategoryId) -> Result<bool> {
            Ok(false)
        }

        fn get_relationships(&self, _entry_id: EntryId) -> Result<Vec<CategoryId>> {
            Ok(Vec::new())
        }

        fn permalink(&self, _term: &CategoryTerm, _home: &DirectoryHome) -> Result<String> {
            Ok(String::new())
        }

        fn using_permalinks(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let resolver = SplitCategoryResolver::new(Arc::new(FailingTerms));
        let result = resolver.resolve(&settings(&[10]));
        assert!(matches!(result, Err(Error::Term(TermError::LookupFailed(_)))));
    }
}
