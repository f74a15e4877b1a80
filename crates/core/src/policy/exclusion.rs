//! The exclusion predicate and the request-scoped filter built on it.

use std::cell::Cell;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Result;
use crate::host::{CategoryItemContext, CategoryItemFilter};
use crate::resolver::SplitCategorySet;
use crate::terms::{CategoryId, TermRepositoryTrait};

/// Whether `category` is a split root or lies in a split root's subtree.
///
/// Every generic rendering path uses this predicate so a category never shows
/// up both under its dedicated panel, block or column and the generic one.
pub fn is_excluded(
    category: CategoryId,
    split_set: &SplitCategorySet,
    terms: &dyn TermRepositoryTrait,
) -> Result<bool> {
    for root in split_set {
        if root.id == category || terms.is_ancestor_of(root.id, category)? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Removes split categories from the host's generic category block.
///
/// Lives for one request. Dedicated block renderers call [`suspend`] to let
/// their own subtree through; the returned guard re-enables the filter when
/// dropped, on every exit path.
///
/// [`suspend`]: CategoryExclusionFilter::suspend
pub struct CategoryExclusionFilter {
    split_set: SplitCategorySet,
    terms: Arc<dyn TermRepositoryTrait>,
    suspended: Cell<usize>,
}

impl CategoryExclusionFilter {
    pub fn new(split_set: SplitCategorySet, terms: Arc<dyn TermRepositoryTrait>) -> Self {
        Self {
            split_set,
            terms,
            suspended: Cell::new(0),
        }
    }

    pub fn split_set(&self) -> &SplitCategorySet {
        &self.split_set
    }

    pub fn is_active(&self) -> bool {
        self.suspended.get() == 0
    }

    pub fn suspend(&self) -> ExclusionOverride<'_> {
        self.suspended.set(self.suspended.get() + 1);
        ExclusionOverride { filter: self }
    }

    pub fn excludes(&self, category: CategoryId) -> Result<bool> {
        is_excluded(category, &self.split_set, self.terms.as_ref())
    }
}

impl CategoryItemFilter for CategoryExclusionFilter {
    fn filter_item(&self, html: String, item: &CategoryItemContext<'_>) -> Result<String> {
        if self.is_active() && self.excludes(item.term.id)? {
            return Ok(String::new());
        }

        Ok(html)
    }
}

/// Guard returned by [`CategoryExclusionFilter::suspend`].
#[must_use = "the exclusion filter is re-enabled as soon as the override is dropped"]
pub struct ExclusionOverride<'a> {
    filter: &'a CategoryExclusionFilter,
}

impl Drop for ExclusionOverride<'_> {
    fn drop(&mut self) {
        let depth = self.filter.suspended.get();
        self.filter.suspended.set(depth.saturating_sub(1));
    }
}

/// Options of the submission form add-on's category select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySelectOptions {
    #[serde(default)]
    pub exclude_tree: Vec<CategoryId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hides the split subtrees from the form add-on's category select.
pub fn exclude_split_trees(
    mut options: CategorySelectOptions,
    split_set: &SplitCategorySet,
) -> CategorySelectOptions {
    options.exclude_tree = split_set.ids();
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::host::CategoryBlockProperties;
    use crate::terms::{CategoryTerm, InMemoryTermStore};
    use serde_json::json;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn store() -> Arc<InMemoryTermStore> {
        Arc::new(
            InMemoryTermStore::default()
                .with_term(CategoryTerm::new(10, "Food", "food"))
                .with_term(CategoryTerm::new(11, "Bakery", "bakery").with_parent(10))
                .with_term(CategoryTerm::new(12, "Bread", "bread").with_parent(11))
                .with_term(CategoryTerm::new(20, "Retail", "retail"))
                .with_term(CategoryTerm::new(30, "Services", "services")),
        )
    }

    fn split_set(store: &InMemoryTermStore, ids: &[u64]) -> SplitCategorySet {
        SplitCategorySet::new(
            ids.iter()
                .filter_map(|id| store.get_term(CategoryId::new(*id)).unwrap())
                .collect(),
        )
    }

    fn filter() -> (CategoryExclusionFilter, Arc<InMemoryTermStore>) {
        let store = store();
        let set = split_set(&store, &[10, 20]);
        (CategoryExclusionFilter::new(set, store.clone()), store)
    }

    fn item_html(filter: &CategoryExclusionFilter, store: &InMemoryTermStore, id: u64) -> String {
        let term = store.get_term(CategoryId::new(id)).unwrap().unwrap();
        let block = CategoryBlockProperties::default();
        let item = CategoryItemContext {
            term: &term,
            count: 1,
            index: 0,
            block: &block,
        };
        filter.filter_item(format!("<li>{}</li>", term.name), &item).unwrap()
    }

    #[test]
    fn test_is_excluded_roots_descendants_and_unrelated() {
        let store = store();
        let set = split_set(&store, &[10, 20]);
        let id = CategoryId::new;

        assert!(is_excluded(id(10), &set, &*store).unwrap());
        assert!(is_excluded(id(20), &set, &*store).unwrap());
        assert!(is_excluded(id(11), &set, &*store).unwrap());
        assert!(is_excluded(id(12), &set, &*store).unwrap());
        assert!(!is_excluded(id(30), &set, &*store).unwrap());
    }

    #[test]
    fn test_empty_split_set_excludes_nothing() {
        let store = store();
        let set = SplitCategorySet::default();
        assert!(!is_excluded(CategoryId::new(10), &set, &*store).unwrap());
    }

    #[test]
    fn test_filter_drops_excluded_items() {
        let (filter, store) = filter();
        assert_eq!(item_html(&filter, &store, 11), "");
        assert_eq!(item_html(&filter, &store, 30), "<li>Services</li>");
    }

    #[test]
    fn test_override_restores_filter_on_drop() {
        let (filter, store) = filter();
        {
            let _override = filter.suspend();
            assert!(!filter.is_active());
            assert_eq!(item_html(&filter, &store, 11), "<li>Bakery</li>");
        }
        assert!(filter.is_active());
        assert_eq!(item_html(&filter, &store, 11), "");
    }

    #[test]
    fn test_nested_overrides_restore_in_order() {
        let (filter, _) = filter();
        let outer = filter.suspend();
        {
            let _inner = filter.suspend();
        }
        assert!(!filter.is_active());
        drop(outer);
        assert!(filter.is_active());
    }

    #[test]
    fn test_override_restored_on_error_return() {
        let (filter, _) = filter();

        let render = |filter: &CategoryExclusionFilter| -> Result<()> {
            let _override = filter.suspend();
            Err(Error::Render("template failed".into()))
        };

        assert!(render(&filter).is_err());
        assert!(filter.is_active());
    }

    #[test]
    fn test_override_restored_on_panic() {
        let (filter, _) = filter();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _override = filter.suspend();
            panic!("render blew up");
        }));

        assert!(result.is_err());
        assert!(filter.is_active());
    }

    #[test]
    fn test_exclude_split_trees_keeps_other_options() {
        let store = store();
        let set = split_set(&store, &[20, 10]);
        let options: CategorySelectOptions =
            serde_json::from_value(json!({ "exclude_tree": [99], "hide_empty": true })).unwrap();

        let options = exclude_split_trees(options, &set);
        assert_eq!(options.exclude_tree, vec![CategoryId::new(20), CategoryId::new(10)]);
        assert_eq!(options.extra.get("hide_empty"), Some(&json!(true)));
    }
}
