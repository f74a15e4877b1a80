//! CSV export columns for split categories.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{CSV_EXPORT_CATEGORY_TYPE, TERMS_TABLE};
use crate::resolver::SplitCategorySet;
use crate::terms::CategoryId;

/// One column group of the host's CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFieldSpec {
    pub field: String,
    /// Restricts a category column to the subtree rooted here.
    pub child_of: Option<CategoryId>,
    #[serde(rename = "type")]
    pub field_type: u8,
    pub fields: Option<String>,
    pub table: String,
    pub types: Option<String>,
}

impl ExportFieldSpec {
    pub fn category_subtree(root: CategoryId) -> Self {
        Self {
            field: "category".to_string(),
            child_of: Some(root),
            field_type: CSV_EXPORT_CATEGORY_TYPE,
            fields: None,
            table: TERMS_TABLE.to_string(),
            types: None,
        }
    }
}

/// One category column per split category, in configuration order.
pub fn build_export_columns(split_set: &SplitCategorySet) -> Vec<ExportFieldSpec> {
    split_set
        .iter()
        .map(|term| ExportFieldSpec::category_subtree(term.id))
        .collect()
}

/// Appends the split category columns after the host's own fields.
pub fn extend_export_fields(
    mut fields: Vec<ExportFieldSpec>,
    split_set: &SplitCategorySet,
) -> Vec<ExportFieldSpec> {
    let columns = build_export_columns(split_set);
    debug!("Adding {} split category export columns", columns.len());
    fields.extend(columns);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::CategoryTerm;

    fn split_set() -> SplitCategorySet {
        SplitCategorySet::new(vec![
            CategoryTerm::new(20, "Retail", "retail"),
            CategoryTerm::new(10, "Food", "food"),
        ])
    }

    #[test]
    fn test_columns_follow_configuration_order() {
        let columns = build_export_columns(&split_set());
        let roots: Vec<_> = columns.iter().map(|c| c.child_of).collect();
        assert_eq!(roots, vec![Some(CategoryId::new(20)), Some(CategoryId::new(10))]);
        assert!(columns.iter().all(|c| c.field == "category" && c.field_type == 6));
    }

    #[test]
    fn test_columns_appended_after_existing_fields() {
        let existing = ExportFieldSpec {
            field: "first_name".into(),
            child_of: None,
            field_type: 1,
            fields: None,
            table: "connections".into(),
            types: None,
        };

        let fields = extend_export_fields(vec![existing.clone()], &split_set());
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], existing);
    }

    #[test]
    fn test_serializes_with_host_keys() {
        let json = serde_json::to_value(ExportFieldSpec::category_subtree(CategoryId::new(10))).unwrap();
        assert_eq!(json["type"], 6);
        assert_eq!(json["child_of"], 10);
    }
}
