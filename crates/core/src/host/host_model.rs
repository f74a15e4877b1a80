//! Request-scoped models exchanged with the host directory.

use serde::{Deserialize, Serialize};

use crate::terms::{CategoryId, CategoryTerm};

/// Where the current request is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestContext {
    Public,
    Admin { doing_ajax: bool },
}

impl RequestContext {
    pub fn is_admin(&self) -> bool {
        matches!(self, RequestContext::Admin { .. })
    }
}

/// Administrative notice surfaced by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminNotice {
    pub message: String,
}

impl AdminNotice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div id="message" class="error"><p><strong>ERROR:</strong> {}</p></div>"#,
            html_escape::encode_text(&self.message)
        )
    }
}

/// Arguments for the host's hierarchical term checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermChecklistArgs {
    pub child_of: CategoryId,
    pub selected: Vec<CategoryId>,
}

/// Arguments for the host's term select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSelectArgs {
    pub name: String,
    pub selected: Vec<CategoryId>,
    pub multiple: bool,
    pub enhanced: bool,
    pub hierarchical: bool,
    pub hide_empty: bool,
    pub hide_if_empty: bool,
    pub show_select_all: bool,
    pub placeholder_option: bool,
    pub order_by: String,
}

impl TermSelectArgs {
    /// Plain multiselect of every category, ordered by name.
    pub fn multiselect(name: impl Into<String>, selected: Vec<CategoryId>) -> Self {
        Self {
            name: name.into(),
            selected,
            multiple: true,
            enhanced: false,
            hierarchical: true,
            hide_empty: false,
            hide_if_empty: false,
            show_select_all: false,
            placeholder_option: false,
            order_by: "name".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryBlockType {
    List,
    Block,
}

/// Attributes for rendering an entry's category block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBlockAtts {
    /// Restrict the list to the subtree rooted here.
    pub child_of: Option<CategoryId>,
    #[serde(rename = "type")]
    pub block_type: CategoryBlockType,
    pub label: String,
}

impl CategoryBlockAtts {
    pub fn subtree_list(root: CategoryId) -> Self {
        Self {
            child_of: Some(root),
            block_type: CategoryBlockType::List,
            label: String::new(),
        }
    }
}

/// Properties of the category block currently being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBlockProperties {
    pub link: bool,
    pub item_tag: String,
}

impl Default for CategoryBlockProperties {
    fn default() -> Self {
        Self {
            link: false,
            item_tag: "li".to_string(),
        }
    }
}

/// One category item handed to the item filter while a block renders.
#[derive(Debug, Clone, Copy)]
pub struct CategoryItemContext<'a> {
    pub term: &'a CategoryTerm,
    /// Number of categories attached to the entry.
    pub count: usize,
    pub index: usize,
    pub block: &'a CategoryBlockProperties,
}
