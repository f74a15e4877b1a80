use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ADMIN_PAGE_HOOKS;
use crate::policy::SelectionLimit;

/// Host-side configuration of the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionConfig {
    /// Admin pages the generic category panel is shown on.
    pub admin_page_hooks: Vec<String>,
    pub selection_limit: SelectionLimit,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            admin_page_hooks: DEFAULT_ADMIN_PAGE_HOOKS
                .iter()
                .map(|hook| hook.to_string())
                .collect(),
            selection_limit: SelectionLimit::default(),
        }
    }
}
