//! Admin panels (metaboxes) for the entry edit screens.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_ID_PREFIX, GENERIC_CATEGORY_PANEL_ID, PUBLIC_PAGE};
use crate::errors::Result;
use crate::host::{RequestContext, TemplateHostTrait, TermChecklistArgs};
use crate::resolver::SplitCategorySet;
use crate::terms::{CategoryId, EntryId, TermRepositoryTrait};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelContext {
    Normal,
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPriority {
    High,
    Core,
    Default,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelFieldType {
    /// Checklist of the subtree rooted at `category`.
    CategoryChecklist { category: CategoryId },
    /// The host's own category checklist minus the listed subtrees.
    DefaultCategoryChecklist { exclude_tree: Vec<CategoryId> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelFieldSpec {
    pub id: String,
    #[serde(flatten)]
    pub field_type: PanelFieldType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: String,
    pub title: String,
    pub context: PanelContext,
    pub priority: PanelPriority,
    pub fields: Vec<PanelFieldSpec>,
    /// `None` leaves the host's default pages in place.
    pub pages: Option<Vec<String>>,
}

impl PanelSpec {
    fn dedicated(id: CategoryId, title: &str) -> Self {
        let panel_id = format!("{CATEGORY_ID_PREFIX}{id}");
        Self {
            id: panel_id.clone(),
            title: title.to_string(),
            context: PanelContext::Side,
            priority: PanelPriority::Core,
            fields: vec![PanelFieldSpec {
                id: panel_id,
                field_type: PanelFieldType::CategoryChecklist { category: id },
            }],
            pages: None,
        }
    }

    fn generic(exclude_tree: Vec<CategoryId>, pages: Vec<String>) -> Self {
        Self {
            id: GENERIC_CATEGORY_PANEL_ID.to_string(),
            title: "Categories".to_string(),
            context: PanelContext::Side,
            priority: PanelPriority::Core,
            fields: vec![PanelFieldSpec {
                id: GENERIC_CATEGORY_PANEL_ID.to_string(),
                field_type: PanelFieldType::DefaultCategoryChecklist { exclude_tree },
            }],
            pages: Some(pages),
        }
    }
}

/// Ordered panel registrations keyed by id.
///
/// Adding a panel whose id is already registered replaces it in place, so
/// re-running a registration never duplicates panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelRegistry {
    panels: Vec<PanelSpec>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, panel: PanelSpec) {
        match self.panels.iter_mut().find(|p| p.id == panel.id) {
            Some(existing) => *existing = panel,
            None => self.panels.push(panel),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<PanelSpec> {
        let index = self.panels.iter().position(|p| p.id == id)?;
        Some(self.panels.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&PanelSpec> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn panels(&self) -> &[PanelSpec] {
        &self.panels
    }

    pub fn ids(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Pages the generic panel is registered on.
pub fn generic_panel_pages(context: RequestContext, admin_page_hooks: &[String]) -> Vec<String> {
    match context {
        RequestContext::Public => vec![PUBLIC_PAGE.to_string()],
        // Page hooks are not defined during AJAX requests.
        RequestContext::Admin { doing_ajax: true } => Vec::new(),
        RequestContext::Admin { doing_ajax: false } => admin_page_hooks.to_vec(),
    }
}

/// Dedicated panels in configuration order, then the generic panel unless
/// it is suppressed.
pub fn build_admin_panels(
    split_set: &SplitCategorySet,
    show_default: bool,
    pages: Vec<String>,
) -> Vec<PanelSpec> {
    let mut panels: Vec<PanelSpec> = split_set
        .iter()
        .map(|term| PanelSpec::dedicated(term.id, &term.name))
        .collect();

    if show_default {
        panels.push(PanelSpec::generic(split_set.ids(), pages));
    }

    panels
}

/// Registers the panels built by [`build_admin_panels`].
///
/// The generic panel is always removed first and, when shown, re-added so it
/// ends up last with the split subtrees excluded.
pub fn apply_admin_panels(
    registry: &mut PanelRegistry,
    split_set: &SplitCategorySet,
    show_default: bool,
    pages: Vec<String>,
) {
    let (generic, dedicated): (Vec<_>, Vec<_>) = build_admin_panels(split_set, show_default, pages)
        .into_iter()
        .partition(|p| p.id == GENERIC_CATEGORY_PANEL_ID);

    debug!(
        "Registering {} split category panels (generic panel shown: {})",
        dedicated.len(),
        show_default
    );

    for panel in dedicated {
        registry.add(panel);
    }

    registry.remove(GENERIC_CATEGORY_PANEL_ID);
    for panel in generic {
        registry.add(panel);
    }
}

/// Renders the restricted checklist field of a dedicated panel, with the
/// entry's current categories checked.
pub fn render_category_checklist_field(
    root: CategoryId,
    entry_id: EntryId,
    terms: &dyn TermRepositoryTrait,
    templates: &dyn TemplateHostTrait,
) -> Result<String> {
    let args = TermChecklistArgs {
        child_of: root,
        selected: terms.get_relationships(entry_id)?,
    };

    Ok(format!(
        r#"<div class="categorydiv" id="taxonomy-category-{root}"><div id="{CATEGORY_ID_PREFIX}{root}" class="tabs-panel" style="max-height: 300px; overflow-y: scroll;">{}</div></div>"#,
        templates.term_checklist(&args)?
    ))
}

/// Submitted checklist values are stored as posted.
pub fn sanitize_category_checklist<T>(value: T) -> T {
    value
}
