//! Settings page registration: the section, its fields, and the custom
//! repeatable category select field.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::{
    CATEGORIES_KEY, DISPLAY_CATEGORY_METABOX_KEY, PLUGIN_ID, SETTINGS_PAGE_HOOK,
    SPLIT_CATEGORY_FIELD_TYPE,
};
use crate::errors::Result;
use crate::host::{TemplateHostTrait, TermSelectArgs};
use crate::terms::CategoryId;

const SETTINGS_TAB: &str = "advanced";
const SETTINGS_SECTION: &str = "general";

/// A section on the host settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSection {
    pub plugin_id: String,
    pub tab: String,
    pub id: String,
    pub position: u32,
    pub title: String,
    pub page_hook: String,
}

/// A field on the host settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsField {
    pub plugin_id: String,
    pub id: String,
    pub position: u32,
    pub page_hook: String,
    pub tab: String,
    pub section: String,
    pub title: String,
    pub desc: Option<String>,
    pub help: Option<String>,
    #[serde(rename = "type")]
    pub field_type: String,
    pub default: Value,
}

pub fn register_settings_sections(mut sections: Vec<SettingsSection>) -> Vec<SettingsSection> {
    sections.push(SettingsSection {
        plugin_id: PLUGIN_ID.to_string(),
        tab: SETTINGS_TAB.to_string(),
        id: SETTINGS_SECTION.to_string(),
        position: 5,
        title: "Split Categories".to_string(),
        page_hook: SETTINGS_PAGE_HOOK.to_string(),
    });

    sections
}

pub fn register_settings_fields(mut fields: Vec<SettingsField>) -> Vec<SettingsField> {
    let field = |id: &str, position: u32, title: &str, field_type: &str, default: Value| {
        SettingsField {
            plugin_id: PLUGIN_ID.to_string(),
            id: id.to_string(),
            position,
            page_hook: SETTINGS_PAGE_HOOK.to_string(),
            tab: SETTINGS_TAB.to_string(),
            section: SETTINGS_SECTION.to_string(),
            title: title.to_string(),
            desc: None,
            help: None,
            field_type: field_type.to_string(),
            default,
        }
    };

    fields.push(SettingsField {
        desc: Some(
            "Whether or not to display the Categories metabox when adding or editing an entry."
                .to_string(),
        ),
        help: Some(
            "Check this option if you wish to hide the display of the Categories metabox."
                .to_string(),
        ),
        ..field(
            DISPLAY_CATEGORY_METABOX_KEY,
            10,
            "Categories metabox?",
            "checkbox",
            json!(1),
        )
    });

    fields.push(SettingsField {
        desc: Some("Select the parent categories to split into their own metabox.".to_string()),
        ..field(
            CATEGORIES_KEY,
            20,
            "Select",
            SPLIT_CATEGORY_FIELD_TYPE,
            json!([]),
        )
    });

    fields
}

/// Renders the repeatable category select: the escaped description followed
/// by the host's category multiselect.
pub fn render_category_select_field(
    name: &str,
    selected: &[CategoryId],
    field: &SettingsField,
    templates: &dyn TemplateHostTrait,
) -> Result<String> {
    let mut html = String::new();

    if let Some(desc) = field.desc.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!(
            r#"<div class="description"> {}</div>"#,
            html_escape::encode_text(desc)
        ));
    }

    html.push_str(&templates.term_select(&TermSelectArgs::multiselect(name, selected.to_vec()))?);

    Ok(html)
}
