//! Domain models for the split category settings.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::terms::CategoryId;

/// Persisted configuration, stored as one JSON object option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCategorySettings {
    /// Selected categories; insertion order is display order.
    #[serde(default, deserialize_with = "deserialize_category_ids")]
    pub categories: Vec<CategoryId>,

    /// `None` when the admin never saved the checkbox.
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_category_metabox: Option<bool>,
}

impl SplitCategorySettings {
    /// The generic category panel is hidden only when explicitly disabled.
    pub fn should_show_default_panel(&self) -> bool {
        self.display_category_metabox.unwrap_or(true)
    }
}

/// Settings as submitted from the admin form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitCategorySettingsUpdate {
    pub categories: Option<Vec<String>>,
    pub display_category_metabox: Option<bool>,
}

/// Accepts an array of integer or numeric string ids. Anything else is not a
/// category and is dropped; a non-array value reads as no categories.
fn deserialize_category_ids<'de, D>(deserializer: D) -> Result<Vec<CategoryId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<CategoryId>(item) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("Dropping unparseable category id: {}", e);
                None
            }
        })
        .collect())
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(value) => Some(is_truthy(&value)),
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        _ => false,
    }
}
