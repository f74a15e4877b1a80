//! Domain models for category terms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Host id of a directory entry.
pub type EntryId = u64;

/// Identifier of a category term in the host taxonomy.
///
/// Settings forms post ids as strings while the taxonomy hands out integers,
/// so both forms deserialize into the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCategoryId", into = "u64")]
pub struct CategoryId(u64);

impl CategoryId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<CategoryId> for u64 {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidCategoryId(s.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Int(u64),
    Str(String),
}

impl TryFrom<RawCategoryId> for CategoryId {
    type Error = ValidationError;

    fn try_from(raw: RawCategoryId) -> Result<Self, Self::Error> {
        match raw {
            RawCategoryId::Int(id) => Ok(Self(id)),
            RawCategoryId::Str(s) => s.parse(),
        }
    }
}

/// A category term (hierarchical via parent)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTerm {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub parent: Option<CategoryId>,
}

impl CategoryTerm {
    pub fn new(id: u64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            slug: slug.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: u64) -> Self {
        self.parent = Some(CategoryId(parent));
        self
    }
}

/// Directory home page settings used when building category permalinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryHome {
    pub force_home: bool,
    pub page_id: u64,
}
