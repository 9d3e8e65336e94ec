use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// REST collection a work item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Epics,
    Capabilities,
    Features,
    Stories,
    Defects,
    Tasks,
    Programs,
    Releases,
    Themes,
    Teams,
}

impl ItemType {
    pub const ALL: [ItemType; 10] = [
        ItemType::Epics,
        ItemType::Capabilities,
        ItemType::Features,
        ItemType::Stories,
        ItemType::Defects,
        ItemType::Tasks,
        ItemType::Programs,
        ItemType::Releases,
        ItemType::Themes,
        ItemType::Teams,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Epics => "epics",
            ItemType::Capabilities => "capabilities",
            ItemType::Features => "features",
            ItemType::Stories => "stories",
            ItemType::Defects => "defects",
            ItemType::Tasks => "tasks",
            ItemType::Programs => "programs",
            ItemType::Releases => "releases",
            ItemType::Themes => "themes",
            ItemType::Teams => "teams",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ItemType::ALL
            .iter()
            .find(|t| t.as_str() == lower)
            .copied()
            .ok_or_else(|| format!("unknown item type: {s}"))
    }
}

/// A work item reduced to its known, non-null fields plus `id` and `itemtype`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectedItem(Map<String, Value>);

impl ProjectedItem {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<i64> {
        self.get_i64("id")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.0.get(field).and_then(Value::as_i64)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Render `id/title` for the item with the given id, or an empty string.
pub fn key_info(items: &[ProjectedItem], id: i64) -> String {
    items
        .iter()
        .filter(|item| item.id() == Some(id))
        .last()
        .map(|item| match item.get_str("title") {
            Some(title) => format!("{id}/{title}"),
            None => id.to_string(),
        })
        .unwrap_or_default()
}
