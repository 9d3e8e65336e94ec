pub mod fields;
pub mod reader;

use serde_json::{Map, Value};

use crate::error::AlignError;
use crate::model::item::{ItemType, ProjectedItem};
use fields::KNOWN_FIELDS;

pub use reader::ItemReader;

/// Copy `id`, the item type, and every known non-null field out of a raw item.
pub fn project(item_type: ItemType, raw: &Value) -> Result<ProjectedItem, AlignError> {
    let source = raw.as_object().ok_or_else(|| AlignError::NotAnObject {
        item_type: item_type.to_string(),
    })?;

    let id = source
        .get("id")
        .filter(|v| !v.is_null())
        .ok_or_else(|| AlignError::MissingId {
            item_type: item_type.to_string(),
        })?;

    let mut fields = Map::new();
    fields.insert("id".into(), id.clone());
    fields.insert("itemtype".into(), Value::String(item_type.as_str().into()));

    for &name in KNOWN_FIELDS {
        match source.get(name) {
            Some(Value::Null) | None => {}
            Some(value) => {
                fields.insert(name.to_string(), value.clone());
            }
        }
    }

    Ok(ProjectedItem::from_map(fields))
}

/// Pull the platform version out of the About page markup.
pub fn parse_version(about_html: &str) -> Option<String> {
    const MARKER: &str = "data-version";
    const OFFSET: usize = 14;
    const LEN: usize = 14;

    let start = about_html.find(MARKER)? + OFFSET;
    let version: String = about_html.get(start..)?.chars().take(LEN).collect();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}
