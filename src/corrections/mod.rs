//! Interactive clean-up procedures. Each one reads work items, matches them
//! against what the user entered, and writes fixes one item at a time.

pub mod points;
pub mod project_key;
pub mod release;

use anyhow::Result;
use serde_json::Value;

use crate::align::ItemReader;
use crate::config::ApiEndpoints;
use crate::model::item::{ItemType, ProjectedItem};
use crate::transport::{HttpResponse, Transport};

/// Per-entity settings that distinguish the Feature and Story variants of
/// each procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityProfile {
    pub item_type: ItemType,
    pub singular: &'static str,
    pub plural: &'static str,
    pub program_field: &'static str,
    pub release_field: &'static str,
    /// Accepted-date prefixes that make an item eligible for a new PI.
    pub eligible_years: &'static [&'static str],
    /// Accepted-date prefix that is counted but never changed.
    pub counted_year: &'static str,
    pub point_remap: &'static [(i64, i64)],
}

/// Invalid estimates and the nearest allowed value they are moved to.
pub const EFFORT_POINT_REMAP: &[(i64, i64)] = &[
    (4, 3),
    (6, 5),
    (7, 8),
    (9, 8),
    (10, 8),
    (11, 13),
    (12, 13),
    (21, 20),
];

pub const FEATURES: EntityProfile = EntityProfile {
    item_type: ItemType::Features,
    singular: "Feature",
    plural: "Features",
    program_field: "programId",
    release_field: "releaseId",
    eligible_years: &["2021-", "2022-"],
    counted_year: "2023-",
    point_remap: EFFORT_POINT_REMAP,
};

pub const STORIES: EntityProfile = EntityProfile {
    item_type: ItemType::Stories,
    singular: "Story",
    plural: "Stories",
    program_field: "programId",
    release_field: "releaseId",
    eligible_years: &["2021-", "2022-"],
    counted_year: "2023-",
    point_remap: EFFORT_POINT_REMAP,
};

impl EntityProfile {
    pub fn for_name(name: &str) -> Option<&'static EntityProfile> {
        match name.parse::<ItemType>().ok()? {
            ItemType::Features => Some(&FEATURES),
            ItemType::Stories => Some(&STORIES),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        self.singular.to_uppercase()
    }

    pub fn remap_points(&self, points: i64) -> Option<i64> {
        self.point_remap
            .iter()
            .find(|(from, _)| *from == points)
            .map(|(_, to)| *to)
    }
}

/// Everything a procedure needs to talk to one instance.
pub struct Session<'a> {
    pub reader: ItemReader<'a>,
    pub transport: &'a dyn Transport,
    pub endpoints: &'a ApiEndpoints,
    pub batch: bool,
    pub max_items: usize,
}

impl<'a> Session<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        endpoints: &'a ApiEndpoints,
        batch: bool,
        max_items: usize,
    ) -> Self {
        Self {
            reader: ItemReader::new(transport, endpoints),
            transport,
            endpoints,
            batch,
            max_items,
        }
    }

    pub fn collection_url(&self, item_type: ItemType) -> String {
        format!("{}/{}", self.endpoints.api, item_type)
    }

    pub fn item_url(&self, item_type: ItemType, id: i64) -> String {
        format!("{}/{}/{}", self.endpoints.api, item_type, id)
    }

    /// PATCH a single field with `replace`. Success is 204; anything else is
    /// printed and returned as a failed outcome.
    pub async fn replace_field(
        &self,
        item_type: ItemType,
        id: i64,
        field: &str,
        value: Value,
    ) -> Result<bool> {
        let url = self.item_url(item_type, id);
        let body = patch_body(&[PatchOp::replace(field, value)]);
        let resp = self.transport.patch(&url, &body).await?;
        if resp.status == 204 {
            Ok(true)
        } else {
            report_write_failure(&url, &resp, &body);
            Ok(false)
        }
    }
}

/// One entry of a PATCH document.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOp {
    pub path: String,
    pub op: &'static str,
    pub value: Value,
}

impl PatchOp {
    pub fn replace(field: &str, value: Value) -> Self {
        Self {
            path: format!("/{field}"),
            op: "replace",
            value,
        }
    }
}

pub fn patch_body(ops: &[PatchOp]) -> Value {
    ops.iter()
        .map(|op| serde_json::json!({ "path": op.path, "op": op.op, "value": op.value }))
        .collect()
}

pub fn report_write_failure(url: &str, resp: &HttpResponse, body: &Value) {
    println!("  Request failed: HTTP {} from {url}", resp.status);
    println!("  Response: {}", resp.body);
    println!("  Sent: {body}");
    tracing::warn!(url, status = resp.status, "write rejected");
}

/// Running per-item outcome counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub skipped: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.skipped + self.succeeded + self.failed
    }

    pub fn print_summary(&self, profile: &EntityProfile) {
        println!();
        println!("{} {} were skipped", self.skipped, profile.plural);
        println!("{} {} were successfully changed", self.succeeded, profile.plural);
        println!("{} {} failed to be changed", self.failed, profile.plural);
        tracing::info!(
            total = self.total(),
            skipped = self.skipped,
            succeeded = self.succeeded,
            failed = self.failed,
            "{} processed",
            profile.plural
        );
    }
}

/// Ask for per-item confirmation unless running in batch mode.
pub fn confirmed(
    session: &Session<'_>,
    prompt: &mut dyn crate::prompt::Prompt,
    question: &str,
) -> Result<bool> {
    if session.batch {
        return Ok(true);
    }
    Ok(prompt.ask(question)?.trim() == "y")
}

pub fn display_value(item: &ProjectedItem, field: &str) -> String {
    match item.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
