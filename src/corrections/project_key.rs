use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use super::{report_write_failure, EntityProfile, Session, Tally};
use crate::model::item::ProjectedItem;
use crate::prompt::{ask_i64, ask_text, Prompt};

/// Fields the platform assigns itself on create.
const SERVER_ASSIGNED: &[&str] = &["id", "createDate", "self"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectKeyFix {
    pub item_id: i64,
    pub program_id: i64,
    pub project_key: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectKeyReport {
    pub tally: Tally,
    /// Body of the create response, which holds the new item's ID.
    pub new_id: Option<String>,
}

/// Re-create an item under the right Jira project by posting a copy of it.
pub async fn run(
    session: &Session<'_>,
    profile: &EntityProfile,
    prompt: &mut dyn Prompt,
) -> Result<ProjectKeyReport> {
    println!();
    let fix = ProjectKeyFix {
        item_id: ask_i64(prompt, &format!("Enter the {} ID to fix: ", profile.singular))?,
        program_id: ask_i64(
            prompt,
            &format!("Enter the Program ID for this {}: ", profile.singular),
        )?,
        project_key: ask_text(
            prompt,
            &format!(
                "Enter the name of the Jira Project to use for this {}: ",
                profile.singular
            ),
        )?,
    };

    println!();
    println!("Verify these are correct:");
    println!(" {} ID to fix:   {}", profile.singular, fix.item_id);
    println!(" Program ID of the {}: {}", profile.singular, fix.program_id);
    println!(" Jira Project to use: {}", fix.project_key);
    println!();

    let items = session
        .reader
        .read_one(profile.item_type, fix.item_id)
        .await?;
    let source = items
        .into_iter()
        .next()
        .with_context(|| format!("{} {} was not returned", profile.singular, fix.item_id))?;

    apply(session, profile, &fix, source).await
}

pub async fn apply(
    session: &Session<'_>,
    profile: &EntityProfile,
    fix: &ProjectKeyFix,
    source: ProjectedItem,
) -> Result<ProjectKeyReport> {
    println!("  Attempting to fix the Jira Project...");
    let body = copy_with_project_key(source, &fix.project_key);
    let url = session.collection_url(profile.item_type);

    let resp = session.transport.post(&url, &body).await?;
    let mut report = ProjectKeyReport::default();
    if resp.status == 201 {
        let new_id = resp.body.trim().to_string();
        println!("  {} successfully copied to ID: {new_id}", profile.singular);
        info!(from = fix.item_id, to = %new_id, "{} copied", profile.singular);
        report.tally.succeeded += 1;
        report.new_id = Some(new_id);
    } else {
        println!("{} could not be copied", profile.singular);
        report_write_failure(&url, &resp, &body);
        report.tally.failed += 1;
    }
    Ok(report)
}

/// Build the create document: the source record without server-assigned
/// fields, with the project key overwritten.
pub fn copy_with_project_key(source: ProjectedItem, project_key: &str) -> Value {
    let mut fields = source.into_map();
    for name in SERVER_ASSIGNED {
        fields.remove(*name);
    }
    fields.insert("jiraProjectKey".into(), Value::String(project_key.into()));
    Value::Object(fields)
}
