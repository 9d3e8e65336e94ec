use anyhow::Result;
use serde_json::Value;
use tracing::info;

use super::{confirmed, display_value, EntityProfile, Session, Tally};
use crate::model::item::{key_info, ItemType, ProjectedItem};
use crate::prompt::{ask_i64, Prompt};

/// What the user asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseFix {
    pub program_id: i64,
    pub state_id: i64,
    pub new_release_id: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseReport {
    pub tally: Tally,
    /// Matching items accepted in the profile's counted year.
    pub counted_year: usize,
}

/// Move accepted items out of the Unassigned Backlog into a Planning Interval.
pub async fn run(
    session: &Session<'_>,
    profile: &EntityProfile,
    prompt: &mut dyn Prompt,
) -> Result<ReleaseReport> {
    let programs = session
        .reader
        .read_all(ItemType::Programs, session.max_items, None)
        .await?;
    println!("A total of {} Programs were retrieved", programs.len());

    let releases = session
        .reader
        .read_all(ItemType::Releases, session.max_items, None)
        .await?;
    println!("A total of {} Releases/PIs were retrieved", releases.len());

    println!();
    let fix = ReleaseFix {
        program_id: ask_i64(prompt, "Enter the Program ID to search in: ")?,
        state_id: ask_i64(prompt, "Enter the State ID to search for (5 is Accepted): ")?,
        new_release_id: ask_i64(prompt, "Enter the NEW PI ID (Release) to use: ")?,
    };

    println!();
    println!("Verify these are correct:");
    println!(" Program to search in: {}", key_info(&programs, fix.program_id));
    println!(
        " PI to set {} to: {}",
        profile.plural,
        key_info(&releases, fix.new_release_id)
    );
    println!();

    let items = session
        .reader
        .read_all(profile.item_type, session.max_items, Some(fix.program_id))
        .await?;

    apply(session, profile, &fix, &items, prompt).await
}

pub async fn apply(
    session: &Session<'_>,
    profile: &EntityProfile,
    fix: &ReleaseFix,
    items: &[ProjectedItem],
    prompt: &mut dyn Prompt,
) -> Result<ReleaseReport> {
    let mut report = ReleaseReport::default();

    println!("Searching through the {}...", profile.plural.to_lowercase());
    for item in items {
        // Already scheduled into a PI.
        if item.contains(profile.release_field) {
            report.tally.skipped += 1;
            continue;
        }
        if item.get_i64(profile.program_field) != Some(fix.program_id)
            || item.get_i64("state") != Some(fix.state_id)
        {
            report.tally.skipped += 1;
            continue;
        }
        let Some(id) = item.id() else {
            report.tally.skipped += 1;
            continue;
        };

        let accepted = item.get_str("acceptedDate").unwrap_or_default();
        let title = item.get_str("title").unwrap_or_default();

        let mut line = format!(
            "{}: ID={id} State={}",
            profile.label(),
            display_value(item, "state")
        );
        if let Some(key) = item.get_str("externalKey") {
            line.push_str(&format!(" JIRA Key={key}"));
        }
        line.push_str(&format!(" Accepted Date={accepted} Title={title}"));
        println!();
        println!("{line}");

        if accepted.contains(profile.counted_year) {
            report.counted_year += 1;
        }

        if !profile.eligible_years.iter().any(|y| accepted.contains(y)) {
            println!("  Not accepted in {}, skipping", eligible_label(profile));
            report.tally.skipped += 1;
            continue;
        }

        let question = format!("DO YOU WANT TO MOVE THIS {}? ", profile.label());
        if !confirmed(session, prompt, &question)? {
            report.tally.skipped += 1;
            continue;
        }
        println!("  Attempting to move the {}...", profile.singular.to_lowercase());

        // Description is required on write, so fill it from the title first.
        if !item.contains("description") {
            let ok = session
                .replace_field(
                    profile.item_type,
                    id,
                    "description",
                    Value::String(title.to_string()),
                )
                .await?;
            if !ok {
                println!(
                    "  Description could not be updated, skipping this {}",
                    profile.singular
                );
                report.tally.failed += 1;
                continue;
            }
        }

        let moved = session
            .replace_field(
                profile.item_type,
                id,
                profile.release_field,
                Value::from(fix.new_release_id),
            )
            .await?;
        if moved {
            println!("  {} successfully updated.", profile.singular);
            info!(id, release = fix.new_release_id, "{} moved", profile.singular);
            report.tally.succeeded += 1;
        } else {
            report.tally.failed += 1;
        }
    }

    report.tally.print_summary(profile);
    println!(
        "{} {} Accepted in {}",
        report.counted_year,
        profile.plural,
        profile.counted_year.trim_end_matches('-')
    );
    Ok(report)
}

fn eligible_label(profile: &EntityProfile) -> String {
    profile
        .eligible_years
        .iter()
        .map(|y| y.trim_end_matches('-'))
        .collect::<Vec<_>>()
        .join("/")
}
