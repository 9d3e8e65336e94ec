use anyhow::Result;
use serde_json::Value;
use tracing::info;

use super::{confirmed, display_value, EntityProfile, Session, Tally};
use crate::model::item::{key_info, ItemType, ProjectedItem};
use crate::prompt::{ask_i64, Prompt};

const POINTS_FIELD: &str = "effortPoints";

/// Snap estimates that are off the allowed scale to the nearest allowed value.
pub async fn run(
    session: &Session<'_>,
    profile: &EntityProfile,
    prompt: &mut dyn Prompt,
) -> Result<Tally> {
    let programs = session
        .reader
        .read_all(ItemType::Programs, session.max_items, None)
        .await?;
    println!("A total of {} Programs were retrieved", programs.len());

    println!();
    let program_id = ask_i64(prompt, "Enter the Program ID to search in: ")?;

    println!();
    println!("Verify these are correct:");
    println!(" Program to search in: {}", key_info(&programs, program_id));
    println!();

    let items = session
        .reader
        .read_all(profile.item_type, session.max_items, Some(program_id))
        .await?;

    apply(session, profile, &items, prompt).await
}

pub async fn apply(
    session: &Session<'_>,
    profile: &EntityProfile,
    items: &[ProjectedItem],
    prompt: &mut dyn Prompt,
) -> Result<Tally> {
    let mut tally = Tally::default();

    println!("Searching through the {}...", profile.plural.to_lowercase());
    for item in items {
        let (Some(id), Some(current)) = (item.id(), whole_points(item)) else {
            tally.skipped += 1;
            continue;
        };
        let Some(target) = profile.remap_points(current) else {
            tally.skipped += 1;
            continue;
        };

        println!();
        println!(
            "{}: ID={id} Points={current} -> {target} Title={}",
            profile.label(),
            display_value(item, "title")
        );

        let question = format!("DO YOU WANT TO RE-POINT THIS {}? ", profile.label());
        if !confirmed(session, prompt, &question)? {
            tally.skipped += 1;
            continue;
        }

        if session
            .replace_field(profile.item_type, id, POINTS_FIELD, Value::from(target))
            .await?
        {
            println!("  {} successfully updated.", profile.singular);
            info!(id, from = current, to = target, "points remapped");
            tally.succeeded += 1;
        } else {
            tally.failed += 1;
        }
    }

    tally.print_summary(profile);
    Ok(tally)
}

/// Estimate as a whole number, accepting integral floats such as `4.0`.
fn whole_points(item: &ProjectedItem) -> Option<i64> {
    let value = item.get(POINTS_FIELD)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}
