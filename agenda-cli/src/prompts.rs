//! Interactive prompts for the event form.
//!
//! This is the terminal rendering of the edit session: one prompt per
//! field, pre-filled with the draft's current values so an unchanged
//! answer leaves the field alone.

use std::path::PathBuf;

use agenda_core::event_type::{EventType, KNOWN_TYPES, OTHER_LABEL};
use agenda_core::priority::PRIORITIES;
use agenda_core::EventForm;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use owo_colors::OwoColorize;

/// Walk the user through every field of the draft.
pub fn fill_form(form: &mut EventForm, known_collaborators: &[String]) -> Result<()> {
    // --- Title ---
    form.title = Input::<String>::new()
        .with_prompt("  Title")
        .default(form.title.clone())
        .show_default(!form.title.is_empty())
        .allow_empty(true)
        .interact_text()?;

    // --- Date ---
    form.date = prompt_date("  Date (YYYY-MM-DD)", &form.date)?;

    // --- All day / time ---
    form.all_day = Confirm::new()
        .with_prompt("  All day?")
        .default(form.all_day)
        .interact()?;

    if form.all_day {
        form.time.clear();
    } else {
        form.time = Input::<String>::new()
            .with_prompt("  Time (HH:MM, empty for all day)")
            .default(form.time.clone())
            .show_default(!form.time.is_empty())
            .allow_empty(true)
            .interact_text()?;
    }

    // --- Type ---
    let mut type_labels: Vec<&str> = KNOWN_TYPES.iter().map(|t| t.label()).collect();
    type_labels.push(OTHER_LABEL);
    let current = KNOWN_TYPES
        .iter()
        .position(|t| *t == form.event_type)
        .unwrap_or(type_labels.len() - 1);

    let picked = Select::new()
        .with_prompt("  Type")
        .items(&type_labels)
        .default(current)
        .interact()?;

    if picked < KNOWN_TYPES.len() {
        form.event_type = KNOWN_TYPES[picked].clone();
        form.type_custom.clear();
    } else {
        form.event_type = EventType::Other(form.type_custom.clone());
        form.type_custom = Input::<String>::new()
            .with_prompt("  Custom type")
            .default(form.type_custom.clone())
            .show_default(!form.type_custom.is_empty())
            .allow_empty(true)
            .interact_text()?;
    }

    // --- Collaborators ---
    if !known_collaborators.is_empty() {
        let checked_flags: Vec<bool> = known_collaborators
            .iter()
            .map(|name| form.checked_collaborators.contains(name))
            .collect();

        let selected = MultiSelect::new()
            .with_prompt("  Collaborators (space to toggle)")
            .items(known_collaborators)
            .defaults(&checked_flags)
            .interact()?;

        form.checked_collaborators = selected
            .into_iter()
            .map(|i| known_collaborators[i].clone())
            .collect();
    }

    form.other_collaborators = Input::<String>::new()
        .with_prompt("  Other collaborators (comma separated, skip)")
        .default(form.other_collaborators.clone())
        .show_default(!form.other_collaborators.is_empty())
        .allow_empty(true)
        .interact_text()?;

    // --- Priority ---
    let priority_labels: Vec<&str> = PRIORITIES.iter().map(|p| p.label()).collect();
    let current = PRIORITIES
        .iter()
        .position(|p| *p == form.priority)
        .unwrap_or(1);
    let picked = Select::new()
        .with_prompt("  Priority")
        .items(&priority_labels)
        .default(current)
        .interact()?;
    form.priority = PRIORITIES[picked];

    // --- Notes ---
    form.notes = Input::<String>::new()
        .with_prompt("  Notes (skip)")
        .default(form.notes.clone())
        .show_default(!form.notes.is_empty())
        .allow_empty(true)
        .interact_text()?;

    // --- Attachments ---
    if !form.files.is_empty() {
        println!("  Attached:");
        for file in &form.files {
            println!("    {}", file.dimmed());
        }
    }

    let uploads: String = Input::<String>::new()
        .with_prompt("  Attach files (comma separated paths, skip)")
        .default(String::new())
        .show_default(false)
        .allow_empty(true)
        .interact_text()?;
    form.pending_uploads = uploads
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect();

    Ok(())
}

/// Prompt for a date with retry on parse errors. An empty answer keeps
/// an empty field so validation can report it.
fn prompt_date(prompt: &str, current: &str) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .show_default(!current.is_empty())
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            return Ok(input);
        }
        match NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(date.to_string()),
            Err(_) => {
                eprintln!("  {}", format!("Not a valid date: {}", input.trim()).red());
            }
        }
    }
}
