//! Terminal rendering of event records.

use agenda_core::{Event, Priority};
use owo_colors::OwoColorize;

/// Print one event the way a calendar cell would summarize it.
pub fn print_event(event: &Event) {
    let priority_tag = match event.priority {
        Priority::High => format!(" {}", "[high]".red()),
        Priority::Low => format!(" {}", "[low]".dimmed()),
        Priority::Normal => String::new(),
    };

    println!("{}{}", event.title.bold(), priority_tag);

    let time = if event.is_all_day() {
        "all day".to_string()
    } else {
        event.time.clone()
    };
    println!(
        "  {} {} {}",
        event.date,
        time,
        format!("({})", event.event_type).dimmed()
    );

    if !event.collaborators.is_empty() {
        println!("  With: {}", event.collaborators);
    }
    if !event.notes.is_empty() {
        println!("  Notes: {}", event.notes);
    }
    if !event.files.is_empty() {
        println!("  Attachments:");
        for file in &event.files {
            println!("    {}", file.dimmed());
        }
    }
}
