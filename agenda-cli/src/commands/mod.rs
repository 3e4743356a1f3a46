pub mod delete;
pub mod download;
pub mod edit;
pub mod new;
pub mod show;

use agenda_core::ValidationError;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::{ApiClient, EventApi};
use crate::controller::{FormController, SaveOutcome};
use crate::prompts;
use crate::ui;

/// Build a controller whose refresh hook tells the user their calendar
/// view is out of date (the terminal has no grid to redraw).
pub fn build_controller(api: ApiClient, known: Vec<String>) -> FormController<ApiClient> {
    FormController::new(
        api,
        known,
        Box::new(|| {
            println!("{}", "Calendar updated on the server.".dimmed());
        }),
    )
}

/// Prompt, save, and report; re-prompt when local validation rejects the
/// draft so the session behaves like a modal that stays open on error.
pub(crate) async fn edit_and_save<A: EventApi>(
    controller: &mut FormController<A>,
    known: &[String],
) -> Result<()> {
    loop {
        prompts::fill_form(controller.form_mut()?, known)?;
        println!();

        let spinner = ui::spinner("Saving event");
        let result = controller.save().await;
        spinner.finish_and_clear();

        match result {
            Ok(outcome) => {
                report_save(&outcome);
                return Ok(());
            }
            Err(e) if e.downcast_ref::<ValidationError>().is_some() => {
                eprintln!("  {}", e.to_string().red());
            }
            Err(e) => return Err(e),
        }
    }
}

fn report_save(outcome: &SaveOutcome) {
    let verb = if outcome.created { "Created" } else { "Saved" };
    match &outcome.event_id {
        Some(id) => println!("{}", format!("{} event {}", verb, id).green()),
        None => println!("{}", format!("{} event", verb).green()),
    }
    if let Some(warning) = &outcome.upload_warning {
        eprintln!("{}", format!("Warning: {}", warning).yellow());
    }
}
