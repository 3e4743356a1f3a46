use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::commands;
use crate::ui;

pub async fn run(api: ApiClient, known: Vec<String>, id: &str, yes: bool) -> Result<()> {
    let mut controller = commands::build_controller(api, known);

    let spinner = ui::spinner(format!("Loading event {}", id));
    let loaded = controller.open_edit(id).await;
    spinner.finish_and_clear();
    loaded?;

    let deleted = controller
        .delete(|form| {
            if yes {
                return true;
            }
            Confirm::new()
                .with_prompt(format!("  Delete \"{}\"?", form.title))
                .default(false)
                .interact()
                .unwrap_or(false)
        })
        .await?;

    if deleted {
        println!("{}", "Deleted.".green());
    } else {
        println!("{}", "Kept.".dimmed());
        controller.close();
    }

    Ok(())
}
