use anyhow::Result;

use crate::client::ApiClient;
use crate::commands;
use crate::ui;

pub async fn run(api: ApiClient, known: Vec<String>, id: &str) -> Result<()> {
    let mut controller = commands::build_controller(api, known.clone());

    let spinner = ui::spinner(format!("Loading event {}", id));
    let loaded = controller.open_edit(id).await;
    spinner.finish_and_clear();
    loaded?;

    commands::edit_and_save(&mut controller, &known).await
}
