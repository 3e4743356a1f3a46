use anyhow::Result;

use crate::client::{ApiClient, EventApi};
use crate::render;
use crate::ui;

pub async fn run(api: ApiClient, id: &str) -> Result<()> {
    let spinner = ui::spinner(format!("Loading event {}", id));
    let event = api.fetch_event(id).await;
    spinner.finish_and_clear();

    render::print_event(&event?);
    Ok(())
}
