use anyhow::Result;
use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::commands;

pub async fn run(api: ApiClient, known: Vec<String>, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut controller = commands::build_controller(api, known.clone());
    controller.open_create(date)?;
    commands::edit_and_save(&mut controller, &known).await
}
