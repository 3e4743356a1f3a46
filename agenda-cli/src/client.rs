//! HTTP client for the agenda server.

use std::path::{Path, PathBuf};

use agenda_core::{DeleteEventRequest, Event, MutationResponse, SaveEventRequest};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;

/// Transport seam between the form controller and the server. The
/// controller only ever talks through this trait, so tests can swap in a
/// recording fake.
#[async_trait]
pub trait EventApi: Send + Sync {
    /// GET /event/{id}
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// POST /save_event. Returns the record id when the server sends one
    /// back (it does on create).
    async fn save_event(&self, payload: &SaveEventRequest) -> Result<Option<String>>;

    /// POST /delete_event
    async fn delete_event(&self, id: &str) -> Result<()>;

    /// POST /upload_files (multipart: `event_id` + repeated `files`)
    async fn upload_files(&self, event_id: &str, paths: &[PathBuf]) -> Result<()>;

    /// GET /download_file/{path}
    async fn download_file(&self, relative_path: &str) -> Result<Vec<u8>>;
}

/// Real client backed by reqwest.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a mutating request and interpret the status envelope.
    async fn post_mutation<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        action: &str,
    ) -> Result<Option<String>> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to {}", action))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Server returned {} while trying to {}", status, action);
        }

        let envelope: MutationResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid response while trying to {}", action))?;

        envelope
            .into_result()
            .with_context(|| format!("Failed to {}", action))
    }
}

#[async_trait]
impl EventApi for ApiClient {
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let response = self
            .http
            .get(self.url(&format!("/event/{}", id)))
            .send()
            .await
            .with_context(|| format!("Failed to fetch event {}", id))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Server returned {} for event {}", status, id);
        }

        response
            .json()
            .await
            .with_context(|| format!("Invalid record for event {}", id))
    }

    async fn save_event(&self, payload: &SaveEventRequest) -> Result<Option<String>> {
        self.post_mutation("/save_event", payload, "save the event")
            .await
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        let body = DeleteEventRequest { id: id.to_string() };
        self.post_mutation("/delete_event", &body, "delete the event")
            .await?;
        Ok(())
    }

    async fn upload_files(&self, event_id: &str, paths: &[PathBuf]) -> Result<()> {
        let mut form = reqwest::multipart::Form::new().text("event_id", event_id.to_string());

        for path in paths {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = file_name_of(path);
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str("application/octet-stream")?;
            form = form.part("files", part);
        }

        let response = self
            .http
            .post(self.url("/upload_files"))
            .multipart(form)
            .send()
            .await
            .context("Failed to upload attachments")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Server returned {} while uploading attachments", status);
        }

        let envelope: MutationResponse = response
            .json()
            .await
            .context("Invalid response while uploading attachments")?;
        envelope.into_result().context("Failed to upload attachments")?;
        Ok(())
    }

    async fn download_file(&self, relative_path: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(self.url(&format!("/download_file/{}", relative_path)))
            .send()
            .await
            .with_context(|| format!("Failed to download {}", relative_path))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Server returned {} for {}", status, relative_path);
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read {}", relative_path))?;
        Ok(bytes.to_vec())
    }
}

/// Last path component as a plain string, for the multipart file name.
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "attachment".to_string())
}
