//! Discord webhook client.

use reqwest::Client;
use serde_json::Value;

use crate::error::WorkerError;

pub struct DiscordClient {
    client: Client,
}

impl DiscordClient {
    pub fn new() -> Result<Self, WorkerError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| WorkerError::Discord(format!("Client build error: {e}")))?;
        Ok(Self { client })
    }

    /// Post a set of embeds to a webhook URL. No retries; a failed
    /// delivery surfaces to the caller.
    pub async fn send_webhook(&self, url: &str, embeds: &[Value]) -> Result<(), WorkerError> {
        let payload = serde_json::json!({ "embeds": embeds });

        let resp = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| WorkerError::Discord(format!("Request error: {e}")))?;

        if !resp.status().is_success() {
            return Err(WorkerError::Discord(format!("HTTP {}", resp.status())));
        }

        Ok(())
    }
}
