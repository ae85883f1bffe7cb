use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Upper bound on the outbound fetch; slow pages fail rather than hang the
/// request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Desktop Chrome UA; some sites serve stripped-down markup to unknown
/// agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Factory for the shared outbound HTTP client.
pub fn create_client() -> Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}
