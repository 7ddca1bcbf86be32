//! Roster Loading
//!
//! One fetch of the reachable users per mount. On failure the roster
//! stays empty and the error is surfaced; there is no retry.

use crate::app::config::Config;
use crate::shared::error::ClientError;
use crate::shared::user::{RosterResponse, UserProfile};
use reqwest::Client;
use std::sync::mpsc::{channel, Receiver};
use tokio::runtime::Runtime;

/// Result of a background roster fetch.
pub type RosterResult = Result<Vec<UserProfile>, ClientError>;

/// Blocking client for the user service.
pub struct RosterClient {
    config: Config,
    client: Client,
}

impl RosterClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch all users.
    pub fn fetch_users(&self) -> RosterResult {
        let url = self.config.api_url("/api/users");
        let rt = Runtime::new()
            .map_err(|e| ClientError::network(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(ClientError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            let roster = response.json::<RosterResponse>().await?;
            Ok(roster.users)
        })
    }
}

/// Fetch the roster on a worker thread.
///
/// The result arrives on the returned channel and is polled by the
/// session each frame.
pub fn spawn_fetch(config: &Config) -> Receiver<RosterResult> {
    let config = config.clone();
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let client = RosterClient::new(config);
        let result = client.fetch_users();
        if let Err(ref e) = result {
            tracing::error!("roster fetch failed: {}", e);
        }
        let _ = tx.send(result);
    });
    rx
}
