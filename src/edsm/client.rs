//! Blocking EDSM API client.

use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::models::Coords;

/// Error looking up a system on EDSM.
#[derive(Debug, Error)]
pub enum EdsmError {
    /// The HTTP client could not be built, or a response body could not
    /// be read or decoded.
    #[error("EDSM request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// EDSM does not know a system by that name.
    #[error("EDSM knows no system named {name:?}")]
    UnknownSystem {
        /// The name as it was queried.
        name: String,
    },
    /// EDSM knows the system but carries no coordinates for it.
    #[error("EDSM has no coordinates for system {name:?}")]
    MissingCoords {
        /// The name as it was queried.
        name: String,
    },
}

/// Default EDSM endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.edsm.net";

/// Default user agent for EDSM requests.
pub const DEFAULT_USER_AGENT: &str = "sightseer/0.1";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`EdsmClient`].
#[derive(Debug, Clone)]
pub struct EdsmConfig {
    /// Base URL of the EDSM API.
    pub base_url: String,
    /// Per-request timeout; a stalled request counts as a failed try.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for EdsmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl EdsmConfig {
    /// Points the client at a different EDSM-compatible endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A system record as served by `api-v1/system` with coordinates
/// requested. Systems without known coordinates come without the field.
#[derive(Debug, Deserialize)]
struct SystemRecord {
    coords: Option<Coords>,
}

/// EDSM answers an unknown system with an empty array instead of a
/// record, so the reply takes two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SystemReply {
    Record(SystemRecord),
    Empty(Vec<serde_json::Value>),
}

/// Blocking client for the EDSM system API.
///
/// Each lookup is retried until EDSM answers: transport errors and
/// non-success statuses are logged and tried again without a cap, since
/// no route can be computed with a coordinate missing. Only a payload
/// that cannot yield coordinates (an unknown system, or a record
/// without any) fails the lookup.
pub struct EdsmClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl EdsmClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self, EdsmError> {
        Self::with_config(EdsmConfig::default())
    }

    /// Creates a client with explicit configuration.
    pub fn with_config(config: EdsmConfig) -> Result<Self, EdsmError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetches the galactic coordinates of a system by name.
    pub fn coords(&self, system: &str) -> Result<Coords, EdsmError> {
        info!("fetching coordinates for {}", system);
        let url = self.system_url();

        let reply = loop {
            let result = self
                .http
                .get(&url)
                .query(&[("systemName", system), ("showCoordinates", "1")])
                .send();
            match result {
                Ok(response) if response.status().is_success() => {
                    break response.json::<SystemReply>()?;
                }
                Ok(response) => {
                    warn!(
                        "EDSM answered {} for {}, trying again",
                        response.status(),
                        system
                    );
                }
                Err(err) => {
                    warn!("EDSM request for {} failed ({}), trying again", system, err);
                }
            }
        };

        match reply {
            SystemReply::Record(SystemRecord {
                coords: Some(coords),
            }) => Ok(coords),
            SystemReply::Record(SystemRecord { coords: None }) => Err(EdsmError::MissingCoords {
                name: system.to_string(),
            }),
            SystemReply::Empty(_) => Err(EdsmError::UnknownSystem {
                name: system.to_string(),
            }),
        }
    }

    /// The system endpoint under the configured base URL.
    fn system_url(&self) -> String {
        format!("{}/api-v1/system", self.base_url.trim_end_matches('/'))
    }
}
