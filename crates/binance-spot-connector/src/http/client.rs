/*
[INPUT]:  HTTP configuration (base URL, timeouts) and credentials
[OUTPUT]: Spot client holding one session, ready for endpoint calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::auth::Credentials;
use crate::http::{Result, Session, SignedSession};
use crate::types::{Endpoint, ParamValue, Params, RequestDescriptor};

/// Base URL for the Binance Spot REST API
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// HTTP client configuration.
///
/// Deserializable so host applications can keep it in their own config
/// files; durations are given in milliseconds there.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(rename = "timeout_ms", deserialize_with = "duration_from_millis")]
    pub timeout: Duration,
    #[serde(rename = "connect_timeout_ms", deserialize_with = "duration_from_millis")]
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn duration_from_millis<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

/// Binance Spot client for sub-account and BLVT endpoints.
///
/// Holds a single session; the endpoint methods live in `subaccount` and
/// `blvt`. Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SpotClient<S = SignedSession> {
    session: S,
}

impl SpotClient<SignedSession> {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            session: SignedSession::new(credentials, &config)?,
        })
    }
}

impl<S: Session> SpotClient<S> {
    /// Wrap any session implementation
    pub fn from_session(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Validate, merge and dispatch one endpoint call
    pub(crate) async fn call(
        &self,
        endpoint: Endpoint,
        required: Vec<(&'static str, ParamValue)>,
        optional: Params,
    ) -> Result<Value> {
        let request = RequestDescriptor::build(endpoint, required, optional)?;
        self.session.send(request).await
    }
}
