/*
[INPUT]:  Request descriptors, credentials and a configured reqwest client
[OUTPUT]: Parsed JSON response bodies or categorized errors
[POS]:    HTTP layer - signing and dispatch of every outbound request
[UPDATE]: When changing request placement, headers or response handling
*/

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, Method};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{Credentials, HmacSigner};
use crate::http::{BinanceError, ClientConfig, RequestSigner, Result};
use crate::types::{ParamValue, Params, RequestDescriptor, Security};

pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Largest `recvWindow` the exchange documents. Enforced server-side only.
pub const RECV_WINDOW_MAX_MS: u64 = 60_000;

/// Transport seam between endpoint functions and the network.
///
/// One call is one outbound request; implementations must not retry.
#[async_trait]
pub trait Session: Send + Sync {
    async fn send(&self, request: RequestDescriptor) -> Result<Value>;
}

/// Production session: signs with HMAC-SHA256 and dispatches through reqwest
#[derive(Debug, Clone)]
pub struct SignedSession {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    api_key_header: HeaderValue,
    signer: RequestSigner,
}

impl SignedSession {
    /// Create a session with its own reqwest client built from `config`
    pub fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| BinanceError::Config(format!("Failed to build HTTP client: {e}")))?;

        Self::with_http_client(credentials, &config.base_url, http_client)
    }

    /// Create a session around an existing reqwest client
    pub fn with_http_client(
        credentials: Credentials,
        base_url: &str,
        http_client: Client,
    ) -> Result<Self> {
        if credentials.api_key().is_empty() {
            return Err(BinanceError::Config("API key is empty".to_string()));
        }
        let api_key_header = HeaderValue::from_str(credentials.api_key()).map_err(|_| {
            BinanceError::Config("API key contains characters not allowed in a header".to_string())
        })?;
        let signer = RequestSigner::new(HmacSigner::new(credentials.api_secret())?);

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials,
            api_key_header,
            signer,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Send a `SIGNED` request.
    ///
    /// Injects `timestamp`, signs the canonical query string and appends
    /// `signature`. All parameters travel in the URL query, whatever the method.
    pub async fn sign_request(&self, request: RequestDescriptor) -> Result<Value> {
        let method = request.method().clone();
        let path = request.path();
        let params = request.into_params();

        if recv_window_exceeds_max(&params) {
            warn!(
                path,
                max_ms = RECV_WINDOW_MAX_MS,
                "recvWindow above documented maximum, sending unmodified"
            );
        }
        debug!(%method, path, param_count = params.len(), "dispatching signed request");

        let query = self.signer.signed_query(params, RequestSigner::timestamp())?;
        let url = self.url(path, Some(&query))?;
        self.dispatch(method, url).await
    }

    /// Send a request authenticated by the API key header alone
    pub async fn send_keyed(&self, request: RequestDescriptor) -> Result<Value> {
        let method = request.method().clone();
        let path = request.path();
        let params = request.into_params();

        debug!(%method, path, param_count = params.len(), "dispatching api-key request");

        let query = params.to_query_string();
        let url = self.url(path, (!query.is_empty()).then_some(query.as_str()))?;
        self.dispatch(method, url).await
    }

    fn url(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.set_query(query);
        Ok(url)
    }

    async fn dispatch(&self, method: Method, url: Url) -> Result<Value> {
        let response = self
            .http_client
            .request(method.clone(), url)
            .header(API_KEY_HEADER, self.api_key_header.clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%method, status = status.as_u16(), "request rejected by server");
            return Err(BinanceError::api_error(status, &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| BinanceError::InvalidResponse(format!("{e}; body: {body}")))
    }
}

#[async_trait]
impl Session for SignedSession {
    async fn send(&self, request: RequestDescriptor) -> Result<Value> {
        match request.security() {
            Security::Signed => self.sign_request(request).await,
            Security::ApiKey => self.send_keyed(request).await,
        }
    }
}

fn recv_window_exceeds_max(params: &Params) -> bool {
    let max = Decimal::from(RECV_WINDOW_MAX_MS);
    match params.get("recvWindow") {
        Some(ParamValue::Int(value)) => u64::try_from(*value).is_ok_and(|value| value > RECV_WINDOW_MAX_MS),
        Some(ParamValue::UInt(value)) => *value > RECV_WINDOW_MAX_MS,
        Some(ParamValue::Decimal(value)) => *value > max,
        Some(ParamValue::Str(value)) => value
            .trim()
            .parse::<Decimal>()
            .is_ok_and(|value| value > max),
        _ => false,
    }
}
