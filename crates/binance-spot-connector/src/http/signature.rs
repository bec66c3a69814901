/*
[INPUT]:  Request parameters, a millisecond timestamp and the HMAC signer
[OUTPUT]: Canonical signed query strings (`...&timestamp=..&signature=..`)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing the canonical query format or signature placement
*/

use chrono::Utc;

use crate::auth::HmacSigner;
use crate::http::Result;
use crate::types::Params;

/// Signs canonical query strings for `SIGNED` endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    signer: HmacSigner,
}

impl RequestSigner {
    /// Create a new request signer with the given HMAC signer
    pub fn new(signer: HmacSigner) -> Self {
        Self { signer }
    }

    /// Current epoch time in milliseconds
    pub fn timestamp() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Sign parameters according to the Binance API specification.
    ///
    /// `timestamp` is injected (replacing any caller value), a caller
    /// `signature` is dropped, the parameters are form-urlencoded in insertion
    /// order, and the computed `signature` is appended last. Everything else,
    /// `recvWindow` included, is signed exactly as given.
    pub fn signed_query(&self, mut params: Params, timestamp: i64) -> Result<String> {
        params.remove("signature");
        params.insert("timestamp", timestamp);
        let query = params.to_query_string();
        let signature = self.signer.sign(query.as_bytes())?;
        Ok(format!("{query}&signature={signature}"))
    }
}
