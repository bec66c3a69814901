/*
[INPUT]:  Message bytes and the API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or encoding
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{BinanceError, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed by the API secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: Vec<u8>,
}

impl HmacSigner {
    /// Create a signer from the API secret. An empty secret is a configuration error.
    pub fn new(secret: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(BinanceError::Config("API secret is empty".to_string()));
        }
        Ok(Self {
            secret: secret.as_bytes().to_vec(),
        })
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| BinanceError::Config(format!("Invalid API secret: {e}")))
    }

    /// Sign a message and return the lowercase hex signature
    pub fn sign(&self, message: &[u8]) -> Result<String> {
        let mut mac = self.mac()?;
        mac.update(message);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Verify a hex signature against a message
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let Ok(mut mac) = self.mac() else {
            return false;
        };
        mac.update(message);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
