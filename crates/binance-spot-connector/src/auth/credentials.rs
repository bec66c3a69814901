/*
[INPUT]:  API key and secret, passed in or read from the environment
[OUTPUT]: Credentials owned by the signed session
[POS]:    Auth layer - credential storage
[UPDATE]: When adding credential sources
*/

use std::fmt;

use crate::http::{BinanceError, Result};

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// API key pair. `Debug` never prints the secret.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read `BINANCE_API_KEY` and `BINANCE_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| BinanceError::Config(format!("{name} is not set")))
        };
        Ok(Self::new(read(API_KEY_ENV)?, read(API_SECRET_ENV)?))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
