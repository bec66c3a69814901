/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance Spot connector crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod validation;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner};

// Re-export commonly used types from http
pub use http::{
    API_KEY_HEADER,
    BinanceError,
    ClientConfig,
    RECV_WINDOW_MAX_MS,
    RequestSigner,
    Result,
    Session,
    SignedSession,
    SpotClient,
};

// Re-export all types
pub use types::*;

pub use validation::require_param;
