/*
[INPUT]:  Client configuration, credentials and endpoint calls
[OUTPUT]: Signed HTTP requests and parsed JSON results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod blvt;
pub mod client;
pub mod error;
pub mod session;
pub mod signature;
pub mod subaccount;

pub use error::{BinanceError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, DEFAULT_BASE_URL, SpotClient};
pub use session::{API_KEY_HEADER, RECV_WINDOW_MAX_MS, Session, SignedSession};
