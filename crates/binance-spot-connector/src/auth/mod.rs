/*
[INPUT]:  API key, API secret and message bytes
[OUTPUT]: Credentials and HMAC-SHA256 signatures
[POS]:    Auth layer - handles Binance API authentication material
[UPDATE]: When credential sources or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::HmacSigner;
