/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns, fixtures or endpoints
*/

//! Common test utilities for binance-spot-connector tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use binance_spot_connector::{
    AccountType, ClientConfig, Credentials, FuturesTransferType, FuturesType, HmacSigner,
    MarginTransferType, Params, RequestDescriptor, Result, Session, SpotClient,
};
use rust_decimal::Decimal;
use serde_json::Value;
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the test credentials
pub fn client_for(server: &MockServer) -> SpotClient {
    SpotClient::with_config(
        Credentials::new(TEST_API_KEY, TEST_API_SECRET),
        ClientConfig::default().with_base_url(server.uri()),
    )
    .expect("client init")
}

/// Session that records descriptors instead of touching the network
#[derive(Debug, Clone, Default)]
pub struct RecordingSession {
    requests: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl RecordingSession {
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().expect("recording lock").clone()
    }
}

#[async_trait]
impl Session for RecordingSession {
    async fn send(&self, request: RequestDescriptor) -> Result<Value> {
        self.requests.lock().expect("recording lock").push(request);
        Ok(serde_json::json!({}))
    }
}

pub fn recording_client() -> (SpotClient<RecordingSession>, RecordingSession) {
    let session = RecordingSession::default();
    (SpotClient::from_session(session.clone()), session)
}

/// Matches requests whose `signature` is a valid HMAC of the rest of the query
pub struct ValidSignature {
    signer: HmacSigner,
}

impl ValidSignature {
    pub fn new() -> Self {
        Self {
            signer: HmacSigner::new(TEST_API_SECRET).expect("signer"),
        }
    }
}

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let Some(query) = request.url.query() else {
            return false;
        };
        let Some((payload, signature)) = query.rsplit_once("&signature=") else {
            return false;
        };
        payload.contains("timestamp=") && self.signer.verify(payload.as_bytes(), signature)
    }
}

/// Query parameter names of a received request, in order
pub fn query_keys(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect()
}

pub fn amount() -> Decimal {
    "1.5".parse().expect("amount")
}

/// Invoke an endpoint by name with fixture arguments.
///
/// The string argument named `blank` is passed as `""`; pass `""` to fill
/// every argument.
pub async fn invoke<S: Session>(
    client: &SpotClient<S>,
    endpoint: &str,
    blank: &str,
    optional: Params,
) -> Result<Value> {
    let arg = |name: &str, value: &'static str| if name == blank { "" } else { value };

    match endpoint {
        "create_virtual_sub_account" => {
            client
                .create_virtual_sub_account(arg("subAccountString", "virtual"), optional)
                .await
        }
        "get_sub_account_list" => client.get_sub_account_list(optional).await,
        "get_sub_account_spot_transfer_history" => {
            client.get_sub_account_spot_transfer_history(optional).await
        }
        "get_sub_account_futures_transfer_history" => {
            client
                .get_sub_account_futures_transfer_history(
                    arg("email", "a@b.com"),
                    FuturesType::UsdtMargined,
                    optional,
                )
                .await
        }
        "sub_account_futures_internal_transfer" => {
            client
                .sub_account_futures_internal_transfer(
                    arg("fromEmail", "a@b.com"),
                    arg("toEmail", "c@d.com"),
                    FuturesType::CoinMargined,
                    arg("asset", "BTC"),
                    amount(),
                    optional,
                )
                .await
        }
        "get_sub_account_assets" => {
            client
                .get_sub_account_assets(arg("email", "a@b.com"), optional)
                .await
        }
        "get_sub_account_spot_summary" => client.get_sub_account_spot_summary(optional).await,
        "sub_account_deposit_address" => {
            client
                .sub_account_deposit_address(arg("email", "a@b.com"), arg("coin", "BNB"), optional)
                .await
        }
        "sub_account_deposit_history" => {
            client
                .sub_account_deposit_history(arg("email", "a@b.com"), optional)
                .await
        }
        "sub_account_status" => client.sub_account_status(optional).await,
        "sub_account_enable_margin" => {
            client
                .sub_account_enable_margin(arg("email", "a@b.com"), optional)
                .await
        }
        "sub_account_margin_account" => {
            client
                .sub_account_margin_account(arg("email", "a@b.com"), optional)
                .await
        }
        "sub_account_margin_account_summary" => {
            client.sub_account_margin_account_summary(optional).await
        }
        "sub_account_enable_futures" => {
            client
                .sub_account_enable_futures(arg("email", "a@b.com"), optional)
                .await
        }
        "sub_account_futures_account" => {
            client
                .sub_account_futures_account(
                    arg("email", "a@b.com"),
                    FuturesType::UsdtMargined,
                    optional,
                )
                .await
        }
        "sub_account_futures_account_summary" => {
            client
                .sub_account_futures_account_summary(FuturesType::CoinMargined, optional)
                .await
        }
        "sub_account_futures_position_risk" => {
            client
                .sub_account_futures_position_risk(
                    arg("email", "a@b.com"),
                    FuturesType::UsdtMargined,
                    optional,
                )
                .await
        }
        "sub_account_futures_transfer" => {
            client
                .sub_account_futures_transfer(
                    arg("email", "a@b.com"),
                    arg("asset", "BTC"),
                    amount(),
                    FuturesTransferType::UsdtFuturesToSpot,
                    optional,
                )
                .await
        }
        "sub_account_margin_transfer" => {
            client
                .sub_account_margin_transfer(
                    arg("email", "a@b.com"),
                    arg("asset", "BTC"),
                    amount(),
                    MarginTransferType::SpotToMargin,
                    optional,
                )
                .await
        }
        "sub_account_transfer_to_sub" => {
            client
                .sub_account_transfer_to_sub(
                    arg("toEmail", "c@d.com"),
                    arg("asset", "BTC"),
                    amount(),
                    optional,
                )
                .await
        }
        "sub_account_transfer_to_master" => {
            client
                .sub_account_transfer_to_master(arg("asset", "BTC"), amount(), optional)
                .await
        }
        "sub_account_transfer_sub_account_history" => {
            client.sub_account_transfer_sub_account_history(optional).await
        }
        "universal_transfer" => {
            client
                .universal_transfer(
                    AccountType::Spot,
                    AccountType::UsdtFuture,
                    arg("asset", "USDT"),
                    amount(),
                    optional,
                )
                .await
        }
        "universal_transfer_history" => client.universal_transfer_history(optional).await,
        "sub_account_enable_blvt" => {
            client
                .sub_account_enable_blvt(arg("email", "a@b.com"), true, optional)
                .await
        }
        "deposit_to_sub_account" => {
            client
                .deposit_to_sub_account(
                    arg("toEmail", "c@d.com"),
                    arg("asset", "BTC"),
                    amount(),
                    optional,
                )
                .await
        }
        "sub_account_asset_details" => {
            client
                .sub_account_asset_details(arg("email", "a@b.com"), optional)
                .await
        }
        "withdraw_from_sub_account" => {
            client
                .withdraw_from_sub_account(
                    arg("fromEmail", "a@b.com"),
                    arg("asset", "BTC"),
                    amount(),
                    optional,
                )
                .await
        }
        "token_info" => client.token_info(optional).await,
        "subscribe" => {
            client
                .subscribe(arg("tokenName", "BTCDOWN"), amount(), optional)
                .await
        }
        "subscription_record" => client.subscription_record(optional).await,
        "redeem" => {
            client
                .redeem(arg("tokenName", "BTCDOWN"), amount(), optional)
                .await
        }
        "redemption_record" => client.redemption_record(optional).await,
        "user_limit" => client.user_limit(optional).await,
        other => panic!("unknown endpoint {other}"),
    }
}
