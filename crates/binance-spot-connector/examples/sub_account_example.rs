/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET and a sub-account email
[OUTPUT]: Console output of sub-account queries
[POS]:    Examples - master account sub-account management
[UPDATE]: When sub-account endpoint signatures change
*/

//! Example: Sub-account queries and a futures transfer
//!
//! Run with `RUST_LOG=debug` to see the dispatched requests.

use anyhow::{Context, Result};
use binance_spot_connector::{
    ClientConfig, Credentials, FuturesTransferType, FuturesType, Params, SpotClient,
};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let credentials = Credentials::from_env().context("load credentials")?;
    let base_url = std::env::var("BINANCE_BASE_URL")
        .unwrap_or_else(|_| binance_spot_connector::http::DEFAULT_BASE_URL.to_string());
    let client = SpotClient::with_config(credentials, ClientConfig::default().with_base_url(base_url))?;

    let email = std::env::var("SUB_ACCOUNT_EMAIL").unwrap_or_else(|_| "alice@test.com".to_string());

    let list = client
        .get_sub_account_list(Params::new().with("limit", 10).with("recvWindow", 5000))
        .await?;
    info!(%list, "sub-account list");

    let assets = client.get_sub_account_assets(&email, Params::new()).await?;
    info!(%assets, "sub-account assets");

    let summary = client
        .sub_account_futures_account_summary(FuturesType::UsdtMargined, Params::new())
        .await?;
    info!(%summary, "futures account summary");

    if std::env::var("RUN_TRANSFER").is_ok() {
        let transfer = client
            .sub_account_futures_transfer(
                &email,
                "USDT",
                Decimal::new(1, 0),
                FuturesTransferType::UsdtFuturesToSpot,
                Params::new(),
            )
            .await?;
        info!(%transfer, "futures transfer submitted");
    }

    Ok(())
}
