/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET
[OUTPUT]: Console output of BLVT info and redemption
[POS]:    Examples - leveraged token redemption
[UPDATE]: When BLVT endpoint signatures change
*/

use anyhow::Result;
use binance_spot_connector::{BinanceError, Credentials, Params, SpotClient};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = SpotClient::new(Credentials::from_env()?)?;

    let info = client
        .token_info(Params::new().with("tokenName", "BTCDOWN"))
        .await?;
    info!(%info, "token info");

    let limits = client.user_limit(Params::new()).await?;
    info!(%limits, "user limit");

    match client
        .redeem("BTCDOWN", Decimal::new(1, 1), Params::new().with("recvWindow", 5000))
        .await
    {
        Ok(result) => info!(%result, "redeemed"),
        Err(BinanceError::Api { code, message, .. }) => {
            warn!(?code, %message, "redeem rejected");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
