/*
[INPUT]:  Leveraged token names, amounts and optional parameters
[OUTPUT]: Raw JSON results of the BLVT endpoints
[POS]:    HTTP layer - leveraged token endpoints
[UPDATE]: When adding BLVT endpoints or changing required parameters
*/

// ### BLVT Endpoints

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{Result, Session, SpotClient};
use crate::types::{Endpoint, Params};

impl<S: Session> SpotClient<S> {
    /// Get BLVT Info
    ///
    /// GET /sapi/v1/blvt/tokenInfo
    ///
    /// API key only, no signature. Optional: `tokenName` (e.g. "BTCDOWN")
    pub async fn token_info(&self, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/blvt/tokenInfo").api_key_only(),
            Vec::new(),
            optional,
        )
        .await
    }

    /// Subscribe BLVT
    ///
    /// POST /sapi/v1/blvt/subscribe
    ///
    /// `cost` is spent in USDT.
    pub async fn subscribe(&self, token_name: &str, cost: Decimal, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/blvt/subscribe"),
            vec![("tokenName", token_name.into()), ("cost", cost.into())],
            optional,
        )
        .await
    }

    /// Query Subscription Record
    ///
    /// GET /sapi/v1/blvt/subscribe/record
    ///
    /// Optional: `tokenName`, `id`, `startTime`, `endTime`, `limit` (max 1000)
    pub async fn subscription_record(&self, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/blvt/subscribe/record"),
            Vec::new(),
            optional,
        )
        .await
    }

    /// Redeem BLVT
    ///
    /// POST /sapi/v1/blvt/redeem
    pub async fn redeem(&self, token_name: &str, amount: Decimal, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/blvt/redeem"),
            vec![("tokenName", token_name.into()), ("amount", amount.into())],
            optional,
        )
        .await
    }

    /// Query Redemption Record
    ///
    /// GET /sapi/v1/blvt/redeem/record
    pub async fn redemption_record(&self, optional: Params) -> Result<Value> {
        self.call(Endpoint::get("/sapi/v1/blvt/redeem/record"), Vec::new(), optional)
            .await
    }

    /// Get BLVT User Limit Info
    ///
    /// GET /sapi/v1/blvt/userLimit
    pub async fn user_limit(&self, optional: Params) -> Result<Value> {
        self.call(Endpoint::get("/sapi/v1/blvt/userLimit"), Vec::new(), optional)
            .await
    }
}
