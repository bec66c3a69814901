/*
[INPUT]:  Sub-account identifiers, assets, amounts and optional parameters
[OUTPUT]: Raw JSON results of the sub-account endpoints
[POS]:    HTTP layer - sub-account endpoints (all SIGNED)
[UPDATE]: When adding sub-account endpoints or changing required parameters
*/

// ### Sub-account Endpoints
//
// Every method takes its required parameters as arguments and the rest
// (`recvWindow`, `page`, `limit`, ...) through `optional`.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{Result, Session, SpotClient};
use crate::types::{
    AccountType, Endpoint, FuturesTransferType, FuturesType, MarginTransferType, Params,
};

impl<S: Session> SpotClient<S> {
    /// Create a Virtual Sub-account (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/virtualSubAccount
    ///
    /// Requires the "trade" permission on the API key.
    pub async fn create_virtual_sub_account(
        &self,
        sub_account_string: &str,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/virtualSubAccount"),
            vec![("subAccountString", sub_account_string.into())],
            optional,
        )
        .await
    }

    /// Query Sub-account List (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/list
    ///
    /// Optional: `email`, `isFreeze`, `page`, `limit`, `recvWindow`
    pub async fn get_sub_account_list(&self, optional: Params) -> Result<Value> {
        self.call(Endpoint::get("/sapi/v1/sub-account/list"), Vec::new(), optional)
            .await
    }

    /// Query Sub-account Spot Asset Transfer History (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/sub/transfer/history
    ///
    /// `fromEmail` and `toEmail` cannot be sent together; the server defaults
    /// `fromEmail` to the master account.
    pub async fn get_sub_account_spot_transfer_history(&self, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/sub-account/sub/transfer/history"),
            Vec::new(),
            optional,
        )
        .await
    }

    /// Query Sub-account Futures Asset Transfer History (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/futures/internalTransfer
    ///
    /// Optional: `startTime`, `endTime`, `page`, `limit` (max 500), `recvWindow`
    pub async fn get_sub_account_futures_transfer_history(
        &self,
        email: &str,
        futures_type: FuturesType,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/sub-account/futures/internalTransfer"),
            vec![("email", email.into()), ("futuresType", futures_type.into())],
            optional,
        )
        .await
    }

    /// Sub-account Futures Asset Transfer (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/futures/internalTransfer
    pub async fn sub_account_futures_internal_transfer(
        &self,
        from_email: &str,
        to_email: &str,
        futures_type: FuturesType,
        asset: &str,
        amount: Decimal,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/futures/internalTransfer"),
            vec![
                ("fromEmail", from_email.into()),
                ("toEmail", to_email.into()),
                ("futuresType", futures_type.into()),
                ("asset", asset.into()),
                ("amount", amount.into()),
            ],
            optional,
        )
        .await
    }

    /// Query Sub-account Assets (For Master Account)
    ///
    /// GET /sapi/v3/sub-account/assets
    pub async fn get_sub_account_assets(&self, email: &str, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v3/sub-account/assets"),
            vec![("email", email.into())],
            optional,
        )
        .await
    }

    /// Query Sub-account Spot Assets Summary (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/spotSummary
    ///
    /// BTC-valued asset summary. Optional: `email`, `page`, `size` (max 20)
    pub async fn get_sub_account_spot_summary(&self, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/sub-account/spotSummary"),
            Vec::new(),
            optional,
        )
        .await
    }

    /// Get Sub-account Deposit Address (For Master Account)
    ///
    /// GET /sapi/v1/capital/deposit/subAddress
    ///
    /// Optional: `network`
    pub async fn sub_account_deposit_address(
        &self,
        email: &str,
        coin: &str,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/capital/deposit/subAddress"),
            vec![("email", email.into()), ("coin", coin.into())],
            optional,
        )
        .await
    }

    /// Get Sub-account Deposit History (For Master Account)
    ///
    /// GET /sapi/v1/capital/deposit/subHisrec
    ///
    /// Optional: `coin`, `status`, `startTime`, `endTime`, `limit`, `offset`
    pub async fn sub_account_deposit_history(
        &self,
        email: &str,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/capital/deposit/subHisrec"),
            vec![("email", email.into())],
            optional,
        )
        .await
    }

    /// Get Sub-account's Status on Margin/Futures (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/status
    pub async fn sub_account_status(&self, optional: Params) -> Result<Value> {
        self.call(Endpoint::get("/sapi/v1/sub-account/status"), Vec::new(), optional)
            .await
    }

    /// Enable Margin for Sub-account (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/margin/enable
    pub async fn sub_account_enable_margin(&self, email: &str, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/margin/enable"),
            vec![("email", email.into())],
            optional,
        )
        .await
    }

    /// Get Detail on Sub-account's Margin Account (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/margin/account
    pub async fn sub_account_margin_account(&self, email: &str, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/sub-account/margin/account"),
            vec![("email", email.into())],
            optional,
        )
        .await
    }

    /// Get Summary of Sub-account's Margin Account (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/margin/accountSummary
    pub async fn sub_account_margin_account_summary(&self, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/sub-account/margin/accountSummary"),
            Vec::new(),
            optional,
        )
        .await
    }

    /// Enable Futures for Sub-account (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/futures/enable
    pub async fn sub_account_enable_futures(&self, email: &str, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/futures/enable"),
            vec![("email", email.into())],
            optional,
        )
        .await
    }

    /// Get Detail on Sub-account's Futures Account V2 (For Master Account)
    ///
    /// GET /sapi/v2/sub-account/futures/account
    pub async fn sub_account_futures_account(
        &self,
        email: &str,
        futures_type: FuturesType,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v2/sub-account/futures/account"),
            vec![("email", email.into()), ("futuresType", futures_type.into())],
            optional,
        )
        .await
    }

    /// Get Summary of Sub-account's Futures Account V2 (For Master Account)
    ///
    /// GET /sapi/v2/sub-account/futures/accountSummary
    ///
    /// Optional: `page`, `limit` (max 20)
    pub async fn sub_account_futures_account_summary(
        &self,
        futures_type: FuturesType,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v2/sub-account/futures/accountSummary"),
            vec![("futuresType", futures_type.into())],
            optional,
        )
        .await
    }

    /// Get Futures Position-Risk of Sub-account V2 (For Master Account)
    ///
    /// GET /sapi/v2/sub-account/futures/positionRisk
    pub async fn sub_account_futures_position_risk(
        &self,
        email: &str,
        futures_type: FuturesType,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v2/sub-account/futures/positionRisk"),
            vec![("email", email.into()), ("futuresType", futures_type.into())],
            optional,
        )
        .await
    }

    /// Futures Transfer for Sub-account (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/futures/transfer
    pub async fn sub_account_futures_transfer(
        &self,
        email: &str,
        asset: &str,
        amount: Decimal,
        transfer_type: FuturesTransferType,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/futures/transfer"),
            vec![
                ("email", email.into()),
                ("asset", asset.into()),
                ("amount", amount.into()),
                ("type", transfer_type.into()),
            ],
            optional,
        )
        .await
    }

    /// Margin Transfer for Sub-account (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/margin/transfer
    pub async fn sub_account_margin_transfer(
        &self,
        email: &str,
        asset: &str,
        amount: Decimal,
        transfer_type: MarginTransferType,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/margin/transfer"),
            vec![
                ("email", email.into()),
                ("asset", asset.into()),
                ("amount", amount.into()),
                ("type", transfer_type.into()),
            ],
            optional,
        )
        .await
    }

    /// Transfer to Sub-account of Same Master (For Sub-account)
    ///
    /// POST /sapi/v1/sub-account/transfer/subToSub
    pub async fn sub_account_transfer_to_sub(
        &self,
        to_email: &str,
        asset: &str,
        amount: Decimal,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/transfer/subToSub"),
            vec![
                ("toEmail", to_email.into()),
                ("asset", asset.into()),
                ("amount", amount.into()),
            ],
            optional,
        )
        .await
    }

    /// Transfer to Master (For Sub-account)
    ///
    /// POST /sapi/v1/sub-account/transfer/subToMaster
    pub async fn sub_account_transfer_to_master(
        &self,
        asset: &str,
        amount: Decimal,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/transfer/subToMaster"),
            vec![("asset", asset.into()), ("amount", amount.into())],
            optional,
        )
        .await
    }

    /// Sub-account Transfer History (For Sub-account)
    ///
    /// GET /sapi/v1/sub-account/transfer/subUserHistory
    ///
    /// Optional: `asset`, `type` (1 in, 2 out), `startTime`, `endTime`, `limit`
    pub async fn sub_account_transfer_sub_account_history(
        &self,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/sub-account/transfer/subUserHistory"),
            Vec::new(),
            optional,
        )
        .await
    }

    /// Universal Transfer (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/universalTransfer
    ///
    /// Needs the "internal transfer" permission. Futures-to-futures transfers
    /// are rejected by the server. Optional `fromEmail`/`toEmail` default to
    /// the master account.
    pub async fn universal_transfer(
        &self,
        from_account_type: AccountType,
        to_account_type: AccountType,
        asset: &str,
        amount: Decimal,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/universalTransfer"),
            vec![
                ("fromAccountType", from_account_type.into()),
                ("toAccountType", to_account_type.into()),
                ("asset", asset.into()),
                ("amount", amount.into()),
            ],
            optional,
        )
        .await
    }

    /// Query Universal Transfer History (For Master Account)
    ///
    /// GET /sapi/v1/sub-account/universalTransfer
    pub async fn universal_transfer_history(&self, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/sub-account/universalTransfer"),
            Vec::new(),
            optional,
        )
        .await
    }

    /// Enable Leverage Token for Sub-account (For Master Account)
    ///
    /// POST /sapi/v1/sub-account/blvt/enable
    ///
    /// The exchange currently only accepts `enableBlvt = true`.
    pub async fn sub_account_enable_blvt(
        &self,
        email: &str,
        enable_blvt: bool,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/sub-account/blvt/enable"),
            vec![("email", email.into()), ("enableBlvt", enable_blvt.into())],
            optional,
        )
        .await
    }

    /// Deposit assets into the managed sub-account (For Investor Master Account)
    ///
    /// POST /sapi/v1/managed-subaccount/deposit
    pub async fn deposit_to_sub_account(
        &self,
        to_email: &str,
        asset: &str,
        amount: Decimal,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/managed-subaccount/deposit"),
            vec![
                ("toEmail", to_email.into()),
                ("asset", asset.into()),
                ("amount", amount.into()),
            ],
            optional,
        )
        .await
    }

    /// Query managed sub-account asset details (For Investor Master Account)
    ///
    /// GET /sapi/v1/managed-subaccount/asset
    pub async fn sub_account_asset_details(&self, email: &str, optional: Params) -> Result<Value> {
        self.call(
            Endpoint::get("/sapi/v1/managed-subaccount/asset"),
            vec![("email", email.into())],
            optional,
        )
        .await
    }

    /// Withdraw assets from the managed sub-account (For Investor Master Account)
    ///
    /// POST /sapi/v1/managed-subaccount/withdraw
    ///
    /// Optional: `transferDate`
    pub async fn withdraw_from_sub_account(
        &self,
        from_email: &str,
        asset: &str,
        amount: Decimal,
        optional: Params,
    ) -> Result<Value> {
        self.call(
            Endpoint::post("/sapi/v1/managed-subaccount/withdraw"),
            vec![
                ("fromEmail", from_email.into()),
                ("asset", asset.into()),
                ("amount", amount.into()),
            ],
            optional,
        )
        .await
    }
}
