/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums mapped to the exchange's wire codes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::params::ParamValue;

/// `futuresType` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuturesType {
    UsdtMargined,
    CoinMargined,
}

impl FuturesType {
    pub fn code(self) -> i64 {
        match self {
            FuturesType::UsdtMargined => 1,
            FuturesType::CoinMargined => 2,
        }
    }
}

/// `type` parameter of the sub-account futures transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuturesTransferType {
    /// Spot account to USDT-margined futures account
    SpotToUsdtFutures,
    /// USDT-margined futures account to spot account
    UsdtFuturesToSpot,
    /// Spot account to COIN-margined futures account
    SpotToCoinFutures,
    /// COIN-margined futures account to spot account
    CoinFuturesToSpot,
}

impl FuturesTransferType {
    pub fn code(self) -> i64 {
        match self {
            FuturesTransferType::SpotToUsdtFutures => 1,
            FuturesTransferType::UsdtFuturesToSpot => 2,
            FuturesTransferType::SpotToCoinFutures => 3,
            FuturesTransferType::CoinFuturesToSpot => 4,
        }
    }
}

/// `type` parameter of the sub-account margin transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginTransferType {
    SpotToMargin,
    MarginToSpot,
}

impl MarginTransferType {
    pub fn code(self) -> i64 {
        match self {
            MarginTransferType::SpotToMargin => 1,
            MarginTransferType::MarginToSpot => 2,
        }
    }
}

/// Account types accepted by the universal transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Spot,
    UsdtFuture,
    CoinFuture,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Spot => "SPOT",
            AccountType::UsdtFuture => "USDT_FUTURE",
            AccountType::CoinFuture => "COIN_FUTURE",
        }
    }
}

impl From<FuturesType> for ParamValue {
    fn from(value: FuturesType) -> Self {
        ParamValue::Int(value.code())
    }
}

impl From<FuturesTransferType> for ParamValue {
    fn from(value: FuturesTransferType) -> Self {
        ParamValue::Int(value.code())
    }
}

impl From<MarginTransferType> for ParamValue {
    fn from(value: MarginTransferType) -> Self {
        ParamValue::Int(value.code())
    }
}

impl From<AccountType> for ParamValue {
    fn from(value: AccountType) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}
