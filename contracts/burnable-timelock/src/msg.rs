use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::ReleaseStage;

#[cw_serde]
pub struct InstantiateMsg {
    /// cw20 contract whose tokens are custodied
    pub token: String,
    /// Recipient of the final release transfer
    pub beneficiary: String,
    /// Target release timestamp (unix seconds), must be in the future
    pub release_time: u64,
    /// Cooling-off window in seconds, 10 to 45 days
    pub release_delay: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Halt release and burn; opens the beneficiary-change hatch (owner)
    Pause {},
    /// Resume normal operation (owner)
    Unpause {},
    /// Redirect the final transfer; only while paused (owner)
    ChangeBeneficiary { new_beneficiary: String },
    /// Destroy part of the custodied balance (owner)
    Burn { amount: Uint128 },
    /// File the release request, or execute the final transfer once the
    /// cooling-off window has passed (owner)
    Release {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Immutable creation parameters
    #[returns(ConfigResponse)]
    Config {},

    /// Mutable release/burn/pause state
    #[returns(StatusResponse)]
    Status {},

    /// Live custodied balance as reported by the token contract
    #[returns(TokenBalanceResponse)]
    TokenBalance {},
}

// Response types

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token: Addr,
    pub release_time: u64,
    pub release_delay: u64,
    /// Earliest timestamp a release request may be filed
    pub request_time: u64,
}

#[cw_serde]
pub struct StatusResponse {
    pub beneficiary: Addr,
    pub stage: ReleaseStage,
    pub release_requested: bool,
    pub requested_at: Option<u64>,
    pub total_burned: Uint128,
    pub paused: bool,
}

#[cw_serde]
pub struct TokenBalanceResponse {
    pub balance: Uint128,
}
