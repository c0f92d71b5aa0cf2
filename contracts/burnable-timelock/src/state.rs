use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// Lower bound on the cooling-off window (10 days, in seconds)
pub const MIN_RELEASE_DELAY: u64 = 10 * 86_400;

/// Upper bound on the cooling-off window (45 days, in seconds)
pub const MAX_RELEASE_DELAY: u64 = 45 * 86_400;

#[cw_serde]
pub enum ReleaseStage {
    Locked,
    Requested,
    Released,
}

#[cw_serde]
pub struct Config {
    /// Administrator (pause, burn, release, beneficiary change)
    pub owner: Addr,
    /// cw20 contract holding the custodied balance
    pub token: Addr,
    /// Target release timestamp (seconds)
    pub release_time: u64,
    /// Mandatory window between release request and execution (seconds)
    pub release_delay: u64,
}

impl Config {
    /// Earliest moment a release request may be filed.
    /// Instantiation guarantees `release_delay <= release_time`.
    pub fn request_time(&self) -> u64 {
        self.release_time - self.release_delay
    }
}

#[cw_serde]
pub struct ReleaseState {
    /// Recipient of the final release transfer; mutable only while paused
    pub beneficiary: Addr,
    /// Release progress; never moves backwards
    pub stage: ReleaseStage,
    /// When the release request was filed (None until then)
    pub requested_at: Option<u64>,
    /// Running total of destroyed tokens
    pub total_burned: Uint128,
    /// Emergency pause flag
    pub paused: bool,
}

/// Immutable creation parameters
pub const CONFIG: Item<Config> = Item::new("config");

/// Mutable release/burn/pause state
pub const STATE: Item<ReleaseState> = Item::new("state");
