//! Burnable timelock: holds a cw20 balance for a beneficiary behind a
//! two-phase, time-gated release, lets the owner burn part of the custody
//! at any time, and provides a pause-guarded beneficiary escape hatch.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
