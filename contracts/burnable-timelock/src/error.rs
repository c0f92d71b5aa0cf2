use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Release time must be in the future")]
    InvalidReleaseTime {},

    #[error("Release delay must be between 10 and 45 days")]
    InvalidReleaseDelay {},

    #[error("Contract is already paused")]
    AlreadyPaused {},

    #[error("Contract is not paused")]
    NotPaused {},

    #[error("Contract is paused")]
    ContractPaused {},

    #[error("Time gate has not been reached")]
    TooEarly {},

    #[error("Amount must be greater than zero")]
    ZeroAmount {},

    #[error("Amount exceeds the custodied balance")]
    InsufficientBalance {},

    #[error("Balance has already been released")]
    AlreadyReleased {},
}
