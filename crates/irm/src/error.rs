//! Error types for the rate models.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Errors that can occur when querying or updating a rate model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrmError {
    /// A state-changing call came from someone other than the controller
    #[error("Caller {caller} is not authorized (controller is {controller})")]
    NotAuthorized { caller: Address, controller: Address },

    /// The clock reads earlier than the market's last update
    #[error("Invalid timestamp: now {now} is before last update {last_update}")]
    InvalidTimestamp { now: u64, last_update: u64 },

    /// The fixed rate can only be set once
    #[error("Rate already set")]
    RateAlreadySet,

    /// Fixed rate above the allowed maximum
    #[error("Invalid rate {rate}: exceeds maximum {max}")]
    InvalidRate { rate: U256, max: U256 },

    /// Curve parameters violate an invariant
    #[error("Invalid curve configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for rate model operations.
pub type Result<T> = std::result::Result<T, IrmError>;
