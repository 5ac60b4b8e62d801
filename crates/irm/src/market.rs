//! Market identity and the externally owned market totals.
//!
//! A market is defined by its immutable [`MarketParams`]; the rate model keys
//! all of its persisted state by the [`MarketId`] derived from them. The
//! mutable totals in [`MarketState`] belong to the lending protocol and are
//! passed in on every call.
//!
//! # Example
//!
//! ```rust
//! use adaptive_irm::{compute_market_id, MarketParams};
//! use alloy_primitives::{Address, U256};
//!
//! let params = MarketParams {
//!     loan_token: Address::repeat_byte(0x01),
//!     collateral_token: Address::repeat_byte(0x02),
//!     oracle: Address::repeat_byte(0x03),
//!     irm: Address::repeat_byte(0x04),
//!     ltv: U256::from(750_000_000_000_000_000u64), // 75%
//! };
//!
//! let same = params;
//! assert_eq!(compute_market_id(&params), compute_market_id(&same));
//! assert_eq!(params.id(), compute_market_id(&params));
//! ```

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::math::{w_div_down, WAD};

/// 32-byte fingerprint of a market's parameters.
pub type MarketId = B256;

/// Length of the canonical encoding: five 32-byte words.
pub const ENCODED_PARAMS_LEN: usize = 5 * 32;

/// The immutable parameters that define a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketParams {
    /// Asset lent and borrowed
    pub loan_token: Address,
    /// Asset posted as collateral
    pub collateral_token: Address,
    /// Price feed for collateral/loan
    pub oracle: Address,
    /// Interest rate model serving the market
    pub irm: Address,
    /// Loan-to-value limit (WAD-scaled, `0 < ltv <= 1`)
    pub ltv: U256,
}

impl MarketParams {
    /// Canonical encoding: each field as a 32-byte big-endian word, addresses
    /// left-padded, in declaration order.
    pub fn encode(&self) -> [u8; ENCODED_PARAMS_LEN] {
        let mut out = [0u8; ENCODED_PARAMS_LEN];
        let words = [
            self.loan_token.into_word(),
            self.collateral_token.into_word(),
            self.oracle.into_word(),
            self.irm.into_word(),
            B256::from(self.ltv.to_be_bytes::<32>()),
        ];
        for (chunk, word) in out.chunks_exact_mut(32).zip(words.iter()) {
            chunk.copy_from_slice(word.as_slice());
        }
        out
    }

    /// The market id for these parameters.
    pub fn id(&self) -> MarketId {
        compute_market_id(self)
    }
}

/// Derive the storage key of a market: keccak256 over [`MarketParams::encode`].
pub fn compute_market_id(params: &MarketParams) -> MarketId {
    keccak256(params.encode())
}

/// Market totals owned by the lending protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketState {
    /// The amount of loan assets supplied in total on the market
    pub total_supply_assets: u128,

    /// The total supply shares representing lender positions
    pub total_supply_shares: u128,

    /// The amount of loan assets borrowed in total from the market
    pub total_borrow_assets: u128,

    /// The total borrow shares representing borrower debt
    pub total_borrow_shares: u128,

    /// Timestamp (seconds) of the market's last interest accrual
    pub last_update: u64,

    /// Protocol fee (WAD-scaled)
    pub fee: U256,
}

impl MarketState {
    /// State with the given asset totals and shares equal to assets.
    pub fn with_totals(total_supply_assets: u128, total_borrow_assets: u128, last_update: u64) -> Self {
        Self {
            total_supply_assets,
            total_supply_shares: total_supply_assets,
            total_borrow_assets,
            total_borrow_shares: total_borrow_assets,
            last_update,
            fee: U256::ZERO,
        }
    }

    /// Returns the market's utilization (WAD-scaled).
    pub fn utilization(&self) -> U256 {
        get_utilization(self.total_supply_assets, self.total_borrow_assets)
    }

    /// Seconds between `last_update` and `now`, or `None` if `now` is earlier.
    pub fn elapsed_since_update(&self, now: u64) -> Option<u64> {
        now.checked_sub(self.last_update)
    }
}

/// Calculate the utilization rate (WAD-scaled).
///
/// Zero supply yields zero utilization. Borrows above supply yield values
/// above `WAD`.
pub fn get_utilization(total_supply_assets: u128, total_borrow_assets: u128) -> U256 {
    if total_supply_assets == 0 {
        return U256::ZERO;
    }
    w_div_down(U256::from(total_borrow_assets), U256::from(total_supply_assets))
}

/// Borrow needed to reach `utilization` on a given supply, rounded down.
pub fn borrow_for_utilization(total_supply_assets: u128, utilization: U256) -> u128 {
    let borrow = U256::from(total_supply_assets) * utilization / WAD;
    borrow.saturating_to::<u128>()
}
