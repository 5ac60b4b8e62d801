//! Persisted rate-at-target per market.
//!
//! Entries are created explicitly, either by bootstrapping a market or on its
//! first update, and are never removed.

use std::collections::HashMap;

use alloy_primitives::U256;

use crate::market::MarketId;

/// Keyed storage of one rate-at-target per market.
///
/// Callers must serialize writes per market id; the engine never holds more
/// than one mutable borrow of a store.
pub trait RateStore {
    /// The persisted rate at target, if the market has been touched.
    fn get(&self, id: &MarketId) -> Option<U256>;

    /// Insert `rate` unless an entry exists. Returns whether it was created.
    fn init_if_absent(&mut self, id: MarketId, rate: U256) -> bool;

    /// Overwrite or create the entry for `id`.
    fn set(&mut self, id: MarketId, rate: U256);

    fn contains(&self, id: &MarketId) -> bool {
        self.get(id).is_some()
    }
}

/// In-process [`RateStore`] backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRateStore {
    rates: HashMap<MarketId, U256>,
}

impl InMemoryRateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of initialized markets.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MarketId, &U256)> {
        self.rates.iter()
    }
}

impl RateStore for InMemoryRateStore {
    fn get(&self, id: &MarketId) -> Option<U256> {
        self.rates.get(id).copied()
    }

    fn init_if_absent(&mut self, id: MarketId, rate: U256) -> bool {
        match self.rates.entry(id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(rate);
                true
            }
        }
    }

    fn set(&mut self, id: MarketId, rate: U256) {
        self.rates.insert(id, rate);
    }
}
