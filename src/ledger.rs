//! Balance ledger: the numeric state behind mining, upgrades and wagers
//!
//! Persisted as plain numeric fields under fixed LocalStorage keys, loaded
//! at startup with documented defaults. All mutation goes through
//! `debit`/`credit` so the balance can never go negative.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Numeric session state persisted across page loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Current balance in ZNC
    pub balance: f64,
    /// Passive income per mining interval
    pub mining_rate: f64,
    /// Price of the next mining upgrade
    pub upgrade_cost: f64,
    /// Initial downward speed of a dropped ball
    pub generation_speed: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
            mining_rate: DEFAULT_MINING_RATE,
            upgrade_cost: DEFAULT_UPGRADE_COST,
            generation_speed: DEFAULT_GENERATION_SPEED,
        }
    }
}

impl Ledger {
    /// LocalStorage keys, one numeric field each
    const KEY_BALANCE: &'static str = "balance";
    const KEY_MINING_RATE: &'static str = "miningRate";
    const KEY_UPGRADE_COST: &'static str = "upgradeCost";
    const KEY_GENERATION_SPEED: &'static str = "generationSpeed";

    /// Withdraw `amount`. Fails and leaves the balance untouched if funds
    /// are short.
    pub fn debit(&mut self, amount: f64) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Deposit `amount`
    pub fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// One interval of passive income
    pub fn mine(&mut self) {
        self.balance += self.mining_rate;
    }

    /// Buy the mining upgrade: debit the cost, double the rate, raise the
    /// next cost by the growth factor rounded up. Returns false (no state
    /// change) if unaffordable.
    pub fn upgrade(&mut self) -> bool {
        if !self.debit(self.upgrade_cost) {
            return false;
        }
        self.mining_rate *= 2.0;
        self.upgrade_cost = (self.upgrade_cost * UPGRADE_COST_GROWTH).ceil();
        true
    }

    /// Load the ledger from LocalStorage (WASM only); any missing or
    /// unparseable field falls back to its default.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::info!("LocalStorage unavailable, using ledger defaults");
            return Self::default();
        };

        let field = |key: &str, default: f64| {
            storage
                .get_item(key)
                .ok()
                .flatten()
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(default)
        };

        let ledger = Self {
            balance: field(Self::KEY_BALANCE, DEFAULT_BALANCE),
            mining_rate: field(Self::KEY_MINING_RATE, DEFAULT_MINING_RATE),
            upgrade_cost: field(Self::KEY_UPGRADE_COST, DEFAULT_UPGRADE_COST),
            generation_speed: field(Self::KEY_GENERATION_SPEED, DEFAULT_GENERATION_SPEED),
        };
        log::info!("Loaded ledger: {} ZNC", ledger.balance);
        ledger
    }

    /// Save the ledger to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::KEY_BALANCE, &self.balance.to_string());
            let _ = storage.set_item(Self::KEY_MINING_RATE, &self.mining_rate.to_string());
            let _ = storage.set_item(Self::KEY_UPGRADE_COST, &self.upgrade_cost.to_string());
            let _ = storage.set_item(
                Self::KEY_GENERATION_SPEED,
                &self.generation_speed.to_string(),
            );
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ledger = Ledger::default();
        assert_eq!(ledger.balance, 0.0);
        assert_eq!(ledger.mining_rate, 0.1);
        assert_eq!(ledger.upgrade_cost, 5.0);
        assert_eq!(ledger.generation_speed, 3.0);
    }

    #[test]
    fn test_debit_fails_on_short_funds() {
        let mut ledger = Ledger {
            balance: 5.0,
            ..Default::default()
        };
        assert!(!ledger.debit(5.01));
        assert_eq!(ledger.balance, 5.0);
    }

    #[test]
    fn test_debit_allows_exact_balance() {
        let mut ledger = Ledger {
            balance: 5.0,
            ..Default::default()
        };
        assert!(ledger.debit(5.0));
        assert_eq!(ledger.balance, 0.0);
    }

    #[test]
    fn test_balance_never_negative() {
        let mut ledger = Ledger::default();
        assert!(!ledger.debit(0.0000001));
        assert_eq!(ledger.balance, 0.0);
    }

    #[test]
    fn test_mine_credits_rate() {
        let mut ledger = Ledger::default();
        ledger.mine();
        assert_eq!(ledger.balance, DEFAULT_MINING_RATE);
    }

    #[test]
    fn test_upgrade_scaling() {
        let mut ledger = Ledger {
            balance: 5.0,
            ..Default::default()
        };
        assert!(ledger.upgrade());
        assert_eq!(ledger.balance, 0.0);
        assert_eq!(ledger.mining_rate, 0.2);
        // ceil(5 * 1.8)
        assert_eq!(ledger.upgrade_cost, 9.0);

        // Second purchase: ceil(9 * 1.8) = 17
        ledger.balance = 9.0;
        assert!(ledger.upgrade());
        assert_eq!(ledger.mining_rate, 0.4);
        assert_eq!(ledger.upgrade_cost, 17.0);
    }

    #[test]
    fn test_upgrade_unaffordable_is_noop() {
        let mut ledger = Ledger {
            balance: 4.99,
            ..Default::default()
        };
        assert!(!ledger.upgrade());
        assert_eq!(ledger.balance, 4.99);
        assert_eq!(ledger.mining_rate, DEFAULT_MINING_RATE);
        assert_eq!(ledger.upgrade_cost, DEFAULT_UPGRADE_COST);
    }
}
