//! The player's own counters.

use serde::{Deserialize, Serialize};

/// Cookies the player earned by hand and cookies they have spent.
///
/// Passive production is not stored here; it is derived from the owned
/// generators whenever the balance is asked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub cookies_clicked: u64,
    pub cookies_spent: f64,
}

impl Player {
    /// Create a player with nothing clicked and nothing spent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Earn one cookie by hand. Returns the new clicked total.
    pub fn click(&mut self) -> u64 {
        self.cookies_clicked += 1;
        self.cookies_clicked
    }

    /// Record a purchase.
    pub(crate) fn spend(&mut self, amount: f64) {
        self.cookies_spent += amount;
    }

    /// Clicked cookies minus spent cookies, before passive production.
    pub fn net_manual(&self) -> f64 {
        self.cookies_clicked as f64 - self.cookies_spent
    }
}
