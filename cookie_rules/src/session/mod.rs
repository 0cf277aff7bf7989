//! Session management - the central structure holding one player's game.

mod outcome;
mod player;

pub use outcome::*;
pub use player::*;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::GeneratorKindId;
use crate::config::SessionConfig;
use crate::error::{Result, RulesError};
use crate::generators::{round2, GeneratorRegistry};

/// One player's game: their counters, their generators, and the rules
/// used to value them.
///
/// Every time-dependent query has an `_at` form that takes the current time
/// explicitly, and a wall-clock form that reads [`Utc::now`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub config: SessionConfig,
    pub player: Player,
    generators: GeneratorRegistry,
}

impl Session {
    /// Create a new session with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session with the given rules.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Generators owned in this session.
    pub fn generators(&self) -> &GeneratorRegistry {
        &self.generators
    }

    /// Earn one cookie by hand.
    pub fn click(&mut self) -> u64 {
        let clicked = self.player.click();
        debug!("click: {} cookies clicked", clicked);
        clicked
    }

    /// Combined cookies per second of every owned generator.
    pub fn total_rate(&self) -> f64 {
        self.generators.total_rate()
    }

    /// Lifetime cookies produced by generators as of `now`.
    pub fn total_lifetime_output_at(&self, now: DateTime<Utc>) -> f64 {
        self.generators
            .total_lifetime_output(now, self.config.elapsed_rounding)
    }

    pub fn total_lifetime_output(&self) -> f64 {
        self.total_lifetime_output_at(Utc::now())
    }

    /// Spendable cookies as of `now`.
    pub fn balance_at(&self, now: DateTime<Utc>) -> f64 {
        round2(self.total_lifetime_output_at(now) + self.player.net_manual())
    }

    pub fn balance(&self) -> f64 {
        self.balance_at(Utc::now())
    }

    /// Try to buy `quantity` generators of `kind` at time `now`.
    ///
    /// Either the full cost is deducted and all instances are created, or
    /// nothing changes and the shortfall is reported.
    pub fn purchase_at(
        &mut self,
        kind: GeneratorKindId,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<PurchaseOutcome> {
        if quantity == 0 {
            return Err(RulesError::ZeroQuantity);
        }

        let cost = kind.kind().cost_of(quantity);
        let balance = self.balance_at(now);

        if balance < cost {
            let shortfall = round2(cost - balance);
            debug!(
                "purchase rejected: {} x{} costs {}, balance {}",
                kind, quantity, cost, balance
            );
            return Ok(PurchaseOutcome::Insufficient {
                kind,
                quantity,
                cost,
                shortfall,
            });
        }

        self.player.spend(cost);
        for _ in 0..quantity {
            self.generators.create_instance(kind, now);
        }
        info!(
            "purchased {} x{} for {} cookies ({} owned)",
            kind,
            quantity,
            cost,
            self.generators.count_of(kind)
        );

        Ok(PurchaseOutcome::Purchased {
            kind,
            quantity,
            cost,
        })
    }

    /// Buy generators by textual identifier at time `now`.
    pub fn buy_at(
        &mut self,
        identifier: &str,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<PurchaseOutcome> {
        let kind = identifier.parse::<GeneratorKindId>().map_err(|err| {
            warn!("purchase of unknown generator kind {:?}", identifier);
            err
        })?;
        self.purchase_at(kind, quantity, now)
    }

    /// Buy generators by textual identifier, right now.
    pub fn buy(&mut self, identifier: &str, quantity: u32) -> Result<PurchaseOutcome> {
        self.buy_at(identifier, quantity, Utc::now())
    }

    /// Snapshot of the session as of `now`.
    pub fn summary_at(&self, now: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            balance: self.balance_at(now),
            cookies_clicked: self.player.cookies_clicked,
            cookies_spent: self.player.cookies_spent,
            total_rate: self.total_rate(),
            lifetime_output: self.total_lifetime_output_at(now),
            owned: self.generators.counts(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary_at(Utc::now())
    }
}
