//! Purchase results and read-only session snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::GeneratorKindId;

/// Result of a purchase attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    /// Cookies were deducted and the generators created.
    Purchased {
        kind: GeneratorKindId,
        quantity: u32,
        cost: f64,
    },
    /// The balance did not cover the cost. Nothing changed.
    Insufficient {
        kind: GeneratorKindId,
        quantity: u32,
        cost: f64,
        /// How many more cookies are needed, rounded to cents.
        shortfall: f64,
    },
}

impl PurchaseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased { .. })
    }

    /// Cookies still missing; zero for a successful purchase.
    pub fn shortfall(&self) -> f64 {
        match self {
            PurchaseOutcome::Purchased { .. } => 0.0,
            PurchaseOutcome::Insufficient { shortfall, .. } => *shortfall,
        }
    }
}

impl std::fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseOutcome::Purchased { kind, quantity, .. } => {
                write!(f, "Buying {} {}", quantity, kind.kind().name)
            }
            PurchaseOutcome::Insufficient {
                kind,
                quantity,
                shortfall,
                ..
            } => write!(
                f,
                "You need {:.0} more cookies to buy {} {}",
                shortfall.round(),
                quantity,
                kind.kind().name
            ),
        }
    }
}

/// Point-in-time view of a session, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub balance: f64,
    pub cookies_clicked: u64,
    pub cookies_spent: f64,
    pub total_rate: f64,
    pub lifetime_output: f64,
    pub owned: BTreeMap<GeneratorKindId, usize>,
}
