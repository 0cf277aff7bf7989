//! A single owned generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{round2, InstanceId};
use crate::catalog::{GeneratorKind, GeneratorKindId};
use crate::config::ElapsedRounding;

/// A generator the player owns. Immutable once bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorInstance {
    pub id: InstanceId,
    pub kind: GeneratorKindId,
    pub created_at: DateTime<Utc>,
}

impl GeneratorInstance {
    /// Create a new instance of `kind` stamped with `created_at`.
    pub fn new(kind: GeneratorKindId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: InstanceId::new(),
            kind,
            created_at,
        }
    }

    /// Catalog metadata for this instance's kind.
    pub fn metadata(&self) -> &'static GeneratorKind {
        self.kind.kind()
    }

    /// Cookies produced per second.
    pub fn rate(&self) -> f64 {
        self.metadata().rate_per_second
    }

    /// Seconds between creation and `now`. Never negative.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = now - self.created_at;
        let seconds = match elapsed.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            None => elapsed.num_milliseconds() as f64 / 1_000.0,
        };
        seconds.max(0.0)
    }

    /// Lifetime cookies produced by this instance as of `now`.
    pub fn output(&self, now: DateTime<Utc>, rounding: ElapsedRounding) -> f64 {
        let elapsed = self.elapsed_seconds(now);
        match rounding {
            ElapsedRounding::Precise => elapsed * self.rate(),
            ElapsedRounding::WholeSeconds => round2(elapsed.round() * self.rate()),
        }
    }
}
