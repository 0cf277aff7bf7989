//! Generator kinds: the identifiers and metadata for everything a player can buy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RulesError;

use super::CATALOG;

/// All generator kinds in catalog order (cheapest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKindId {
    CookieClicker,
    CookieBaker,
    CookieFarm,
    CookieFactory,
    CookieMine,
    CookieShipment,
    CookieLaboratory,
    CookiePortal,
    CookieTimeMachine,
    CookieCondenser,
}

impl GeneratorKindId {
    /// All generator kinds in catalog order.
    pub fn all() -> &'static [GeneratorKindId] {
        &[
            GeneratorKindId::CookieClicker,
            GeneratorKindId::CookieBaker,
            GeneratorKindId::CookieFarm,
            GeneratorKindId::CookieFactory,
            GeneratorKindId::CookieMine,
            GeneratorKindId::CookieShipment,
            GeneratorKindId::CookieLaboratory,
            GeneratorKindId::CookiePortal,
            GeneratorKindId::CookieTimeMachine,
            GeneratorKindId::CookieCondenser,
        ]
    }

    /// Position in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Metadata for this kind.
    pub fn kind(self) -> &'static GeneratorKind {
        &CATALOG[self.index()]
    }

    /// Snake-case key, as used in config and serialized output.
    pub fn key(self) -> &'static str {
        match self {
            GeneratorKindId::CookieClicker => "cookie_clicker",
            GeneratorKindId::CookieBaker => "cookie_baker",
            GeneratorKindId::CookieFarm => "cookie_farm",
            GeneratorKindId::CookieFactory => "cookie_factory",
            GeneratorKindId::CookieMine => "cookie_mine",
            GeneratorKindId::CookieShipment => "cookie_shipment",
            GeneratorKindId::CookieLaboratory => "cookie_laboratory",
            GeneratorKindId::CookiePortal => "cookie_portal",
            GeneratorKindId::CookieTimeMachine => "cookie_time_machine",
            GeneratorKindId::CookieCondenser => "cookie_condenser",
        }
    }
}

impl std::fmt::Display for GeneratorKindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Folds case and drops separators so `CookieBaker`, `cookie_baker`
/// and `Cookie Baker` all compare equal.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for GeneratorKindId {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());

        // Misspellings from the first catalog.
        match wanted.as_str() {
            "cookielabratory" => return Ok(GeneratorKindId::CookieLaboratory),
            "cookiecondensor" => return Ok(GeneratorKindId::CookieCondenser),
            _ => {}
        }

        GeneratorKindId::all()
            .iter()
            .copied()
            .find(|id| normalize(id.key()) == wanted)
            .ok_or_else(|| RulesError::UnknownGeneratorKind(s.to_string()))
    }
}

/// Static description of a purchasable generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorKind {
    pub id: GeneratorKindId,
    pub name: &'static str,
    pub description: &'static str,
    /// Cookies produced per second by one instance.
    pub rate_per_second: f64,
    /// Price of one instance.
    pub cost: u64,
}

impl GeneratorKind {
    /// Price of `quantity` instances.
    pub fn cost_of(&self, quantity: u32) -> f64 {
        self.cost as f64 * f64::from(quantity)
    }

    /// Seconds of production one instance needs to earn back its price.
    pub fn payback_seconds(&self) -> f64 {
        self.cost as f64 / self.rate_per_second
    }
}
