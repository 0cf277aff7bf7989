//! The generator catalog: a fixed table of everything a player can buy.
//!
//! Kinds are listed cheapest first. Both rate and cost grow strictly along
//! the table, roughly exponentially.

mod kind;

pub use kind::*;

/// Every generator kind, indexed by [`GeneratorKindId::index`].
pub static CATALOG: [GeneratorKind; 10] = [
    GeneratorKind {
        id: GeneratorKindId::CookieClicker,
        name: "Cookie Clicker",
        description: "A clicker that generates 1 cookie every 10 seconds.",
        rate_per_second: 0.1,
        cost: 15,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieBaker,
        name: "Cookie Baker",
        description: "A dedicated baker producing a cookie every 2 seconds.",
        rate_per_second: 0.5,
        cost: 100,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieFarm,
        name: "Cookie Farm",
        description: "A cookie farm producing 4 cookies a second.",
        rate_per_second: 4.0,
        cost: 500,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieFactory,
        name: "Cookie Factory",
        description: "A cookie factory producing 10 cookies a second.",
        rate_per_second: 10.0,
        cost: 3_000,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieMine,
        name: "Cookie Mine",
        description: "A cookie mine producing 40 cookies a second.",
        rate_per_second: 40.0,
        cost: 10_000,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieShipment,
        name: "Cookie Shipment",
        description: "A cookie shipment from space producing 100 cookies a second.",
        rate_per_second: 100.0,
        cost: 40_000,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieLaboratory,
        name: "Cookie Laboratory",
        description: "A cookie laboratory producing 400 cookies a second.",
        rate_per_second: 400.0,
        cost: 200_000,
    },
    GeneratorKind {
        id: GeneratorKindId::CookiePortal,
        name: "Cookie Portal",
        description: "A cookie portal to the underworld producing 6,666 cookies a second.",
        rate_per_second: 6_666.0,
        cost: 1_666_666,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieTimeMachine,
        name: "Cookie Time Machine",
        description: "A cookie time machine producing 98,765 cookies a second.",
        rate_per_second: 98_765.0,
        cost: 123_456_789,
    },
    GeneratorKind {
        id: GeneratorKindId::CookieCondenser,
        name: "Cookie Condenser",
        description: "A cookie condenser producing 999,999 cookies a second.",
        rate_per_second: 999_999.0,
        cost: 3_999_999_999,
    },
];

/// All generator kinds in catalog order.
pub fn list_kinds() -> &'static [GeneratorKind] {
    &CATALOG
}

/// Look up a kind by its textual identifier.
pub fn find_kind(identifier: &str) -> crate::Result<&'static GeneratorKind> {
    let id: GeneratorKindId = identifier.parse()?;
    Ok(id.kind())
}
