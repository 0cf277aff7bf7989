use chrono::{DateTime, Duration, TimeZone, Utc};
use cookie_rules::{ElapsedRounding, GeneratorKindId, PurchaseOutcome, Session, SessionConfig};
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

fn session_with_clicks(clicks: u32) -> Session {
    let mut session = Session::new();
    for _ in 0..clicks {
        session.click();
    }
    session
}

#[test]
fn fresh_player_cannot_afford_clicker() {
    let mut session = Session::new();
    let outcome = session.buy_at("CookieClicker", 1, epoch()).unwrap();

    assert_eq!(
        outcome,
        PurchaseOutcome::Insufficient {
            kind: GeneratorKindId::CookieClicker,
            quantity: 1,
            cost: 15.0,
            shortfall: 15.0,
        }
    );
    assert_eq!(
        outcome.to_string(),
        "You need 15 more cookies to buy 1 Cookie Clicker"
    );
}

#[test]
fn fifteen_clicks_buy_one_clicker() {
    let mut session = session_with_clicks(15);
    assert_eq!(session.balance_at(epoch()), 15.0);

    let outcome = session.buy_at("CookieClicker", 1, epoch()).unwrap();

    assert!(outcome.is_success());
    assert_eq!(session.player.cookies_spent, 15.0);
    assert_eq!(session.generators().len(), 1);
    assert_eq!(session.generators().instances()[0].created_at, epoch());
    assert_eq!(session.balance_at(epoch()), 0.0);
}

#[test]
fn output_tracks_rate_times_elapsed() {
    let mut session = session_with_clicks(100);
    session
        .purchase_at(GeneratorKindId::CookieBaker, 1, epoch())
        .unwrap();

    for millis in [250, 1_000, 7_333, 60_000, 3_600_500] {
        let now = epoch() + Duration::milliseconds(millis);
        let expected = 0.5 * millis as f64 / 1_000.0;
        let actual = session.total_lifetime_output_at(now);
        assert!(
            (actual - expected).abs() <= 0.01,
            "after {}ms expected {} got {}",
            millis,
            expected,
            actual
        );
    }
}

#[test]
fn bulk_purchase_needs_full_cost() {
    let mut session = session_with_clicks(299);
    let outcome = session
        .purchase_at(GeneratorKindId::CookieBaker, 3, epoch())
        .unwrap();
    assert_eq!(outcome.shortfall(), 1.0);
    assert!(session.generators().is_empty());

    session.click();
    let outcome = session
        .purchase_at(GeneratorKindId::CookieBaker, 3, epoch())
        .unwrap();
    assert!(outcome.is_success());
    assert_eq!(
        session.generators().count_of(GeneratorKindId::CookieBaker),
        3
    );
    assert_eq!(session.player.cookies_spent, 300.0);
    assert_eq!(session.balance_at(epoch()), 0.0);
}

#[test]
fn production_pays_for_the_next_generator() {
    let mut session = session_with_clicks(15);
    session
        .purchase_at(GeneratorKindId::CookieClicker, 1, epoch())
        .unwrap();

    // One clicker needs 150 seconds to earn another 15 cookies.
    let too_soon = epoch() + Duration::seconds(149);
    assert!(!session
        .purchase_at(GeneratorKindId::CookieClicker, 1, too_soon)
        .unwrap()
        .is_success());

    let later = epoch() + Duration::seconds(150);
    assert!(session
        .purchase_at(GeneratorKindId::CookieClicker, 1, later)
        .unwrap()
        .is_success());
    assert_eq!(session.generators().len(), 2);
    assert!((session.total_rate() - 0.2).abs() < 1e-9);
}

#[test]
fn whole_seconds_matches_legacy_rounding() {
    let config = SessionConfig::from_toml_str("elapsed_rounding = \"whole_seconds\"").unwrap();
    assert_eq!(config.elapsed_rounding, ElapsedRounding::WholeSeconds);

    let mut session = Session::with_config(config);
    for _ in 0..500 {
        session.click();
    }
    session.buy_at("cookie_farm", 1, epoch()).unwrap();

    assert_eq!(
        session.total_lifetime_output_at(epoch() + Duration::milliseconds(2_499)),
        8.0
    );
    assert_eq!(
        session.total_lifetime_output_at(epoch() + Duration::milliseconds(2_500)),
        12.0
    );
}

#[test]
fn sessions_are_independent() {
    let mut first = session_with_clicks(15);
    let second = Session::new();

    first
        .purchase_at(GeneratorKindId::CookieClicker, 1, epoch())
        .unwrap();

    assert_eq!(first.generators().len(), 1);
    assert!(second.generators().is_empty());
}

fn kind_strategy() -> impl Strategy<Value = GeneratorKindId> {
    prop::sample::select(GeneratorKindId::all().to_vec())
}

proptest! {
    #[test]
    fn balance_identity_holds(
        clicks in 0u32..2_000,
        buys in prop::collection::vec((kind_strategy(), 1u32..4, 0i64..600), 0..8),
        observe_after in 0i64..3_600,
    ) {
        let mut session = session_with_clicks(clicks);
        let mut now = epoch();
        for (kind, quantity, wait) in buys {
            now += Duration::seconds(wait);
            session.purchase_at(kind, quantity, now).unwrap();
        }

        let observed = now + Duration::seconds(observe_after);
        let expected = cookie_rules::round2(
            session.total_lifetime_output_at(observed)
                + (session.player.cookies_clicked as f64 - session.player.cookies_spent),
        );
        prop_assert_eq!(session.balance_at(observed), expected);
        prop_assert!(session.balance_at(observed) >= 0.0);
    }

    #[test]
    fn failed_purchase_changes_nothing(
        clicks in 0u32..1_000,
        kind in kind_strategy(),
        quantity in 1u32..10,
    ) {
        let mut session = session_with_clicks(clicks);
        let cost = kind.kind().cost_of(quantity);
        prop_assume!((clicks as f64) < cost);

        let outcome = session.purchase_at(kind, quantity, epoch()).unwrap();

        prop_assert!(!outcome.is_success());
        prop_assert_eq!(outcome.shortfall(), cost - clicks as f64);
        prop_assert_eq!(session.player.cookies_spent, 0.0);
        prop_assert!(session.generators().is_empty());
    }
}
