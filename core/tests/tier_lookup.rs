//! Tier table tests — band selection and table validation.

use premium_core::{
    error::PremiumError,
    tier_table::{TierBand, TierTable},
};

/// Anything at or above the top threshold lands in the top band.
#[test]
fn high_realization_selects_top_band() {
    let table = TierTable::standard();

    for pct in [250.0, 250.0001, 300.0, 1_000_000.0] {
        let band = table.lookup(pct);
        assert_eq!(
            *band,
            TierBand::new(250.0, 51000.0, 2.50),
            "Realization {pct} should select the top band"
        );
    }
}

/// A percentage exactly on a threshold selects that threshold's band.
#[test]
fn boundary_value_selects_its_own_band() {
    let table = TierTable::standard();

    assert_eq!(table.lookup(100.0).min, 100.0);
    assert_eq!(table.lookup(55.0).min, 55.0);
    assert_eq!(table.lookup(99.999).min, 90.0);
}

/// Below the lowest paying threshold, the sentinel is selected.
#[test]
fn low_and_negative_realization_select_sentinel() {
    let table = TierTable::standard();

    for pct in [0.0, 54.99, -10.0] {
        let band = table.lookup(pct);
        assert_eq!(band.min, 0.0, "Realization {pct} should hit the sentinel");
        assert_eq!(band.percent, 0.0);
        assert_eq!(band.amount, 0.0);
    }
}

/// Every band is reachable and lookup never fails across the range.
#[test]
fn lookup_is_total_across_range() {
    let table = TierTable::standard();
    let mut pct = 0.0;
    while pct <= 400.0 {
        let band = table.lookup(pct);
        assert!(band.min <= pct, "Band {} exceeds realization {pct}", band.min);
        pct += 0.5;
    }
    for band in table.bands() {
        assert_eq!(table.lookup(band.min), band);
    }
}

#[test]
fn table_without_sentinel_is_rejected() {
    let bands = vec![
        TierBand::new(100.0, 10000.0, 1.0),
        TierBand::new(55.0, 2000.0, 0.55),
    ];
    assert!(matches!(
        TierTable::new(bands),
        Err(PremiumError::InvalidTierTable { .. })
    ));
}

#[test]
fn unsorted_table_is_rejected() {
    let bands = vec![
        TierBand::new(55.0, 2000.0, 0.55),
        TierBand::new(100.0, 10000.0, 1.0),
        TierBand::new(0.0, 0.0, 0.0),
    ];
    assert!(TierTable::new(bands).is_err(), "Ascending thresholds must be rejected");
}

#[test]
fn duplicate_threshold_is_rejected() {
    let bands = vec![
        TierBand::new(100.0, 10000.0, 1.0),
        TierBand::new(0.0, 0.0, 0.0),
        TierBand::new(0.0, 0.0, 0.0),
    ];
    assert!(TierTable::new(bands).is_err());
}

#[test]
fn paying_sentinel_is_rejected() {
    let bands = vec![
        TierBand::new(100.0, 10000.0, 1.0),
        TierBand::new(0.0, 500.0, 0.1),
    ];
    assert!(TierTable::new(bands).is_err());
}

#[test]
fn empty_table_is_rejected() {
    assert!(TierTable::new(Vec::new()).is_err());
}

/// Deserializing a table runs the same validation as new().
#[test]
fn deserialized_table_is_validated() {
    let good = r#"[{"min":100,"amount":10000,"percent":1.0},{"min":0,"amount":0,"percent":0}]"#;
    let table: TierTable = serde_json::from_str(good).expect("valid table");
    assert_eq!(table.bands().len(), 2);

    let bad = r#"[{"min":100,"amount":10000,"percent":1.0}]"#;
    assert!(serde_json::from_str::<TierTable>(bad).is_err());
}
