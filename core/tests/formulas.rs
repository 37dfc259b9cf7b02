//! Formula tests — primary premium, categories, pool share, tenure bonus.

use premium_core::{
    config::RateConfig,
    formula::{self, Category, PrimaryResult},
    tier_table::TierTable,
};

const EPS: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn non_positive_target_gives_zero_result() {
    let table = TierTable::standard();

    for target in [0.0, -1.0, -4_000_000.0] {
        for collection in [0.0, 100.0, -50.0, 4_200_000.0] {
            assert_eq!(
                formula::primary(&table, target, collection),
                PrimaryResult::ZERO,
                "target={target} collection={collection}"
            );
        }
    }
}

/// 4,000,000 target, 4,200,000 collected → 105 % → band 100 → rate 0.25.
#[test]
fn worked_example_primary_premium() {
    let table = TierTable::standard();
    let result = formula::primary(&table, 4_000_000.0, 4_200_000.0);

    assert!(close(result.realization_percent, 105.0), "realization {}", result.realization_percent);
    assert!(close(result.rate, 0.25), "rate {}", result.rate);
    assert!(close(result.premium, 1_050_000.0), "premium {}", result.premium);
}

/// Exactly on target selects the 100 band, not the 90 band.
#[test]
fn on_target_uses_hundred_band() {
    let table = TierTable::standard();
    let result = formula::primary(&table, 1_000_000.0, 1_000_000.0);

    assert_eq!(result.realization_percent, 100.0);
    // 10000 / (1,000,000 × 1.00 / 100)
    assert!(close(result.rate, 1.0));
    assert!(close(result.premium, 1_000_000.0));
}

#[test]
fn below_minimum_band_pays_nothing() {
    let table = TierTable::standard();
    let result = formula::primary(&table, 1_000_000.0, 500_000.0);

    assert_eq!(result.realization_percent, 50.0);
    assert_eq!(result.rate, 0.0);
    assert_eq!(result.premium, 0.0);
}

/// Negative collections are not clamped; they resolve to the sentinel.
#[test]
fn negative_collection_flows_through() {
    let table = TierTable::standard();
    let result = formula::primary(&table, 1_000_000.0, -200_000.0);

    assert!(close(result.realization_percent, -20.0));
    assert_eq!(result.rate, 0.0);
    assert_eq!(result.premium, 0.0);
}

#[test]
fn over_achievement_uses_top_band_rate() {
    let table = TierTable::standard();
    let result = formula::primary(&table, 1_000_000.0, 3_000_000.0);

    assert!(close(result.realization_percent, 300.0));
    // 51000 / (1,000,000 × 2.50 / 100)
    assert!(close(result.rate, 2.04));
    assert!(close(result.premium, 6_120_000.0));
}

#[test]
fn category_premiums_use_their_rates() {
    let rates = RateConfig::standard();

    assert!(close(formula::category_premium(&rates, 100_000.0, Category::Individual), 250.0));
    assert!(close(formula::category_premium(&rates, 100_000.0, Category::Litigation), 1_000.0));
    assert_eq!(formula::category_premium(&rates, 0.0, Category::Litigation), 0.0);
}

#[test]
fn category_premium_is_linear() {
    let rates = RateConfig::standard();

    for category in [Category::Individual, Category::Litigation] {
        for c in [1.0, 12_345.67, 250_000.0, -800.0] {
            let single = formula::category_premium(&rates, c, category);
            let double = formula::category_premium(&rates, 2.0 * c, category);
            assert!(close(double, 2.0 * single), "{category:?} at {c}: {double} vs {}", 2.0 * single);
        }
    }
}

#[test]
fn pool_share_is_proportional() {
    let rates = RateConfig::standard();

    // Pool = 500,000 × 0.02 = 10,000.
    assert!(close(formula::pool_share(&rates, 500_000.0, 105.0, 105.0), 10_000.0));
    assert!(close(formula::pool_share(&rates, 500_000.0, 25.0, 100.0), 2_500.0));
}

#[test]
fn pool_share_is_zero_without_scores() {
    let rates = RateConfig::standard();

    assert_eq!(formula::pool_share(&rates, 500_000.0, 0.0, 0.0), 0.0);
    assert_eq!(formula::pool_share(&rates, 500_000.0, 10.0, -10.0), 0.0);
}

#[test]
fn tenure_bonus_zero_cases() {
    let rates = RateConfig::standard();

    for base in [0.0, 1.0, 1_060_250.0] {
        assert_eq!(formula::tenure_bonus(&rates, base, 0), 0.0, "base {base}");
    }
    for credits in [0, 1, 2, 12, 500] {
        assert_eq!(formula::tenure_bonus(&rates, 0.0, credits), 0.0, "credits {credits}");
    }
}

#[test]
fn tenure_bonus_is_uncapped_and_signed() {
    let rates = RateConfig::standard();

    assert!(close(formula::tenure_bonus(&rates, 1_060_250.0, 2), 106_025.0));
    assert!(close(formula::tenure_bonus(&rates, 1_000.0, 40), 2_000.0));
    assert!(close(formula::tenure_bonus(&rates, 1_000.0, -2), -100.0));
}
