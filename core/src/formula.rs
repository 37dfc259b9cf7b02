//! Premium formulas — the four building blocks of a payout.
//!
//! Every function here is total and pure. Degenerate inputs
//! (zero target, zero denominator) produce defined zero results.
//! Inputs are never clamped: over-achievement and negative
//! collections flow through the same arithmetic.

use crate::{
    config::RateConfig,
    tier_table::TierTable,
    types::Amount,
};
use serde::{Deserialize, Serialize};

/// Outcome of the primary (target vs. collection) formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PrimaryResult {
    /// Effective premium rate applied to the collection.
    pub rate: f64,
    /// collection / target × 100; 0 when target ≤ 0.
    pub realization_percent: f64,
    pub premium: Amount,
}

impl PrimaryResult {
    pub const ZERO: PrimaryResult = PrimaryResult {
        rate: 0.0,
        realization_percent: 0.0,
        premium: 0.0,
    };
}

/// The two fixed-rate collection categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Individual,
    Litigation,
}

impl Category {
    pub fn rate(self, rates: &RateConfig) -> f64 {
        match self {
            Category::Individual => rates.individual,
            Category::Litigation => rates.litigation,
        }
    }
}

/// Primary premium from target and collection.
///
/// The band's flat amount is what a target-sized employee earns at that
/// tier; dividing by the target scaled by the band percent (as a
/// fraction) turns it into a rate on the actual collection. A
/// zero-percent band (the sentinel) gives rate 0.
pub fn primary(table: &TierTable, target: Amount, collection: Amount) -> PrimaryResult {
    if target <= 0.0 {
        return PrimaryResult::ZERO;
    }

    let realization_percent = (collection / target) * 100.0;
    let band = table.lookup(realization_percent);

    let rate = if band.percent > 0.0 {
        band.amount / (target * band.percent / 100.0)
    } else {
        0.0
    };

    PrimaryResult {
        rate,
        realization_percent,
        premium: collection * rate,
    }
}

/// Premium for one of the fixed-rate categories.
pub fn category_premium(rates: &RateConfig, collection: Amount, category: Category) -> Amount {
    collection * category.rate(rates)
}

/// Size of the shared pool funded by the team's pool-eligible collection.
pub fn pool_amount(rates: &RateConfig, total_collection: Amount) -> Amount {
    total_collection * rates.pool
}

/// One employee's share of the pool, proportional to their score.
///
/// `total_all_scores` must be the sum over the whole roster, computed
/// once per pass. A non-positive denominator gives every employee 0.
pub fn pool_share(
    rates: &RateConfig,
    total_collection: Amount,
    my_score: f64,
    total_all_scores: f64,
) -> Amount {
    let pool = pool_amount(rates, total_collection);
    if total_all_scores > 0.0 {
        (my_score / total_all_scores) * pool
    } else {
        0.0
    }
}

/// Tenure bonus: `base × credits × per-credit rate`. Uncapped.
pub fn tenure_bonus(rates: &RateConfig, base: Amount, tenure_credits: i32) -> Amount {
    let bonus_rate = f64::from(tenure_credits) * rates.tenure_per_credit;
    base * bonus_rate
}
