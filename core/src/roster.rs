//! Roster aggregation — runs the formulas across every employee.
//!
//! EXECUTION ORDER (fixed, two passes):
//!   1. Primary result for every employee; sum of realization percents.
//!   2. Pool share, category premiums, subtotal, tenure bonus, total
//!      for every employee, using the pass-1 sum as the denominator.
//!
//! RULES:
//!   - The denominator reflects the entire roster as given. It is never
//!     a running or partial sum.
//!   - Pass 2 is order-independent: no employee reads another's result.
//!   - Inputs are borrowed immutably; every call recomputes from scratch.

use crate::{
    config::PremiumConfig,
    formula::{self, Category, PrimaryResult},
    types::{Amount, EmployeeId},
};
use serde::{Deserialize, Serialize};

/// Raw per-employee entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeInput {
    pub id: EmployeeId,
    pub name: String,
    /// Primary collection target.
    pub target: Amount,
    /// Primary collection achieved. May be negative or exceed target.
    pub collection: Amount,
    #[serde(default)]
    pub individual_collection: Amount,
    #[serde(default)]
    pub litigation_collection: Amount,
    /// Qualifying periods ("green months").
    #[serde(default)]
    pub tenure_credits: i32,
}

/// Team-wide input shared by every employee in one pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TeamContext {
    /// Total pool-eligible collection of the team.
    pub pool_collection: Amount,
}

impl TeamContext {
    pub fn new(pool_collection: Amount) -> Self {
        Self { pool_collection }
    }
}

/// Terminal output record for one employee in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComputedEmployee {
    #[serde(flatten)]
    pub input: EmployeeInput,
    pub primary: PrimaryResult,
    pub pool_share: Amount,
    pub individual_premium: Amount,
    pub litigation_premium: Amount,
    /// primary + pool share + both category premiums.
    pub subtotal: Amount,
    pub tenure_bonus: Amount,
    /// subtotal + tenure bonus.
    pub final_total: Amount,
}

/// Team aggregates for one pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RosterTotals {
    /// Sum of every employee's final total.
    pub payout: Amount,
    /// Pool funded by the team's pool-eligible collection.
    pub pool_amount: Amount,
    /// Sum of realization percents; the pool allocation denominator.
    pub total_all_scores: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterOutcome {
    pub employees: Vec<ComputedEmployee>,
    pub totals: RosterTotals,
}

/// Compute every employee's payout and the team totals.
/// Output order matches input order.
pub fn compute_roster(
    employees: &[EmployeeInput],
    team: &TeamContext,
    config: &PremiumConfig,
) -> RosterOutcome {
    let rates = &config.rates;

    // ── Pass 1: primary results and the shared denominator ─────────
    let primaries: Vec<PrimaryResult> = employees
        .iter()
        .map(|e| formula::primary(&config.tier_table, e.target, e.collection))
        .collect();

    let total_all_scores: f64 = primaries.iter().map(|p| p.realization_percent).sum();

    // ── Pass 2: per-employee premiums ──────────────────────────────
    let computed: Vec<ComputedEmployee> = employees
        .iter()
        .zip(primaries)
        .map(|(input, primary)| {
            let pool_share = formula::pool_share(
                rates,
                team.pool_collection,
                primary.realization_percent,
                total_all_scores,
            );
            let individual_premium =
                formula::category_premium(rates, input.individual_collection, Category::Individual);
            let litigation_premium =
                formula::category_premium(rates, input.litigation_collection, Category::Litigation);

            let subtotal = primary.premium + pool_share + individual_premium + litigation_premium;
            let tenure_bonus = formula::tenure_bonus(rates, subtotal, input.tenure_credits);

            ComputedEmployee {
                input: input.clone(),
                primary,
                pool_share,
                individual_premium,
                litigation_premium,
                subtotal,
                tenure_bonus,
                final_total: subtotal + tenure_bonus,
            }
        })
        .collect();

    let totals = RosterTotals {
        payout:      computed.iter().map(|e| e.final_total).sum(),
        pool_amount: formula::pool_amount(rates, team.pool_collection),
        total_all_scores,
    };

    log::debug!(
        "Roster computed: {} employees, score denominator {:.4}, payout {:.2}",
        computed.len(),
        totals.total_all_scores,
        totals.payout
    );

    RosterOutcome { employees: computed, totals }
}
