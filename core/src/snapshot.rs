//! Snapshot serialization — one consistent view of a desk.
//!
//! A snapshot pairs the inputs a pass saw (period, pool collection)
//! with everything that pass produced. Consumers render snapshots;
//! they never recompute.

use crate::{
    roster::{ComputedEmployee, RosterTotals},
    types::{Amount, PeriodLabel},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeskSnapshot {
    pub period:          PeriodLabel,
    pub pool_collection: Amount,
    pub employees:       Vec<ComputedEmployee>,
    pub totals:          RosterTotals,
}
