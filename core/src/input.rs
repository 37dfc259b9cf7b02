//! Input boundary — coerces raw text fields before they reach the core.
//!
//! RULE: The formulas only ever see well-formed numbers. Empty,
//! non-numeric and non-finite text becomes 0 here, never an error.

use crate::{command::EmployeeUpdate, types::Amount};
use serde::{Deserialize, Serialize};

/// Editable employee fields, as named by an editing surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    Name,
    Target,
    Collection,
    IndividualCollection,
    LitigationCollection,
    TenureCredits,
}

impl EmployeeField {
    /// Turn a raw text value for this field into a typed update.
    pub fn parse_update(self, raw: &str) -> EmployeeUpdate {
        match self {
            EmployeeField::Name                 => EmployeeUpdate::Name(raw.to_string()),
            EmployeeField::Target               => EmployeeUpdate::Target(coerce_amount(raw)),
            EmployeeField::Collection           => EmployeeUpdate::Collection(coerce_amount(raw)),
            EmployeeField::IndividualCollection => EmployeeUpdate::IndividualCollection(coerce_amount(raw)),
            EmployeeField::LitigationCollection => EmployeeUpdate::LitigationCollection(coerce_amount(raw)),
            EmployeeField::TenureCredits        => EmployeeUpdate::TenureCredits(coerce_count(raw)),
        }
    }
}

/// Parse a currency amount; anything unusable is 0.
pub fn coerce_amount(raw: &str) -> Amount {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a period count. Fractions truncate toward zero; anything
/// unusable or outside the `i32` range is 0.
pub fn coerce_count(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i32>() {
        return v;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= f64::from(i32::MAX) => v.trunc() as i32,
        _ => 0,
    }
}
