use serde::{Deserialize, Serialize};
use crate::{
    roster::EmployeeInput,
    types::{Amount, EmployeeId, PeriodLabel},
};

/// A typed change to one employee field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EmployeeUpdate {
    Name(String),
    Target(Amount),
    Collection(Amount),
    IndividualCollection(Amount),
    LitigationCollection(Amount),
    TenureCredits(i32),
}

impl EmployeeInput {
    /// Copy of this employee with `update` applied.
    pub fn with_update(&self, update: &EmployeeUpdate) -> EmployeeInput {
        let mut next = self.clone();
        match update {
            EmployeeUpdate::Name(name)               => next.name = name.clone(),
            EmployeeUpdate::Target(v)                => next.target = *v,
            EmployeeUpdate::Collection(v)            => next.collection = *v,
            EmployeeUpdate::IndividualCollection(v)  => next.individual_collection = *v,
            EmployeeUpdate::LitigationCollection(v)  => next.litigation_collection = *v,
            EmployeeUpdate::TenureCredits(n)         => next.tenure_credits = *n,
        }
        next
    }
}

/// All edits a user can make to a desk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum RosterCommand {
    // ── Roster membership ─────────────────────────
    AddEmployee,
    RemoveEmployee { id: EmployeeId },

    // ── Field edits ───────────────────────────────
    UpdateEmployee {
        id:     EmployeeId,
        update: EmployeeUpdate,
    },

    // ── Team context ──────────────────────────────
    SetPoolCollection { amount: Amount },
    SetPeriod { period: PeriodLabel },

    /// Back to the configured defaults.
    Reset,
}
