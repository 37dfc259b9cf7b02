//! The premium desk — owns one roster and recomputes it on demand.
//!
//! RULES:
//!   - Commands never mutate an employee in place. Each accepted
//!     command swaps in a new roster vector.
//!   - compute() always runs the full two-pass calculation over the
//!     roster as it stands. There is no cached or partial result.
//!   - Defaults come from the config, never from global state.

use crate::{
    command::RosterCommand,
    config::PremiumConfig,
    error::{PremiumError, PremiumResult},
    roster::{compute_roster, EmployeeInput, RosterOutcome, TeamContext},
    snapshot::DeskSnapshot,
    statement::Statement,
    types::{Amount, PeriodLabel},
};
use std::collections::HashSet;

pub struct PremiumDesk {
    config:          PremiumConfig,
    employees:       Vec<EmployeeInput>,
    pool_collection: Amount,
    period:          PeriodLabel,
}

impl PremiumDesk {
    /// A desk holding the configured initial employee and pool value.
    pub fn new(config: PremiumConfig, period: PeriodLabel) -> Self {
        let employees = vec![config.defaults.initial_employee.clone()];
        let pool_collection = config.defaults.initial_pool_collection;
        Self {
            config,
            employees,
            pool_collection,
            period,
        }
    }

    /// A desk over an explicit roster. An empty roster falls back to
    /// the configured initial employee. Employee ids must be unique.
    pub fn with_roster(
        config: PremiumConfig,
        period: PeriodLabel,
        employees: Vec<EmployeeInput>,
        pool_collection: Amount,
    ) -> PremiumResult<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = employees.iter().find(|e| !seen.insert(e.id.as_str())) {
            return Err(PremiumError::DuplicateEmployee { id: dup.id.clone() });
        }

        let mut desk = Self::new(config, period);
        if !employees.is_empty() {
            desk.employees = employees;
        }
        desk.pool_collection = pool_collection;
        Ok(desk)
    }

    pub fn config(&self) -> &PremiumConfig {
        &self.config
    }

    pub fn employees(&self) -> &[EmployeeInput] {
        &self.employees
    }

    pub fn pool_collection(&self) -> Amount {
        self.pool_collection
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    /// Apply one user edit.
    pub fn apply(&mut self, command: RosterCommand) -> PremiumResult<()> {
        log::debug!("Applying command: {command:?}");
        match command {
            RosterCommand::AddEmployee => {
                let id = uuid::Uuid::new_v4().to_string();
                let added = self.config.defaults.new_employee(id, self.employees.len() + 1);
                let mut next = self.employees.clone();
                next.push(added);
                self.employees = next;
            }
            RosterCommand::RemoveEmployee { id } => {
                let index = self.position(&id)?;
                if self.employees.len() <= 1 {
                    return Err(PremiumError::LastEmployee);
                }
                let mut next = self.employees.clone();
                next.remove(index);
                self.employees = next;
            }
            RosterCommand::UpdateEmployee { id, update } => {
                let index = self.position(&id)?;
                let mut next = self.employees.clone();
                next[index] = self.employees[index].with_update(&update);
                self.employees = next;
            }
            RosterCommand::SetPoolCollection { amount } => {
                self.pool_collection = amount;
            }
            RosterCommand::SetPeriod { period } => {
                self.period = period;
            }
            RosterCommand::Reset => {
                self.employees = vec![self.config.defaults.initial_employee.clone()];
                self.pool_collection = self.config.defaults.initial_pool_collection;
            }
        }
        Ok(())
    }

    /// Run the full calculation over the current roster.
    pub fn compute(&self) -> RosterOutcome {
        compute_roster(
            &self.employees,
            &TeamContext::new(self.pool_collection),
            &self.config,
        )
    }

    pub fn snapshot(&self) -> DeskSnapshot {
        let outcome = self.compute();
        DeskSnapshot {
            period:          self.period.clone(),
            pool_collection: self.pool_collection,
            employees:       outcome.employees,
            totals:          outcome.totals,
        }
    }

    /// Premium statement for one employee for the desk's period.
    pub fn statement(&self, id: &str) -> PremiumResult<Statement> {
        let outcome = self.compute();
        let employee = outcome
            .employees
            .iter()
            .find(|e| e.input.id == id)
            .ok_or_else(|| PremiumError::EmployeeNotFound { id: id.to_string() })?;
        Ok(Statement::build(employee, &self.period))
    }

    fn position(&self, id: &str) -> PremiumResult<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| PremiumError::EmployeeNotFound { id: id.to_string() })
    }
}
