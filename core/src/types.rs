//! Shared primitive types used across the entire calculator.

/// A currency amount. One unit = one lira. Binary floating point throughout.
pub type Amount = f64;

/// A stable, unique identifier for an employee on the roster.
pub type EmployeeId = String;

/// A reporting period label in `YYYY-MM` form.
pub type PeriodLabel = String;
