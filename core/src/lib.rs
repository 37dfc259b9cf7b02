//! Premium calculation core.
//!
//! Pipeline (strict DAG, recomputed in full per pass):
//!   inputs → tier lookup → primary premium → score denominator
//!          → pool share → category premiums → subtotal
//!          → tenure bonus → final total

pub mod command;
pub mod config;
pub mod desk;
pub mod error;
pub mod format;
pub mod formula;
pub mod input;
pub mod roster;
pub mod snapshot;
pub mod statement;
pub mod tier_table;
pub mod types;
