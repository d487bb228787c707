//! Calculation logic for the payroll visitor.
//!
//! This module contains the salary calculator, a concrete visitor that applies
//! each variant's compensation formula, and the payroll run that drives it
//! across a roster.

mod payroll;
mod salary;

pub use payroll::{KindSubtotal, PayrollSummary, default_roster, run_payroll};
pub use salary::SalaryCalculator;
