//! Payroll calculation over a closed set of employee variants.
//!
//! Employees ([`models::Executive`], [`models::Engineer`],
//! [`models::TruckDriver`]) accept an [`visitor::EmployeeVisitor`], which
//! receives a call to the handler for their own variant. The
//! [`calculation::SalaryCalculator`] is the visitor that computes pay, and
//! [`calculation::run_payroll`] drives it across a roster.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod visitor;
