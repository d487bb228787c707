//! Core data models for the payroll visitor.
//!
//! This module contains the closed set of employee variants and the tag
//! enum used to identify them.

mod employee;

pub use employee::{Employee, EmployeeKind, Engineer, Executive, TruckDriver};
