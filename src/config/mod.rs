//! Roster configuration for payroll runs.
//!
//! Salary figures are fixed per variant and are not configurable. What can
//! be loaded is the roster composition: which variants to pay and how many
//! of each, in order.
//!
//! # Example
//!
//! ```no_run
//! use payroll_visitor::config::RosterLoader;
//!
//! let roster = RosterLoader::load("./config/roster.yaml").unwrap();
//! println!("Employees on roster: {}", roster.headcount());
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::{MAX_HEADCOUNT, RosterConfig, RosterEntry};
