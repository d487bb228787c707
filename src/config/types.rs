//! Configuration types for payroll rosters.
//!
//! This module contains the strongly-typed structures deserialized from
//! roster YAML files.

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeKind};

/// Largest total headcount a roster may expand to.
pub const MAX_HEADCOUNT: usize = 1_000_000;

/// A run of identical employees in a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterEntry {
    /// The employee variant.
    pub variant: EmployeeKind,
    /// How many employees of this variant to add.
    pub count: usize,
}

/// An ordered roster of employee runs.
///
/// # Example
///
/// ```
/// use payroll_visitor::config::RosterConfig;
///
/// let roster = RosterConfig::default();
/// assert_eq!(roster.headcount(), 31);
/// assert_eq!(roster.employees().len(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    /// Entries, expanded in order.
    pub roster: Vec<RosterEntry>,
}

impl RosterConfig {
    /// Checks that the roster names at least one employee, that no entry
    /// has a zero count, and that the total headcount is at most
    /// [`MAX_HEADCOUNT`].
    pub fn validate(&self) -> PayrollResult<()> {
        if self.roster.is_empty() {
            return Err(PayrollError::InvalidRoster {
                message: "roster has no entries".to_string(),
            });
        }

        if let Some((index, entry)) = self
            .roster
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.count == 0)
        {
            return Err(PayrollError::InvalidRoster {
                message: format!("entry {} ({}) has a count of zero", index + 1, entry.variant),
            });
        }

        let mut total: usize = 0;
        for (index, entry) in self.roster.iter().enumerate() {
            total = match total.checked_add(entry.count) {
                Some(sum) if sum <= MAX_HEADCOUNT => sum,
                _ => {
                    return Err(PayrollError::InvalidRoster {
                        message: format!(
                            "headcount exceeds {} at entry {} ({})",
                            MAX_HEADCOUNT,
                            index + 1,
                            entry.variant
                        ),
                    });
                }
            };
        }

        Ok(())
    }

    /// Total number of employees the roster expands to, saturating at
    /// `usize::MAX`.
    pub fn headcount(&self) -> usize {
        self.roster
            .iter()
            .fold(0usize, |total, entry| total.saturating_add(entry.count))
    }

    /// Expands the roster into employee instances, preserving entry order.
    ///
    /// Only meaningful for a roster that passed [`RosterConfig::validate`].
    pub fn employees(&self) -> Vec<Employee> {
        let mut employees = Vec::with_capacity(self.headcount().min(MAX_HEADCOUNT));
        for entry in &self.roster {
            employees.extend(std::iter::repeat_n(
                Employee::from_kind(entry.variant),
                entry.count,
            ));
        }
        employees
    }
}

impl Default for RosterConfig {
    /// 10 engineers, then 20 truck drivers, then 1 executive.
    fn default() -> Self {
        Self {
            roster: vec![
                RosterEntry {
                    variant: EmployeeKind::Engineer,
                    count: 10,
                },
                RosterEntry {
                    variant: EmployeeKind::TruckDriver,
                    count: 20,
                },
                RosterEntry {
                    variant: EmployeeKind::Executive,
                    count: 1,
                },
            ],
        }
    }
}
