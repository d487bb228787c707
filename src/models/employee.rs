//! Employee variants and related types.
//!
//! Each variant is a stateless value exposing only the accessors its own
//! salary formula needs. Values are fixed constants.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::visitor::{EmployeeVisitor, Visitable};

/// Identifies which variant an [`Employee`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid dividends, base salary and bonus.
    Executive,
    /// Paid base salary and bonus.
    Engineer,
    /// Paid hourly plus vehicle expenses.
    TruckDriver,
}

impl EmployeeKind {
    /// All variant tags, in declaration order.
    pub const ALL: [EmployeeKind; 3] = [
        EmployeeKind::Executive,
        EmployeeKind::Engineer,
        EmployeeKind::TruckDriver,
    ];
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmployeeKind::Executive => "executive",
            EmployeeKind::Engineer => "engineer",
            EmployeeKind::TruckDriver => "truck_driver",
        };
        f.write_str(name)
    }
}

/// An executive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Executive;

impl Executive {
    /// Annual dividends.
    pub fn dividends(&self) -> Decimal {
        Decimal::from(1000)
    }

    /// Annual base salary.
    pub fn base_salary(&self) -> Decimal {
        Decimal::from(90000)
    }

    /// Annual bonus.
    pub fn bonus(&self) -> Decimal {
        Decimal::from(15000)
    }
}

impl Visitable for Executive {
    fn accept(&self, visitor: &mut dyn EmployeeVisitor) {
        visitor.visit_executive(self);
    }
}

/// An engineer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engineer;

impl Engineer {
    /// Annual bonus.
    pub fn bonus(&self) -> Decimal {
        Decimal::from(4000)
    }

    /// Annual base salary.
    pub fn base_salary(&self) -> Decimal {
        Decimal::from(75000)
    }
}

impl Visitable for Engineer {
    fn accept(&self, visitor: &mut dyn EmployeeVisitor) {
        visitor.visit_engineer(self);
    }
}

/// A truck driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruckDriver;

impl TruckDriver {
    /// Pay per hour worked.
    pub fn hourly_rate(&self) -> Decimal {
        Decimal::from(18)
    }

    /// Hours worked per year.
    pub fn hours_worked(&self) -> Decimal {
        Decimal::from(1820)
    }

    /// Annual vehicle expenses reimbursed on top of wages.
    pub fn vehicle_expenses(&self) -> Decimal {
        Decimal::from(20000)
    }
}

impl Visitable for TruckDriver {
    fn accept(&self, visitor: &mut dyn EmployeeVisitor) {
        visitor.visit_truck_driver(self);
    }
}

/// Any one employee from the closed variant set.
///
/// Only constructed instances can be held, so a roster can never contain
/// something that is not a visitable employee.
///
/// # Examples
///
/// ```
/// use payroll_visitor::models::{Employee, EmployeeKind, Engineer};
///
/// let employee = Employee::from(Engineer);
/// assert_eq!(employee.kind(), EmployeeKind::Engineer);
/// assert_eq!(Employee::from_kind(EmployeeKind::Engineer), employee);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Employee {
    /// An [`Executive`].
    Executive(Executive),
    /// An [`Engineer`].
    Engineer(Engineer),
    /// A [`TruckDriver`].
    TruckDriver(TruckDriver),
}

impl Employee {
    /// Builds a fresh employee instance for the given tag.
    pub fn from_kind(kind: EmployeeKind) -> Self {
        match kind {
            EmployeeKind::Executive => Employee::Executive(Executive),
            EmployeeKind::Engineer => Employee::Engineer(Engineer),
            EmployeeKind::TruckDriver => Employee::TruckDriver(TruckDriver),
        }
    }

    /// Returns the variant tag of this employee.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Employee::Executive(_) => EmployeeKind::Executive,
            Employee::Engineer(_) => EmployeeKind::Engineer,
            Employee::TruckDriver(_) => EmployeeKind::TruckDriver,
        }
    }
}

impl Visitable for Employee {
    fn accept(&self, visitor: &mut dyn EmployeeVisitor) {
        match self {
            Employee::Executive(executive) => executive.accept(visitor),
            Employee::Engineer(engineer) => engineer.accept(visitor),
            Employee::TruckDriver(truck_driver) => truck_driver.accept(visitor),
        }
    }
}

impl From<Executive> for Employee {
    fn from(executive: Executive) -> Self {
        Employee::Executive(executive)
    }
}

impl From<Engineer> for Employee {
    fn from(engineer: Engineer) -> Self {
        Employee::Engineer(engineer)
    }
}

impl From<TruckDriver> for Employee {
    fn from(truck_driver: TruckDriver) -> Self {
        Employee::TruckDriver(truck_driver)
    }
}
