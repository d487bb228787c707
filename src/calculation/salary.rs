//! Salary calculation visitor.
//!
//! [`SalaryCalculator`] holds the result of the most recent visit only. Each
//! visit overwrites it; nothing accumulates across visits.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{EmployeeKind, Engineer, Executive, TruckDriver};
use crate::visitor::EmployeeVisitor;

/// Computes total annual compensation for one employee at a time.
///
/// # Examples
///
/// ```
/// use payroll_visitor::calculation::SalaryCalculator;
/// use payroll_visitor::models::TruckDriver;
/// use payroll_visitor::visitor::Visitable;
/// use rust_decimal::Decimal;
///
/// let mut calculator = SalaryCalculator::new();
/// TruckDriver.accept(&mut calculator);
/// assert_eq!(calculator.calculate(), Decimal::from(52760));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryCalculator {
    salary: Decimal,
    last_visited: Option<EmployeeKind>,
}

impl SalaryCalculator {
    /// Creates a calculator with a salary of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the salary computed by the most recent visit, or zero if
    /// nothing has been visited yet.
    pub fn calculate(&self) -> Decimal {
        self.salary
    }

    /// Returns the kind of the most recently visited employee.
    pub fn last_visited(&self) -> Option<EmployeeKind> {
        self.last_visited
    }

    fn record(&mut self, kind: EmployeeKind, salary: Decimal) {
        debug!(kind = %kind, salary = %salary, "Calculated salary");
        self.salary = salary;
        self.last_visited = Some(kind);
    }
}

impl EmployeeVisitor for SalaryCalculator {
    /// dividends + base salary + bonus
    fn visit_executive(&mut self, executive: &Executive) {
        let salary = executive.dividends() + executive.base_salary() + executive.bonus();
        self.record(EmployeeKind::Executive, salary);
    }

    /// bonus + base salary
    fn visit_engineer(&mut self, engineer: &Engineer) {
        let salary = engineer.bonus() + engineer.base_salary();
        self.record(EmployeeKind::Engineer, salary);
    }

    /// hourly rate × hours worked + vehicle expenses
    fn visit_truck_driver(&mut self, truck_driver: &TruckDriver) {
        let wages = truck_driver.hourly_rate() * truck_driver.hours_worked();
        let salary = wages + truck_driver.vehicle_expenses();
        self.record(EmployeeKind::TruckDriver, salary);
    }
}
