//! Payroll run over a roster of employees.
//!
//! The run visits employees strictly in order, reading the calculator's
//! result after each visit before the next one overwrites it.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::models::{Employee, EmployeeKind, Engineer, Executive, TruckDriver};
use crate::visitor::Visitable;

use super::SalaryCalculator;

/// Number of engineers in the default roster.
const DEFAULT_ENGINEERS: usize = 10;
/// Number of truck drivers in the default roster.
const DEFAULT_TRUCK_DRIVERS: usize = 20;
/// Number of executives in the default roster.
const DEFAULT_EXECUTIVES: usize = 1;

/// Headcount and salary subtotal for one employee kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSubtotal {
    /// The employee kind.
    pub kind: EmployeeKind,
    /// How many employees of this kind were paid.
    pub count: usize,
    /// Sum of their salaries.
    pub subtotal: Decimal,
}

/// The outcome of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollSummary {
    /// Sum of every employee's salary.
    pub total: Decimal,
    /// Number of employees visited.
    pub headcount: usize,
    /// Per-kind subtotals, in [`EmployeeKind::ALL`] order, omitting kinds
    /// that did not appear.
    pub breakdown: Vec<KindSubtotal>,
}

/// Builds the standard roster: 10 engineers, 20 truck drivers, 1 executive.
pub fn default_roster() -> Vec<Employee> {
    let mut roster =
        Vec::with_capacity(DEFAULT_ENGINEERS + DEFAULT_TRUCK_DRIVERS + DEFAULT_EXECUTIVES);
    roster.extend(std::iter::repeat_n(Employee::from(Engineer), DEFAULT_ENGINEERS));
    roster.extend(std::iter::repeat_n(Employee::from(TruckDriver), DEFAULT_TRUCK_DRIVERS));
    roster.extend(std::iter::repeat_n(Employee::from(Executive), DEFAULT_EXECUTIVES));
    roster
}

/// Pays every employee in `employees`, in order, using `calculator`.
///
/// Each employee accepts the calculator and the resulting salary is read
/// immediately and added to the running total. On return the calculator
/// holds the salary of the last employee.
///
/// # Examples
///
/// ```
/// use payroll_visitor::calculation::{SalaryCalculator, default_roster, run_payroll};
/// use rust_decimal::Decimal;
///
/// let mut calculator = SalaryCalculator::new();
/// let summary = run_payroll(&default_roster(), &mut calculator);
///
/// assert_eq!(summary.total, Decimal::from(1_951_200));
/// assert_eq!(summary.headcount, 31);
/// ```
pub fn run_payroll(employees: &[Employee], calculator: &mut SalaryCalculator) -> PayrollSummary {
    let mut total = Decimal::ZERO;
    let mut counts = [0usize; EmployeeKind::ALL.len()];
    let mut subtotals = [Decimal::ZERO; EmployeeKind::ALL.len()];

    for employee in employees {
        employee.accept(calculator);
        let salary = calculator.calculate();
        total += salary;

        let slot = kind_index(employee.kind());
        counts[slot] += 1;
        subtotals[slot] += salary;
    }

    let breakdown = EmployeeKind::ALL
        .iter()
        .enumerate()
        .filter(|(slot, _)| counts[*slot] > 0)
        .map(|(slot, kind)| KindSubtotal {
            kind: *kind,
            count: counts[slot],
            subtotal: subtotals[slot],
        })
        .collect();

    info!(headcount = employees.len(), total = %total, "Payroll run complete");

    PayrollSummary {
        total,
        headcount: employees.len(),
        breakdown,
    }
}

fn kind_index(kind: EmployeeKind) -> usize {
    match kind {
        EmployeeKind::Executive => 0,
        EmployeeKind::Engineer => 1,
        EmployeeKind::TruckDriver => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_matches_all_order() {
        for (slot, kind) in EmployeeKind::ALL.iter().enumerate() {
            assert_eq!(kind_index(*kind), slot);
        }
    }

    #[test]
    fn test_default_roster_composition_and_order() {
        let roster = default_roster();
        assert_eq!(roster.len(), 31);
        assert!(roster[..10].iter().all(|e| e.kind() == EmployeeKind::Engineer));
        assert!(roster[10..30].iter().all(|e| e.kind() == EmployeeKind::TruckDriver));
        assert_eq!(roster[30].kind(), EmployeeKind::Executive);
    }

    #[test]
    fn test_default_roster_total() {
        let mut calculator = SalaryCalculator::new();
        let summary = run_payroll(&default_roster(), &mut calculator);

        // 10 × 79000 + 20 × 52760 + 1 × 106000
        assert_eq!(summary.total, Decimal::from(1_951_200));
        assert_eq!(summary.headcount, 31);
    }

    #[test]
    fn test_default_roster_breakdown() {
        let mut calculator = SalaryCalculator::new();
        let summary = run_payroll(&default_roster(), &mut calculator);

        assert_eq!(
            summary.breakdown,
            vec![
                KindSubtotal {
                    kind: EmployeeKind::Executive,
                    count: 1,
                    subtotal: Decimal::from(106_000),
                },
                KindSubtotal {
                    kind: EmployeeKind::Engineer,
                    count: 10,
                    subtotal: Decimal::from(790_000),
                },
                KindSubtotal {
                    kind: EmployeeKind::TruckDriver,
                    count: 20,
                    subtotal: Decimal::from(1_055_200),
                },
            ]
        );
    }

    #[test]
    fn test_calculator_holds_last_salary_after_run() {
        let mut calculator = SalaryCalculator::new();
        run_payroll(&default_roster(), &mut calculator);

        assert_eq!(calculator.calculate(), Decimal::from(106_000));
        assert_eq!(calculator.last_visited(), Some(EmployeeKind::Executive));
    }

    #[test]
    fn test_empty_roster_pays_nothing() {
        let mut calculator = SalaryCalculator::new();
        let summary = run_payroll(&[], &mut calculator);

        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.headcount, 0);
        assert!(summary.breakdown.is_empty());
        assert_eq!(calculator.calculate(), Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_omits_absent_kinds() {
        let roster = vec![Employee::from(TruckDriver), Employee::from(TruckDriver)];
        let mut calculator = SalaryCalculator::new();
        let summary = run_payroll(&roster, &mut calculator);

        assert_eq!(summary.breakdown.len(), 1);
        assert_eq!(summary.breakdown[0].kind, EmployeeKind::TruckDriver);
        assert_eq!(summary.breakdown[0].count, 2);
        assert_eq!(summary.total, Decimal::from(105_520));
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let roster = vec![Employee::from(Engineer)];
        let mut calculator = SalaryCalculator::new();
        let summary = run_payroll(&roster, &mut calculator);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], "79000");
        assert_eq!(json["headcount"], 1);
        assert_eq!(json["breakdown"][0]["kind"], "engineer");
    }
}
