//! Explicit tag-to-handler dispatch.
//!
//! A [`DispatchTable`] maps each [`EmployeeKind`] to the function that routes
//! an employee of that kind to a visitor. Tables are populated once up front;
//! dispatching a kind with no registered handler is an error rather than a
//! silent no-op.

use std::collections::HashMap;
use std::fmt;

use tracing::{trace, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeKind};

use super::EmployeeVisitor;

/// A registered dispatch handler.
pub type Handler<V> = fn(&mut V, &Employee) -> PayrollResult<()>;

/// Maps variant tags to the handler that visits them.
///
/// # Examples
///
/// ```
/// use payroll_visitor::calculation::SalaryCalculator;
/// use payroll_visitor::models::{Employee, Engineer};
/// use payroll_visitor::visitor::DispatchTable;
/// use rust_decimal::Decimal;
///
/// let table = DispatchTable::<SalaryCalculator>::standard();
/// let mut calculator = SalaryCalculator::new();
///
/// table.dispatch(&mut calculator, &Employee::from(Engineer))?;
/// assert_eq!(calculator.calculate(), Decimal::from(79000));
/// # Ok::<(), payroll_visitor::error::PayrollError>(())
/// ```
pub struct DispatchTable<V: ?Sized> {
    handlers: HashMap<EmployeeKind, Handler<V>>,
}

impl<V: EmployeeVisitor + ?Sized> DispatchTable<V> {
    /// Creates a table with no handlers registered.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Creates a table with a handler for every variant.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(EmployeeKind::Executive, visit_executive::<V>);
        table.register(EmployeeKind::Engineer, visit_engineer::<V>);
        table.register(EmployeeKind::TruckDriver, visit_truck_driver::<V>);
        table
    }

    /// Registers `handler` for `kind`, returning any handler it replaces.
    pub fn register(&mut self, kind: EmployeeKind, handler: Handler<V>) -> Option<Handler<V>> {
        self.handlers.insert(kind, handler)
    }

    /// Returns true if a handler is registered for `kind`.
    pub fn is_registered(&self, kind: EmployeeKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Routes `employee` to the handler registered for its tag.
    ///
    /// Returns [`PayrollError::UnsupportedVariant`] if nothing is registered
    /// for the employee's kind.
    pub fn dispatch(&self, visitor: &mut V, employee: &Employee) -> PayrollResult<()> {
        let kind = employee.kind();
        match self.handlers.get(&kind) {
            Some(handler) => {
                trace!(kind = %kind, "Dispatching employee");
                handler(visitor, employee)
            }
            None => {
                warn!(kind = %kind, "No handler registered");
                Err(PayrollError::UnsupportedVariant { kind })
            }
        }
    }
}

impl<V: EmployeeVisitor + ?Sized> Default for DispatchTable<V> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<V: ?Sized> fmt::Debug for DispatchTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.handlers.keys().collect();
        kinds.sort();
        f.debug_struct("DispatchTable")
            .field("registered", &kinds)
            .finish()
    }
}

fn visit_executive<V: EmployeeVisitor + ?Sized>(
    visitor: &mut V,
    employee: &Employee,
) -> PayrollResult<()> {
    match employee {
        Employee::Executive(executive) => {
            visitor.visit_executive(executive);
            Ok(())
        }
        other => Err(PayrollError::UnsupportedVariant { kind: other.kind() }),
    }
}

fn visit_engineer<V: EmployeeVisitor + ?Sized>(
    visitor: &mut V,
    employee: &Employee,
) -> PayrollResult<()> {
    match employee {
        Employee::Engineer(engineer) => {
            visitor.visit_engineer(engineer);
            Ok(())
        }
        other => Err(PayrollError::UnsupportedVariant { kind: other.kind() }),
    }
}

fn visit_truck_driver<V: EmployeeVisitor + ?Sized>(
    visitor: &mut V,
    employee: &Employee,
) -> PayrollResult<()> {
    match employee {
        Employee::TruckDriver(truck_driver) => {
            visitor.visit_truck_driver(truck_driver);
            Ok(())
        }
        other => Err(PayrollError::UnsupportedVariant { kind: other.kind() }),
    }
}
