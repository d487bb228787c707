//! Visitor contract and dispatch for employee variants.
//!
//! Variants route a visitor to the handler for their own tag through
//! [`Visitable::accept`]. The [`EmployeeVisitor::visit`] entry point and the
//! [`DispatchTable`] are alternate call paths that select the same handler
//! from the employee's tag.

mod dispatch;

pub use dispatch::{DispatchTable, Handler};

use crate::models::{Employee, Engineer, Executive, TruckDriver};

/// An operation defined once per employee variant.
///
/// All three handlers are required, so a visitor missing one does not compile.
/// Handlers return nothing; results live in the visitor's own state.
pub trait EmployeeVisitor {
    /// Handles an [`Executive`].
    fn visit_executive(&mut self, executive: &Executive);

    /// Handles an [`Engineer`].
    fn visit_engineer(&mut self, engineer: &Engineer);

    /// Handles a [`TruckDriver`].
    fn visit_truck_driver(&mut self, truck_driver: &TruckDriver);

    /// Dispatches on the employee's tag to the matching handler.
    ///
    /// This is the compile-time form of [`DispatchTable::standard`]: the
    /// match covers every variant, so it cannot fail. Use a table when the
    /// set of handled variants is decided at runtime. Equivalent to
    /// `employee.accept(visitor)`.
    fn visit(&mut self, employee: &Employee) {
        match employee {
            Employee::Executive(executive) => self.visit_executive(executive),
            Employee::Engineer(engineer) => self.visit_engineer(engineer),
            Employee::TruckDriver(truck_driver) => self.visit_truck_driver(truck_driver),
        }
    }
}

/// Something that can route a visitor to its variant-specific handler.
pub trait Visitable {
    /// Invokes exactly the handler on `visitor` that matches this value's variant.
    fn accept(&self, visitor: &mut dyn EmployeeVisitor);
}
