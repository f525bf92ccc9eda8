//! Defines the constraint posting surface of the crate.
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, and therefore constraints can be viewed as a collection of propagators.
//!
//! # Example
//! ```
//! # use unary_scheduling::Solver;
//! # use unary_scheduling::constraints;
//! let mut solver = Solver::default();
//!
//! let starts = (0..3)
//!     .map(|_| solver.new_bounded_integer(0, 10))
//!     .collect::<Vec<_>>();
//!
//! constraints::unary(&mut solver, &starts, &[3, 2, 4]).expect("valid arguments");
//! ```
mod unary;

pub use unary::*;

use crate::ConstraintOperationError;
use crate::Solver;
use crate::engine::propagation::Propagator;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments of
/// making it into a solution of the problem.
pub(crate) trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the addition of the [`Constraint`]
    /// led to a root-level conflict.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<ConcretePropagator> Constraint for ConcretePropagator
where
    ConcretePropagator: Propagator + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_propagator(self)
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}
