//! A posting and checking layer for the unary resource (disjunctive) scheduling constraint:
//! among a set of tasks which require exclusive use of one resource, no two *present* tasks ever
//! execute at overlapping times.
//!
//! The crate provides:
//! - The four posting entry points in [`constraints`], one per task variant: mandatory or
//!   optional presence, combined with fixed or flexible durations.
//! - A [`Solver`] which owns the variable domains and the registered propagators, and which the
//!   enclosing search drives to propagation fixpoints.
//! - The [`checking`] module, an oracle which decides whether a fully assigned schedule
//!   satisfies the non-overlap invariant, independently of the propagators.
//!
//! # Example
//! ```
//! # use unary_scheduling::{PropagationOutcome, Solver};
//! # use unary_scheduling::constraints;
//! let mut solver = Solver::default();
//!
//! let starts = (0..4)
//!     .map(|_| solver.new_bounded_integer(0, 8))
//!     .collect::<Vec<_>>();
//! constraints::unary(&mut solver, &starts, &[2, 2, 2, 2]).expect("valid arguments");
//!
//! for (start, value) in starts.iter().zip([0, 2, 4, 6]) {
//!     let _ = solver.assign(*start, value);
//! }
//! assert_ne!(solver.propagate(), PropagationOutcome::Failed);
//! ```
pub(crate) mod api;
pub(crate) mod basic_types;
pub mod checking;
pub mod constraints;
pub(crate) mod containers;
pub(crate) mod engine;
pub(crate) mod propagators;

pub use api::solver::Solver;
pub use basic_types::ArgumentError;
pub use basic_types::ConstraintOperationError;
pub use basic_types::PropagationOutcome;

/// The variable handles over which constraints can be posted.
pub mod variables {
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::Literal;
}

pub use engine::EmptyDomain;
