//! The minimal engine seam required by the posting layer: a bounds store for the decision
//! variables, the propagator registration and fixpoint machinery, and the variable handles.
//!
//! The full search machinery (branching, learning, explanations) lives in the enclosing solver
//! and is not part of this crate.
mod assignments;
pub(crate) mod propagation;
mod test_solver;
pub(crate) mod variables;

pub use assignments::EmptyDomain;
pub(crate) use assignments::*;
#[cfg(test)]
pub(crate) use test_solver::TestSolver;
