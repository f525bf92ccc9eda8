use log::debug;
use log::trace;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::PropagationOutcome;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorStore;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;

/// The main interaction point which allows the creation of variables and the posting of
/// constraints over them.
///
/// The solver owns the domains of the variables and the registered propagators; the enclosing
/// search drives it to a propagation fixpoint through [`Solver::propagate`] and narrows domains
/// through [`Solver::assign`] and [`Solver::set_literal`]. Branching is done by cloning the
/// solver; a clone is fully independent of the original.
///
/// # Example
/// ```
/// # use unary_scheduling::Solver;
/// # use unary_scheduling::constraints;
/// let mut solver = Solver::default();
///
/// let starts = (0..4)
///     .map(|_| solver.new_bounded_integer(0, 8))
///     .collect::<Vec<_>>();
///
/// constraints::unary(&mut solver, &starts, &[2, 2, 2, 2]).expect("valid arguments");
/// assert!(!solver.is_failed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    assignments: Assignments,
    propagators: PropagatorStore,
    /// Whether propagation or posting has determined that the current node is infeasible. Once
    /// failed, the solver stays failed until the enclosing search discards it.
    failed: bool,
}

/// Methods to create and inspect variables.
impl Solver {
    /// Create a new integer variable with the given bounds.
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.assignments.grow(lower_bound, upper_bound)
    }

    /// Create a new boolean variable.
    pub fn new_literal(&mut self) -> Literal {
        Literal::new(self.assignments.grow(0, 1))
    }

    /// Get the current lower bound of the given variable.
    pub fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_lower_bound(domain_id)
    }

    /// Get the current upper bound of the given variable.
    pub fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_upper_bound(domain_id)
    }

    /// Get the truth value of the given literal, or `None` if it is not fixed yet.
    pub fn literal_value(&self, literal: Literal) -> Option<bool> {
        match (
            self.assignments.get_lower_bound(literal.domain_id()),
            self.assignments.get_upper_bound(literal.domain_id()),
        ) {
            (1, _) => Some(true),
            (_, 0) => Some(false),
            _ => None,
        }
    }

    /// Whether the solver has concluded that the current node is infeasible.
    pub fn is_failed(&self) -> bool {
        self.failed
    }
}

/// Methods through which the enclosing search narrows domains.
impl Solver {
    /// Fix a variable to a value. An assignment outside the current domain marks the solver
    /// failed.
    pub fn assign(&mut self, domain_id: DomainId, value: i32) -> Result<(), EmptyDomain> {
        let result = self.assignments.make_assignment(domain_id, value);
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    /// Fix a literal to a truth value. An assignment of the opposite polarity marks the solver
    /// failed.
    pub fn set_literal(&mut self, literal: Literal, truth_value: bool) -> Result<(), EmptyDomain> {
        let value = i32::from(truth_value);
        self.assign(literal.domain_id(), value)
    }

    /// Runs all registered propagators round-robin until none of them tightens a domain anymore,
    /// or until one of them reports a conflict.
    pub fn propagate(&mut self) -> PropagationOutcome {
        if self.failed {
            return PropagationOutcome::Failed;
        }

        let num_updates_at_start = self.assignments.num_domain_updates();
        loop {
            let num_updates_at_round_start = self.assignments.num_domain_updates();

            for propagator in self.propagators.iter_propagators_mut() {
                let context = PropagationContextMut::new(&mut self.assignments);
                if let Err(inconsistency) = propagator.propagate(context) {
                    trace!(
                        "propagator {} detected a conflict: {inconsistency:?}",
                        propagator.name()
                    );
                    self.failed = true;
                    return PropagationOutcome::Failed;
                }
            }

            if self.assignments.num_domain_updates() == num_updates_at_round_start {
                break;
            }
        }

        if self.assignments.num_domain_updates() == num_updates_at_start {
            PropagationOutcome::NoChange
        } else {
            PropagationOutcome::Changed
        }
    }
}

/// Methods through which constraints register their propagators.
impl Solver {
    /// Registers the propagator and propagates to the first fixpoint.
    ///
    /// A conflict detected while doing so marks the solver failed and is reported as
    /// [`ConstraintOperationError::InfeasiblePropagator`].
    pub(crate) fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        if self.failed {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        let name = propagator.name().to_owned();
        let propagator_id = self.propagators.alloc(Box::new(propagator));
        trace!("registered propagator {name} as {propagator_id:?}");

        if self.propagate() == PropagationOutcome::Failed {
            debug!("propagator {name} is infeasible at the root");
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }
        Ok(())
    }

    /// Raises the lower bound of a variable as a side effect of posting a constraint. An empty
    /// domain marks the solver failed.
    pub(crate) fn post_lower_bound(
        &mut self,
        domain_id: DomainId,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let result = self.assignments.tighten_lower_bound(domain_id, bound);
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    /// The number of registered propagators; mostly useful for inspection in tests.
    pub fn num_propagators(&self) -> usize {
        self.propagators.len()
    }
}
