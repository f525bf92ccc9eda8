#![cfg(test)]
//! This module exposes helpers that aid testing of CP propagators. The [`TestSolver`] allows
//! setting up specific scenarios under which to test the various operations of a propagator.
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::Assignments;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;

/// A container for CP variables, which can be used to test propagators.
#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    assignments: Assignments,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.assignments.grow(lower_bound, upper_bound)
    }

    pub(crate) fn new_literal(&mut self) -> Literal {
        Literal::new(self.assignments.grow(0, 1))
    }

    /// Runs the propagator to its fixpoint on the current domains.
    pub(crate) fn new_propagator(
        &mut self,
        mut propagator: impl Propagator + 'static,
    ) -> Result<Box<dyn Propagator>, Inconsistency> {
        self.run_to_fixpoint(&mut propagator)?;
        Ok(Box::new(propagator))
    }

    pub(crate) fn propagate(
        &mut self,
        propagator: &mut Box<dyn Propagator>,
    ) -> PropagationStatusCP {
        self.run_to_fixpoint(propagator.as_mut())
    }

    fn run_to_fixpoint(&mut self, propagator: &mut dyn Propagator) -> PropagationStatusCP {
        loop {
            let num_updates = self.assignments.num_domain_updates();
            propagator.propagate(PropagationContextMut::new(&mut self.assignments))?;
            if self.assignments.num_domain_updates() == num_updates {
                return Ok(());
            }
        }
    }

    pub(crate) fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_lower_bound(domain_id)
    }

    pub(crate) fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_upper_bound(domain_id)
    }

    pub(crate) fn set_lower_bound(&mut self, domain_id: DomainId, bound: i32) {
        self.assignments
            .tighten_lower_bound(domain_id, bound)
            .expect("the new lower bound should not empty the domain");
    }

    pub(crate) fn set_upper_bound(&mut self, domain_id: DomainId, bound: i32) {
        self.assignments
            .tighten_upper_bound(domain_id, bound)
            .expect("the new upper bound should not empty the domain");
    }

    pub(crate) fn set_literal(&mut self, literal: Literal, truth_value: bool) {
        let result = if truth_value {
            self.assignments.tighten_lower_bound(literal.domain_id(), 1)
        } else {
            self.assignments.tighten_upper_bound(literal.domain_id(), 0)
        };
        result.expect("the literal should not be fixed to the opposite polarity");
    }

    pub(crate) fn is_literal_false(&self, literal: Literal) -> bool {
        self.assignments.evaluate_literal(literal) == Some(false)
    }
}
