use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;

/// A read-only view on the domains, handed to propagators while they inspect the current bounds.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PropagationContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        PropagationContext { assignments }
    }

    pub(crate) fn lower_bound(self, domain_id: DomainId) -> i32 {
        self.assignments.get_lower_bound(domain_id)
    }

    pub(crate) fn upper_bound(self, domain_id: DomainId) -> i32 {
        self.assignments.get_upper_bound(domain_id)
    }

    /// Whether the literal is fixed to true.
    pub(crate) fn is_literal_true(self, literal: Literal) -> bool {
        self.assignments.evaluate_literal(literal) == Some(true)
    }

    /// Whether the literal is fixed to false.
    pub(crate) fn is_literal_false(self, literal: Literal) -> bool {
        self.assignments.evaluate_literal(literal) == Some(false)
    }
}

/// A mutable view on the domains, handed to propagators while they are propagating.
#[derive(Debug)]
pub(crate) struct PropagationContextMut<'a> {
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments) -> Self {
        PropagationContextMut { assignments }
    }

    pub(crate) fn as_readonly(&self) -> PropagationContext<'_> {
        PropagationContext::new(self.assignments)
    }

    pub(crate) fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_lower_bound(domain_id)
    }

    pub(crate) fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_upper_bound(domain_id)
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        domain_id: DomainId,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.assignments.tighten_lower_bound(domain_id, bound)
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        domain_id: DomainId,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.assignments.tighten_upper_bound(domain_id, bound)
    }

    /// Fixes the literal to false.
    pub(crate) fn assign_literal_false(&mut self, literal: Literal) -> Result<(), EmptyDomain> {
        self.assignments.tighten_upper_bound(literal.domain_id(), 0)
    }
}
