use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;

/// The domain store of the solver: for every [`DomainId`] it tracks the current lower and upper
/// bound.
///
/// The store is cloned wholesale when the enclosing search branches; a clone shares no state with
/// the original, which keeps sibling search nodes fully independent.
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignments {
    domains: KeyedVec<DomainId, Domain>,
    /// The number of domain tightenings performed so far; used by the fixpoint driver to detect
    /// whether a propagation round changed anything.
    num_domain_updates: u64,
}

#[derive(Clone, Copy, Debug)]
struct Domain {
    lower_bound: i32,
    upper_bound: i32,
}

/// Signals that a domain tightening removed the last value from a domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EmptyDomain;

impl Assignments {
    /// Creates a new domain with the given bounds and returns its id.
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.domains.push(Domain {
            lower_bound,
            upper_bound,
        })
    }

    pub(crate) fn num_domain_updates(&self) -> u64 {
        self.num_domain_updates
    }

    pub(crate) fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound
    }

    pub(crate) fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound
    }

    /// Raises the lower bound of the domain to `bound`. Bounds which are not strictly tighter
    /// than the current lower bound are ignored.
    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if bound <= domain.lower_bound {
            return Ok(());
        }
        domain.lower_bound = bound;
        self.num_domain_updates += 1;
        if domain.lower_bound > domain.upper_bound {
            Err(EmptyDomain)
        } else {
            Ok(())
        }
    }

    /// Lowers the upper bound of the domain to `bound`. Bounds which are not strictly tighter
    /// than the current upper bound are ignored.
    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if bound >= domain.upper_bound {
            return Ok(());
        }
        domain.upper_bound = bound;
        self.num_domain_updates += 1;
        if domain.lower_bound > domain.upper_bound {
            Err(EmptyDomain)
        } else {
            Ok(())
        }
    }

    /// Fixes the domain to a single value.
    pub(crate) fn make_assignment(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        self.tighten_lower_bound(domain_id, value)?;
        self.tighten_upper_bound(domain_id, value)
    }

    /// Returns `Some(truth value)` if the literal is fixed and `None` otherwise.
    pub(crate) fn evaluate_literal(&self, literal: Literal) -> Option<bool> {
        let domain = self.domains[literal.domain_id()];
        if domain.lower_bound == 1 {
            Some(true)
        } else if domain.upper_bound == 0 {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tightening_to_a_weaker_bound_is_ignored() {
        let mut assignments = Assignments::default();
        let domain = assignments.grow(0, 10);

        assert!(assignments.tighten_lower_bound(domain, -5).is_ok());
        assert!(assignments.tighten_upper_bound(domain, 12).is_ok());

        assert_eq!(assignments.get_lower_bound(domain), 0);
        assert_eq!(assignments.get_upper_bound(domain), 10);
        assert_eq!(assignments.num_domain_updates(), 0);
    }

    #[test]
    fn crossing_bounds_empty_the_domain() {
        let mut assignments = Assignments::default();
        let domain = assignments.grow(0, 10);

        assert!(assignments.tighten_lower_bound(domain, 7).is_ok());
        assert_eq!(assignments.tighten_upper_bound(domain, 6), Err(EmptyDomain));
    }

    #[test]
    fn cloned_assignments_are_independent() {
        let mut assignments = Assignments::default();
        let domain = assignments.grow(0, 10);

        let mut clone = assignments.clone();
        assert!(clone.make_assignment(domain, 3).is_ok());

        assert_eq!(assignments.get_lower_bound(domain), 0);
        assert_eq!(assignments.get_upper_bound(domain), 10);
        assert_eq!(clone.get_lower_bound(domain), 3);
        assert_eq!(clone.get_upper_bound(domain), 3);
    }
}
