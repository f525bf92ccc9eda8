use crate::engine::EmptyDomain;

/// The result of invoking a constraint programming propagator. The propagation can either succeed
/// or identify a conflict.
pub(crate) type PropagationStatusCP = Result<(), Inconsistency>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    /// A domain of one of the variables became empty while propagating.
    EmptyDomain,
    /// The propagator determined that the current domains admit no solution without pruning a
    /// specific domain first.
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}

/// The observable outcome of driving the registered propagators to a fixpoint.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// The fixpoint was reached without tightening any domain.
    NoChange,
    /// At least one domain was tightened before the fixpoint was reached.
    Changed,
    /// The current domains admit no solution; the enclosing search should backtrack.
    Failed,
}
