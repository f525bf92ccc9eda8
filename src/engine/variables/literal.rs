use crate::engine::variables::DomainId;

/// A boolean variable in the solver; it is represented as an integer domain over `{0, 1}` where
/// `1` stands for true.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    domain_id: DomainId,
}

impl Literal {
    pub(crate) fn new(domain_id: DomainId) -> Literal {
        Literal { domain_id }
    }

    pub(crate) fn domain_id(&self) -> DomainId {
        self.domain_id
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.domain_id)
    }
}
