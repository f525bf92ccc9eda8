use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::propagation::Propagator;

/// An identifier for a propagator registered with the solver.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub(crate) struct PropagatorId(u32);

impl StorageKey for PropagatorId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        PropagatorId(index as u32)
    }
}

/// Owner of all the propagators registered with the solver.
///
/// The store is cloned together with the domains when the enclosing search branches; the cloned
/// propagators share no state with the originals.
#[derive(Clone, Default)]
pub(crate) struct PropagatorStore {
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
}

impl PropagatorStore {
    pub(crate) fn alloc(&mut self, propagator: Box<dyn Propagator>) -> PropagatorId {
        self.propagators.push(propagator)
    }

    pub(crate) fn len(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn iter_propagators_mut(
        &mut self,
    ) -> impl Iterator<Item = &'_ mut Box<dyn Propagator>> {
        self.propagators.iter_mut()
    }
}

impl std::fmt::Debug for PropagatorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PropagatorStore({} propagators)", self.propagators.len())
    }
}
