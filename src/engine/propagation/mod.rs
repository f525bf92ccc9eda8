//! Defines the propagator seam: the [`Propagator`] trait, the contexts through which propagators
//! read and tighten domains, and the store which owns the registered propagators.
mod local_id;
mod propagation_context;
mod propagator;
mod store;

pub(crate) use local_id::LocalId;
pub(crate) use propagation_context::PropagationContext;
pub(crate) use propagation_context::PropagationContextMut;
pub(crate) use propagator::Propagator;
pub(crate) use store::PropagatorId;
pub(crate) use store::PropagatorStore;
