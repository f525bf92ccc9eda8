//! The unary resource constraint: among the present tasks of the task set, no two ever execute
//! at overlapping times.
mod link_propagator;
mod task;
mod unary_propagator;

pub(crate) use link_propagator::StartDurationEndLink;
pub(crate) use task::*;
pub(crate) use unary_propagator::Unary;
