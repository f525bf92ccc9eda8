use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::PropagationContextMut;

/// All propagators implement the [`Propagator`] trait, which defines the main propagator logic
/// with regards to propagation and detecting conflicts.
///
/// A propagator is invoked repeatedly by the fixpoint driver until no propagator tightens a
/// domain anymore. A propagator is not required to propagate until a fixpoint in a single call;
/// it must however be *sound*: it may only remove values which participate in no solution of the
/// constraint it enforces, and it may only report an [`Inconsistency`] when the current domains
/// admit no solution at all.
///
/// [`Inconsistency`]: crate::basic_types::Inconsistency
pub(crate) trait Propagator {
    /// Return the name of the propagator; this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Propagate method that will be called by the fixpoint driver.
    ///
    /// This method extends the current partial assignment with inferred domain changes. In case
    /// no conflict has been detected it should return [`Result::Ok`], otherwise it should return
    /// a [`Result::Err`] with the reason for the failure.
    fn propagate(&mut self, context: PropagationContextMut<'_>) -> PropagationStatusCP;

    /// Clones the propagator into a box; used when the enclosing search copies a node for a new
    /// branch.
    fn clone_box(&self) -> Box<dyn Propagator>;
}

impl Clone for Box<dyn Propagator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
