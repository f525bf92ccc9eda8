use crate::basic_types::PropagationStatusCP;
use crate::engine::EmptyDomain;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::variables::DomainId;

/// Bounds-consistent propagator for the link invariant `start + duration = end` of a single
/// flexible task.
///
/// One instance is posted per flexible task so that the explicit end variable always agrees with
/// the start and duration domains the unary propagator reads.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StartDurationEndLink {
    pub(crate) start: DomainId,
    pub(crate) duration: DomainId,
    pub(crate) end: DomainId,
}

impl Propagator for StartDurationEndLink {
    fn name(&self) -> &str {
        "StartDurationEndLink"
    }

    fn propagate(&mut self, mut context: PropagationContextMut<'_>) -> PropagationStatusCP {
        // The sums are computed in i64; a bound which falls outside the i32 range either cannot
        // tighten anything or proves the domain empty.
        let lower = |context: &PropagationContextMut<'_>, domain: DomainId| {
            i64::from(context.lower_bound(domain))
        };
        let upper = |context: &PropagationContextMut<'_>, domain: DomainId| {
            i64::from(context.upper_bound(domain))
        };

        let bound = lower(&context, self.start) + lower(&context, self.duration);
        set_lower_bound(&mut context, self.end, bound)?;

        let bound = upper(&context, self.start) + upper(&context, self.duration);
        set_upper_bound(&mut context, self.end, bound)?;

        let bound = lower(&context, self.end) - upper(&context, self.duration);
        set_lower_bound(&mut context, self.start, bound)?;

        let bound = upper(&context, self.end) - lower(&context, self.duration);
        set_upper_bound(&mut context, self.start, bound)?;

        let bound = lower(&context, self.end) - upper(&context, self.start);
        set_lower_bound(&mut context, self.duration, bound)?;

        let bound = upper(&context, self.end) - lower(&context, self.start);
        set_upper_bound(&mut context, self.duration, bound)?;

        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Propagator> {
        Box::new(*self)
    }
}

fn set_lower_bound(
    context: &mut PropagationContextMut<'_>,
    domain: DomainId,
    bound: i64,
) -> Result<(), EmptyDomain> {
    if bound > i64::from(i32::MAX) {
        return Err(EmptyDomain);
    }
    if bound < i64::from(i32::MIN) {
        return Ok(());
    }
    context.set_lower_bound(domain, bound as i32)
}

fn set_upper_bound(
    context: &mut PropagationContextMut<'_>,
    domain: DomainId,
    bound: i64,
) -> Result<(), EmptyDomain> {
    if bound < i64::from(i32::MIN) {
        return Err(EmptyDomain);
    }
    if bound > i64::from(i32::MAX) {
        return Ok(());
    }
    context.set_upper_bound(domain, bound as i32)
}
