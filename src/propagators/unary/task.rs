use crate::engine::EmptyDomain;
use crate::engine::propagation::LocalId;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;

/// The uniform read interface over the four task variants of the unary resource constraint.
///
/// The [`Unary`] propagator is generic over this trait, so one propagation loop covers all
/// variants without branching on the task kind; the mandatory variants answer the presence
/// queries with constants which the compiler folds away.
///
/// [`Unary`]: super::Unary
pub(crate) trait UnaryTask: Clone + 'static {
    /// The index of the task within its task set.
    fn local_id(&self) -> LocalId;

    fn earliest_start(&self, context: PropagationContext<'_>) -> i32;

    fn latest_start(&self, context: PropagationContext<'_>) -> i32;

    fn min_duration(&self, context: PropagationContext<'_>) -> i32;

    fn max_duration(&self, context: PropagationContext<'_>) -> i32;

    fn earliest_end(&self, context: PropagationContext<'_>) -> i32;

    fn latest_end(&self, context: PropagationContext<'_>) -> i32;

    /// Whether the task is certainly part of the schedule.
    fn is_present(&self, context: PropagationContext<'_>) -> bool;

    /// Whether the task can still become part of the schedule.
    fn may_be_present(&self, context: PropagationContext<'_>) -> bool;

    /// Constrains the task to start at `bound` or later.
    fn set_earliest_start(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain>;

    /// Constrains the task to end at `bound` or earlier.
    fn set_latest_end(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain>;

    /// Removes the task from the schedule. For a task which cannot be absent this is a conflict,
    /// reported as an empty domain.
    fn exclude(&self, context: &mut PropagationContextMut<'_>) -> Result<(), EmptyDomain>;
}

/// A mandatory task whose duration is a fixed non-negative constant.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FixedTask {
    pub(crate) start: DomainId,
    pub(crate) processing_time: i32,
    pub(crate) id: LocalId,
}

impl UnaryTask for FixedTask {
    fn local_id(&self) -> LocalId {
        self.id
    }

    fn earliest_start(&self, context: PropagationContext<'_>) -> i32 {
        context.lower_bound(self.start)
    }

    fn latest_start(&self, context: PropagationContext<'_>) -> i32 {
        context.upper_bound(self.start)
    }

    fn min_duration(&self, _: PropagationContext<'_>) -> i32 {
        self.processing_time
    }

    fn max_duration(&self, _: PropagationContext<'_>) -> i32 {
        self.processing_time
    }

    fn earliest_end(&self, context: PropagationContext<'_>) -> i32 {
        // Cannot overflow: the poster guarantees `upper_bound(start) + processing_time` fits.
        context.lower_bound(self.start) + self.processing_time
    }

    fn latest_end(&self, context: PropagationContext<'_>) -> i32 {
        context.upper_bound(self.start) + self.processing_time
    }

    fn is_present(&self, _: PropagationContext<'_>) -> bool {
        true
    }

    fn may_be_present(&self, _: PropagationContext<'_>) -> bool {
        true
    }

    fn set_earliest_start(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        context.set_lower_bound(self.start, bound)
    }

    fn set_latest_end(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let latest_start = i64::from(bound) - i64::from(self.processing_time);
        if latest_start < i64::from(i32::MIN) {
            return Err(EmptyDomain);
        }
        context.set_upper_bound(self.start, latest_start as i32)
    }

    fn exclude(&self, _: &mut PropagationContextMut<'_>) -> Result<(), EmptyDomain> {
        // A mandatory task cannot be removed from the schedule.
        Err(EmptyDomain)
    }
}

/// A mandatory task whose duration is itself a decision variable, with an explicit end variable
/// kept consistent through the `start + duration = end` link.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FlexibleTask {
    pub(crate) start: DomainId,
    pub(crate) duration: DomainId,
    pub(crate) end: DomainId,
    pub(crate) id: LocalId,
}

impl UnaryTask for FlexibleTask {
    fn local_id(&self) -> LocalId {
        self.id
    }

    fn earliest_start(&self, context: PropagationContext<'_>) -> i32 {
        context.lower_bound(self.start)
    }

    fn latest_start(&self, context: PropagationContext<'_>) -> i32 {
        context.upper_bound(self.start)
    }

    fn min_duration(&self, context: PropagationContext<'_>) -> i32 {
        context.lower_bound(self.duration)
    }

    fn max_duration(&self, context: PropagationContext<'_>) -> i32 {
        context.upper_bound(self.duration)
    }

    fn earliest_end(&self, context: PropagationContext<'_>) -> i32 {
        context.lower_bound(self.end)
    }

    fn latest_end(&self, context: PropagationContext<'_>) -> i32 {
        context.upper_bound(self.end)
    }

    fn is_present(&self, _: PropagationContext<'_>) -> bool {
        true
    }

    fn may_be_present(&self, _: PropagationContext<'_>) -> bool {
        true
    }

    fn set_earliest_start(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        context.set_lower_bound(self.start, bound)
    }

    fn set_latest_end(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        context.set_upper_bound(self.end, bound)
    }

    fn exclude(&self, _: &mut PropagationContextMut<'_>) -> Result<(), EmptyDomain> {
        Err(EmptyDomain)
    }
}

/// Wraps a task variant with a presence literal, turning it into an optional task; setting the
/// literal to false removes the task from the non-overlap invariant entirely.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OptionalTask<Task> {
    pub(crate) task: Task,
    pub(crate) presence: Literal,
}

impl<Task: UnaryTask> UnaryTask for OptionalTask<Task> {
    fn local_id(&self) -> LocalId {
        self.task.local_id()
    }

    fn earliest_start(&self, context: PropagationContext<'_>) -> i32 {
        self.task.earliest_start(context)
    }

    fn latest_start(&self, context: PropagationContext<'_>) -> i32 {
        self.task.latest_start(context)
    }

    fn min_duration(&self, context: PropagationContext<'_>) -> i32 {
        self.task.min_duration(context)
    }

    fn max_duration(&self, context: PropagationContext<'_>) -> i32 {
        self.task.max_duration(context)
    }

    fn earliest_end(&self, context: PropagationContext<'_>) -> i32 {
        self.task.earliest_end(context)
    }

    fn latest_end(&self, context: PropagationContext<'_>) -> i32 {
        self.task.latest_end(context)
    }

    fn is_present(&self, context: PropagationContext<'_>) -> bool {
        context.is_literal_true(self.presence)
    }

    fn may_be_present(&self, context: PropagationContext<'_>) -> bool {
        !context.is_literal_false(self.presence)
    }

    fn set_earliest_start(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.task.set_earliest_start(context, bound)
    }

    fn set_latest_end(
        &self,
        context: &mut PropagationContextMut<'_>,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.task.set_latest_end(context, bound)
    }

    fn exclude(&self, context: &mut PropagationContextMut<'_>) -> Result<(), EmptyDomain> {
        context.assign_literal_false(self.presence)
    }
}
