//! Checking of fully assigned schedules against the non-overlap invariant of the unary resource
//! constraint.
//!
//! The check is the ground truth for the constraint: it is written directly against the
//! invariant and is deliberately independent of the propagators, so that the two can be tested
//! against one another.
use itertools::Itertools;

/// A task of a fully assigned schedule: every decision about the task has been made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignedTask {
    pub start: i32,
    pub duration: i32,
    pub present: bool,
}

impl AssignedTask {
    /// A task which is certainly part of the schedule.
    pub fn new(start: i32, duration: i32) -> AssignedTask {
        AssignedTask {
            start,
            duration,
            present: true,
        }
    }

    fn overlaps(&self, other: &AssignedTask) -> bool {
        i64::from(self.start) + i64::from(self.duration) > i64::from(other.start)
            && i64::from(other.start) + i64::from(other.duration) > i64::from(self.start)
    }
}

/// Returns the indices of the first pair of present tasks which execute at overlapping times, or
/// `None` if the schedule satisfies the non-overlap invariant.
pub fn first_overlap(tasks: &[AssignedTask]) -> Option<(usize, usize)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.present)
        .tuple_combinations()
        .find(|((_, first), (_, second))| first.overlaps(second))
        .map(|((first, _), (second, _))| (first, second))
}

/// Whether the fully assigned schedule satisfies the non-overlap invariant: for every pair of
/// distinct present tasks, one ends before (or exactly when) the other starts.
pub fn is_valid_schedule(tasks: &[AssignedTask]) -> bool {
    first_overlap(tasks).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_back_tasks_do_not_overlap() {
        let tasks = [
            AssignedTask::new(0, 2),
            AssignedTask::new(2, 2),
            AssignedTask::new(4, 2),
            AssignedTask::new(6, 2),
        ];
        assert!(is_valid_schedule(&tasks));
    }

    #[test]
    fn the_overlapping_pair_is_reported() {
        let tasks = [
            AssignedTask::new(0, 2),
            AssignedTask::new(1, 2),
            AssignedTask::new(2, 2),
            AssignedTask::new(3, 2),
        ];
        assert_eq!(first_overlap(&tasks), Some((0, 1)));
    }

    #[test]
    fn absent_tasks_are_ignored() {
        let tasks = [
            AssignedTask {
                start: 0,
                duration: 2,
                present: true,
            },
            AssignedTask {
                start: 0,
                duration: 2,
                present: false,
            },
        ];
        assert!(is_valid_schedule(&tasks));
    }

    #[test]
    fn zero_width_tasks_may_share_endpoints() {
        let tasks = [
            AssignedTask::new(0, 2),
            AssignedTask::new(0, 0),
            AssignedTask::new(2, 0),
            AssignedTask::new(2, 0),
        ];
        assert!(is_valid_schedule(&tasks));
    }

    #[test]
    fn a_zero_width_task_strictly_inside_another_overlaps_it() {
        let tasks = [AssignedTask::new(0, 2), AssignedTask::new(1, 0)];
        assert_eq!(first_overlap(&tasks), Some((0, 1)));
    }

    #[test]
    fn bounds_near_the_integer_limits_do_not_wrap() {
        let tasks = [
            AssignedTask::new(i32::MAX - 2, 2),
            AssignedTask::new(i32::MAX - 4, 2),
        ];
        assert!(is_valid_schedule(&tasks));
    }
}
