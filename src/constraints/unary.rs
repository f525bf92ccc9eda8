use fnv::FnvHashSet;
use log::debug;

use super::Constraint;
use crate::ArgumentError;
use crate::Solver;
use crate::engine::propagation::LocalId;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;
use crate::propagators::unary::FixedTask;
use crate::propagators::unary::FlexibleTask;
use crate::propagators::unary::OptionalTask;
use crate::propagators::unary::StartDurationEndLink;
use crate::propagators::unary::Unary;

/// Creates the [Disjunctive](https://sofdem.github.io/gccat/gccat/Cdisjunctive.html) constraint
/// over mandatory tasks with fixed durations: no two of the tasks ever execute at overlapping
/// times.
///
/// Every task occupies the half-open interval `[start, start + duration)`. The task set is built
/// in input order; task `i` of the constraint corresponds to index `i` of the argument
/// sequences.
///
/// # Errors
/// The arguments are checked before any domain is touched: the start variables must be pairwise
/// distinct ([`ArgumentError::Aliasing`]), the sequences must have equal length
/// ([`ArgumentError::SizeMismatch`]), and every duration must be non-negative with
/// `upper_bound(start) + duration` representable ([`ArgumentError::OutOfRange`]).
///
/// If the solver is already failed the call is a no-op and returns `Ok(())`. Infeasibility
/// detected while registering the propagator marks the solver failed; it is not an argument
/// error.
pub fn unary(
    solver: &mut Solver,
    start_times: &[DomainId],
    durations: &[i32],
) -> Result<(), ArgumentError> {
    if solver.is_failed() {
        debug!("unary: posting skipped, the solver is already failed");
        return Ok(());
    }

    check_aliasing(start_times, [])?;
    check_equal_sizes(start_times.len(), [durations.len()])?;
    check_fixed_durations(solver, start_times, durations)?;

    let tasks = build_fixed_tasks(start_times, durations);
    post(solver, Unary::new(tasks));
    Ok(())
}

/// Creates the disjunctive constraint over optional tasks with fixed durations: no two tasks
/// whose presence literals are true ever execute at overlapping times.
///
/// A task whose presence literal is false is removed from the constraint entirely; the
/// propagator may itself fix a presence literal to false when the task can no longer coexist
/// with a present one.
///
/// # Errors
/// See [`unary`]; the presence sequence participates in the length check.
pub fn unary_optional(
    solver: &mut Solver,
    start_times: &[DomainId],
    durations: &[i32],
    presence: &[Literal],
) -> Result<(), ArgumentError> {
    if solver.is_failed() {
        debug!("unary: posting skipped, the solver is already failed");
        return Ok(());
    }

    check_aliasing(start_times, [])?;
    check_equal_sizes(start_times.len(), [durations.len(), presence.len()])?;
    check_fixed_durations(solver, start_times, durations)?;

    let tasks = build_fixed_tasks(start_times, durations)
        .into_iter()
        .zip(presence)
        .map(|(task, &presence)| OptionalTask { task, presence })
        .collect();
    post(solver, Unary::new(tasks));
    Ok(())
}

/// Creates the disjunctive constraint over mandatory tasks whose durations are themselves
/// decision variables, with explicit end variables.
///
/// As a side effect of posting, every duration domain is constrained to be non-negative and one
/// `start + duration = end` link is posted per task; an empty domain produced by either marks
/// the solver failed.
///
/// # Errors
/// See [`unary`]. The start variables must additionally be distinct from all duration and end
/// variables ([`ArgumentError::Aliasing`]); the range check uses the duration upper bounds.
pub fn unary_flexible(
    solver: &mut Solver,
    start_times: &[DomainId],
    durations: &[DomainId],
    ends: &[DomainId],
) -> Result<(), ArgumentError> {
    if solver.is_failed() {
        debug!("unary: posting skipped, the solver is already failed");
        return Ok(());
    }

    check_aliasing(start_times, durations.iter().chain(ends).copied())?;
    check_equal_sizes(start_times.len(), [durations.len(), ends.len()])?;
    check_flexible_durations(solver, start_times, durations)?;

    if !post_flexible_side_constraints(solver, start_times, durations, ends) {
        return Ok(());
    }
    let tasks = build_flexible_tasks(start_times, durations, ends);
    post(solver, Unary::new(tasks));
    Ok(())
}

/// Creates the disjunctive constraint over optional tasks with variable durations; the
/// combination of [`unary_optional`] and [`unary_flexible`].
pub fn unary_optional_flexible(
    solver: &mut Solver,
    start_times: &[DomainId],
    durations: &[DomainId],
    ends: &[DomainId],
    presence: &[Literal],
) -> Result<(), ArgumentError> {
    if solver.is_failed() {
        debug!("unary: posting skipped, the solver is already failed");
        return Ok(());
    }

    check_aliasing(start_times, durations.iter().chain(ends).copied())?;
    check_equal_sizes(
        start_times.len(),
        [durations.len(), ends.len(), presence.len()],
    )?;
    check_flexible_durations(solver, start_times, durations)?;

    if !post_flexible_side_constraints(solver, start_times, durations, ends) {
        return Ok(());
    }
    let tasks = build_flexible_tasks(start_times, durations, ends)
        .into_iter()
        .zip(presence)
        .map(|(task, &presence)| OptionalTask { task, presence })
        .collect();
    post(solver, Unary::new(tasks));
    Ok(())
}

/// The start variables must be pairwise distinct and must not occur among the duration and end
/// variables. Duplicates within the durations or the ends are fine.
fn check_aliasing(
    start_times: &[DomainId],
    other_variables: impl IntoIterator<Item = DomainId>,
) -> Result<(), ArgumentError> {
    let mut starts = FnvHashSet::default();
    for &start in start_times {
        if !starts.insert(start) {
            return Err(ArgumentError::Aliasing);
        }
    }
    for variable in other_variables {
        if starts.contains(&variable) {
            return Err(ArgumentError::Aliasing);
        }
    }
    Ok(())
}

fn check_equal_sizes(
    num_tasks: usize,
    other_lengths: impl IntoIterator<Item = usize>,
) -> Result<(), ArgumentError> {
    if other_lengths.into_iter().any(|length| length != num_tasks) {
        return Err(ArgumentError::SizeMismatch);
    }
    Ok(())
}

/// Every fixed duration must be non-negative, and the latest end of every task must be
/// representable; the latter guards against wraparound when the propagator later computes
/// `start + duration`.
fn check_fixed_durations(
    solver: &Solver,
    start_times: &[DomainId],
    durations: &[i32],
) -> Result<(), ArgumentError> {
    for (&start, &duration) in start_times.iter().zip(durations) {
        if duration < 0 {
            return Err(ArgumentError::OutOfRange);
        }
        if i64::from(solver.upper_bound(start)) + i64::from(duration) > i64::from(i32::MAX) {
            return Err(ArgumentError::OutOfRange);
        }
    }
    Ok(())
}

/// The overflow guard for flexible tasks; the non-negativity of the durations is not a
/// precondition here but posted as a side constraint instead.
fn check_flexible_durations(
    solver: &Solver,
    start_times: &[DomainId],
    durations: &[DomainId],
) -> Result<(), ArgumentError> {
    for (&start, &duration) in start_times.iter().zip(durations) {
        let latest_end =
            i64::from(solver.upper_bound(start)) + i64::from(solver.upper_bound(duration));
        if latest_end > i64::from(i32::MAX) {
            return Err(ArgumentError::OutOfRange);
        }
    }
    Ok(())
}

/// Tightens every duration domain to be non-negative and posts the `start + duration = end`
/// links. Returns false when doing so already failed the solver.
fn post_flexible_side_constraints(
    solver: &mut Solver,
    start_times: &[DomainId],
    durations: &[DomainId],
    ends: &[DomainId],
) -> bool {
    for &duration in durations {
        if solver.post_lower_bound(duration, 0).is_err() {
            debug!("unary: constraining a duration to be non-negative failed the solver");
            return false;
        }
    }

    let links = start_times
        .iter()
        .zip(durations)
        .zip(ends)
        .map(|((&start, &duration), &end)| StartDurationEndLink {
            start,
            duration,
            end,
        })
        .collect::<Vec<_>>();
    if let Err(error) = links.post(solver) {
        debug!("unary: posting the start/duration/end links failed: {error}");
        return false;
    }
    true
}

fn build_fixed_tasks(start_times: &[DomainId], durations: &[i32]) -> Vec<FixedTask> {
    start_times
        .iter()
        .zip(durations)
        .enumerate()
        .map(|(index, (&start, &processing_time))| FixedTask {
            start,
            processing_time,
            id: LocalId::from(index as u32),
        })
        .collect()
}

fn build_flexible_tasks(
    start_times: &[DomainId],
    durations: &[DomainId],
    ends: &[DomainId],
) -> Vec<FlexibleTask> {
    start_times
        .iter()
        .zip(durations)
        .zip(ends)
        .enumerate()
        .map(|(index, ((&start, &duration), &end))| FlexibleTask {
            start,
            duration,
            end,
            id: LocalId::from(index as u32),
        })
        .collect()
}

/// Registers the task set with the solver. Root-level infeasibility is a branch failure for the
/// enclosing search, not an error of the posting call.
fn post(solver: &mut Solver, constraint: impl Constraint) {
    if let Err(error) = constraint.post(solver) {
        debug!("unary: registering the task set failed: {error}");
    }
}
