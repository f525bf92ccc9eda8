//! Tests for the posting surface of the unary resource constraint: argument validation, the
//! failed-solver no-op, and root-level propagation through the public API.
use unary_scheduling::ArgumentError;
use unary_scheduling::PropagationOutcome;
use unary_scheduling::Solver;
use unary_scheduling::constraints;
use unary_scheduling::variables::DomainId;

fn solver_with_starts(n: usize, lower_bound: i32, upper_bound: i32) -> (Solver, Vec<DomainId>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut solver = Solver::default();
    let starts = (0..n)
        .map(|_| solver.new_bounded_integer(lower_bound, upper_bound))
        .collect();
    (solver, starts)
}

#[test]
fn aliased_start_variables_are_rejected() {
    let (mut solver, starts) = solver_with_starts(2, 0, 10);
    let aliased = vec![starts[0], starts[1], starts[0]];

    let result = constraints::unary(&mut solver, &aliased, &[2, 2, 2]);
    assert_eq!(result, Err(ArgumentError::Aliasing));

    // The same input reports the same error on every call.
    let result = constraints::unary(&mut solver, &aliased, &[2, 2, 2]);
    assert_eq!(result, Err(ArgumentError::Aliasing));
    assert_eq!(solver.num_propagators(), 0);
}

#[test]
fn start_variables_aliasing_durations_or_ends_are_rejected() {
    let (mut solver, starts) = solver_with_starts(2, 0, 10);
    let durations = vec![solver.new_bounded_integer(1, 3), starts[1]];
    let ends = vec![solver.new_bounded_integer(0, 20), solver.new_bounded_integer(0, 20)];

    let result = constraints::unary_flexible(&mut solver, &starts, &durations, &ends);
    assert_eq!(result, Err(ArgumentError::Aliasing));
}

#[test]
fn mismatched_sequence_lengths_are_rejected() {
    let (mut solver, starts) = solver_with_starts(3, 0, 10);

    let result = constraints::unary(&mut solver, &starts, &[2, 2]);
    assert_eq!(result, Err(ArgumentError::SizeMismatch));

    let presence = vec![solver.new_literal(); 2];
    let result = constraints::unary_optional(&mut solver, &starts, &[2, 2, 2], &presence);
    assert_eq!(result, Err(ArgumentError::SizeMismatch));
    assert_eq!(solver.num_propagators(), 0);
}

#[test]
fn negative_fixed_durations_are_rejected() {
    let (mut solver, starts) = solver_with_starts(2, 0, 10);

    let result = constraints::unary(&mut solver, &starts, &[2, -1]);
    assert_eq!(result, Err(ArgumentError::OutOfRange));
}

#[test]
fn tasks_which_could_end_past_the_integer_limit_are_rejected() {
    let (mut solver, starts) = solver_with_starts(2, 0, i32::MAX - 1);

    let result = constraints::unary(&mut solver, &starts, &[2, 2]);
    assert_eq!(result, Err(ArgumentError::OutOfRange));
}

#[test]
fn posting_into_a_failed_solver_is_a_no_op() {
    let (mut solver, starts) = solver_with_starts(2, 0, 10);
    // Fail the solver through an impossible assignment.
    assert!(solver.assign(starts[0], 42).is_err());
    assert!(solver.is_failed());

    // Even malformed arguments are not inspected anymore.
    let aliased = vec![starts[0], starts[0]];
    assert_eq!(constraints::unary(&mut solver, &aliased, &[2, 2]), Ok(()));
    assert_eq!(
        constraints::unary(&mut solver, &starts, &[-1, -1]),
        Ok(())
    );
    assert_eq!(solver.num_propagators(), 0);
}

#[test]
fn posting_propagates_to_the_root_fixpoint() {
    let (mut solver, _) = solver_with_starts(0, 0, 0);
    let a = solver.new_bounded_integer(0, 5);
    let b = solver.new_bounded_integer(0, 2);

    constraints::unary(&mut solver, &[a, b], &[3, 3]).expect("valid arguments");

    // `a` cannot precede `b`, so `a` starts after `b` completes.
    assert!(!solver.is_failed());
    assert_eq!(solver.lower_bound(a), 3);
}

#[test]
fn root_level_infeasibility_fails_the_solver_without_an_argument_error() {
    let (mut solver, _) = solver_with_starts(0, 0, 0);
    let a = solver.new_bounded_integer(0, 0);
    let b = solver.new_bounded_integer(2, 2);

    let result = constraints::unary(&mut solver, &[a, b], &[4, 4]);

    assert_eq!(result, Ok(()));
    assert!(solver.is_failed());
}

#[test]
fn a_consistent_schedule_is_accepted_in_any_task_order() {
    for permutation in [[0, 2, 4, 6], [6, 4, 0, 2], [2, 0, 6, 4]] {
        let (mut solver, starts) = solver_with_starts(4, 0, 8);
        constraints::unary(&mut solver, &starts, &[2, 2, 2, 2]).expect("valid arguments");

        for (&start, value) in starts.iter().zip(permutation) {
            solver.assign(start, value).expect("value within domain");
        }

        assert_ne!(solver.propagate(), PropagationOutcome::Failed);
    }
}

#[test]
fn an_overlapping_schedule_is_rejected() {
    let (mut solver, starts) = solver_with_starts(4, 0, 8);
    constraints::unary(&mut solver, &starts, &[2, 2, 2, 2]).expect("valid arguments");

    for (&start, value) in starts.iter().zip([0, 1, 2, 3]) {
        let _ = solver.assign(start, value);
    }

    assert_eq!(solver.propagate(), PropagationOutcome::Failed);
}

#[test]
fn absent_tasks_do_not_conflict_with_present_ones() {
    let (mut solver, starts) = solver_with_starts(4, 0, 8);
    let presence = (0..4).map(|_| solver.new_literal()).collect::<Vec<_>>();
    constraints::unary_optional(&mut solver, &starts, &[2, 2, 2, 2], &presence)
        .expect("valid arguments");

    // Tasks 0 and 1 overlap, as do tasks 2 and 3; only one of each pair is present.
    for (&literal, present) in presence.iter().zip([true, false, true, false]) {
        solver.set_literal(literal, present).expect("literal free");
    }
    for (&start, value) in starts.iter().zip([0, 0, 5, 5]) {
        solver.assign(start, value).expect("value within domain");
    }

    assert_ne!(solver.propagate(), PropagationOutcome::Failed);
}

#[test]
fn simultaneously_present_overlapping_tasks_are_rejected() {
    let (mut solver, starts) = solver_with_starts(2, 0, 8);
    let presence = (0..2).map(|_| solver.new_literal()).collect::<Vec<_>>();
    constraints::unary_optional(&mut solver, &starts, &[2, 2], &presence)
        .expect("valid arguments");

    for &literal in &presence {
        solver.set_literal(literal, true).expect("literal free");
    }
    for (&start, value) in starts.iter().zip([0, 0]) {
        let _ = solver.assign(start, value);
    }

    assert_eq!(solver.propagate(), PropagationOutcome::Failed);
}

#[test]
fn cloned_solvers_are_independent_branches() {
    let (mut solver, starts) = solver_with_starts(2, 0, 8);
    constraints::unary(&mut solver, &starts, &[2, 2]).expect("valid arguments");

    let mut branch = solver.clone();
    for (&start, value) in starts.iter().zip([0, 1]) {
        let _ = branch.assign(start, value);
    }
    assert_eq!(branch.propagate(), PropagationOutcome::Failed);

    // The original search node is untouched by the failed branch.
    assert!(!solver.is_failed());
    assert_eq!(solver.lower_bound(starts[0]), 0);
    assert_eq!(solver.upper_bound(starts[1]), 8);
    assert_ne!(solver.propagate(), PropagationOutcome::Failed);
}

#[test]
fn posting_constrains_flexible_durations_to_be_non_negative() {
    let (mut solver, starts) = solver_with_starts(2, 0, 10);
    let durations = (0..2)
        .map(|_| solver.new_bounded_integer(-3, 2))
        .collect::<Vec<_>>();
    let ends = (0..2)
        .map(|_| solver.new_bounded_integer(0, 20))
        .collect::<Vec<_>>();

    constraints::unary_flexible(&mut solver, &starts, &durations, &ends)
        .expect("valid arguments");

    assert!(!solver.is_failed());
    assert_eq!(solver.lower_bound(durations[0]), 0);
    assert_eq!(solver.lower_bound(durations[1]), 0);
}

#[test]
fn a_necessarily_negative_flexible_duration_fails_the_solver() {
    let (mut solver, starts) = solver_with_starts(1, 0, 10);
    let durations = vec![solver.new_bounded_integer(-5, -1)];
    let ends = vec![solver.new_bounded_integer(0, 20)];

    let result = constraints::unary_flexible(&mut solver, &starts, &durations, &ends);

    assert_eq!(result, Ok(()));
    assert!(solver.is_failed());
}

#[test]
fn flexible_tasks_respect_the_start_duration_end_link() {
    let (mut solver, starts) = solver_with_starts(2, 0, 10);
    let durations = (0..2)
        .map(|_| solver.new_bounded_integer(0, 4))
        .collect::<Vec<_>>();
    let ends = (0..2)
        .map(|_| solver.new_bounded_integer(0, 20))
        .collect::<Vec<_>>();

    constraints::unary_flexible(&mut solver, &starts, &durations, &ends)
        .expect("valid arguments");

    solver.assign(starts[0], 1).expect("value within domain");
    solver.assign(durations[0], 3).expect("value within domain");
    assert_ne!(solver.propagate(), PropagationOutcome::Failed);

    assert_eq!(solver.lower_bound(ends[0]), 4);
    assert_eq!(solver.upper_bound(ends[0]), 4);
}

#[test]
fn optional_flexible_tasks_combine_presence_and_the_link() {
    let (mut solver, starts) = solver_with_starts(2, 0, 4);
    let durations = (0..2)
        .map(|_| solver.new_bounded_integer(0, 4))
        .collect::<Vec<_>>();
    let ends = (0..2)
        .map(|_| solver.new_bounded_integer(0, 10))
        .collect::<Vec<_>>();
    let presence = (0..2).map(|_| solver.new_literal()).collect::<Vec<_>>();

    constraints::unary_optional_flexible(&mut solver, &starts, &durations, &ends, &presence)
        .expect("valid arguments");

    // Both tasks need the whole horizon; they cannot both be present.
    for (&start, value) in starts.iter().zip([0, 0]) {
        solver.assign(start, value).expect("value within domain");
    }
    for (&duration, value) in durations.iter().zip([4, 4]) {
        solver.assign(duration, value).expect("value within domain");
    }
    solver.set_literal(presence[0], true).expect("literal free");

    assert_ne!(solver.propagate(), PropagationOutcome::Failed);
    assert_eq!(solver.literal_value(presence[1]), Some(false));
}
