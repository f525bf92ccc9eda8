use log::trace;

use super::task::UnaryTask;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;

/// Propagator for the unary resource constraint over one task set.
///
/// The propagation is pairwise order reasoning: for every pair of tasks which are both certainly
/// present, at least one of the two orders `a before b` or `b before a` must remain feasible.
/// When neither remains, the propagator reports a conflict (or removes an optional task which
/// cannot coexist with a present one); when exactly one remains, it is enforced by tightening the
/// start and end bounds of both tasks.
///
/// This filtering is sound but deliberately not as strong as edge finding; the fixpoint driver
/// re-invokes the propagator until its inferences stabilise.
#[derive(Clone, Debug)]
pub(crate) struct Unary<Task> {
    tasks: Box<[Task]>,
}

impl<Task: UnaryTask> Unary<Task> {
    pub(crate) fn new(tasks: Vec<Task>) -> Self {
        Unary {
            tasks: tasks.into_boxed_slice(),
        }
    }

    fn propagate_pair(
        &self,
        first: usize,
        second: usize,
        context: &mut PropagationContextMut<'_>,
    ) -> PropagationStatusCP {
        let a = &self.tasks[first];
        let b = &self.tasks[second];

        let ctx = context.as_readonly();
        if !a.may_be_present(ctx) || !b.may_be_present(ctx) {
            return Ok(());
        }
        if a.max_duration(ctx) == 0 && b.max_duration(ctx) == 0 {
            // Two zero-width tasks never overlap.
            return Ok(());
        }

        // All reasoning is done in i64 so that bounds close to the integer limits cannot wrap.
        let earliest_completion = |task: &Task| {
            i64::from(task.earliest_end(ctx))
                .max(i64::from(task.earliest_start(ctx)) + i64::from(task.min_duration(ctx)))
        };
        let latest_commencement = |task: &Task| {
            i64::from(task.latest_start(ctx))
                .min(i64::from(task.latest_end(ctx)) - i64::from(task.min_duration(ctx)))
        };

        let ect_a = earliest_completion(a);
        let ect_b = earliest_completion(b);
        let lst_a = latest_commencement(a);
        let lst_b = latest_commencement(b);

        let a_before_b = ect_a <= lst_b;
        let b_before_a = ect_b <= lst_a;

        if a_before_b && b_before_a {
            return Ok(());
        }

        let a_present = a.is_present(ctx);
        let b_present = b.is_present(ctx);

        if !a_before_b && !b_before_a {
            // The pair can no longer be ordered; present tasks would overlap.
            return match (a_present, b_present) {
                (true, true) => {
                    trace!(
                        "unary: present tasks {} and {} cannot be ordered",
                        a.local_id(),
                        b.local_id()
                    );
                    Err(Inconsistency::Conflict)
                }
                (true, false) => {
                    trace!(
                        "unary: tasks {} and {} cannot be ordered, excluding {}",
                        a.local_id(),
                        b.local_id(),
                        b.local_id()
                    );
                    b.exclude(context).map_err(Inconsistency::from)
                }
                (false, true) => {
                    trace!(
                        "unary: tasks {} and {} cannot be ordered, excluding {}",
                        a.local_id(),
                        b.local_id(),
                        a.local_id()
                    );
                    a.exclude(context).map_err(Inconsistency::from)
                }
                // Neither task is certainly present; excluding either one would be a guess.
                (false, false) => Ok(()),
            };
        }

        // Exactly one order remains; enforcing it is only sound once both tasks are certainly
        // present.
        if !(a_present && b_present) {
            return Ok(());
        }

        if a_before_b {
            trace!(
                "unary: task {} must precede task {}",
                a.local_id(),
                b.local_id()
            );
            b.set_earliest_start(context, ect_a as i32)?;
            a.set_latest_end(context, lst_b as i32)?;
        } else {
            trace!(
                "unary: task {} must precede task {}",
                b.local_id(),
                a.local_id()
            );
            a.set_earliest_start(context, ect_b as i32)?;
            b.set_latest_end(context, lst_a as i32)?;
        }
        Ok(())
    }
}

impl<Task: UnaryTask> Propagator for Unary<Task> {
    fn name(&self) -> &str {
        "Unary"
    }

    fn propagate(&mut self, mut context: PropagationContextMut<'_>) -> PropagationStatusCP {
        for first in 0..self.tasks.len() {
            for second in first + 1..self.tasks.len() {
                self.propagate_pair(first, second, &mut context)?;
            }
        }
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Propagator> {
        Box::new(self.clone())
    }
}
