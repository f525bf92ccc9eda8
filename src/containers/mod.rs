//! Contains containers which are used by the solver.
mod keyed_vec;

pub(crate) use keyed_vec::*;
