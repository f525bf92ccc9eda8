//! Contains the propagators which enforce the unary resource constraint.
pub(crate) mod unary;
