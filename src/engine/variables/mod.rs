//! The variable handles which can be used by constraints.
//!
//! There are two handles:
//! - [`DomainId`], an integer decision variable with lower and upper bounds.
//! - [`Literal`], a boolean decision variable represented as a 0-1 integer domain.
mod domain_id;
mod literal;

pub use domain_id::DomainId;
pub use literal::Literal;
