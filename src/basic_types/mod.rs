mod argument_error;
mod constraint_operation_error;
mod propagation_status_cp;

pub use argument_error::*;
pub use constraint_operation_error::*;
pub use propagation_status_cp::*;
