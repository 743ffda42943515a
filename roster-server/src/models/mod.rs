//! Domain models with validation at construction
//!
//! User input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod student;
pub mod validation;

pub use student::{StudentName, MAX_STUDENT_NAME_LEN};
pub use validation::ValidationError;
