//! Request validation used by the ORM demo handlers.

mod validation;
pub use validation::{RequestValidator, Rules, ValidationRule};
