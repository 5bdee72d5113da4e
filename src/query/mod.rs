//! Model query façade: chainable selection, filtering, ordering and paging.

mod builder;
mod model;
mod predicate;
pub use builder::Query;
pub use model::Model;
pub use predicate::{Direction, Operator, Predicate};
