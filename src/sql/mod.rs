//! Safe SQL builder: identifiers quoted, values as parameters.

mod builder;
mod exec;
pub mod params;
pub use builder::*;
pub use exec::*;
pub use params::*;
