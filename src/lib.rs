//! Quarry SDK: a model query façade over SQLite, and the demo REST surfaces built on it.

pub mod case;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod mock;
pub mod query;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{demo_models, load_or_demo, ModelConfig, ModelRegistry, Settings, POSTS_MODEL, USERS_MODEL};
pub use error::{AppError, ConfigError, QueryError};
pub use migration::apply_demo_schema;
pub use query::{Direction, Model, Operator, Predicate, Query};
pub use response::{success_many, success_one};
pub use routes::{api_routes, basic_routes, common_routes, common_routes_with_ready};
pub use state::{AppState, DemoState};
pub use store::connect;
