//! Load model configuration from JSON text, a file, or the built-in demo set.

use crate::config::{validate, ModelConfig, ModelRegistry, ModelsFile};
use crate::error::ConfigError;
use std::path::Path;

/// Name of the user model in the demo registry.
pub const USERS_MODEL: &str = "users";
/// Name of the post model in the demo registry.
pub const POSTS_MODEL: &str = "posts";

/// Models used by the ORM demo: `users` hides credentials, `posts` shows everything.
pub fn demo_models() -> ModelRegistry {
    ModelRegistry::new()
        .with_model(USERS_MODEL, ModelConfig::table("users").protect(["password", "secret_key"]))
        .with_model(POSTS_MODEL, ModelConfig::table("posts"))
}

/// Parse and validate a models document.
pub fn load_from_str(json: &str) -> Result<ModelRegistry, ConfigError> {
    let file: ModelsFile = serde_json::from_str(json).map_err(|e| ConfigError::Load(e.to_string()))?;
    let registry = ModelRegistry::from(file);
    validate(&registry)?;
    Ok(registry)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<ModelRegistry, ConfigError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    let registry = load_from_str(&text)?;
    tracing::info!(path = %path.display(), models = registry.len(), "loaded models");
    Ok(registry)
}

/// Models from `path` when given, else the demo set.
pub async fn load_or_demo(path: Option<&Path>) -> Result<ModelRegistry, ConfigError> {
    match path {
        Some(p) => load_from_path(p).await,
        None => Ok(demo_models()),
    }
}
