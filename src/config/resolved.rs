//! Registry of named models, shared by the HTTP handlers.

use crate::config::{ModelConfig, ModelsFile};
use crate::error::ConfigError;
use crate::query::Model;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Model>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, name: impl Into<String>, config: ModelConfig) -> Self {
        self.insert(name, config);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, config: ModelConfig) {
        self.models.insert(name.into(), Model::new(config));
    }

    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Like `get`, but an unknown name is a configuration error.
    pub fn model(&self, name: &str) -> Result<&Model, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::UnknownModel(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub(crate) fn configs(&self) -> impl Iterator<Item = (&str, &ModelConfig)> {
        self.models.iter().map(|(k, m)| (k.as_str(), m.config()))
    }
}

impl From<ModelsFile> for ModelRegistry {
    fn from(file: ModelsFile) -> Self {
        let mut registry = ModelRegistry::new();
        for (name, cfg) in file.models {
            registry.insert(name, cfg);
        }
        registry
    }
}
