//! In-memory resource list for the basic demo. Lookups are linear scans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /resources`.
#[derive(Clone, Debug, Deserialize)]
pub struct NewResource {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /resources/:id`. Absent fields keep their value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResourcePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Default)]
pub struct MockStore {
    items: Arc<RwLock<Vec<Resource>>>,
}

impl MockStore {
    pub async fn list(&self) -> Vec<Resource> {
        self.items.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Resource> {
        self.items.read().await.iter().find(|r| r.id == id).cloned()
    }

    /// Append a resource under a freshly generated id.
    pub async fn insert(&self, input: NewResource) -> Resource {
        let now = Utc::now();
        let resource = Resource {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        self.items.write().await.push(resource.clone());
        resource
    }

    pub async fn update(&self, id: &str, patch: ResourcePatch) -> Option<Resource> {
        let mut items = self.items.write().await;
        let item = items.iter_mut().find(|r| r.id == id)?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if patch.description.is_some() {
            item.description = patch.description;
        }
        item.updated_at = Utc::now();
        Some(item.clone())
    }

    /// Remove by id. Returns the removed resource.
    pub async fn remove(&self, id: &str) -> Option<Resource> {
        let mut items = self.items.write().await;
        let pos = items.iter().position(|r| r.id == id)?;
        Some(items.remove(pos))
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
