//! Schema - immutable snapshot of entity metadata.

use super::entity::EntityDef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An immutable bundle of entity definitions.
///
/// The schema is process-local configuration: it is built once by the
/// embedding application (typically mirroring the persistence layer's
/// migrations) and passed by reference wherever metadata lookups are
/// needed. Nothing in this crate mutates it after construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Entity definitions keyed by name.
    pub entities: HashMap<String, EntityDef>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the schema.
    pub fn with_entity(mut self, entity: EntityDef) -> Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    /// Get an entity by name.
    pub fn get_entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(name)
    }

    /// List all entity names.
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.keys().map(|s| s.as_str()).collect()
    }
}
