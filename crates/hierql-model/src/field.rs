//! Field definitions for entities.

use serde::{Deserialize, Serialize};

/// Scalar data types supported by the schema metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    /// Boolean value.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// UTF-8 string.
    String,
}

/// Field types - flat representation without recursion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// A scalar value.
    Scalar(ScalarType),
    /// A reference to another entity (foreign key).
    ///
    /// Stored as the referenced entity's identifier; the storage column
    /// is the field name suffixed with `_id` unless overridden.
    Reference {
        /// Name of the referenced entity.
        entity: String,
    },
}

impl FieldType {
    /// Create a scalar field type.
    pub fn scalar(scalar: ScalarType) -> Self {
        FieldType::Scalar(scalar)
    }

    /// Create a reference field type.
    pub fn reference(entity: impl Into<String>) -> Self {
        FieldType::Reference {
            entity: entity.into(),
        }
    }

    /// Check if this is a reference (foreign key) type.
    pub fn is_reference(&self) -> bool {
        matches!(self, FieldType::Reference { .. })
    }
}

/// A field definition within an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name (logical, as callers reference it).
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
    /// Explicit physical column name, if it differs from the derived one.
    pub column: Option<String>,
}

impl FieldDef {
    /// Create a new scalar field.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            column: None,
        }
    }

    /// Create a reference field pointing at another entity.
    pub fn reference(name: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::reference(entity),
            column: None,
        }
    }

    /// Override the physical column name.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// The physical storage column for this field.
    ///
    /// Reference fields store the target identifier under `<name>_id`,
    /// matching the column the persistence layer writes. An explicit
    /// `column` override wins in all cases.
    pub fn storage_column(&self) -> String {
        if let Some(column) = &self.column {
            return column.clone();
        }
        match &self.field_type {
            FieldType::Reference { .. } => format!("{}_id", self.name),
            FieldType::Scalar(_) => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_column_is_field_name() {
        let field = FieldDef::new("kind", FieldType::scalar(ScalarType::String));
        assert_eq!(field.storage_column(), "kind");
        assert!(!field.field_type.is_reference());
    }

    #[test]
    fn test_reference_column_gets_id_suffix() {
        let field = FieldDef::reference("user", "User");
        assert_eq!(field.storage_column(), "user_id");
        assert!(field.field_type.is_reference());
    }

    #[test]
    fn test_explicit_column_override() {
        let field = FieldDef::reference("parent", "Collection").with_column("parent_uuid");
        assert_eq!(field.storage_column(), "parent_uuid");
    }
}
