//! HIERQL Model - Schema metadata and hierarchy vocabulary.
//!
//! This crate defines the metadata types the HIERQL compiler reads when
//! composing hierarchy predicates: entity and field definitions with
//! their physical storage names, the closed collection-kind and
//! role-kind enumerations, and the runtime value type for bound query
//! parameters.
//!
//! # Modules
//!
//! - [`entity`] - Entity definitions (logical name, physical table, fields)
//! - [`field`] - Field definitions and storage column resolution
//! - [`schema`] - Immutable schema bundles
//! - [`kinds`] - Collection and role kind enumerations
//! - [`value`] - Runtime values for query parameters

pub mod entity;
pub mod field;
pub mod kinds;
pub mod schema;
pub mod value;

pub use entity::EntityDef;
pub use field::{FieldDef, FieldType, ScalarType};
pub use kinds::{CollectionKind, RoleKind, RoleKinds};
pub use schema::Schema;
pub use value::Value;
