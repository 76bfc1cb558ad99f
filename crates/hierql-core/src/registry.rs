//! Alias/table registry for the hierarchy entities.

use crate::error::Error;
use hierql_model::Schema;

/// Fixed alias names used in composed hierarchy SQL.
pub mod alias {
    /// The user whose role anchors the query.
    pub const SOURCE_USER: &str = "source_user";
    /// The role tying the source user to the ancestor collection.
    pub const ROLE: &str = "role";
    /// The upper end of the containment relation.
    pub const ANCESTOR_COLLECTION: &str = "ancestor_collection";
    /// The lower end of the containment relation.
    pub const DESCENDANT_COLLECTION: &str = "descendant_collection";
    /// The user whose membership anchors the query.
    pub const TARGET_USER: &str = "target_user";
    /// The membership tying the target user to the descendant collection.
    pub const MEMBERSHIP: &str = "membership";
}

/// Physical table names for the four hierarchy entities.
///
/// Resolved once from the schema at construction; after that, lookups
/// cannot fail. The registry is plain immutable data and is cheap to
/// clone into each filter instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyTables {
    /// Physical table for `User`.
    pub user: String,
    /// Physical table for `Collection`.
    pub collection: String,
    /// Physical table for `Role`.
    pub role: String,
    /// Physical table for `Membership`.
    pub membership: String,
}

impl HierarchyTables {
    /// Resolve the four hierarchy entities against a schema.
    ///
    /// Fails with [`Error::UnknownEntity`] if any of `User`,
    /// `Collection`, `Role`, or `Membership` is missing.
    pub fn from_schema(schema: &Schema) -> Result<Self, Error> {
        let table = |name: &str| -> Result<String, Error> {
            schema
                .get_entity(name)
                .map(|e| e.table.clone())
                .ok_or_else(|| Error::UnknownEntity(name.to_string()))
        };

        Ok(Self {
            user: table("User")?,
            collection: table("Collection")?,
            role: table("Role")?,
            membership: table("Membership")?,
        })
    }
}
