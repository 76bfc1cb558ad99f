//! Reference resolution for caller-supplied hierarchy parameters.
//!
//! A hierarchy parameter is one of three things: a literal identifier,
//! a handle on an already-loaded entity, or a deferred reference to a
//! field of the row currently being filtered. The resolver coerces all
//! three into a store-level reference - either a bound parameter or a
//! fully qualified column of the base table.

use crate::error::Error;
use crate::query::Clause;
use hierql_model::{EntityDef, Value};

/// Anything carrying a row identifier.
///
/// Implemented by the embedding application's entity types so loaded
/// records can be passed directly as hierarchy parameters.
pub trait Identified {
    /// The row identifier.
    fn id(&self) -> &str;
}

/// Comparison qualifier carried by a deferred field reference.
///
/// The hierarchy model anchors deferred references by equality only;
/// every other qualifier is rejected at resolution time rather than
/// silently degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    /// Plain equality.
    Exact,
    /// Greater-than.
    Gt,
    /// Greater-or-equal.
    Gte,
    /// Less-than.
    Lt,
    /// Less-or-equal.
    Lte,
    /// Substring containment.
    Contains,
}

/// A deferred reference to a field on the base entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    /// The logical field name on the base entity.
    pub name: String,
    /// Comparison qualifier (must be `Exact` to resolve).
    pub qualifier: Qualifier,
}

impl FieldRef {
    /// Reference a field by name, with equality anchoring.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifier: Qualifier::Exact,
        }
    }

    /// Set the comparison qualifier.
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }
}

/// A caller-supplied reference, before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Ref {
    /// A literal identifier value (string or integer).
    Literal(Value),
    /// The identifier of an entity handle.
    Entity(String),
    /// A deferred reference to a field of the row being filtered.
    Field(FieldRef),
}

impl Ref {
    /// A literal identifier.
    pub fn literal(value: impl Into<Value>) -> Self {
        Ref::Literal(value.into())
    }

    /// The identifier of a loaded entity.
    pub fn from_entity(entity: &impl Identified) -> Self {
        Ref::Entity(entity.id().to_string())
    }

    /// A deferred field reference with equality anchoring.
    pub fn field(name: impl Into<String>) -> Self {
        Ref::Field(FieldRef::new(name))
    }
}

impl From<Value> for Ref {
    fn from(value: Value) -> Self {
        Ref::Literal(value)
    }
}

impl From<&str> for Ref {
    fn from(s: &str) -> Self {
        Ref::Literal(Value::from(s))
    }
}

impl From<String> for Ref {
    fn from(s: String) -> Self {
        Ref::Literal(Value::from(s))
    }
}

impl From<i64> for Ref {
    fn from(i: i64) -> Self {
        Ref::Literal(Value::from(i))
    }
}

impl From<FieldRef> for Ref {
    fn from(field: FieldRef) -> Self {
        Ref::Field(field)
    }
}

/// A resolved store-level reference.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreRef {
    /// A value bound as a query parameter.
    Param(Value),
    /// A fully qualified column of the base table, inlined into SQL.
    Column(String),
}

impl StoreRef {
    /// An equality clause constraining `lhs` to this reference.
    pub fn eq(&self, lhs: &str) -> Clause {
        match self {
            StoreRef::Param(value) => {
                Clause::with_params(format!("{lhs} = ?"), vec![value.clone()])
            }
            StoreRef::Column(column) => Clause::new(format!("{lhs} = {column}")),
        }
    }
}

/// Resolves [`Ref`]s against the base entity of a queryable.
///
/// This is the only component that reads the base queryable's own
/// schema; the hierarchy joins are assembled separately from the
/// registry's physical names.
#[derive(Debug)]
pub struct RefResolver<'a> {
    base: &'a EntityDef,
}

impl<'a> RefResolver<'a> {
    /// Create a resolver anchored to the given base entity.
    pub fn new(base: &'a EntityDef) -> Self {
        Self { base }
    }

    /// Coerce a reference into a store-level reference.
    ///
    /// Literals pass through as bound parameters (strings and integers
    /// only); entity handles resolve to their identifier; deferred
    /// field references resolve to a qualified column of the base
    /// table, with foreign-key fields rewritten to their storage
    /// column.
    pub fn resolve(&self, reference: &Ref) -> Result<StoreRef, Error> {
        match reference {
            Ref::Entity(id) => Ok(StoreRef::Param(Value::String(id.clone()))),
            Ref::Literal(value) if value.is_identifier() => Ok(StoreRef::Param(value.clone())),
            Ref::Literal(value) => Err(Error::InvalidReference(value.to_string())),
            Ref::Field(field_ref) => {
                if field_ref.qualifier != Qualifier::Exact {
                    return Err(Error::UnsupportedQualifier(field_ref.qualifier));
                }
                let field = self.base.get_field(&field_ref.name).ok_or_else(|| {
                    Error::FieldResolution {
                        entity: self.base.name.clone(),
                        field: field_ref.name.clone(),
                    }
                })?;
                Ok(StoreRef::Column(format!(
                    "\"{}\".\"{}\"",
                    self.base.table,
                    field.storage_column()
                )))
            }
        }
    }
}
