//! Core error types.

use crate::reference::Qualifier;
use thiserror::Error;

/// Query-composition errors.
///
/// Every variant is a construction-time or call-time programming fault:
/// nothing is retried and no partially composed queryable is ever
/// returned alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema is missing one of the four hierarchy entities.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// A literal reference is not a string or integer identifier.
    #[error("not a valid reference: {0}")]
    InvalidReference(String),

    /// A deferred field reference carries a non-equality qualifier.
    #[error("unsupported lookup qualifier: {0:?}")]
    UnsupportedQualifier(Qualifier),

    /// A deferred field reference names a field the base entity lacks.
    #[error("cannot resolve field `{field}` on entity `{entity}`")]
    FieldResolution {
        /// The base entity being filtered.
        entity: String,
        /// The field the reference named.
        field: String,
    },
}
