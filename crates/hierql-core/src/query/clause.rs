//! SQL clause fragments and aliased table declarations.

use hierql_model::Value;
use serde::{Deserialize, Serialize};

/// A raw boolean SQL fragment with its bound parameters.
///
/// Parameters are positional (`?` placeholders) and ordered; the final
/// parameter list of a composed query is the concatenation of every
/// attached clause's parameters in attachment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// The SQL condition text.
    pub sql: String,
    /// Bound parameter values, in placeholder order.
    pub params: Vec<Value>,
}

impl Clause {
    /// Create a clause with no bound parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Create a clause with bound parameters.
    pub fn with_params(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// An aliased extra-table declaration attached to a query.
///
/// Rendered as `"table" AS "alias"` in the FROM list. The physical
/// table name comes from the registry; the alias is one of the fixed
/// hierarchy alias names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    /// Physical table name.
    pub table: String,
    /// Alias the query's conditions refer to.
    pub alias: String,
}

impl Join {
    /// Declare `table` aliased as `alias`.
    pub fn aliased(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: alias.into(),
        }
    }

    /// Render the declaration for a FROM list.
    pub fn render(&self) -> String {
        format!("\"{}\" AS \"{}\"", self.table, self.alias)
    }
}
