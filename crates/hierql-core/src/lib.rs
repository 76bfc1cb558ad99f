//! HIERQL Core - Hierarchy access-control query compiler.
//!
//! Given a nested-set collection tree and the role/membership relations
//! tying users to collections, this crate compiles a single relational
//! predicate selecting the rows of an arbitrary base table that satisfy
//! a combination of hierarchy constraints. The predicate is emitted as
//! SQL text plus an ordered list of bound parameters; execution belongs
//! entirely to the embedding persistence layer.
//!
//! # Components
//!
//! - [`registry`] - resolves the four hierarchy entities to physical
//!   table names once, at construction
//! - [`reference`] - coerces caller-supplied values (literals, entity
//!   handles, deferred field references) into store-level references
//! - [`query`] - the immutable queryable abstraction: scoped join/clause
//!   accumulation and queryable-level disjunction
//! - [`filter`] - the orchestrator that decides which structural joins a
//!   query needs and folds in value constraints

pub mod error;
pub mod filter;
pub mod query;
pub mod reference;
pub mod registry;

pub use error::Error;
pub use filter::{HierarchyFilter, HierarchyParams};
pub use query::{Clause, Join, Queryable};
pub use reference::{FieldRef, Identified, Qualifier, Ref, RefResolver, StoreRef};
pub use registry::HierarchyTables;

/// Re-export model types.
pub use hierql_model as model;
