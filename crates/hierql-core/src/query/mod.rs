//! Queryable abstraction for predicate composition.
//!
//! This module implements the generic accumulation mechanism the filter
//! orchestrator composes with: raw SQL clauses with bound parameters,
//! aliased extra-table declarations, and an immutable queryable value
//! that supports attaching both and combining alternatives with a
//! queryable-level OR.

mod clause;
mod queryable;

pub use clause::{Clause, Join};
pub use queryable::Queryable;
