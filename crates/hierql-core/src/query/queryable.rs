//! The immutable queryable value.

use super::clause::{Clause, Join};
use hierql_model::{EntityDef, Value};

/// One conjunctive alternative within a queryable.
///
/// A branch carries its own extra-table list and clause list; a
/// queryable with several branches renders as a UNION of per-branch
/// SELECTs, so a branch is never polluted by another branch's joins.
#[derive(Debug, Clone, Default, PartialEq)]
struct Branch {
    joins: Vec<Join>,
    clauses: Vec<Clause>,
}

/// An immutable query description over a base entity.
///
/// Every combinator returns a new value; a `Queryable` held by a caller
/// is never mutated by composition happening elsewhere. The description
/// is purely declarative - nothing here executes SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct Queryable {
    base: EntityDef,
    projection: Option<Vec<String>>,
    distinct: bool,
    branches: Vec<Branch>,
}

impl Queryable {
    /// Create a queryable selecting all rows of the base entity.
    pub fn new(base: EntityDef) -> Self {
        Self {
            base,
            projection: None,
            distinct: false,
            branches: vec![Branch::default()],
        }
    }

    /// The base entity this queryable selects from.
    pub fn base(&self) -> &EntityDef {
        &self.base
    }

    /// Set the projected columns (raw SQL column expressions).
    ///
    /// Defaults to `"base_table".*`.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Deduplicate result rows.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Attach extra-table declarations and condition clauses.
    ///
    /// Joins and clauses land on every branch; a join already declared
    /// on a branch is not declared twice. Pure: returns a new value.
    pub fn attach(mut self, joins: &[Join], clauses: &[Clause]) -> Self {
        for branch in &mut self.branches {
            for join in joins {
                if !branch.joins.contains(join) {
                    branch.joins.push(join.clone());
                }
            }
            branch.clauses.extend(clauses.iter().cloned());
        }
        self
    }

    /// Combine two queryables as a disjunction.
    ///
    /// Either side's rows satisfy the result. Both sides must select
    /// from the same base entity. Joins attached afterwards land on all
    /// branches, so shared structure must be attached after `or`, never
    /// before it on each side separately.
    pub fn or(mut self, other: Queryable) -> Self {
        debug_assert_eq!(
            self.base.name, other.base.name,
            "queryable union requires a shared base entity"
        );
        self.distinct = self.distinct || other.distinct;
        self.branches.extend(other.branches);
        self
    }

    /// Number of alternatives in the disjunction.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Render the query as SQL text plus ordered bound parameters.
    ///
    /// One SELECT per branch, combined with UNION (set semantics).
    /// Placeholders are positional `?`; parameters are ordered branch by
    /// branch, clause by clause.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let projection = match &self.projection {
            Some(columns) => columns.join(", "),
            None => format!("\"{}\".*", self.base.table),
        };
        let select = if self.distinct {
            format!("SELECT DISTINCT {projection}")
        } else {
            format!("SELECT {projection}")
        };

        let mut selects = Vec::with_capacity(self.branches.len());
        let mut params = Vec::new();
        for branch in &self.branches {
            let mut from = vec![format!("\"{}\"", self.base.table)];
            from.extend(branch.joins.iter().map(Join::render));

            let mut sql = format!("{select} FROM {}", from.join(", "));
            if !branch.clauses.is_empty() {
                let conditions: Vec<&str> =
                    branch.clauses.iter().map(|c| c.sql.as_str()).collect();
                sql.push_str(" WHERE ");
                sql.push_str(&conditions.join(" AND "));
            }
            selects.push(sql);

            for clause in &branch.clauses {
                params.extend(clause.params.iter().cloned());
            }
        }

        (selects.join(" UNION "), params)
    }
}
