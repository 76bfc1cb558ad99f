//! The hierarchy filter orchestrator.
//!
//! Composes a queryable that selects the rows of the base table whose
//! hierarchy constraints are all satisfiable at once: a source user
//! holding a role on an ancestor collection, a target user belonging to
//! a descendant collection, and the two collections related by
//! nested-set containment. Structural joins are decided from which
//! parameters the caller supplied and attached in a fixed order; value
//! constraints are folded in last and are order-independent among
//! themselves.

use tracing::debug;

use crate::error::Error;
use crate::query::{Clause, Join, Queryable};
use crate::reference::{Ref, RefResolver};
use crate::registry::{alias, HierarchyTables};
use hierql_model::{CollectionKind, RoleKinds, Schema, Value};

/// Optional constraints for one hierarchy query.
///
/// Each reference parameter is a literal identifier, an entity handle,
/// or a deferred field reference anchoring the constraint to the row
/// being filtered. `role_kind` takes the closed role-kind set directly;
/// kind values are never caller-supplied text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HierarchyParams {
    /// Constrain the user holding a role on the ancestor collection.
    pub source_user: Option<Ref>,
    /// Constrain the kind(s) of that role.
    pub role_kind: Option<RoleKinds>,
    /// Constrain the ancestor collection.
    pub ancestor_collection: Option<Ref>,
    /// Constrain the descendant collection.
    pub descendant_collection: Option<Ref>,
    /// Constrain the user belonging to the descendant collection.
    pub target_user: Option<Ref>,
}

impl HierarchyParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the source user.
    pub fn source_user(mut self, reference: impl Into<Ref>) -> Self {
        self.source_user = Some(reference.into());
        self
    }

    /// Constrain the role kind(s).
    pub fn role_kind(mut self, kinds: impl Into<RoleKinds>) -> Self {
        self.role_kind = Some(kinds.into());
        self
    }

    /// Constrain the ancestor collection.
    pub fn ancestor_collection(mut self, reference: impl Into<Ref>) -> Self {
        self.ancestor_collection = Some(reference.into());
        self
    }

    /// Constrain the descendant collection.
    pub fn descendant_collection(mut self, reference: impl Into<Ref>) -> Self {
        self.descendant_collection = Some(reference.into());
        self
    }

    /// Constrain the target user.
    pub fn target_user(mut self, reference: impl Into<Ref>) -> Self {
        self.target_user = Some(reference.into());
        self
    }
}

/// Composes hierarchy predicates over a base queryable.
///
/// Stateless beyond its immutable construction data: the base queryable
/// and the resolved table registry. A single instance may be shared
/// across threads and used for any number of concurrent compositions.
#[derive(Debug, Clone)]
pub struct HierarchyFilter {
    queryset: Queryable,
    tables: HierarchyTables,
}

/// A quoted `"alias"."column"` reference.
fn qcol(alias: &str, column: &str) -> String {
    format!("\"{alias}\".\"{column}\"")
}

impl HierarchyFilter {
    /// Create a filter over the given base queryable.
    ///
    /// Resolves the hierarchy table registry from the schema up front;
    /// fails with [`Error::UnknownEntity`] before any filtering call
    /// can be made.
    pub fn new(queryset: Queryable, schema: &Schema) -> Result<Self, Error> {
        Ok(Self {
            queryset,
            tables: HierarchyTables::from_schema(schema)?,
        })
    }

    /// Compose a queryable applying all supplied hierarchy constraints.
    ///
    /// Phase 1 attaches the structural joins the supplied parameters
    /// require, in a fixed order: the target-user membership
    /// disjunction first (its two paths are unioned before any shared
    /// join exists, so neither path carries the other's tables), then
    /// the unconditional ancestor/descendant containment join, then the
    /// source-user/role join. Phase 2 resolves each supplied parameter
    /// and attaches its equality (or set-membership) constraint.
    ///
    /// Any reference that fails to resolve aborts the whole call; the
    /// queryable being built is discarded with it.
    pub fn filter_by_hierarchy(&self, params: HierarchyParams) -> Result<Queryable, Error> {
        let resolver = RefResolver::new(self.queryset.base());
        let mut queryset = self.queryset.clone();

        debug!(
            base = %queryset.base().name,
            target_user = params.target_user.is_some(),
            source_user = params.source_user.is_some(),
            role_kind = params.role_kind.is_some(),
            "composing hierarchy filter"
        );

        // Phase 1a. Target-user membership, as a union of its two paths.
        // This must come first: the paths are built from the bare base
        // queryable, and every later join lands on both branches.
        if params.target_user.is_some() {
            let via_membership = queryset.clone().attach(
                &[
                    Join::aliased(&self.tables.user, alias::TARGET_USER),
                    Join::aliased(&self.tables.membership, alias::MEMBERSHIP),
                ],
                &[
                    Clause::new(format!(
                        "{} = {}",
                        qcol(alias::MEMBERSHIP, "user_id"),
                        qcol(alias::TARGET_USER, "id")
                    )),
                    Clause::new(format!(
                        "{} = {}",
                        qcol(alias::MEMBERSHIP, "collection_id"),
                        qcol(alias::DESCENDANT_COLLECTION, "id")
                    )),
                ],
            );
            let via_facility = queryset.clone().attach(
                &[Join::aliased(&self.tables.user, alias::TARGET_USER)],
                &[
                    Clause::with_params(
                        format!("{} = ?", qcol(alias::ANCESTOR_COLLECTION, "kind")),
                        vec![Value::from(CollectionKind::Facility.as_str())],
                    ),
                    Clause::new(format!(
                        "{} = {}",
                        qcol(alias::ANCESTOR_COLLECTION, "dataset_id"),
                        qcol(alias::TARGET_USER, "dataset_id")
                    )),
                ],
            );
            queryset = via_facility.or(via_membership);
        }

        // Phase 1b. Ancestor/descendant containment, always attached.
        // The nested-set interval check subsumes any recursive walk and
        // covers the reflexive ancestor-equals-descendant case.
        queryset = queryset.attach(
            &[
                Join::aliased(&self.tables.collection, alias::ANCESTOR_COLLECTION),
                Join::aliased(&self.tables.collection, alias::DESCENDANT_COLLECTION),
            ],
            &[Clause::new(format!(
                "{} BETWEEN {} AND {}",
                qcol(alias::DESCENDANT_COLLECTION, "lft"),
                qcol(alias::ANCESTOR_COLLECTION, "lft"),
                qcol(alias::ANCESTOR_COLLECTION, "rght")
            ))],
        );

        // Phase 1c. Source user and role, when either is constrained.
        if params.source_user.is_some() || params.role_kind.is_some() {
            queryset = queryset.attach(
                &[
                    Join::aliased(&self.tables.user, alias::SOURCE_USER),
                    Join::aliased(&self.tables.role, alias::ROLE),
                ],
                &[
                    Clause::new(format!(
                        "{} = {}",
                        qcol(alias::ROLE, "user_id"),
                        qcol(alias::SOURCE_USER, "id")
                    )),
                    Clause::new(format!(
                        "{} = {}",
                        qcol(alias::ROLE, "collection_id"),
                        qcol(alias::ANCESTOR_COLLECTION, "id")
                    )),
                ],
            );
        }

        // Phase 2. Value constraints against the aliases established
        // above. Conjunctive; order-independent among themselves.
        if let Some(reference) = &params.source_user {
            let clause = resolver.resolve(reference)?.eq(&qcol(alias::SOURCE_USER, "id"));
            queryset = queryset.attach(&[], &[clause]);
        }

        if let Some(kinds) = &params.role_kind {
            queryset = queryset.attach(&[], &[role_kind_clause(kinds)]);
        }

        if let Some(reference) = &params.ancestor_collection {
            let clause = resolver
                .resolve(reference)?
                .eq(&qcol(alias::ANCESTOR_COLLECTION, "id"));
            queryset = queryset.attach(&[], &[clause]);
        }

        if let Some(reference) = &params.descendant_collection {
            let clause = resolver
                .resolve(reference)?
                .eq(&qcol(alias::DESCENDANT_COLLECTION, "id"));
            queryset = queryset.attach(&[], &[clause]);
        }

        if let Some(reference) = &params.target_user {
            let clause = resolver.resolve(reference)?.eq(&qcol(alias::TARGET_USER, "id"));
            queryset = queryset.attach(&[], &[clause]);
        }

        Ok(queryset)
    }
}

/// Set-membership constraint on the role kind.
fn role_kind_clause(kinds: &RoleKinds) -> Clause {
    if kinds.is_empty() {
        // IN over the empty set matches nothing.
        return Clause::new("1 = 0");
    }
    let placeholders = vec!["?"; kinds.len()].join(", ");
    Clause::with_params(
        format!("{} IN ({})", qcol(alias::ROLE, "kind"), placeholders),
        kinds
            .kinds()
            .iter()
            .map(|kind| Value::from(kind.as_str()))
            .collect(),
    )
}
