//! Collection and role kind enumerations.
//!
//! Both kinds are closed sets: the storage encodings below are the only
//! values the persistence layer ever writes, and the compiler never
//! accepts free-text kinds from callers.

use serde::{Deserialize, Serialize};

/// The kind of a collection node in the organizational tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    /// Top-level collection; users sharing its dataset are implicit members.
    Facility,
    /// A classroom under a facility.
    Classroom,
    /// A learner group under a classroom.
    LearnerGroup,
    /// An ad-hoc group of learners assembled outside the class structure.
    AdhocLearners,
}

impl CollectionKind {
    /// The storage encoding of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Facility => "facility",
            CollectionKind::Classroom => "classroom",
            CollectionKind::LearnerGroup => "learnergroup",
            CollectionKind::AdhocLearners => "adhoclearnersgroup",
        }
    }
}

/// The privilege level a role grants over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    /// Full administrative privileges.
    Admin,
    /// Coaching privileges.
    Coach,
    /// Coach privileges assignable at the classroom level.
    AssignableCoach,
}

impl RoleKind {
    /// The storage encoding of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Admin => "admin",
            RoleKind::Coach => "coach",
            RoleKind::AssignableCoach => "assignable coach",
        }
    }
}

/// A non-empty set of role kinds.
///
/// A single kind converts via `From<RoleKind>` and behaves as a
/// one-element set; matching is always set membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleKinds(Vec<RoleKind>);

impl RoleKinds {
    /// The kinds in this set, in insertion order.
    pub fn kinds(&self) -> &[RoleKind] {
        &self.0
    }

    /// Number of kinds in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<RoleKind> for RoleKinds {
    fn from(kind: RoleKind) -> Self {
        RoleKinds(vec![kind])
    }
}

impl From<Vec<RoleKind>> for RoleKinds {
    fn from(kinds: Vec<RoleKind>) -> Self {
        RoleKinds(kinds)
    }
}
