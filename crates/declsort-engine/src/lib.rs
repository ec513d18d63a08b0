//! Ordering comparison and rewrite engine for declsort
//!
//! The engine is two pure functions over the model:
//!
//! - [`scan`]: walk a container's sibling declarations and report each
//!   adjacent out-of-order pair as a [`Violation`].
//! - [`reorder`]: compute the stable full sort of each barrier segment and
//!   emit a minimal slot→occupant [`Replacement`] mapping (empty when the
//!   segment is already ordered).
//!
//! Both take an immutable [`OrderingConfig`](declsort_config::OrderingConfig)
//! and an optional [`TypeResolver`] collaborator; neither has side effects,
//! so the host is free to run one invocation per file or per container in
//! parallel. Internal comparer state (the semantic key cache) lives and dies
//! with one invocation.
//!
//! # Architecture
//!
//! ```text
//!          declsort-config          declsort-model
//!                 \                   /
//!              classify  ←──  DeclarationNode
//!                 |
//!          category comparers ── semantic key cache
//!                 |
//!          composite comparer
//!              /        \
//!           scan       reorder
//! ```

pub mod classify;
pub mod compare;
pub mod error;
pub mod reorder;
pub mod scan;
pub mod semantic;

pub use classify::{
    Scope, accessibility_key, allocation_key, member_key, operator_family_key, type_key,
};
pub use compare::{CompositeComparer, DeclComparer, comparer_for, member_comparer, type_comparer};
pub use error::{Error, Result};
pub use reorder::{ContainerFix, Replacement, reorder, reorder_all};
pub use scan::{Violation, scan};
pub use semantic::TypeResolver;
