//! Ordering configuration model for declsort
//!
//! This crate turns raw key→string settings (supplied by any host: project
//! settings, an editorconfig-style file, a test fixture) into a typed,
//! immutable [`OrderingConfig`]:
//!
//! - **Classification keys**: one closed enumeration per ordering category,
//!   whose declared order doubles as the category's default order.
//! - **Alias tables**: symbolic tokens (`+`, `<<`) and multi-word spellings
//!   (`protected internal`) parse case-insensitively, ignoring `_` and
//!   spaces. Tables are built once per category from static declarations.
//! - **Missing-value policy**: unknown tokens are dropped silently,
//!   duplicates keep their first occurrence, and an empty category falls
//!   back to its full natural enumeration so ordering never runs with zero
//!   configured keys.
//! - **Rule severities**: per-rule severities ride along with the config but
//!   never influence the ordering itself.
//!
//! The resulting `OrderingConfig` is plain immutable data and can be shared
//! freely across concurrent analysis passes.

pub mod error;
pub mod keys;
pub mod loader;
pub mod rules;
pub mod settings;

pub use error::{Error, Result};
pub use keys::{
    AccessibilityKey, AllocationKey, BinaryOpKey, ConversionOpKey, MemberKey, OperatorFamilyKey,
    OperatorOrderKey, OrderKey, SortCriterion, StrategyKey, TypeKey, UnaryOpKey,
};
pub use loader::{from_toml_str, load_settings};
pub use rules::{RuleId, Severity};
pub use settings::{OrderingConfig, RawSettings};
