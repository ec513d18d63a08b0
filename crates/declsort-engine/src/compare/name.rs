//! Ordinal name comparison

use std::cmp::Ordering;

use declsort_model::DeclarationNode;

use super::DeclComparer;

/// Compares declared names ordinally (byte order, no locale or case
/// folding), so results are deterministic across environments.
pub struct NameComparer;

impl DeclComparer for NameComparer {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        a.name.cmp(&b.name)
    }
}
