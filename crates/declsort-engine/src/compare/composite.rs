//! First-nonzero composition of category comparers

use std::cmp::Ordering;

use declsort_model::DeclarationNode;

use super::DeclComparer;

/// Calls a sequence of comparers in order and returns the first nonzero
/// result.
///
/// The composite never breaks ties itself: when every part answers `Equal`
/// the result is `Equal`, and preserving original order for equal nodes is
/// the stable sort's responsibility.
pub struct CompositeComparer<'a> {
    parts: Vec<Box<dyn DeclComparer + 'a>>,
}

impl<'a> CompositeComparer<'a> {
    pub fn new(parts: Vec<Box<dyn DeclComparer + 'a>>) -> Self {
        Self { parts }
    }
}

impl DeclComparer for CompositeComparer<'_> {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        for part in &self.parts {
            let result = part.compare(a, b);
            if result != Ordering::Equal {
                return result;
            }
        }
        Ordering::Equal
    }
}
