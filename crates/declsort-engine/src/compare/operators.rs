//! Operator signature comparers
//!
//! One comparer per operator family (unary, binary, conversion), generic
//! over the family's order-key enumeration. The configured order for a
//! family is a *sort-criterion sequence*: real operator tokens interleaved
//! with `ReturnType`/`ParamType*` pseudo-criteria at arbitrary priority.
//!
//! The comparer first settles operator-token facts (an unparsed token sorts
//! after every parsed one; a token absent from the configured order sorts
//! after every configured one), then walks the criterion sequence and stops
//! at the first nonzero contribution. Token criteria are skipped unless one
//! of the two sides actually declares that token, which is what lets a
//! pseudo-criterion outrank specific tokens. Type keys come from the
//! pass-scoped semantic cache and are resolved only when actually reached.

use std::cmp::Ordering;

use declsort_config::{OperatorFamilyKey, OperatorOrderKey, SortCriterion};
use declsort_model::DeclarationNode;

use crate::classify::operator_family_key;
use crate::semantic::{SemanticKeyCache, TypeResolver};

use super::DeclComparer;

/// Signature comparer for one operator family.
pub struct SignatureComparer<'a, K: OperatorOrderKey> {
    family: OperatorFamilyKey,
    order: &'a [K],
    cache: SemanticKeyCache<'a, K>,
}

impl<'a, K: OperatorOrderKey> SignatureComparer<'a, K> {
    pub fn new(
        family: OperatorFamilyKey,
        order: &'a [K],
        resolver: Option<&'a dyn TypeResolver>,
    ) -> Self {
        Self {
            family,
            order,
            cache: SemanticKeyCache::new(order, resolver),
        }
    }
}

impl<K: OperatorOrderKey> DeclComparer for SignatureComparer<'_, K> {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        // Only decide pairs fully inside this family; anything else is some
        // other comparer's business.
        if operator_family_key(a) != Some(self.family)
            || operator_family_key(b) != Some(self.family)
        {
            return Ordering::Equal;
        }

        let ia = self.cache.op_info(a);
        let ib = self.cache.op_info(b);

        // Unparsed tokens sort after every parsed one; two unparsed tokens
        // are equal.
        if !ia.has_op {
            return if ib.has_op {
                Ordering::Greater
            } else {
                Ordering::Equal
            };
        }
        if !ib.has_op {
            return Ordering::Less;
        }

        // Tokens absent from the configured order: both absent defer to
        // original order, one absent sorts after.
        if ia.rank < 0 && ib.rank < 0 {
            return Ordering::Equal;
        }
        if ia.rank < 0 {
            return Ordering::Greater;
        }
        if ib.rank < 0 {
            return Ordering::Less;
        }

        let token_cmp = ia.rank.cmp(&ib.rank);

        for &key in self.order {
            let contribution = match key.criterion() {
                SortCriterion::Token => {
                    if Some(key) != ia.op && Some(key) != ib.op {
                        continue;
                    }
                    token_cmp
                }
                SortCriterion::ReturnType => {
                    self.cache.return_key(a).cmp(&self.cache.return_key(b))
                }
                SortCriterion::Param(index) => {
                    self.cache.param_key(a, index).cmp(&self.cache.param_key(b, index))
                }
            };
            if contribution != Ordering::Equal {
                return contribution;
            }
        }
        Ordering::Equal
    }
}
