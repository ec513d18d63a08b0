//! Rank-based category comparers
//!
//! Each comparer classifies both sides and compares the keys' positions in
//! the configured order array. Missing-value semantics are uniform: both
//! absent ⇒ equal (the stable sort keeps original order), one absent ⇒ the
//! present key sorts first, equal keys ⇒ the category is exhausted and a
//! later comparer decides.

use std::cmp::Ordering;
use std::collections::HashMap;

use declsort_config::{
    AccessibilityKey, AllocationKey, MemberKey, OperatorFamilyKey, OrderKey, OrderingConfig,
    TypeKey,
};
use declsort_model::DeclarationNode;

use crate::classify::{
    Scope, accessibility_key, allocation_key, member_key, operator_family_key, type_key,
};

use super::{CompositeComparer, DeclComparer};

/// Key → position lookup for one configured order array. First occurrence
/// wins, matching the config layer's dedup rule.
pub(crate) struct RankMap<K>(HashMap<K, usize>);

impl<K: OrderKey> RankMap<K> {
    pub fn new(order: &[K]) -> Self {
        let mut map = HashMap::with_capacity(order.len());
        for (index, &key) in order.iter().enumerate() {
            map.entry(key).or_insert(index);
        }
        Self(map)
    }

    pub fn rank(&self, key: K) -> Option<usize> {
        self.0.get(&key).copied()
    }
}

/// Present values always precede absent ones; two absent values are equal.
pub(crate) fn compare_ranks(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Orders members by kind; equal operator kinds fall through to the
/// operator tie-break chain.
pub struct MemberKindComparer<'a> {
    ranks: RankMap<MemberKey>,
    operators: CompositeComparer<'a>,
}

impl<'a> MemberKindComparer<'a> {
    pub(crate) fn new(config: &'a OrderingConfig, operators: CompositeComparer<'a>) -> Self {
        Self {
            ranks: RankMap::new(&config.member_order),
            operators,
        }
    }
}

impl DeclComparer for MemberKindComparer<'_> {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        let ka = member_key(a);
        let kb = member_key(b);
        if ka == kb {
            return match ka {
                Some(MemberKey::Operator) => self.operators.compare(a, b),
                _ => Ordering::Equal,
            };
        }
        compare_ranks(
            ka.and_then(|k| self.ranks.rank(k)),
            kb.and_then(|k| self.ranks.rank(k)),
        )
    }
}

/// Orders members by effective accessibility in the enclosing scope.
pub struct AccessibilityComparer {
    ranks: RankMap<AccessibilityKey>,
    scope: Scope,
}

impl AccessibilityComparer {
    pub fn new(order: &[AccessibilityKey], scope: Scope) -> Self {
        Self {
            ranks: RankMap::new(order),
            scope,
        }
    }
}

impl DeclComparer for AccessibilityComparer {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        let ka = accessibility_key(a, self.scope);
        let kb = accessibility_key(b, self.scope);
        if ka == kb {
            return Ordering::Equal;
        }
        compare_ranks(self.ranks.rank(ka), self.ranks.rank(kb))
    }
}

/// Orders members by allocation class (`const`, `static`, instance).
pub struct AllocationComparer {
    ranks: RankMap<AllocationKey>,
}

impl AllocationComparer {
    pub fn new(order: &[AllocationKey]) -> Self {
        Self {
            ranks: RankMap::new(order),
        }
    }
}

impl DeclComparer for AllocationComparer {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        let ka = allocation_key(a);
        let kb = allocation_key(b);
        if ka == kb {
            return Ordering::Equal;
        }
        compare_ranks(self.ranks.rank(ka), self.ranks.rank(kb))
    }
}

/// Orders operators by family (conversion, unary, binary). Non-operator
/// nodes compare equal so earlier categories stay in charge of them.
pub struct OperatorFamilyComparer {
    ranks: RankMap<OperatorFamilyKey>,
}

impl OperatorFamilyComparer {
    pub fn new(order: &[OperatorFamilyKey]) -> Self {
        Self {
            ranks: RankMap::new(order),
        }
    }
}

impl DeclComparer for OperatorFamilyComparer {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        let (Some(ka), Some(kb)) = (operator_family_key(a), operator_family_key(b)) else {
            return Ordering::Equal;
        };
        if ka == kb {
            return Ordering::Equal;
        }
        compare_ranks(self.ranks.rank(ka), self.ranks.rank(kb))
    }
}

/// Orders type declarations by the configured type order.
///
/// `name` is a pseudo-criterion, so the comparer walks the configured array
/// in priority order: a `name` entry contributes an ordinal name
/// comparison, any other entry wins for whichever side's kind it names.
/// This lets `name` sit at any priority, not just last.
pub struct TypeOrderComparer<'a> {
    order: &'a [TypeKey],
}

impl<'a> TypeOrderComparer<'a> {
    pub fn new(order: &'a [TypeKey]) -> Self {
        Self { order }
    }
}

impl DeclComparer for TypeOrderComparer<'_> {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering {
        let ka = type_key(a);
        let kb = type_key(b);
        for &key in self.order {
            if key == TypeKey::Name {
                let by_name = a.name.cmp(&b.name);
                if by_name != Ordering::Equal {
                    return by_name;
                }
            } else if ka != kb {
                if ka == Some(key) {
                    return Ordering::Less;
                }
                if kb == Some(key) {
                    return Ordering::Greater;
                }
            }
        }
        Ordering::Equal
    }
}
