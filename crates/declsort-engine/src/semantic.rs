//! Semantic key cache for operator overloads
//!
//! Comparing two overloads of the same operator needs comparable string keys
//! for their return and parameter types. Resolving a declared type
//! expression to a canonical display key can be expensive (it involves the
//! host's type-resolution service), and most operator comparisons are
//! decided by the operator token alone, so the cache resolves display keys
//! only when a comparer actually reaches a type tie-break.
//!
//! One cache instance belongs to one comparer for one analysis pass. It is
//! keyed by the provider-assigned [`NodeId`] and dies with the pass, so it
//! needs no locking and nothing outlives it.

use std::cell::RefCell;
use std::collections::HashMap;

use declsort_config::OperatorOrderKey;
use declsort_model::{ConversionKind, DeclarationNode, NodeId, NodeKind, OperatorFamily};

/// Resolves a declared type expression to a canonical display key.
///
/// Supplied by the host when semantic information is available. Without one,
/// the cache falls back to the raw textual spelling: lower fidelity, but
/// dependency-free. A `None` result means the type could not be resolved;
/// the cache substitutes an empty key, which sorts deterministically but not
/// meaningfully.
pub trait TypeResolver {
    fn display_key(&self, declared_type: &str) -> Option<String>;
}

/// Eagerly computed per-node operator facts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpInfo<K> {
    /// Whether the operator token parsed against the category's alias table.
    pub has_op: bool,
    pub op: Option<K>,
    /// Index in the configured order, -1 when absent.
    pub rank: i32,
}

struct Entry<K> {
    info: OpInfo<K>,
    return_key: Option<String>,
    param_keys: Vec<Option<String>>,
}

/// Pass-scoped memo of operator keys for one operator family.
pub(crate) struct SemanticKeyCache<'a, K: OperatorOrderKey> {
    order: &'a [K],
    resolver: Option<&'a dyn TypeResolver>,
    entries: RefCell<HashMap<NodeId, Entry<K>>>,
}

impl<'a, K: OperatorOrderKey> SemanticKeyCache<'a, K> {
    pub fn new(order: &'a [K], resolver: Option<&'a dyn TypeResolver>) -> Self {
        Self {
            order,
            resolver,
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Operator token facts; resolved eagerly because every comparison
    /// needs them.
    pub fn op_info(&self, node: &DeclarationNode) -> OpInfo<K> {
        let mut entries = self.entries.borrow_mut();
        entries
            .entry(node.id)
            .or_insert_with(|| self.build_entry(node))
            .info
    }

    /// Return-type display key, resolving it on first use.
    pub fn return_key(&self, node: &DeclarationNode) -> String {
        let mut entries = self.entries.borrow_mut();
        let entry = entries
            .entry(node.id)
            .or_insert_with(|| self.build_entry(node));
        if entry.return_key.is_none() {
            let spelling = match &node.kind {
                NodeKind::Operator { return_type, .. } => return_type.as_str(),
                _ => "",
            };
            entry.return_key = Some(self.resolve(spelling));
        }
        entry.return_key.clone().unwrap_or_default()
    }

    /// n-th parameter-type display key, resolving it on first use. Out of
    /// range yields an empty key.
    pub fn param_key(&self, node: &DeclarationNode, index: usize) -> String {
        let mut entries = self.entries.borrow_mut();
        let entry = entries
            .entry(node.id)
            .or_insert_with(|| self.build_entry(node));
        if index >= entry.param_keys.len() {
            return String::new();
        }
        if entry.param_keys[index].is_none() {
            let spelling = match &node.kind {
                NodeKind::Operator { param_types, .. } => {
                    param_types.get(index).map(String::as_str).unwrap_or("")
                }
                _ => "",
            };
            entry.param_keys[index] = Some(self.resolve(spelling));
        }
        entry.param_keys[index].clone().unwrap_or_default()
    }

    fn resolve(&self, spelling: &str) -> String {
        match self.resolver {
            Some(resolver) => resolver.display_key(spelling).unwrap_or_default(),
            None => spelling.to_string(),
        }
    }

    fn build_entry(&self, node: &DeclarationNode) -> Entry<K> {
        let (token, param_count, return_spelling, param_spellings) = match &node.kind {
            NodeKind::Operator {
                family,
                return_type,
                param_types,
            } => {
                let token = match family {
                    OperatorFamily::Unary | OperatorFamily::Binary => node.name.as_str(),
                    OperatorFamily::Conversion(ConversionKind::Implicit) => "implicit",
                    OperatorFamily::Conversion(ConversionKind::Explicit) => "explicit",
                };
                (token, param_types.len(), Some(return_type), Some(param_types))
            }
            // Non-operator nodes never reach a signature comparer; keep the
            // entry inert instead of panicking.
            _ => ("", 0, None, None),
        };

        let op = K::parse_token(token);
        let rank = op
            .and_then(|op| self.order.iter().position(|&key| key == op))
            .map(|index| index as i32)
            .unwrap_or(-1);
        let info = OpInfo {
            has_op: op.is_some(),
            op,
            rank,
        };

        // Without a resolver the syntactic spellings are final, so fill them
        // now; with one, leave the keys unresolved until a comparer needs a
        // type tie-break.
        let (return_key, param_keys) = if self.resolver.is_none() {
            (
                Some(return_spelling.map(|s| s.clone()).unwrap_or_default()),
                param_spellings
                    .map(|params| params.iter().map(|p| Some(p.clone())).collect())
                    .unwrap_or_default(),
            )
        } else {
            (None, vec![None; param_count])
        };

        Entry {
            info,
            return_key,
            param_keys,
        }
    }
}
