//! Category comparers and their composition
//!
//! One comparer per ordering category, each returning `Ordering` with the
//! convention "Less ⇒ first argument sorts earlier", composed into a single
//! deterministic chain. No comparer breaks ties by position: equal means
//! equal, and the stable sort in the reordering engine preserves original
//! order for equal nodes.

pub mod composite;
pub mod name;
pub mod operators;
pub mod rank;

use std::cmp::Ordering;

use declsort_config::{OperatorFamilyKey, OrderingConfig, StrategyKey};
use declsort_model::DeclarationNode;

use crate::classify::Scope;
use crate::semantic::TypeResolver;

pub use composite::CompositeComparer;
pub use name::NameComparer;
pub use operators::SignatureComparer;
pub use rank::{
    AccessibilityComparer, AllocationComparer, MemberKindComparer, OperatorFamilyComparer,
    TypeOrderComparer,
};

/// A single ordering criterion over declaration nodes.
pub trait DeclComparer {
    fn compare(&self, a: &DeclarationNode, b: &DeclarationNode) -> Ordering;
}

/// The comparer chain for file-scope type declarations.
pub fn type_comparer(config: &OrderingConfig) -> CompositeComparer<'_> {
    CompositeComparer::new(vec![Box::new(TypeOrderComparer::new(&config.type_order))])
}

/// The comparer chain for members of a type body, assembled per the
/// configured strategy order.
pub fn member_comparer<'a>(
    config: &'a OrderingConfig,
    scope: Scope,
    resolver: Option<&'a dyn TypeResolver>,
) -> CompositeComparer<'a> {
    let mut parts: Vec<Box<dyn DeclComparer + 'a>> = Vec::new();
    for &strategy in &config.strategy_order {
        parts.push(match strategy {
            StrategyKey::MemberKind => {
                Box::new(MemberKindComparer::new(config, operator_chain(config, resolver)))
            }
            StrategyKey::Accessibility => {
                Box::new(AccessibilityComparer::new(&config.accessibility_order, scope))
            }
            StrategyKey::Allocation => {
                Box::new(AllocationComparer::new(&config.allocation_order))
            }
            StrategyKey::Name => Box::new(NameComparer),
        });
    }
    CompositeComparer::new(parts)
}

/// The comparer chain for the container's scope.
pub fn comparer_for<'a>(
    scope: Scope,
    config: &'a OrderingConfig,
    resolver: Option<&'a dyn TypeResolver>,
) -> CompositeComparer<'a> {
    match scope {
        Scope::File => type_comparer(config),
        Scope::Member { .. } => member_comparer(config, scope, resolver),
    }
}

/// Tie-break chain between two operator declarations: family rank first,
/// then each configured family's signature criteria in order.
fn operator_chain<'a>(
    config: &'a OrderingConfig,
    resolver: Option<&'a dyn TypeResolver>,
) -> CompositeComparer<'a> {
    let mut parts: Vec<Box<dyn DeclComparer + 'a>> = Vec::new();
    parts.push(Box::new(OperatorFamilyComparer::new(&config.operator_order)));
    for &family in &config.operator_order {
        parts.push(match family {
            OperatorFamilyKey::Conversion => Box::new(SignatureComparer::new(
                family,
                &config.conversion_operator_order,
                resolver,
            )),
            OperatorFamilyKey::Unary => Box::new(SignatureComparer::new(
                family,
                &config.unary_operator_order,
                resolver,
            )),
            OperatorFamilyKey::Binary => Box::new(SignatureComparer::new(
                family,
                &config.binary_operator_order,
                resolver,
            )),
        });
    }
    CompositeComparer::new(parts)
}
