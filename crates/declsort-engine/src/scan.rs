//! Violation scanning
//!
//! Walks each barrier segment of a container in source order and flags every
//! adjacent pair that compares out of order. Under a total preorder,
//! checking adjacent pairs is both sufficient and necessary to detect any
//! non-sorted sequence, so nothing more is scanned.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use declsort_config::{OrderingConfig, RuleId, Severity};
use declsort_model::{Container, DeclarationNode, NodeId, NodeKind};

use crate::classify::{Scope, validate_container};
use crate::compare::{DeclComparer, comparer_for};
use crate::error::Result;
use crate::semantic::TypeResolver;

/// One out-of-order declaration, ready for a diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: RuleId,
    pub severity: Severity,
    /// Display name of the container the node sits in.
    pub container: String,
    /// The later node of the offending pair.
    pub node: NodeId,
    pub name: String,
    /// The segment's declarations rendered in their expected order, for the
    /// diagnostic message.
    pub expected_order: String,
}

/// Scan one container's direct children for ordering violations.
///
/// Pure: no side effects beyond the returned list. Fails only on a
/// declaration-tree contract violation (a node foreign to the container's
/// scope).
pub fn scan(
    container: &Container,
    config: &OrderingConfig,
    resolver: Option<&dyn TypeResolver>,
) -> Result<Vec<Violation>> {
    let scope = validate_container(container)?;
    let comparer = comparer_for(scope, config, resolver);

    let mut violations = Vec::new();
    for segment in container.segments() {
        let nodes = &container.nodes()[segment.range];
        if nodes.len() < 2 {
            continue;
        }

        // Rendered lazily: most segments are already ordered.
        let mut expected: Option<String> = None;
        for pair in nodes.windows(2) {
            if comparer.compare(&pair[0], &pair[1]) == Ordering::Greater {
                let offender = &pair[1];
                let expected = expected
                    .get_or_insert_with(|| expected_order(nodes, &comparer))
                    .clone();
                let rule = rule_for(scope, offender);
                violations.push(Violation {
                    rule,
                    severity: config.severity(rule),
                    container: container.name.clone(),
                    node: offender.id,
                    name: offender.name.clone(),
                    expected_order: expected,
                });
            }
        }
    }

    debug!(
        container = %container.name,
        violations = violations.len(),
        "scanned sibling group"
    );
    Ok(violations)
}

/// Render the segment's true target order by stably sorting it once, so the
/// message reflects the full expected sequence rather than the pairwise
/// rule.
fn expected_order(nodes: &[DeclarationNode], comparer: &dyn DeclComparer) -> String {
    let mut sorted: Vec<&DeclarationNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| comparer.compare(a, b));
    sorted
        .iter()
        .map(|node| node.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn rule_for(scope: Scope, offender: &DeclarationNode) -> RuleId {
    match scope {
        Scope::File => RuleId::TypeOrderInFile,
        Scope::Member { .. } => match offender.kind {
            NodeKind::NestedType(_) => RuleId::NestedTypeOrder,
            NodeKind::Operator { .. } => RuleId::OperatorOrder,
            _ => RuleId::MemberOrder,
        },
    }
}
