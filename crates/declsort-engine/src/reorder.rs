//! Reordering engine
//!
//! Computes the stable full sort of each barrier segment and emits it as a
//! minimal slot-to-occupant mapping. Stability is mandatory: declarations
//! that compare equal under the full composite keep their original relative
//! order, and each node's attached metadata travels with it because the
//! mapping moves whole nodes.
//!
//! The engine only ever describes the rewrite; applying it (as one atomic
//! multi-node substitution) is the host's fix applicator's job.

use serde::Serialize;
use tracing::debug;

use declsort_config::OrderingConfig;
use declsort_model::{Container, NodeId};

use crate::classify::validate_container;
use crate::compare::{DeclComparer, comparer_for};
use crate::error::Result;
use crate::semantic::TypeResolver;

/// One slot of the replacement mapping: the node that should occupy the
/// given position of the container after the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// Absolute position within the container's child list.
    pub slot: usize,
    /// The node to place there.
    pub node: NodeId,
}

/// The fix for one container, produced by [`reorder_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerFix {
    pub container: String,
    pub replacements: Vec<Replacement>,
}

/// Compute the replacement mapping that puts one container's children in
/// configured order.
///
/// Already-ordered segments contribute nothing, so an ordered container
/// yields an empty mapping (and applying the engine twice equals applying
/// it once). Replacements never move a node across a barrier or out of its
/// container.
pub fn reorder(
    container: &Container,
    config: &OrderingConfig,
    resolver: Option<&dyn TypeResolver>,
) -> Result<Vec<Replacement>> {
    let scope = validate_container(container)?;
    let comparer = comparer_for(scope, config, resolver);

    let mut replacements = Vec::new();
    for segment in container.segments() {
        let nodes = &container.nodes()[segment.range.clone()];
        if nodes.len() < 2 {
            continue;
        }

        let mut order: Vec<usize> = (0..nodes.len()).collect();
        // stable: equal nodes keep original relative order
        order.sort_by(|&i, &j| comparer.compare(&nodes[i], &nodes[j]));

        for (slot, &source) in order.iter().enumerate() {
            if source != slot {
                replacements.push(Replacement {
                    slot: segment.range.start + slot,
                    node: nodes[source].id,
                });
            }
        }
    }

    debug!(
        container = %container.name,
        replacements = replacements.len(),
        "computed reorder"
    );
    Ok(replacements)
}

/// Fix-all batch mode: run the engine once per container and collect the
/// non-empty fixes. Containers are independent, so the resulting edits
/// never overlap.
pub fn reorder_all<'a>(
    containers: impl IntoIterator<Item = &'a Container>,
    config: &OrderingConfig,
    resolver: Option<&dyn TypeResolver>,
) -> Result<Vec<ContainerFix>> {
    let mut fixes = Vec::new();
    for container in containers {
        let replacements = reorder(container, config, resolver)?;
        if !replacements.is_empty() {
            fixes.push(ContainerFix {
                container: container.name.clone(),
                replacements,
            });
        }
    }
    Ok(fixes)
}
