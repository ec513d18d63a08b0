use proptest::prelude::*;

use declsort_config::OrderingConfig;
use declsort_engine::{Replacement, reorder, scan};
use declsort_model::{
    AccessModifiers, AllocationModifiers, Container, ContainerKind, DeclarationNode, NodeId,
    NodeKind, OperatorFamily, TypeKind,
};

// Operator tokens live in the node name, so the strategy yields the kind
// together with an optional token that overrides the generated name.
fn kind_strategy() -> impl Strategy<Value = (NodeKind, Option<String>)> {
    prop_oneof![
        Just((NodeKind::Field, None)),
        Just((NodeKind::Constructor, None)),
        Just((NodeKind::Event, None)),
        Just((NodeKind::Property, None)),
        Just((NodeKind::Method, None)),
        Just((NodeKind::NestedType(TypeKind::Class), None)),
        Just((NodeKind::NestedType(TypeKind::Enum), None)),
        ("[+*-]", "[a-c]{1,2}").prop_map(|(token, ret)| {
            (
                NodeKind::Operator {
                    family: OperatorFamily::Binary,
                    return_type: ret,
                    param_types: vec!["T".to_string(), "T".to_string()],
                },
                Some(token),
            )
        }),
    ]
}

fn access_strategy() -> impl Strategy<Value = AccessModifiers> {
    prop_oneof![
        Just(AccessModifiers::NONE),
        Just(AccessModifiers::public()),
        Just(AccessModifiers::internal()),
        Just(AccessModifiers::protected()),
        Just(AccessModifiers::private()),
        Just(AccessModifiers::protected_internal()),
    ]
}

fn allocation_strategy() -> impl Strategy<Value = AllocationModifiers> {
    prop_oneof![
        Just(AllocationModifiers::INSTANCE),
        Just(AllocationModifiers::statik()),
        Just(AllocationModifiers::constant()),
    ]
}

type NodeSpec = (
    (NodeKind, Option<String>),
    String,
    AccessModifiers,
    AllocationModifiers,
);

fn node_strategy() -> impl Strategy<Value = NodeSpec> {
    (
        kind_strategy(),
        "[A-Da-d]{1,3}",
        access_strategy(),
        allocation_strategy(),
    )
}

fn build_container(specs: Vec<NodeSpec>) -> Container {
    let mut container = Container::new(ContainerKind::TypeBody { interface: false }, "Subject");
    for (index, ((kind, token), name, access, allocation)) in specs.into_iter().enumerate() {
        let name = token.unwrap_or(name);
        container.push(
            DeclarationNode::new(NodeId(index as u32), kind, name)
                .with_access(access)
                .with_allocation(allocation),
        );
    }
    container
}

/// Rebuild the container in the post-fix order described by the mapping.
fn apply(container: &Container, replacements: &[Replacement]) -> Container {
    let mut ordered: Vec<DeclarationNode> = container.nodes().to_vec();
    for replacement in replacements {
        let node = container
            .nodes()
            .iter()
            .find(|n| n.id == replacement.node)
            .unwrap()
            .clone();
        ordered[replacement.slot] = node;
    }
    let mut rebuilt = Container::new(container.kind, container.name.clone());
    for node in ordered {
        rebuilt.push(node);
    }
    rebuilt
}

proptest! {
    #[test]
    fn test_reorder_then_scan_is_clean(specs in prop::collection::vec(node_strategy(), 0..12)) {
        let config = OrderingConfig::default();
        let container = build_container(specs);

        let replacements = reorder(&container, &config, None).unwrap();
        let fixed = apply(&container, &replacements);

        let violations = scan(&fixed, &config, None).unwrap();
        prop_assert!(violations.is_empty());
    }

    #[test]
    fn test_reorder_is_idempotent(specs in prop::collection::vec(node_strategy(), 0..12)) {
        let config = OrderingConfig::default();
        let container = build_container(specs);

        let first = reorder(&container, &config, None).unwrap();
        let fixed = apply(&container, &first);

        let second = reorder(&fixed, &config, None).unwrap();
        prop_assert!(second.is_empty());
    }

    #[test]
    fn test_mapping_is_a_permutation(specs in prop::collection::vec(node_strategy(), 0..12)) {
        let config = OrderingConfig::default();
        let container = build_container(specs);

        let replacements = reorder(&container, &config, None).unwrap();
        let fixed = apply(&container, &replacements);

        // same node ids, each exactly once
        let mut before: Vec<NodeId> = container.nodes().iter().map(|n| n.id).collect();
        let mut after: Vec<NodeId> = fixed.nodes().iter().map(|n| n.id).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);

        // every listed slot actually changes occupants
        for replacement in &replacements {
            prop_assert!(replacement.slot < container.len());
            prop_assert_ne!(container.nodes()[replacement.slot].id, replacement.node);
        }
    }

    #[test]
    fn test_identical_nodes_never_move(count in 0usize..8) {
        let config = OrderingConfig::default();
        let mut container = Container::new(ContainerKind::TypeBody { interface: false }, "Subject");
        for index in 0..count {
            container.push(DeclarationNode::new(
                NodeId(index as u32),
                NodeKind::Method,
                "Same",
            ));
        }
        let replacements = reorder(&container, &config, None).unwrap();
        prop_assert!(replacements.is_empty());
    }
}
