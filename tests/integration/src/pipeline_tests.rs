//! Full-pipeline tests: TOML settings through scanning, fixing, and a clean
//! rescan.

use pretty_assertions::assert_eq;

use declsort_config::{RuleId, Severity, from_toml_str};
use declsort_engine::{ContainerFix, reorder_all, scan};
use declsort_model::{
    AccessModifiers, AllocationModifiers, Container, ContainerKind, DeclarationNode, NodeId,
    NodeKind, TypeKind,
};

fn node(id: u32, kind: NodeKind, name: &str) -> DeclarationNode {
    DeclarationNode::new(NodeId(id), kind, name)
}

/// Rebuild a container in the order a fix applicator would leave it in.
fn apply(container: &Container, fixes: &[ContainerFix]) -> Container {
    let mut ordered: Vec<DeclarationNode> = container.nodes().to_vec();
    if let Some(fix) = fixes.iter().find(|f| f.container == container.name) {
        for replacement in &fix.replacements {
            let moved = container
                .nodes()
                .iter()
                .find(|n| n.id == replacement.node)
                .unwrap()
                .clone();
            ordered[replacement.slot] = moved;
        }
    }
    let mut rebuilt = Container::new(container.kind, container.name.clone());
    for node in ordered {
        rebuilt.push(node);
    }
    rebuilt
}

fn sample_file() -> Container {
    let mut file = Container::new(ContainerKind::Root, "shapes.cs");
    file.push(node(1, NodeKind::Type(TypeKind::Class), "Circle"));
    file.push(node(2, NodeKind::Type(TypeKind::Enum), "ShapeKind"));
    file.push(node(3, NodeKind::Type(TypeKind::Interface), "IShape"));
    file
}

fn sample_body() -> Container {
    let mut body = Container::new(ContainerKind::TypeBody { interface: false }, "Circle");
    body.push(node(10, NodeKind::Method, "Area"));
    body.push(
        node(11, NodeKind::Field, "Pi")
            .with_access(AccessModifiers::public())
            .with_allocation(AllocationModifiers::constant()),
    );
    body.push(node(12, NodeKind::Field, "radius").with_access(AccessModifiers::private()));
    body.push(node(13, NodeKind::Constructor, "Circle"));
    body
}

#[test]
fn test_scan_fix_rescan_converges() {
    let config = from_toml_str(
        r#"
[declsort]
type_order = "enum,interface,class,name"
"#,
    )
    .unwrap();

    let containers = [sample_file(), sample_body()];
    let initial: usize = containers
        .iter()
        .map(|c| scan(c, &config, None).unwrap().len())
        .sum();
    assert!(initial > 0);

    let fixes = reorder_all(containers.iter(), &config, None).unwrap();
    assert_eq!(fixes.len(), 2);

    for container in &containers {
        let fixed = apply(container, &fixes);
        let violations = scan(&fixed, &config, None).unwrap();
        assert!(violations.is_empty(), "residual violations in {}", fixed.name);
    }
}

#[test]
fn test_fixed_file_scope_order() {
    let config = from_toml_str(r#"type_order = "enum,interface,class,name""#).unwrap();
    let file = sample_file();
    let fixes = reorder_all([&file], &config, None).unwrap();
    let fixed = apply(&file, &fixes);

    let names: Vec<&str> = fixed.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["ShapeKind", "IShape", "Circle"]);
}

#[test]
fn test_fixed_member_order() {
    let config = from_toml_str("").unwrap();
    let body = sample_body();
    let fixes = reorder_all([&body], &config, None).unwrap();
    let fixed = apply(&body, &fixes);

    let names: Vec<&str> = fixed.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Pi", "radius", "Circle", "Area"]);
}

#[test]
fn test_configured_severity_reaches_violations() {
    let config = from_toml_str(
        r#"
type_order = "enum,class"
type_order_severity = "error"
"#,
    )
    .unwrap();

    let mut file = Container::new(ContainerKind::Root, "lib.cs");
    file.push(node(1, NodeKind::Type(TypeKind::Class), "A"));
    file.push(node(2, NodeKind::Type(TypeKind::Enum), "B"));

    let violations = scan(&file, &config, None).unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, RuleId::TypeOrderInFile);
    assert_eq!(violations[0].rule.code(), "DS1000");
    assert_eq!(violations[0].severity, Severity::Error);
}

#[test]
fn test_violations_serialize_for_diagnostic_sinks() {
    let config = from_toml_str(r#"type_order = "enum,class""#).unwrap();
    let mut file = Container::new(ContainerKind::Root, "lib.cs");
    file.push(node(1, NodeKind::Type(TypeKind::Class), "A"));
    file.push(node(2, NodeKind::Type(TypeKind::Enum), "B"));

    let violations = scan(&file, &config, None).unwrap();
    let json = serde_json::to_value(&violations).unwrap();

    assert_eq!(json[0]["container"], "lib.cs");
    assert_eq!(json[0]["name"], "B");
    assert_eq!(json[0]["expected_order"], "B, A");
}

#[test]
fn test_barriers_survive_the_whole_pipeline() {
    let config = from_toml_str(r#"type_order = "class,name""#).unwrap();
    let mut file = Container::new(ContainerKind::Root, "lib.cs");
    file.push(node(1, NodeKind::Type(TypeKind::Class), "Delta"));
    file.push(node(2, NodeKind::Type(TypeKind::Class), "Charlie"));
    file.push_barrier();
    file.push(node(3, NodeKind::Type(TypeKind::Class), "Bravo"));
    file.push(node(4, NodeKind::Type(TypeKind::Class), "Alpha"));

    let fixes = reorder_all([&file], &config, None).unwrap();
    let fixed = apply(&file, &fixes);
    let names: Vec<&str> = fixed.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Delta", "Alpha", "Bravo"]);
}

#[test]
fn test_foreign_node_fails_the_pass() {
    let config = from_toml_str("").unwrap();
    let mut file = Container::new(ContainerKind::Root, "lib.cs");
    file.push(node(1, NodeKind::Field, "stray"));

    assert!(scan(&file, &config, None).is_err());
    assert!(reorder_all([&file], &config, None).is_err());
}
