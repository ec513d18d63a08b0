//! Settings-surface tests: alias spellings, missing-value policy, and
//! severity keys as seen through the TOML front-end.

use pretty_assertions::assert_eq;

use declsort_config::{
    AccessibilityKey, AllocationKey, BinaryOpKey, MemberKey, OrderingConfig, RuleId, Severity,
    StrategyKey, TypeKey, from_toml_str,
};

#[test]
fn test_alias_spellings_are_case_and_separator_insensitive() {
    let config = from_toml_str(
        r#"
type_order = "Record Struct, ENUM, class"
member_order = "ctor, field"
accessibility_order = "protected internal, PUBLIC"
"#,
    )
    .unwrap();

    assert_eq!(config.type_order[0], TypeKey::RecordStruct);
    assert_eq!(config.type_order[1], TypeKey::Enum);
    assert_eq!(config.member_order[0], MemberKey::Constructor);
    assert_eq!(
        config.accessibility_order[0],
        AccessibilityKey::ProtectedOrInternal
    );
}

#[test]
fn test_symbolic_operator_tokens_parse() {
    let config = from_toml_str(
        r#"
add_missing_order_values = false
binary_operator_order = "<<, +, return_type"
"#,
    )
    .unwrap();
    assert_eq!(
        config.binary_operator_order,
        vec![
            BinaryOpKey::LeftShift,
            BinaryOpKey::Plus,
            BinaryOpKey::ReturnType
        ]
    );
}

#[test]
fn test_unknown_tokens_drop_and_duplicates_keep_first() {
    let config = from_toml_str(
        r#"
add_missing_order_values = false
allocation_modifier_order = "static, banana, const, static"
"#,
    )
    .unwrap();
    assert_eq!(
        config.allocation_order,
        vec![AllocationKey::Static, AllocationKey::Const]
    );
}

#[test]
fn test_add_missing_appends_natural_remainder() {
    let config = from_toml_str(r#"strategy_order = "name""#).unwrap();
    assert_eq!(
        config.strategy_order,
        vec![
            StrategyKey::Name,
            StrategyKey::MemberKind,
            StrategyKey::Accessibility,
            StrategyKey::Allocation
        ]
    );
}

#[test]
fn test_empty_category_falls_back_to_natural_order() {
    let config = from_toml_str(
        r#"
add_missing_order_values = false
member_order = "banana"
"#,
    )
    .unwrap();
    assert_eq!(config.member_order, MemberKey::ALL.to_vec());
}

#[test]
fn test_every_rule_severity_is_settable() {
    let config = from_toml_str(
        r#"
type_order_severity = "hint"
nested_type_order_severity = "info"
member_order_severity = "error"
operator_order_severity = "warn"
"#,
    )
    .unwrap();
    assert_eq!(config.severity(RuleId::TypeOrderInFile), Severity::Hint);
    assert_eq!(config.severity(RuleId::NestedTypeOrder), Severity::Info);
    assert_eq!(config.severity(RuleId::MemberOrder), Severity::Error);
    assert_eq!(config.severity(RuleId::OperatorOrder), Severity::Warning);
}

#[test]
fn test_unknown_severity_token_keeps_default() {
    let config = from_toml_str(r#"member_order_severity = "loud""#).unwrap();
    assert_eq!(config.severity(RuleId::MemberOrder), Severity::Warning);
}

#[test]
fn test_defaults_match_natural_enumerations() {
    let config = OrderingConfig::default();
    assert_eq!(config.type_order, TypeKey::ALL.to_vec());
    assert_eq!(config.member_order, MemberKey::ALL.to_vec());
    assert!(config.add_missing_order_values);
}
