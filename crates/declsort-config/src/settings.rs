//! Raw-settings parsing into the typed ordering configuration
//!
//! Where the key→string pairs come from is the host's business; this module
//! only defines the [`RawSettings`] source trait and the parse into
//! [`OrderingConfig`]. Parsing is deliberately forgiving: unknown tokens are
//! dropped, duplicates keep their first occurrence, and an empty category
//! falls back to its natural enumeration. Nothing here ever blocks analysis.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::keys::{
    AccessibilityKey, AllocationKey, BinaryOpKey, ConversionOpKey, MemberKey, OperatorFamilyKey,
    OrderKey, StrategyKey, TypeKey, UnaryOpKey,
};
use crate::rules::{RuleId, Severity};

/// A read-only source of raw key→string settings.
pub trait RawSettings {
    fn get(&self, key: &str) -> Option<&str>;
}

impl RawSettings for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl RawSettings for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

/// The immutable ordering configuration.
///
/// Invariants: every order array contains each key at most once and is never
/// empty. Safe to share across concurrent analysis passes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OrderingConfig {
    /// When true, keys absent from an explicit setting are appended in
    /// natural order; when false they are treated as equal and keep their
    /// original source order.
    pub add_missing_order_values: bool,
    pub type_order: Vec<TypeKey>,
    pub member_order: Vec<MemberKey>,
    pub accessibility_order: Vec<AccessibilityKey>,
    pub allocation_order: Vec<AllocationKey>,
    pub operator_order: Vec<OperatorFamilyKey>,
    pub binary_operator_order: Vec<BinaryOpKey>,
    pub unary_operator_order: Vec<UnaryOpKey>,
    pub conversion_operator_order: Vec<ConversionOpKey>,
    pub strategy_order: Vec<StrategyKey>,
    severities: [Severity; 4],
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            add_missing_order_values: true,
            type_order: TypeKey::ALL.to_vec(),
            member_order: MemberKey::ALL.to_vec(),
            accessibility_order: AccessibilityKey::ALL.to_vec(),
            allocation_order: AllocationKey::ALL.to_vec(),
            operator_order: OperatorFamilyKey::ALL.to_vec(),
            binary_operator_order: BinaryOpKey::ALL.to_vec(),
            unary_operator_order: UnaryOpKey::ALL.to_vec(),
            conversion_operator_order: ConversionOpKey::ALL.to_vec(),
            strategy_order: StrategyKey::ALL.to_vec(),
            severities: [Severity::Warning; 4],
        }
    }
}

impl OrderingConfig {
    /// Setting keys recognized by [`OrderingConfig::from_settings`].
    pub const ORDER_KEYS: &'static [&'static str] = &[
        "type_order",
        "member_order",
        "accessibility_order",
        "allocation_modifier_order",
        "operator_order",
        "binary_operator_order",
        "unary_operator_order",
        "conversion_operator_order",
        "strategy_order",
    ];

    /// The `add_missing_order_values` flag key.
    pub const ADD_MISSING_KEY: &'static str = "add_missing_order_values";

    /// Build a configuration from raw settings.
    ///
    /// Never fails: configuration problems degrade to defaults instead of
    /// blocking analysis.
    pub fn from_settings(settings: &dyn RawSettings) -> Self {
        let add_missing = settings
            .get(Self::ADD_MISSING_KEY)
            .and_then(|raw| parse_bool(raw))
            .unwrap_or(true);

        let mut severities = [Severity::Warning; 4];
        for (slot, rule) in RuleId::ALL.iter().enumerate() {
            if let Some(raw) = settings.get(rule.severity_key()) {
                match Severity::parse(raw) {
                    Some(severity) => severities[slot] = severity,
                    None => debug!(rule = %rule, token = raw, "ignoring unrecognized severity"),
                }
            }
        }

        Self {
            add_missing_order_values: add_missing,
            type_order: read_order(settings, "type_order", add_missing),
            member_order: read_order(settings, "member_order", add_missing),
            accessibility_order: read_order(settings, "accessibility_order", add_missing),
            allocation_order: read_order(settings, "allocation_modifier_order", add_missing),
            operator_order: read_order(settings, "operator_order", add_missing),
            binary_operator_order: read_order(settings, "binary_operator_order", add_missing),
            unary_operator_order: read_order(settings, "unary_operator_order", add_missing),
            conversion_operator_order: read_order(
                settings,
                "conversion_operator_order",
                add_missing,
            ),
            strategy_order: read_order(settings, "strategy_order", add_missing),
            severities,
        }
    }

    /// The configured severity for a rule.
    pub fn severity(&self, rule: RuleId) -> Severity {
        self.severities[rule as usize]
    }

    pub fn set_severity(&mut self, rule: RuleId, severity: Severity) {
        self.severities[rule as usize] = severity;
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parse one category's order setting.
///
/// Tokens split on `,`; unknown tokens drop silently; the first occurrence
/// of a duplicate wins. With `add_missing` (or an empty result) the natural
/// enumeration is appended, skipping keys already present.
fn read_order<K: OrderKey>(settings: &dyn RawSettings, key: &str, add_missing: bool) -> Vec<K> {
    let mut order: Vec<K> = Vec::new();
    if let Some(raw) = settings.get(key) {
        for token in raw.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match K::parse_token(token) {
                Some(value) => {
                    if !order.contains(&value) {
                        order.push(value);
                    }
                }
                None => debug!(key, token, "ignoring unrecognized order token"),
            }
        }
    }
    if add_missing || order.is_empty() {
        for &value in K::natural() {
            if !order.contains(&value) {
                order.push(value);
            }
        }
    }
    order
}
