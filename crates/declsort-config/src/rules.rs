//! Ordering rule identities and severities
//!
//! Four rules cover the ordering surface; each has a stable diagnostic code
//! and a configurable severity. Severity is presentation metadata for the
//! host's diagnostic sink and never participates in comparisons.

use serde::{Deserialize, Serialize};

/// The ordering rules the scanner can report against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// Types at file scope are out of configured order.
    TypeOrderInFile,
    /// A type nested in another type is out of configured order.
    NestedTypeOrder,
    /// A member of a type body is out of configured order.
    MemberOrder,
    /// An operator overload is out of configured order.
    OperatorOrder,
}

impl RuleId {
    pub const ALL: &'static [RuleId] = &[
        RuleId::TypeOrderInFile,
        RuleId::NestedTypeOrder,
        RuleId::MemberOrder,
        RuleId::OperatorOrder,
    ];

    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            RuleId::TypeOrderInFile => "DS1000",
            RuleId::NestedTypeOrder => "DS1001",
            RuleId::MemberOrder => "DS1002",
            RuleId::OperatorOrder => "DS1003",
        }
    }

    /// Settings key that configures this rule's severity.
    pub fn severity_key(self) -> &'static str {
        match self {
            RuleId::TypeOrderInFile => "type_order_severity",
            RuleId::NestedTypeOrder => "nested_type_order_severity",
            RuleId::MemberOrder => "member_order_severity",
            RuleId::OperatorOrder => "operator_order_severity",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// How a violation of a rule is surfaced to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Parse a severity token; unknown tokens yield `None` and the caller
    /// keeps the default.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Severity::Error),
            "warning" | "warn" => Some(Severity::Warning),
            "info" | "suggestion" => Some(Severity::Info),
            "hint" => Some(Severity::Hint),
            _ => None,
        }
    }
}
