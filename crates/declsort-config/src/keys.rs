//! Classification-key enumerations and alias tables
//!
//! Each ordering category is a small closed enum. The declared order of the
//! variants is the category's *natural* order, used both as the default when
//! a setting is absent and as the source for the missing-value append. Every
//! variant carries one or more spellings; the first is the canonical label
//! used when rendering configuration back to text, the rest are aliases.
//!
//! Alias tables are built once per category (on first parse) from these
//! static declarations. Matching is case-insensitive and ignores `_` and
//! spaces, so `Record_Struct`, `record struct`, and `recordstruct` all parse
//! to the same key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Normalize a raw configuration token for alias lookup.
pub(crate) fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| *c != '_' && *c != ' ')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Common surface of every classification-key enumeration.
pub trait OrderKey: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// All values in declared (natural) order.
    fn natural() -> &'static [Self];

    /// Parse a raw configuration token through the alias table.
    fn parse_token(token: &str) -> Option<Self>;

    /// Canonical spelling for rendering.
    fn label_of(self) -> &'static str;
}

macro_rules! order_key {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => [$($spelling:literal),+ $(,)?]
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All values in declared (natural) order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Canonical spelling, used when rendering configured order.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => order_key!(@first $($spelling),+), )+
                }
            }

            /// Parse a raw token; `None` means the token is not recognized
            /// for this category (the caller drops it silently).
            pub fn parse(token: &str) -> Option<Self> {
                static TABLE: OnceLock<HashMap<String, $name>> = OnceLock::new();
                let table = TABLE.get_or_init(|| {
                    let mut table = HashMap::new();
                    $(
                        $( table.insert(normalize($spelling), $name::$variant); )+
                        table
                            .entry(normalize(stringify!($variant)))
                            .or_insert($name::$variant);
                    )+
                    table
                });
                table.get(&normalize(token)).copied()
            }
        }

        impl OrderKey for $name {
            fn natural() -> &'static [Self] {
                Self::ALL
            }

            fn parse_token(token: &str) -> Option<Self> {
                Self::parse(token)
            }

            fn label_of(self) -> &'static str {
                self.label()
            }
        }
    };
    (@first $first:literal $(, $rest:literal)*) => { $first };
}

order_key! {
    /// File-scope type ordering. `Name` is a pseudo-criterion: it compares
    /// declared names instead of ranking a kind, and may sit anywhere in the
    /// configured order.
    pub enum TypeKey {
        Delegate => ["delegate"],
        Enum => ["enum"],
        Interface => ["interface"],
        Struct => ["struct"],
        Record => ["record"],
        RecordStruct => ["record struct"],
        Class => ["class"],
        Name => ["name"],
    }
}

order_key! {
    /// Member-kind ordering inside a type body.
    pub enum MemberKey {
        Field => ["field"],
        Constructor => ["constructor", "ctor"],
        Event => ["event"],
        Property => ["property"],
        Operator => ["operator"],
        Method => ["method"],
        Type => ["type", "nested type"],
    }
}

order_key! {
    /// Accessibility ordering. Declared order is the default:
    /// most-visible first.
    pub enum AccessibilityKey {
        Public => ["public"],
        Internal => ["internal"],
        /// `protected internal`: accessible where either protected or
        /// internal members are accessible.
        ProtectedOrInternal => ["protected internal"],
        Protected => ["protected"],
        /// `private protected`: accessible only where both protected and
        /// internal members are accessible.
        ProtectedAndInternal => ["private protected", "private internal"],
        Private => ["private"],
    }
}

order_key! {
    /// Allocation-class ordering. `Instance` means no modifier.
    pub enum AllocationKey {
        Const => ["const"],
        Static => ["static"],
        Instance => ["instance"],
    }
}

order_key! {
    /// Ordering between operator families.
    pub enum OperatorFamilyKey {
        Conversion => ["conversion", "conversions"],
        Unary => ["unary"],
        Binary => ["binary"],
    }
}

order_key! {
    /// Binary-operator sort criteria: the real operator tokens interleaved
    /// with the `ReturnType`/`ParamType*` pseudo-criteria.
    pub enum BinaryOpKey {
        Plus => ["+"],
        Minus => ["-"],
        Multiply => ["*"],
        Divide => ["/"],
        Modulus => ["%"],
        And => ["&"],
        Or => ["|"],
        Xor => ["^"],
        LeftShift => ["<<"],
        RightShift => [">>"],
        ReturnType => ["return type"],
        ParamType0 => ["param0", "param type 0"],
        ParamType1 => ["param1", "param type 1"],
    }
}

order_key! {
    /// Unary-operator sort criteria.
    pub enum UnaryOpKey {
        Plus => ["+"],
        Minus => ["-"],
        Negate => ["!"],
        /// The complement token is `~`; `^` is accepted as a legacy alias.
        Complement => ["~", "^"],
        Increment => ["++"],
        Decrement => ["--"],
        True => ["true"],
        False => ["false"],
        ReturnType => ["return type"],
        ParamType0 => ["param0", "param type 0"],
    }
}

order_key! {
    /// Conversion-operator sort criteria.
    pub enum ConversionOpKey {
        Implicit => ["implicit"],
        Explicit => ["explicit"],
        ReturnType => ["return type"],
        ParamType0 => ["param0", "param type 0"],
    }
}

order_key! {
    /// The sequence of category comparers composed into the member order.
    pub enum StrategyKey {
        MemberKind => ["member kind", "member kinds"],
        Accessibility => ["accessibility"],
        Allocation => ["allocation", "allocation modifiers"],
        Name => ["name"],
    }
}

/// What an operator-order key contributes when the signature comparer walks
/// the configured criterion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// A specific operator token; contributes the operator-rank difference,
    /// and is skipped when neither side's operator is this token.
    Token,
    /// Ordinal comparison of the return-type display key.
    ReturnType,
    /// Ordinal comparison of the n-th parameter-type display key.
    Param(usize),
}

/// Operator-family keys additionally map each value to its sort criterion.
pub trait OperatorOrderKey: OrderKey {
    fn criterion(self) -> SortCriterion;
}

impl OperatorOrderKey for BinaryOpKey {
    fn criterion(self) -> SortCriterion {
        match self {
            BinaryOpKey::ReturnType => SortCriterion::ReturnType,
            BinaryOpKey::ParamType0 => SortCriterion::Param(0),
            BinaryOpKey::ParamType1 => SortCriterion::Param(1),
            _ => SortCriterion::Token,
        }
    }
}

impl OperatorOrderKey for UnaryOpKey {
    fn criterion(self) -> SortCriterion {
        match self {
            UnaryOpKey::ReturnType => SortCriterion::ReturnType,
            UnaryOpKey::ParamType0 => SortCriterion::Param(0),
            _ => SortCriterion::Token,
        }
    }
}

impl OperatorOrderKey for ConversionOpKey {
    fn criterion(self) -> SortCriterion {
        match self {
            ConversionOpKey::ReturnType => SortCriterion::ReturnType,
            ConversionOpKey::ParamType0 => SortCriterion::Param(0),
            _ => SortCriterion::Token,
        }
    }
}
