//! Declaration nodes
//!
//! A [`DeclarationNode`] is one type or member declaration as seen by the
//! host's declaration-tree provider. The kind is a closed sum type, so the
//! engine's classification is an exhaustive match rather than a runtime
//! type test.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the declaration-tree provider.
///
/// Ids must be unique within one analysis pass; the engine uses them to key
/// its pass-scoped caches and to address nodes in replacement mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The syntactic kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Record,
    RecordStruct,
    Delegate,
}

/// Whether a conversion operator is declared implicit or explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionKind {
    Implicit,
    Explicit,
}

/// The arity family of an operator declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorFamily {
    Unary,
    Binary,
    Conversion(ConversionKind),
}

/// The kind of a declaration node.
///
/// Member kinds (`Field` through `NestedType`) appear inside a type body;
/// `Type` appears at file scope (directly in a compilation root or a
/// namespace). Handing a file-scope node to a member scan, or vice versa, is
/// a contract violation the engine rejects up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Field,
    Constructor,
    Event,
    Property,
    /// An operator overload. The type spellings are the raw declared
    /// expressions; the engine upgrades them to canonical display keys when
    /// a type resolver is available.
    Operator {
        family: OperatorFamily,
        return_type: String,
        param_types: Vec<String>,
    },
    Method,
    /// A type declared inside another type body.
    NestedType(TypeKind),
    /// A type declared at file scope.
    Type(TypeKind),
}

impl NodeKind {
    /// Short lowercase label for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Field => "field",
            NodeKind::Constructor => "constructor",
            NodeKind::Event => "event",
            NodeKind::Property => "property",
            NodeKind::Operator { .. } => "operator",
            NodeKind::Method => "method",
            NodeKind::NestedType(_) => "nested type",
            NodeKind::Type(_) => "type",
        }
    }

    /// True for kinds that belong inside a type body.
    pub fn is_member(&self) -> bool {
        !matches!(self, NodeKind::Type(_))
    }
}

/// Explicit accessibility modifiers present on a declaration.
///
/// Absence of all modifiers means the language default applies; deriving the
/// effective accessibility from this set and the enclosing scope is the
/// engine's job, not the model's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessModifiers {
    pub public: bool,
    pub internal: bool,
    pub protected: bool,
    pub private: bool,
}

impl AccessModifiers {
    pub const NONE: AccessModifiers = AccessModifiers {
        public: false,
        internal: false,
        protected: false,
        private: false,
    };

    pub fn public() -> Self {
        Self {
            public: true,
            ..Self::NONE
        }
    }

    pub fn internal() -> Self {
        Self {
            internal: true,
            ..Self::NONE
        }
    }

    pub fn protected() -> Self {
        Self {
            protected: true,
            ..Self::NONE
        }
    }

    pub fn private() -> Self {
        Self {
            private: true,
            ..Self::NONE
        }
    }

    /// `protected internal`
    pub fn protected_internal() -> Self {
        Self {
            protected: true,
            internal: true,
            ..Self::NONE
        }
    }

    /// `private protected`
    pub fn private_protected() -> Self {
        Self {
            private: true,
            protected: true,
            ..Self::NONE
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.public || self.internal || self.protected || self.private)
    }
}

/// Allocation modifiers present on a declaration (`const`, `static`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationModifiers {
    pub is_const: bool,
    pub is_static: bool,
}

impl AllocationModifiers {
    pub const INSTANCE: AllocationModifiers = AllocationModifiers {
        is_const: false,
        is_static: false,
    };

    pub fn constant() -> Self {
        Self {
            is_const: true,
            is_static: false,
        }
    }

    pub fn statik() -> Self {
        Self {
            is_const: false,
            is_static: true,
        }
    }
}

/// One type or member declaration.
///
/// Nodes are owned by their parent [`Container`](crate::Container) and are
/// never mutated by the engine. `original_index` is the position in source
/// order and is only ever used as the stable-sort tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Declared name. Multi-declarator fields/events join their declarator
    /// names with `,`; indexers use the sentinel `this`; operators carry the
    /// operator token (or the converted-to type spelling for conversions).
    pub name: String,
    pub access: AccessModifiers,
    pub allocation: AllocationModifiers,
    /// Position in source order, assigned by the owning container.
    pub original_index: usize,
    /// Opaque leading documentation/comment payload. Travels with the node
    /// as an indivisible unit during any reorder.
    pub metadata: Option<String>,
}

impl DeclarationNode {
    pub fn new(id: NodeId, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            access: AccessModifiers::NONE,
            allocation: AllocationModifiers::INSTANCE,
            original_index: 0,
            metadata: None,
        }
    }

    pub fn with_access(mut self, access: AccessModifiers) -> Self {
        self.access = access;
        self
    }

    pub fn with_allocation(mut self, allocation: AllocationModifiers) -> Self {
        self.allocation = allocation;
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}
