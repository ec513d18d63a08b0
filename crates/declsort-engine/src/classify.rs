//! Classification of declaration nodes into ordering keys
//!
//! Pure functions from a node (plus, for accessibility, the enclosing
//! scope) to the classification key of each ordering category. Asking a
//! category that does not apply to the node's kind yields `None` rather than
//! an error; handing a node to the wrong *scope* altogether is a contract
//! violation caught by [`validate_container`] before any comparer runs.

use declsort_config::{
    AccessibilityKey, AllocationKey, MemberKey, OperatorFamilyKey, TypeKey,
};
use declsort_model::{Container, ContainerKind, DeclarationNode, NodeKind, OperatorFamily, TypeKind};

use crate::error::{Error, Result};

/// The declaration set a scan operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Types directly in a compilation root or namespace.
    File,
    /// Members of a type body.
    Member { interface: bool },
}

impl Scope {
    pub fn of(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Root | ContainerKind::Namespace => Scope::File,
            ContainerKind::TypeBody { interface } => Scope::Member { interface },
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Scope::File => "file",
            Scope::Member { .. } => "member",
        }
    }
}

/// Check that every node in the container belongs to the container's scope.
///
/// The declaration-tree provider should filter nodes before handing them
/// over; a mismatch here signals a caller bug and fails the invocation.
pub(crate) fn validate_container(container: &Container) -> Result<Scope> {
    let scope = Scope::of(container.kind);
    for node in container.nodes() {
        let fits = match scope {
            Scope::File => matches!(node.kind, NodeKind::Type(_)),
            Scope::Member { .. } => node.kind.is_member(),
        };
        if !fits {
            return Err(Error::ForeignNode {
                container: container.name.clone(),
                name: node.name.clone(),
                kind: node.kind.label(),
                scope: scope.label(),
            });
        }
    }
    Ok(scope)
}

/// Member-kind key of a node, `None` for file-scope types.
pub fn member_key(node: &DeclarationNode) -> Option<MemberKey> {
    match &node.kind {
        NodeKind::Field => Some(MemberKey::Field),
        NodeKind::Constructor => Some(MemberKey::Constructor),
        NodeKind::Event => Some(MemberKey::Event),
        NodeKind::Property => Some(MemberKey::Property),
        NodeKind::Operator { .. } => Some(MemberKey::Operator),
        NodeKind::Method => Some(MemberKey::Method),
        NodeKind::NestedType(_) => Some(MemberKey::Type),
        NodeKind::Type(_) => None,
    }
}

/// Type-kind key of a node, `None` for non-type members.
pub fn type_key(node: &DeclarationNode) -> Option<TypeKey> {
    let kind = match &node.kind {
        NodeKind::Type(kind) | NodeKind::NestedType(kind) => kind,
        _ => return None,
    };
    Some(match kind {
        TypeKind::Class => TypeKey::Class,
        TypeKind::Struct => TypeKey::Struct,
        TypeKind::Interface => TypeKey::Interface,
        TypeKind::Enum => TypeKey::Enum,
        TypeKind::Record => TypeKey::Record,
        TypeKind::RecordStruct => TypeKey::RecordStruct,
        TypeKind::Delegate => TypeKey::Delegate,
    })
}

/// Operator-family key of a node, `None` for non-operators.
pub fn operator_family_key(node: &DeclarationNode) -> Option<OperatorFamilyKey> {
    match &node.kind {
        NodeKind::Operator { family, .. } => Some(match family {
            OperatorFamily::Unary => OperatorFamilyKey::Unary,
            OperatorFamily::Binary => OperatorFamilyKey::Binary,
            OperatorFamily::Conversion(_) => OperatorFamilyKey::Conversion,
        }),
        _ => None,
    }
}

/// Effective accessibility of a node in the given scope.
///
/// Explicit modifiers win. Combined modifiers map per the language meaning:
/// `protected internal` is `ProtectedOrInternal`, `private protected` is
/// `ProtectedAndInternal`. Without modifiers the default is: public inside
/// an interface body, private for any other member (nested types included),
/// and internal for file-scope types.
pub fn accessibility_key(node: &DeclarationNode, scope: Scope) -> AccessibilityKey {
    let access = node.access;
    if access.public {
        return AccessibilityKey::Public;
    }
    if access.protected && access.internal {
        return AccessibilityKey::ProtectedOrInternal;
    }
    if access.protected && access.private {
        return AccessibilityKey::ProtectedAndInternal;
    }
    if access.internal {
        return AccessibilityKey::Internal;
    }
    if access.protected {
        return AccessibilityKey::Protected;
    }
    if access.private {
        return AccessibilityKey::Private;
    }

    match scope {
        Scope::Member { interface: true } => AccessibilityKey::Public,
        Scope::Member { interface: false } => AccessibilityKey::Private,
        Scope::File => AccessibilityKey::Internal,
    }
}

/// Allocation class of a node. `const` wins over `static`; absence of both
/// means instance.
pub fn allocation_key(node: &DeclarationNode) -> AllocationKey {
    if node.allocation.is_const {
        AllocationKey::Const
    } else if node.allocation.is_static {
        AllocationKey::Static
    } else {
        AllocationKey::Instance
    }
}
