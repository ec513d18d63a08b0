//! Declaration tree data model for declsort
//!
//! This crate defines the node and container types the ordering engine
//! operates on. A host front-end (a parser, a language server, anything that
//! can enumerate declarations) builds [`Container`]s of [`DeclarationNode`]s
//! and hands them to `declsort-engine`; the engine never mutates a node, it
//! only reorders references.
//!
//! The model is deliberately syntax-agnostic: a node carries its kind, name,
//! modifiers, and an opaque metadata payload (leading comments and docs) that
//! travels with it through any reorder.

pub mod container;
pub mod error;
pub mod node;

pub use container::{Container, ContainerKind, Segment};
pub use error::{Error, Result};
pub use node::{
    AccessModifiers, AllocationModifiers, ConversionKind, DeclarationNode, NodeId, NodeKind,
    OperatorFamily, TypeKind,
};
