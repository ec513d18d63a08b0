//! Containers and sibling groups
//!
//! A [`Container`] is the immediate parent scope of a list of sibling
//! declarations: a compilation root, a namespace, or a type body. The engine
//! processes one container's direct children at a time; containers nest on
//! the host side but the model keeps them flat.
//!
//! A container's children may be partitioned into segments by **barriers**
//! (opaque boundaries such as preprocessor regions). Reordering is confined
//! to one segment; relative order across segments never changes.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Error, Result};
use crate::node::DeclarationNode;

/// What kind of scope a container represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    /// The compilation root (global scope of one file).
    Root,
    /// A namespace body.
    Namespace,
    /// A type body. Interface bodies change the default member
    /// accessibility, so the flag is part of the kind.
    TypeBody { interface: bool },
}

/// One barrier-bounded run of sibling declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Index range into the container's node list.
    pub range: Range<usize>,
}

/// A parent scope holding an ordered list of sibling declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub kind: ContainerKind,
    /// Display name for diagnostics (file name, namespace path, type name).
    pub name: String,
    nodes: Vec<DeclarationNode>,
    /// Sorted positions at which a barrier sits: a barrier at position `i`
    /// separates `nodes[i - 1]` from `nodes[i]`.
    barriers: Vec<usize>,
}

impl Container {
    pub fn new(kind: ContainerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            nodes: Vec::new(),
            barriers: Vec::new(),
        }
    }

    /// Append a declaration, assigning its `original_index`.
    pub fn push(&mut self, mut node: DeclarationNode) {
        node.original_index = self.nodes.len();
        self.nodes.push(node);
    }

    /// Record a barrier between the last pushed declaration and the next
    /// one. Barriers at the very start or end of the list are legal and
    /// simply produce an empty segment that is dropped by [`segments`].
    ///
    /// [`segments`]: Container::segments
    pub fn push_barrier(&mut self) {
        let position = self.nodes.len();
        if self.barriers.last() != Some(&position) {
            self.barriers.push(position);
        }
    }

    /// Build a container from parts, validating barrier positions.
    pub fn with_barriers(
        kind: ContainerKind,
        name: impl Into<String>,
        nodes: Vec<DeclarationNode>,
        barriers: Vec<usize>,
    ) -> Result<Self> {
        let mut previous: Option<usize> = None;
        for &position in &barriers {
            if position > nodes.len() {
                return Err(Error::BarrierOutOfBounds {
                    position,
                    len: nodes.len(),
                });
            }
            if let Some(previous) = previous
                && position <= previous
            {
                return Err(Error::BarrierNotIncreasing { position, previous });
            }
            previous = Some(position);
        }

        let mut container = Self {
            kind,
            name: name.into(),
            nodes: Vec::new(),
            barriers,
        };
        for node in nodes {
            container.push(node);
        }
        Ok(container)
    }

    pub fn nodes(&self) -> &[DeclarationNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn barriers(&self) -> &[usize] {
        &self.barriers
    }

    /// The barrier-bounded segments of this container, in source order.
    /// Empty segments (adjacent barriers, or barriers at either end) are
    /// omitted.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.barriers.len() + 1);
        let mut start = 0;
        for &position in &self.barriers {
            if position > start {
                segments.push(Segment {
                    range: start..position,
                });
            }
            start = position;
        }
        if self.nodes.len() > start {
            segments.push(Segment {
                range: start..self.nodes.len(),
            });
        }
        segments
    }
}
