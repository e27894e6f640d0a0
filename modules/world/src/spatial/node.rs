use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::Entity;

/// The capabilities a node exposes to the hierarchy. They are independent, e.g. a
/// collision polygon attached for bookkeeping neither holds children nor could be
/// destroyed along with its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Could hold children and is recursed into by traversals.
    pub traversable: bool,
    /// Is destroyed by a cascading `remove` of its parent.
    pub destroyable: bool,
}

impl Capabilities {
    /// A regular scene entity.
    pub const ENTITY: Capabilities = Capabilities {
        traversable: true,
        destroyable: true,
    };

    /// An entity that survives the destruction of its parent, it just gets orphaned.
    pub const PERSISTENT: Capabilities = Capabilities {
        traversable: true,
        destroyable: false,
    };

    /// A bare attachment, like a geometric shape.
    pub const SHAPE: Capabilities = Capabilities {
        traversable: false,
        destroyable: false,
    };
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::ENTITY
    }
}

/// `Node` is the link state of one entity in the `SceneGraph`.
///
/// `Entity` are used to record the tree relationships. Every access requires going
/// through the arena, which can be cumbersome and comes with some runtime overhead.
/// But it keeps the ownership explicit: the arena owns all the storage, and nodes
/// only hold non-owning handles to each other.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<Entity>,
    pub(crate) children: SmallVec<[Entity; 4]>,
    pub(crate) capabilities: Capabilities,
}

impl Node {
    pub(crate) fn new(capabilities: Capabilities, capacity: usize) -> Self {
        let children = if capabilities.traversable {
            SmallVec::with_capacity(capacity)
        } else {
            SmallVec::new()
        };

        Node {
            parent: None,
            children,
            capabilities,
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<Entity> {
        self.parent
    }

    /// Children in insertion order, which is also the traversal order.
    #[inline]
    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}
