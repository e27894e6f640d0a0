use std::{iter, mem, slice};

use arbor::utils::hash::{FastHashMap, FastHashSet};
use smallvec::SmallVec;

use super::node::{Capabilities, Node};
use crate::errors::{Error, Result};
use crate::settings::Settings;
use crate::Entity;

/// A scene graph keeps the tree relationships between entities. Every participating
/// entity owns a `Node` in this arena, which records an optional parent and an ordered
/// list of children.
///
/// The links are biconditional: `c` appears in the children of `p` if and only if the
/// parent of `c` is `p`. Every mutation fixes up both sides before returning.
///
/// Attaching an entity beneath one of its own descendants is NOT checked, and leaves
/// the graph cyclic. Use `is_ancestor` before attaching if that could happen.
pub struct SceneGraph {
    remap: FastHashMap<Entity, usize>,
    entities: Vec<Entity>,
    nodes: Vec<Node>,
    roots: FastHashSet<Entity>,
    pub(crate) settings: Settings,
}

impl Default for SceneGraph {
    fn default() -> Self {
        SceneGraph::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        SceneGraph::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let capacity = settings.capacity;
        let mut remap = FastHashMap::default();
        remap.reserve(capacity);

        SceneGraph {
            remap,
            entities: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            roots: FastHashSet::default(),
            settings,
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Adds an empty node (no parent, no children) with specified capabilities.
    ///
    /// Fails with `Error::NodeExists` if `ent` already has a node, which is left
    /// untouched.
    pub fn add(&mut self, ent: Entity, capabilities: Capabilities) -> Result<()> {
        if self.remap.contains_key(&ent) {
            return Err(Error::NodeExists(ent));
        }

        self.remap.insert(ent, self.entities.len());
        self.entities.push(ent);
        self.nodes
            .push(Node::new(capabilities, self.settings.children_capacity));
        self.roots.insert(ent);
        Ok(())
    }

    /// Ends the hierarchy participation of `ent`, and drops its node.
    ///
    /// Children are always orphaned. If `destroyed` is true, the ones that are
    /// destroyable get torn down recursively as well. Returns the entities destroyed
    /// by the cascade (`ent` itself excluded), each followed by its own cascade; or
    /// `None` if `ent` does not have a node.
    pub fn remove(&mut self, ent: Entity, destroyed: bool) -> Option<Vec<Entity>> {
        let index = *self.remap.get(&ent)?;

        // Works on a snapshot, so the list we are iterating could never be spliced
        // by a child's own teardown.
        let children = mem::replace(&mut self.nodes[index].children, SmallVec::new());
        let mut destructions = Vec::new();
        let mut orphans = 0;

        for &child in children.iter().rev() {
            let ci = match self.remap.get(&child) {
                Some(&ci) => ci,
                None => continue,
            };

            // Clears the upward link before any cascading, the child must see itself
            // as a root during its own teardown.
            self.nodes[ci].parent = None;
            self.roots.insert(child);

            if destroyed && self.nodes[ci].capabilities.destroyable {
                destructions.push(child);
                if let Some(cascaded) = self.remove(child, true) {
                    destructions.extend(cascaded);
                }
            } else {
                orphans += 1;
            }
        }

        // Indices might have been shuffled by the cascade.
        if let Some(parent) = self.remap.get(&ent).and_then(|&v| self.nodes[v].parent) {
            self.detach(parent, ent);
        }

        self.drop_node(ent);

        debug!(
            "[SceneGraph] removes {} with {} children orphaned and {} entities destroyed.",
            ent,
            orphans,
            destructions.len()
        );

        Some(destructions)
    }

    fn drop_node(&mut self, ent: Entity) {
        if let Some(index) = self.remap.remove(&ent) {
            self.entities.swap_remove(index);
            self.nodes.swap_remove(index);

            if index != self.entities.len() {
                self.remap.insert(self.entities[index], index);
            }
        }

        self.roots.remove(&ent);
    }

    #[inline]
    fn index(&self, ent: Entity) -> Result<usize> {
        self.remap
            .get(&ent)
            .cloned()
            .ok_or_else(|| Error::NodeNotFound(ent))
    }

    /// Gets the link state of `ent`.
    #[inline]
    pub fn node(&self, ent: Entity) -> Option<&Node> {
        self.remap.get(&ent).map(|&v| &self.nodes[v])
    }
}

impl SceneGraph {
    /// Attaches one or more children to `parent`, appending them after existing
    /// children. A child that already has a parent is detached from it first.
    ///
    /// Nothing is mutated if any of the entities has no node, or if `parent` is
    /// not traversable.
    pub fn attach<I>(&mut self, parent: Entity, children: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Entity>,
    {
        let parent_index = self.index(parent)?;
        if !self.nodes[parent_index].capabilities.traversable {
            return Err(Error::NotTraversable(parent));
        }

        let children: SmallVec<[(Entity, usize); 4]> = children
            .into_iter()
            .map(|child| self.index(child).map(|ci| (child, ci)))
            .collect::<Result<_>>()?;

        for (child, ci) in children {
            if child == parent {
                warn!("[SceneGraph] attaches {} to itself.", child);
            }

            if let Some(prev) = self.nodes[ci].parent {
                self.detach(prev, child);
            }

            self.nodes[ci].parent = Some(parent);
            self.nodes[parent_index].children.push(child);
            self.roots.remove(&child);

            trace!("[SceneGraph] attaches {} to {}.", child, parent);
        }

        Ok(self)
    }

    /// Detaches `child` from `parent`. Every occurrence of `child` is removed from the
    /// children list. Does nothing if `child` is not attached to `parent`.
    pub fn detach(&mut self, parent: Entity, child: Entity) -> &mut Self {
        let found = match self.remap.get(&parent) {
            Some(&pi) => {
                let children = &mut self.nodes[pi].children;
                let len = children.len();
                children.retain(|v| *v != child);
                children.len() != len
            }
            None => false,
        };

        if found {
            if let Some(&ci) = self.remap.get(&child) {
                if self.nodes[ci].parent == Some(parent) {
                    self.nodes[ci].parent = None;
                    self.roots.insert(child);
                }
            }

            trace!("[SceneGraph] detaches {} from {}.", child, parent);
        }

        self
    }

    /// Detaches all the children of `parent`.
    pub fn detach_all(&mut self, parent: Entity) -> &mut Self {
        let children = match self.remap.get(&parent) {
            Some(&pi) => mem::replace(&mut self.nodes[pi].children, SmallVec::new()),
            None => return self,
        };

        for child in children {
            if let Some(&ci) = self.remap.get(&child) {
                if self.nodes[ci].parent == Some(parent) {
                    self.nodes[ci].parent = None;
                    self.roots.insert(child);
                }
            }

            trace!("[SceneGraph] detaches {} from {}.", child, parent);
        }

        self
    }
}

impl SceneGraph {
    /// Returns the number of nodes in this graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Checks if `ent` has a node in this graph.
    #[inline]
    pub fn contains(&self, ent: Entity) -> bool {
        self.remap.contains_key(&ent)
    }

    #[inline]
    pub fn capabilities(&self, ent: Entity) -> Option<Capabilities> {
        self.node(ent).map(|v| v.capabilities)
    }

    #[inline]
    pub fn is_traversable(&self, ent: Entity) -> bool {
        self.node(ent)
            .map(|v| v.capabilities.traversable)
            .unwrap_or(false)
    }

    #[inline]
    pub fn is_destroyable(&self, ent: Entity) -> bool {
        self.node(ent)
            .map(|v| v.capabilities.destroyable)
            .unwrap_or(false)
    }

    /// Gets the parent node.
    #[inline]
    pub fn parent(&self, ent: Entity) -> Option<Entity> {
        self.node(ent).and_then(|v| v.parent)
    }

    /// Returns ture if this is the leaf of a hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self, ent: Entity) -> bool {
        self.node(ent)
            .map(|v| v.children.is_empty())
            .unwrap_or(false)
    }

    /// Returns ture if this is the root of a hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self, ent: Entity) -> bool {
        self.node(ent).map(|v| v.parent.is_none()).unwrap_or(false)
    }

    /// Returns an iterator of all the nodes without parent.
    #[inline]
    pub fn roots<'a>(&'a self) -> impl Iterator<Item = Entity> + 'a {
        self.roots.iter().cloned()
    }

    /// Return true if `rhs` is one of the ancestors of `lhs`.
    #[inline]
    pub fn is_ancestor(&self, lhs: Entity, rhs: Entity) -> bool {
        self.ancestors(lhs).any(|v| v == rhs)
    }

    /// Returns an iterator of references to its ancestors, nearest first.
    #[inline]
    pub fn ancestors(&self, ent: Entity) -> Ancestors {
        Ancestors {
            cursor: self.parent(ent),
            scene: self,
        }
    }

    /// Returns an iterator of its children in insertion order.
    #[inline]
    pub fn children(&self, ent: Entity) -> Children {
        self.node(ent)
            .map(|v| v.children())
            .unwrap_or(&[])
            .iter()
            .cloned()
    }

    /// Returns an iterator of its descendants in tree order, which is also the order
    /// an unbounded traversal visits them.
    #[inline]
    pub fn descendants(&self, ent: Entity) -> Descendants {
        let mut stack = Vec::new();
        if let Some(node) = self.node(ent) {
            stack.push(node.children.iter());
        }

        Descendants { stack, scene: self }
    }
}

/// An iterator of its children.
pub type Children<'a> = iter::Cloned<slice::Iter<'a, Entity>>;

/// An iterator of its ancestors.
pub struct Ancestors<'a> {
    scene: &'a SceneGraph,
    cursor: Option<Entity>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let ent = self.cursor?;
        self.cursor = self.scene.parent(ent);
        Some(ent)
    }
}

/// An iterator of its descendants, in tree order.
pub struct Descendants<'a> {
    scene: &'a SceneGraph,
    stack: Vec<slice::Iter<'a, Entity>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let scene = self.scene;

        loop {
            let top = self.stack.last_mut()?;
            if let Some(&ent) = top.next() {
                // Deep first search when iterating children recursively.
                if let Some(node) = scene.node(ent) {
                    if !node.children.is_empty() {
                        self.stack.push(node.children.iter());
                    }
                }

                return Some(ent);
            }

            self.stack.pop();
        }
    }
}
