//! Scenes own the entities, and tie their lifetimes to the hierarchy.

use arbor::utils::prelude::HandlePool;

use crate::errors::{Error, Result};
use crate::settings::Settings;
use crate::spatial::prelude::{Capabilities, SceneGraph};
use crate::tags::Tags;
use crate::Entity;

/// A `Scene` allocates entities, names them, and keeps their link state in a
/// `SceneGraph`. Destroying an entity through the scene cascades to its destroyable
/// descendants, and frees every one of them.
#[derive(Default)]
pub struct Scene {
    entities: HandlePool<Entity>,
    tags: Tags,
    nodes: SceneGraph,
}

impl Scene {
    pub fn new() -> Self {
        Scene::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Scene {
            entities: HandlePool::with_capacity(settings.capacity),
            tags: Tags::new(),
            nodes: SceneGraph::with_settings(settings),
        }
    }

    /// Gets the number of alive entities in this Scene.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Checks if specified `Entity` was created by this scene, and has not been
    /// deleted yet.
    #[inline]
    pub fn contains(&self, ent: Entity) -> bool {
        self.entities.contains(ent)
    }

    #[inline]
    pub fn graph(&self) -> &SceneGraph {
        &self.nodes
    }

    #[inline]
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.nodes
    }

    /// Creates a new Entity which could be both traversed and destroyed.
    #[inline]
    pub fn create<T: AsRef<str>>(&mut self, name: T) -> Entity {
        self.create_with(name, Capabilities::ENTITY)
    }

    /// Creates a new Entity with specified capabilities.
    pub fn create_with<T: AsRef<str>>(&mut self, name: T, capabilities: Capabilities) -> Entity {
        let e = self.entities.create();
        if let Err(err) = self.nodes.add(e, capabilities) {
            // Someone added the handle to the graph before it was handed out.
            warn!("[Scene] keeps the existing node of {}: {}", e, err);
        }

        self.tags.add(e, name.as_ref());
        e
    }

    /// Brings a stripped Entity back into the hierarchy as a root, with specified
    /// capabilities.
    pub fn rejoin(&mut self, ent: Entity, capabilities: Capabilities) -> Result<()> {
        if !self.entities.contains(ent) {
            return Err(Error::NodeNotFound(ent));
        }

        self.nodes.add(ent, capabilities)
    }

    /// Gets the name of this Entity.
    #[inline]
    pub fn name(&self, ent: Entity) -> Option<&str> {
        self.tags.name(ent)
    }

    /// Sets the name of this Entity.
    #[inline]
    pub fn set_name<T: AsRef<str>>(&mut self, ent: Entity, name: T) {
        if self.entities.contains(ent) {
            self.tags.add(ent, name.as_ref());
        }
    }

    /// Destroys a destroyable Entity, and cascades to all its destroyable descendants.
    /// Returns every freed entity, `ent` first.
    ///
    /// An entity that has already left the hierarchy is treated as destroyable.
    pub fn destroy(&mut self, ent: Entity) -> Result<Vec<Entity>> {
        if !self.entities.contains(ent) {
            return Err(Error::NodeNotFound(ent));
        }

        if let Some(capabilities) = self.nodes.capabilities(ent) {
            if !capabilities.destroyable {
                return Err(Error::NotDestroyable(ent));
            }
        }

        Ok(self.free(ent))
    }

    /// Deletes an Entity regardless of its capabilities, the destroyable descendants
    /// go with it.
    pub fn delete(&mut self, ent: Entity) -> Option<Vec<Entity>> {
        if self.entities.contains(ent) {
            Some(self.free(ent))
        } else {
            None
        }
    }

    /// Strips the hierarchy from an Entity, which stays alive. Its children are
    /// orphaned. Returns false if it was not part of the hierarchy. `rejoin` brings
    /// it back.
    pub fn strip(&mut self, ent: Entity) -> bool {
        self.nodes.remove(ent, false).is_some()
    }

    fn free(&mut self, ent: Entity) -> Vec<Entity> {
        let mut deletions = vec![ent];
        if let Some(cascaded) = self.nodes.remove(ent, true) {
            deletions.extend(cascaded);
        }

        for &v in &deletions {
            self.entities.free(v);
            self.tags.remove(v);
        }

        debug!(
            "[Scene] frees {} along with {} descendants.",
            ent,
            deletions.len() - 1
        );

        deletions
    }

    /// Finds an Entity by name and returns it.
    ///
    /// If no Entity with that name can be found, None is returned. If name contains a '/'
    /// character, it traverses the hierarchy like a path name, starting at the roots.
    pub fn find<N: AsRef<str>>(&self, name: N) -> Option<Entity> {
        let mut components = name.as_ref().split('/').filter(|v| !v.is_empty());
        let first = components.next()?;

        self.nodes
            .roots()
            .filter(|&v| self.tags.name(v) == Some(first))
            .find_map(|v| self.walk(v, components.clone()))
    }

    /// Finds an Entity from specified searching root and returns it.
    ///
    /// The path is relative to `root`, an empty path yields `root` itself.
    pub fn find_from<N: AsRef<str>>(&self, root: Entity, name: N) -> Option<Entity> {
        if !self.nodes.contains(root) {
            return None;
        }

        self.walk(root, name.as_ref().split('/').filter(|v| !v.is_empty()))
    }

    fn walk<'a, I>(&self, root: Entity, components: I) -> Option<Entity>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut cursor = root;
        for component in components {
            cursor = self
                .nodes
                .children(cursor)
                .find(|&child| self.tags.name(child) == Some(component))?;
        }

        Some(cursor)
    }
}
