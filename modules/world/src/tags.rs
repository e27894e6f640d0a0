use arbor::utils::hash::FastHashMap;
use inlinable_string::InlinableString;

use crate::Entity;

/// Names of entities. Short names are stored inline without allocation.
#[derive(Default)]
pub struct Tags {
    names: FastHashMap<Entity, InlinableString>,
}

impl Tags {
    pub fn new() -> Self {
        Tags {
            names: FastHashMap::default(),
        }
    }

    #[inline]
    pub fn add<T: Into<InlinableString>>(&mut self, ent: Entity, name: T) {
        self.names.insert(ent, name.into());
    }

    #[inline]
    pub fn remove(&mut self, ent: Entity) {
        self.names.remove(&ent);
    }

    #[inline]
    pub fn name(&self, ent: Entity) -> Option<&str> {
        self.names.get(&ent).map(|v| v.as_ref())
    }
}
