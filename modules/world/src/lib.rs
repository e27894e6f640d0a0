//! # What is This?
//!
//! A parent/child hierarchy for scene entities. Any entity could be attached beneath
//! another, so structural relationships (used elsewhere to propagate transforms or
//! cascade destruction) can be queried and walked efficiently.
//!
//! All the link state lives in a `SceneGraph` arena, indexed by generational `Entity`
//! handles. Nodes never own each other, they only hold handles of their neighbours.
//!
//! ```rust
//! use arbor_world::prelude::*;
//!
//! let mut scene = Scene::new();
//! let root = scene.create("root");
//! let child = scene.create("child");
//! scene.graph_mut().attach(root, Some(child)).unwrap();
//!
//! let mut visited = Vec::new();
//! scene
//!     .graph()
//!     .traverse(root, |ent, visited: &mut Vec<Entity>| { visited.push(ent); false }, &mut visited, 0);
//! assert_eq!(visited, [root, child]);
//! ```

#[macro_use]
extern crate arbor;
#[macro_use]
extern crate log;

pub mod errors;
pub mod scene;
pub mod settings;
pub mod spatial;
pub mod tags;

pub mod prelude {
    pub use super::errors::Error;
    pub use super::scene::Scene;
    pub use super::settings::{DepthPolicy, Settings};
    pub use super::spatial::prelude::*;
    pub use super::Entity;
}

impl_handle!(Entity);
