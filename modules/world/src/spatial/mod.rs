pub mod graph;
pub mod node;
pub mod traverse;

pub mod prelude {
    pub use super::graph::SceneGraph;
    pub use super::node::{Capabilities, Node};
    pub use super::traverse::Depth;
}
