//! Depth-bounded walks over the `SceneGraph`, with early-abort callbacks.
//!
//! Every walk takes a callback of shape `FnMut(Entity, &mut A) -> bool`, invoked with
//! the visited entity and the argument handed to the walk. Returning `true` vetoes any
//! further exploration from that node: its subtree when walking down, the rest of the
//! chain when walking up.

use super::graph::SceneGraph;
use crate::settings::DepthPolicy;
use crate::Entity;

/// The remaining depth budget of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Unbounded,
    /// At most that many levels away from the node the walk starts at. `Levels(0)`
    /// visits the starting node only.
    Levels(u32),
}

impl Depth {
    #[inline]
    pub fn is_exhausted(self) -> bool {
        self == Depth::Levels(0)
    }

    /// The budget handed to the next level.
    #[inline]
    pub fn step(self, policy: DepthPolicy) -> Depth {
        match self {
            Depth::Unbounded => Depth::Unbounded,
            Depth::Levels(n) if n > 1 => Depth::Levels(n - 1),
            Depth::Levels(_) => match policy {
                DepthPolicy::Strict => Depth::Levels(0),
                DepthPolicy::Restart => Depth::Unbounded,
            },
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Unbounded
    }
}

/// Zero means unbounded. A negative budget walks the same way as its magnitude.
impl From<i32> for Depth {
    fn from(depth: i32) -> Self {
        match depth {
            0 => Depth::Unbounded,
            n => Depth::Levels(n.unsigned_abs()),
        }
    }
}

/// Zero means unbounded.
impl From<u32> for Depth {
    fn from(depth: u32) -> Self {
        match depth {
            0 => Depth::Unbounded,
            n => Depth::Levels(n),
        }
    }
}

impl From<Option<u32>> for Depth {
    fn from(depth: Option<u32>) -> Self {
        depth.map(Depth::Levels).unwrap_or(Depth::Unbounded)
    }
}

impl SceneGraph {
    /// Invokes `callback` on `ent`, then walks down its subtree in insertion order
    /// unless the callback returned true.
    ///
    /// Does nothing if `ent` has no node.
    pub fn traverse<A, F, D>(&self, ent: Entity, mut callback: F, arg: &mut A, depth: D)
    where
        F: FnMut(Entity, &mut A) -> bool,
        D: Into<Depth>,
    {
        if self.contains(ent) {
            self.visit(ent, &mut callback, arg, depth.into());
        }
    }

    /// Walks down the subtree of `ent` without visiting `ent` itself. A child whose
    /// callback returned true is not recursed into, but its siblings still are.
    /// Children that are not traversable are visited, but never recursed into.
    pub fn traverse_down<A, F, D>(&self, ent: Entity, mut callback: F, arg: &mut A, depth: D)
    where
        F: FnMut(Entity, &mut A) -> bool,
        D: Into<Depth>,
    {
        self.descend(ent, &mut callback, arg, depth.into());
    }

    /// Walks up the ancestors of `ent`, nearest first, until the callback returns
    /// true or the budget runs out.
    pub fn traverse_up<A, F, D>(&self, ent: Entity, mut callback: F, arg: &mut A, depth: D)
    where
        F: FnMut(Entity, &mut A) -> bool,
        D: Into<Depth>,
    {
        let mut depth = depth.into();
        let mut cursor = ent;

        while !depth.is_exhausted() {
            let parent = match self.parent(cursor) {
                Some(parent) => parent,
                None => return,
            };

            if callback(parent, arg) {
                return;
            }

            if self.settings.revisit_on_recurse && callback(parent, arg) {
                return;
            }

            cursor = parent;
            depth = depth.step(self.settings.depth_policy);
        }
    }

    fn visit<A, F>(&self, ent: Entity, callback: &mut F, arg: &mut A, depth: Depth)
    where
        F: FnMut(Entity, &mut A) -> bool,
    {
        if !callback(ent, arg) {
            self.descend(ent, callback, arg, depth);
        }
    }

    fn descend<A, F>(&self, ent: Entity, callback: &mut F, arg: &mut A, depth: Depth)
    where
        F: FnMut(Entity, &mut A) -> bool,
    {
        if depth.is_exhausted() {
            return;
        }

        let node = match self.node(ent) {
            Some(node) => node,
            None => return,
        };

        let next = depth.step(self.settings.depth_policy);
        for &child in node.children() {
            if callback(child, arg) || !self.is_traversable(child) {
                continue;
            }

            if self.settings.revisit_on_recurse {
                self.visit(child, callback, arg, next);
            } else {
                self.descend(child, callback, arg, next);
            }
        }
    }
}
