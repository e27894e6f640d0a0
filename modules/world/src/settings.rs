//! Functions for loading hierarchy settings.

use serde::{Deserialize, Serialize};

/// What a depth budget turns into once it has been used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthPolicy {
    /// An exhausted budget stops the walk. `Levels(n)` visits at most `n` levels
    /// away from the starting node.
    Strict,
    /// An exhausted budget is read as unbounded again, so a bounded walk only limits
    /// the first `n` levels. Kept for callers that were written against this behaviour.
    Restart,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        DepthPolicy::Strict
    }
}

/// A structure containing configuration data for the `SceneGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How traversals treat a depth budget that reached zero.
    pub depth_policy: DepthPolicy,
    /// Invokes the callback a second time on every node the traversal recurses into
    /// (or climbs to). The second result is honoured as a veto too.
    pub revisit_on_recurse: bool,
    /// Reserved children slots of every new traversable node. Small fan-outs are
    /// stored inline anyway.
    pub children_capacity: usize,
    /// Reserved entity slots of the scene and its graph.
    pub capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            depth_policy: DepthPolicy::Strict,
            revisit_on_recurse: false,
            children_capacity: 0,
            capacity: 0,
        }
    }
}

impl Settings {
    /// Settings that reproduce the legacy traversal quirks: budgets restart after
    /// running out, and recursion re-visits the node it enters.
    pub fn legacy() -> Self {
        Settings {
            depth_policy: DepthPolicy::Restart,
            revisit_on_recurse: true,
            ..Settings::default()
        }
    }

    /// Parses settings from a JSON document. Missing fields fall back to defaults.
    pub fn from_json<T: AsRef<str>>(json: T) -> arbor::errors::Result<Self> {
        let settings = serde_json::from_str(json.as_ref())?;
        Ok(settings)
    }
}
