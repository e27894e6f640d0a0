//! Commonly used utilities like handles, pools and hashers.

#[macro_use]
pub mod handle;
pub mod handle_pool;
pub mod hash;

pub mod prelude {
    pub use super::handle::{Handle, HandleIndex, HandleLike};
    pub use super::handle_pool::HandlePool;
    pub use super::hash::{FastHashMap, FastHashSet};
}
