//! # What is This?
//!
//! Core building blocks shared by the arbor modules: generational handles, the
//! pool that hands them out, and a few hashing helpers.
//!
//! The scene hierarchy itself lives in the `arbor-world` module, which names its
//! entities with the handles defined here.

#[macro_use]
extern crate log;

pub mod errors;
#[macro_use]
pub mod utils;

pub mod prelude {
    pub use crate::errors::Result;
    pub use crate::utils::prelude::*;
}
