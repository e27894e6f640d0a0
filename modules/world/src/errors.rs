use failure::Fail;

use crate::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
pub enum Error {
    #[fail(display = "{} does not have a node in scene graph.", _0)]
    NodeNotFound(Entity),
    #[fail(display = "{} already has a node in scene graph.", _0)]
    NodeExists(Entity),
    #[fail(display = "{} can not hold children.", _0)]
    NotTraversable(Entity),
    #[fail(display = "{} can not be destroyed.", _0)]
    NotDestroyable(Entity),
}

pub type Result<T> = ::std::result::Result<T, Error>;
