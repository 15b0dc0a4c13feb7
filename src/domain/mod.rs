//! Draft listing state and the picture attached to it.

pub mod draft;
pub mod image;
