//! Inputs the renderer needs in memory: decoded thumbnails, resolved thumbnail bytes, fonts.

pub(crate) mod decode;
pub(crate) mod fonts;
pub(crate) mod thumbnail;
