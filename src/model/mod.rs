//! Typed boundary model: playlist records and link parsing.

pub(crate) mod link;
pub(crate) mod playlist;
