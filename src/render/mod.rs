//! CPU compositing of share cards.

pub(crate) mod card;
pub(crate) mod composite;
pub(crate) mod surface;
pub(crate) mod text;
