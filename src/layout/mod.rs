//! Card geometry: named layout constants, text measurement and word wrap.

pub(crate) mod card;
pub(crate) mod wrap;
