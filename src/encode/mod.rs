//! Image encoding for finished cards.

pub(crate) mod png;
