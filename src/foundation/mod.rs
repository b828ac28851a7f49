//! Shared primitives: error type, canvas/color types, fixed-point helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
