//! Share export and share accounting.

pub(crate) mod export;
