//! Export of in-memory figures.

mod layer;
pub(crate) mod svg;
