//! Format-specific writers shared by the scene output.

pub(crate) mod svg;
