//! Format-agnostic processing: tree reduction, fragment merging, run splitting.

pub mod reduce;
pub mod shrink;
pub mod split;
