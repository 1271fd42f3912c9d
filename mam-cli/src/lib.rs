//! Library half of the `mam` binary: the inspect transforms, shared with tests.

pub mod transforms;
