//! Intermediate representation shared by the reducer and the formats.
//!
//! Three layers:
//!     - [`source`]: the attributed element tree read from MAM-XML
//!     - [`fragment`]: the output fragments a verse tree reduces to
//!     - [`verse`]: reduced verses keyed by book/chapter/verse, grouped by book

pub mod fragment;
pub mod source;
pub mod verse;
