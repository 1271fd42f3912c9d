//! MAM-XML format tests

mod import;
