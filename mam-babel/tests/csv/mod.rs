//! CSV format tests

mod export;
