//! Unicode-names format tests

mod export;
