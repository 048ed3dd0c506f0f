//! Keep unit test profiles and test files in sync.
//!
//! A profile is a YAML tree of test cases and categories describing the test
//! functions of one source file. Validation flattens the tree into the list
//! of expected `Test*`/`Benchmark*` function names and checks that the test
//! file declares exactly those, in the same order.

pub mod check;
pub mod collect;
pub mod config;
pub mod defs;
pub mod error;
pub mod flatten;
pub mod log;
pub mod matcher;

pub use check::ProfileChecker;
pub use error::{CheckError, Error, Result};
pub use matcher::validate;
