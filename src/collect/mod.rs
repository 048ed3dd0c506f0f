//! Collect declared test functions from a Rust program.

mod function;

pub use function::{TestFnCollector, collect_test_functions, is_test_function};
