//! Profile and function definitions.

mod function;
mod profile;

pub use function::{DeclaredFunctions, ExpectedFunction};
pub use profile::{Case, CaseKind, Category, PREFIX_BENCHMARK, PREFIX_TEST, Profile};
