//! Collect test and benchmark functions from a Rust program.

use syn::{
    File, Item, ItemFn,
    visit::{self, Visit},
};

use crate::defs::{DeclaredFunctions, PREFIX_BENCHMARK, PREFIX_TEST};

/// Whether `name` follows the test/benchmark naming convention.
pub fn is_test_function(name: &str) -> bool {
    name.starts_with(PREFIX_TEST) || name.starts_with(PREFIX_BENCHMARK)
}

/// Visitor that collects free functions named `Test*` or `Benchmark*`.
///
/// Only items of the file and of inline modules are visited. Function bodies,
/// impl blocks and traits are not entered.
pub struct TestFnCollector {
    /// Collected functions.
    functions: DeclaredFunctions,
}

impl TestFnCollector {
    /// Create a new test function collector.
    pub fn new() -> Self {
        Self {
            functions: DeclaredFunctions::new(),
        }
    }

    /// Collect test functions from the syntax tree.
    pub fn collect(mut self, syntax: &File) -> DeclaredFunctions {
        self.visit_file(syntax);
        self.functions
    }
}

impl<'ast> Visit<'ast> for TestFnCollector {
    fn visit_item(&mut self, i: &'ast Item) {
        match i {
            Item::Fn(item_fn) => self.visit_item_fn(item_fn),
            Item::Mod(item_mod) => visit::visit_item_mod(self, item_mod),
            _ => {}
        }
    }

    fn visit_item_fn(&mut self, i: &'ast ItemFn) {
        let name = i.sig.ident.to_string();
        if is_test_function(&name) {
            let line = i.sig.ident.span().start().line;
            self.functions.insert(name, Some(line));
        }
    }
}

/// Parse Rust source text and collect its test functions.
pub fn collect_test_functions(src: &str) -> syn::Result<DeclaredFunctions> {
    let syntax = syn::parse_file(src)?;
    Ok(TestFnCollector::new().collect(&syntax))
}
