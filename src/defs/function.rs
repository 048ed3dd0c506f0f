use indexmap::IndexMap;
use std::fmt::Debug;

use super::profile::{Case, CaseKind};
use crate::error::CheckError;

/// A function the test file is expected to declare, derived from a case.
#[derive(Clone, PartialEq, Eq)]
pub struct ExpectedFunction {
    /// Prefixed name, e.g. `TestAdd` or `BenchmarkMul`.
    pub name: String,
    pub kind: CaseKind,
    pub description: String,
}

impl ExpectedFunction {
    /// Derive the expected function of a case.
    pub fn from_case(case: &Case) -> Result<Self, CheckError> {
        let kind: CaseKind = case.kind.parse()?;
        Ok(Self {
            name: format!("{}{}", kind.prefix(), case.name),
            kind,
            description: case.description.clone(),
        })
    }
}

impl Debug for ExpectedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Functions declared in a test file, unique and in first-declaration order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeclaredFunctions {
    /// Name -> line of the first declaration, if known.
    functions: IndexMap<String, Option<usize>>,
}

impl DeclaredFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration. Returns `false` if the name was already declared,
    /// in which case its original position is kept.
    pub fn insert(&mut self, name: impl Into<String>, line: Option<usize>) -> bool {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return false;
        }
        self.functions.insert(name, line);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Line of the first declaration of `name`.
    pub fn line_of(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied().flatten()
    }
}

impl<S: Into<String>> FromIterator<S> for DeclaredFunctions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut res = Self::new();
        for name in iter {
            res.insert(name, None);
        }
        res
    }
}

impl Debug for DeclaredFunctions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
