//! Flatten a profile tree into the ordered list of expected functions.
//!
//! The order is a pre-order walk: a node's own cases come first, then its
//! categories from left to right, each handled the same way. This is the
//! order the functions must be declared in the test file.

use crate::defs::{Case, Category, ExpectedFunction, Profile};
use crate::error::CheckError;

/// Iterator over the cases of a profile in declaration order.
///
/// Keeps the case list being consumed plus a stack of categories not yet
/// entered. A popped category schedules its own sub-categories on top of the
/// stack, so they are visited before its later siblings.
pub struct CaseIter<'a> {
    /// Case list being consumed.
    cases: &'a [Case],
    /// Index of the next case in `cases`.
    index: usize,
    /// Pending categories, next one on top.
    stack: Vec<&'a Category>,
}

impl<'a> CaseIter<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            cases: &profile.cases,
            index: 0,
            stack: profile.categories.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for CaseIter<'a> {
    type Item = &'a Case;

    fn next(&mut self) -> Option<&'a Case> {
        if self.index >= self.cases.len() {
            while let Some(category) = self.stack.pop() {
                self.stack.extend(category.categories.iter().rev());
                if !category.cases.is_empty() {
                    self.cases = &category.cases;
                    self.index = 0;
                    break;
                }
            }
        }
        let case = self.cases.get(self.index)?;
        self.index += 1;
        Some(case)
    }
}

/// Lazily derive the expected functions of a profile.
///
/// Yields an error for the first case with an invalid kind and stops there.
pub struct Flattener<'a> {
    cases: CaseIter<'a>,
    failed: bool,
}

impl<'a> Iterator for Flattener<'a> {
    type Item = Result<ExpectedFunction, CheckError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = ExpectedFunction::from_case(self.cases.next()?);
        self.failed = res.is_err();
        Some(res)
    }
}

pub fn flatten(profile: &Profile) -> Flattener<'_> {
    Flattener {
        cases: CaseIter::new(profile),
        failed: false,
    }
}

/// All expected functions of a profile, or the first invalid kind.
pub fn expected_functions(profile: &Profile) -> Result<Vec<ExpectedFunction>, CheckError> {
    flatten(profile).collect()
}
