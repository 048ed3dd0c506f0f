//! Match the functions declared in a test file against a profile.

use crate::defs::{DeclaredFunctions, ExpectedFunction, Profile};
use crate::error::CheckError;
use crate::flatten::expected_functions;

/// Check that `declared` holds exactly the `expected` functions, in order.
///
/// Counts are compared first. Then, position by position, a missing expected
/// function is reported before an out-of-order one. Only the first mismatch
/// is returned.
pub fn check_cases(
    declared: &DeclaredFunctions,
    expected: &[ExpectedFunction],
) -> Result<(), CheckError> {
    if declared.len() != expected.len() {
        return Err(CheckError::CountMismatch {
            in_file: declared.len(),
            in_profile: expected.len(),
        });
    }

    for (index, (actual, expected)) in declared.names().zip(expected).enumerate() {
        let position = index + 1;
        if !declared.contains(&expected.name) {
            return Err(CheckError::MissingCase {
                name: expected.name.clone(),
                position,
            });
        }
        if actual != expected.name {
            return Err(CheckError::PositionMismatch {
                actual: actual.to_owned(),
                expected: expected.name.clone(),
                position,
                line: declared.line_of(actual),
            });
        }
    }

    Ok(())
}

/// Validate a profile against the functions declared in its test file.
pub fn validate(profile: &Profile, declared: &DeclaredFunctions) -> Result<(), CheckError> {
    let expected = expected_functions(profile)?;
    check_cases(declared, &expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{Case, Category};

    fn alpha_beta() -> Profile {
        Profile {
            cases: vec![Case::new("Alpha", ""), Case::new("Beta", "benchmark")],
            ..Default::default()
        }
    }

    fn declared(names: &[&str]) -> DeclaredFunctions {
        names.iter().copied().collect()
    }

    #[test]
    fn exact_match_passes() {
        assert_eq!(
            validate(&alpha_beta(), &declared(&["TestAlpha", "BenchmarkBeta"])),
            Ok(())
        );
    }

    #[test]
    fn matching_is_reflexive() {
        let profile = Profile {
            cases: vec![Case::new("A", "test")],
            categories: vec![Category::new(
                "c",
                vec![Case::new("B", "benchmark"), Case::new("C", "")],
                vec![],
            )],
            ..Default::default()
        };
        let expected = expected_functions(&profile).unwrap();
        let actual: DeclaredFunctions = expected.iter().map(|f| f.name.clone()).collect();
        assert_eq!(check_cases(&actual, &expected), Ok(()));
    }

    #[test]
    fn swapped_order_is_position_mismatch() {
        assert_eq!(
            validate(&alpha_beta(), &declared(&["BenchmarkBeta", "TestAlpha"])),
            Err(CheckError::PositionMismatch {
                actual: "BenchmarkBeta".into(),
                expected: "TestAlpha".into(),
                position: 1,
                line: None,
            })
        );
    }

    #[test]
    fn position_mismatch_reports_declaration_line() {
        let mut actual = DeclaredFunctions::new();
        actual.insert("TestAlpha", Some(4));
        actual.insert("BenchmarkBeta", Some(9));
        let profile = Profile {
            cases: vec![Case::new("Beta", "benchmark"), Case::new("Alpha", "")],
            ..Default::default()
        };
        let err = validate(&profile, &actual).unwrap_err();
        assert_eq!(
            err,
            CheckError::PositionMismatch {
                actual: "TestAlpha".into(),
                expected: "BenchmarkBeta".into(),
                position: 1,
                line: Some(4),
            }
        );
        assert_eq!(
            err.to_string(),
            "the case \"TestAlpha\" (line 4) in test file doesn't match the case \"BenchmarkBeta\" in profile at position 1"
        );
    }

    #[test]
    fn renamed_case_is_missing() {
        assert_eq!(
            validate(&alpha_beta(), &declared(&["TestAlpha", "TestBeta"])),
            Err(CheckError::MissingCase {
                name: "BenchmarkBeta".into(),
                position: 2,
            })
        );
    }

    #[test]
    fn missing_takes_precedence_over_position() {
        // position 1 holds the wrong name, but the expected one is absent entirely
        assert_eq!(
            validate(&alpha_beta(), &declared(&["TestGamma", "BenchmarkBeta"])),
            Err(CheckError::MissingCase {
                name: "TestAlpha".into(),
                position: 1,
            })
        );
    }

    #[test]
    fn count_checked_before_positions() {
        // a prefix match of the expected list still fails on count
        assert_eq!(
            validate(&alpha_beta(), &declared(&["TestAlpha"])),
            Err(CheckError::CountMismatch {
                in_file: 1,
                in_profile: 2,
            })
        );
        assert_eq!(
            validate(
                &alpha_beta(),
                &declared(&["TestAlpha", "BenchmarkBeta", "TestExtra"])
            ),
            Err(CheckError::CountMismatch {
                in_file: 3,
                in_profile: 2,
            })
        );
    }

    #[test]
    fn empty_profile() {
        assert_eq!(validate(&Profile::default(), &declared(&[])), Ok(()));
        assert_eq!(
            validate(&Profile::default(), &declared(&["TestStray"])),
            Err(CheckError::CountMismatch {
                in_file: 1,
                in_profile: 0,
            })
        );
    }

    #[test]
    fn invalid_kind_rejects_profile() {
        let profile = Profile {
            cases: vec![Case::new("X", "Unknown")],
            ..Default::default()
        };
        assert_eq!(
            validate(&profile, &declared(&["TestX"])),
            Err(CheckError::InvalidCaseKind("Unknown".into()))
        );
    }

    #[test]
    fn duplicate_declarations_count_once() {
        let profile = Profile {
            cases: vec![Case::new("A", ""), Case::new("B", "")],
            ..Default::default()
        };
        assert_eq!(
            validate(&profile, &declared(&["TestA", "TestB", "TestA"])),
            Ok(())
        );
    }
}
