use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{CheckError, Error, Result};

/// Prefix of test functions.
pub const PREFIX_TEST: &str = "Test";
/// Prefix of benchmark functions.
pub const PREFIX_BENCHMARK: &str = "Benchmark";

/// Unit test profile of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Source file under test, relative to the profile unless absolute.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    /// Test file holding the cases, relative to the profile unless absolute.
    #[serde(default, deserialize_with = "null_as_default")]
    pub test: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Top-level cases, flattened before any category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cases: Vec<Case>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

/// A named group of cases, possibly with nested categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cases: Vec<Case>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

/// A single test or benchmark case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Case {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Raw kind string, validated when the profile is flattened.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Kind of a case, deciding the function name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    Test,
    Benchmark,
}

impl CaseKind {
    pub fn prefix(self) -> &'static str {
        match self {
            CaseKind::Test => PREFIX_TEST,
            CaseKind::Benchmark => PREFIX_BENCHMARK,
        }
    }
}

impl FromStr for CaseKind {
    type Err = CheckError;

    /// Case-insensitive; an empty string means `Test`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "test" => Ok(CaseKind::Test),
            "benchmark" => Ok(CaseKind::Benchmark),
            _ => Err(CheckError::InvalidCaseKind(s.to_owned())),
        }
    }
}

impl Case {
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: kind.to_owned(),
            description: String::new(),
        }
    }
}

impl Category {
    pub fn new(name: &str, cases: Vec<Case>, categories: Vec<Category>) -> Self {
        Self {
            name: name.to_owned(),
            description: String::new(),
            cases,
            categories,
        }
    }
}

impl Profile {
    /// Load a profile from a YAML document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadProfile {
            path: path.to_owned(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| Error::ParseProfile {
            path: path.to_owned(),
            source,
        })
    }

    /// Parse a profile from YAML text.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document is an empty profile.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Path of the source file, resolved against the profile's directory.
    pub fn source_path(&self, profile_dir: &Path) -> PathBuf {
        resolve(&self.source, profile_dir)
    }

    /// Path of the test file, resolved against the profile's directory.
    pub fn test_path(&self, profile_dir: &Path) -> PathBuf {
        resolve(&self.test, profile_dir)
    }
}

fn resolve(file: &str, dir: &Path) -> PathBuf {
    let file = Path::new(file);
    if file.is_absolute() {
        file.to_owned()
    } else {
        dir.join(file)
    }
}

/// Treat an explicit `null` (e.g. `cases:` with nothing after it) like a
/// missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
