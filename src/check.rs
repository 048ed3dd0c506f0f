//! Validate profile files against the test files they describe.
use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::{
    collect::collect_test_functions,
    config::Config,
    defs::{DeclaredFunctions, Profile},
    error::{Error, Result},
    log,
    matcher::validate,
};

/// Validates single profiles or whole directories of them.
pub struct ProfileChecker {
    /// File name pattern of profile files.
    pattern: Regex,
    /// Directory names skipped while walking.
    skip_dirs: Vec<String>,
}

impl ProfileChecker {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            pattern: config.profile_regex()?,
            skip_dirs: config.skip_dirs.clone(),
        })
    }

    /// Whether the file name of `path` marks it as a profile.
    pub fn is_profile(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.pattern.is_match(name))
    }

    /// Validate that the test file referenced by profile `path` declares
    /// exactly the profile's cases, in order.
    ///
    /// Failures are returned, not logged; reporting them is up to the caller.
    pub fn validate_file(&self, path: &Path) -> Result<()> {
        log!(Normal, Info, "Validating {}", path.display());
        check_profile(path)?;
        log!(Normal, Ok, "Validating {} passed", path.display());
        Ok(())
    }

    /// Validate every profile in `dir`, and in its sub-directories if
    /// `recursive`. Entries are visited in file name order; the first failing
    /// profile stops the walk.
    ///
    /// Returns the validated profiles.
    pub fn validate_dir(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
        let max_depth = if recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name();

        let mut validated = Vec::new();
        for entry in walker.into_iter().filter_entry(|e| !self.is_skipped(e)) {
            let entry = entry.map_err(|source| Error::Walk {
                dir: dir.to_owned(),
                source,
            })?;
            if entry.file_type().is_dir() || !self.is_profile(entry.path()) {
                continue;
            }
            self.validate_file(entry.path())?;
            validated.push(entry.into_path());
        }
        log!(
            Verbose,
            Info,
            "{} profile(s) validated in {}",
            validated.len(),
            dir.display()
        );
        Ok(validated)
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.skip_dirs.iter().any(|skip| skip == name))
    }
}

/// Load profile `path`, scan its test file and match both.
fn check_profile(path: &Path) -> Result<()> {
    let profile = Profile::load(path)?;
    let profile_dir = path.parent().unwrap_or(Path::new("."));

    let source_file = profile.source_path(profile_dir);
    if let Err(e) = std::fs::metadata(&source_file) {
        if e.kind() == ErrorKind::NotFound {
            return Err(Error::MissingSource {
                source_file,
                profile: path.to_owned(),
            });
        }
    }

    let declared = read_test_file(&profile.test_path(profile_dir))?;
    validate(&profile, &declared).map_err(|source| Error::Check {
        profile: path.to_owned(),
        source,
    })
}

/// Collect the test functions declared in a Rust test file.
pub fn read_test_file(path: &Path) -> Result<DeclaredFunctions> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadTestFile {
        path: path.to_owned(),
        source,
    })?;
    let declared = collect_test_functions(&content).map_err(|source| Error::ParseTestFile {
        path: path.to_owned(),
        source,
    })?;
    log!(
        Verbose,
        Simple,
        "  {} declares {:?}",
        path.display(),
        declared
    );
    Ok(declared)
}
