//! Major/branch filter
//!
//! By default a version belongs to major `3` when it contains `3.`. Holders
//! whose branches are not numeric (or where the substring test is too loose)
//! can register a regex per major label in [`BranchFilters`].

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use crate::version::error::ConfigError;

/// Compiled per-major regex overrides
#[derive(Debug, Clone, Default)]
pub struct BranchFilters {
    patterns: IndexMap<String, Regex>,
}

impl BranchFilters {
    /// Compile a `major label -> pattern` mapping.
    ///
    /// Fails on the first pattern that is not a valid regex.
    pub fn new<I, K, V>(branches: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let patterns = branches
            .into_iter()
            .map(|(major, pattern)| {
                let major = major.into();
                Regex::new(pattern.as_ref())
                    .map(|regex| (major.clone(), regex))
                    .map_err(|source| ConfigError::InvalidBranchPattern { major, source })
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn get(&self, major: &str) -> Option<&Regex> {
        self.patterns.get(major)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Check whether `version` belongs to the `major` line.
///
/// A branch pattern registered for `major` takes precedence and is searched
/// anywhere in `version`. Otherwise `"<major>."` must occur in `version`.
pub fn matches_major(version: &str, major: &str, branches: Option<&BranchFilters>) -> bool {
    if let Some(pattern) = branches.and_then(|b| b.get(major)) {
        let matched = pattern.is_match(version);
        if matched {
            debug!("{} matches major {}", version, pattern.as_str());
        }
        return matched;
    }

    let matched = version.contains(&format!("{}.", major));
    if matched {
        debug!("{} is under the desired major {}", version, major);
    }
    matched
}
