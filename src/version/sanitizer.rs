//! Tag-to-version pipeline
//!
//! A raw tag goes through the [`rewrite`](crate::version::rewrite) rules, then
//! strict PEP 440 parsing. When strict parsing fails, the first dotted number
//! found in the tag is used instead. The pre-release policy and the major
//! filter decide whether the resulting version is kept.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::HolderConfig;
use crate::version::error::{ConfigError, InvalidReason};
use crate::version::major::{BranchFilters, matches_major};
use crate::version::parser::{CanonicalVersion, is_prerelease, parse_version};
use crate::version::rewrite::apply_rewrites;

static EMBEDDED_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+([.][0-9x]+)+(rc[0-9]?)?)").expect("valid embedded version regex")
});

/// Outcome of sanitizing a raw tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sanitized {
    Valid(CanonicalVersion),
    Invalid(InvalidReason),
}

impl Sanitized {
    pub fn is_valid(&self) -> bool {
        matches!(self, Sanitized::Valid(_))
    }

    pub fn version(&self) -> Option<&CanonicalVersion> {
        match self {
            Sanitized::Valid(version) => Some(version),
            Sanitized::Invalid(_) => None,
        }
    }

    pub fn into_version(self) -> Option<CanonicalVersion> {
        match self {
            Sanitized::Valid(version) => Some(version),
            Sanitized::Invalid(_) => None,
        }
    }
}

impl fmt::Display for Sanitized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sanitized::Valid(version) => write!(f, "{}", version),
            Sanitized::Invalid(reason) => write!(f, "invalid: {}", reason),
        }
    }
}

/// Extract a version from a tag name.
///
/// Never fails: tags that do not yield an acceptable version come back as
/// [`Sanitized::Invalid`] with the reason. An empty `major` is the same as no
/// major.
///
/// The major filter looks at the rewritten tag, not at the substring picked
/// by the fallback extraction, so `8.0.1-for-php7.4` is accepted for major `7`.
pub fn sanitize_version(
    tag: &str,
    allow_prerelease: bool,
    major: Option<&str>,
    branches: Option<&BranchFilters>,
) -> Sanitized {
    debug!("Checking tag {} as version", tag);

    let rewritten = apply_rewrites(tag);

    let result = match parse_version(&rewritten) {
        Some(version) if is_prerelease(&version) && !allow_prerelease => {
            debug!("Parsed as unwanted pre-release version: {}", version);
            Sanitized::Invalid(InvalidReason::Prerelease)
        }
        Some(version) => {
            debug!("Parsed as Version OK: {}", version);
            Sanitized::Valid(version)
        }
        None => extract_embedded_version(&rewritten),
    };

    match (result, major.filter(|m| !m.is_empty())) {
        (Sanitized::Valid(_), Some(major))
            if !matches_major(&rewritten, major, branches) =>
        {
            debug!("{} is not under the desired major {}", rewritten, major);
            Sanitized::Invalid(InvalidReason::OutsideMajor)
        }
        (result, _) => result,
    }
}

/// Last-resort recovery: use the first dotted number embedded in the text.
///
/// A release-candidate suffix is kept and accepted regardless of the
/// pre-release policy. A trailing `.x` names a development line rather than a
/// release and is rejected.
fn extract_embedded_version(text: &str) -> Sanitized {
    let Some(found) = EMBEDDED_VERSION.find(text) else {
        debug!("Did not find anything that looks like a version in {}", text);
        return Sanitized::Invalid(InvalidReason::Unparseable);
    };

    let candidate = found.as_str();
    debug!("Sanitized tag name value to {}", candidate);

    if candidate.ends_with(".x") {
        return Sanitized::Invalid(InvalidReason::DevelopmentLine);
    }

    // `x` inside a group (`1.x5`) still slips past the pattern
    match parse_version(candidate) {
        Some(version) => Sanitized::Valid(version),
        None => Sanitized::Invalid(InvalidReason::Unparseable),
    }
}

/// Sanitizer bound to one holder's settings
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct TagSanitizer {
    allow_prerelease: bool,
    major: Option<String>,
    branches: Option<BranchFilters>,
}

impl TagSanitizer {
    pub fn new(allow_prerelease: bool, major: Option<String>) -> Self {
        Self {
            allow_prerelease,
            major,
            branches: None,
        }
    }

    /// Build a sanitizer from deserialized holder settings
    pub fn from_config(config: &HolderConfig) -> Result<Self, ConfigError> {
        let branches = if config.branches.is_empty() {
            None
        } else {
            Some(BranchFilters::new(&config.branches)?)
        };

        Ok(Self {
            allow_prerelease: config.allow_prerelease,
            major: config.major.clone(),
            branches,
        })
    }

    /// Replace the per-major regex overrides
    pub fn with_branches(mut self, branches: BranchFilters) -> Self {
        self.branches = Some(branches);
        self
    }

    pub fn allow_prerelease(&self) -> bool {
        self.allow_prerelease
    }

    pub fn major(&self) -> Option<&str> {
        self.major.as_deref()
    }

    pub fn sanitize(&self, tag: &str) -> Sanitized {
        sanitize_version(
            tag,
            self.allow_prerelease,
            self.major.as_deref(),
            self.branches.as_ref(),
        )
    }

    /// Check a version string against this sanitizer's major, if any
    pub fn matches_major(&self, version: &str) -> bool {
        match self.major.as_deref() {
            Some(major) if !major.is_empty() => {
                matches_major(version, major, self.branches.as_ref())
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rstest::rstest;

    fn valid(tag: &str, allow_prerelease: bool) -> String {
        sanitize_version(tag, allow_prerelease, None, None)
            .into_version()
            .map(|v| v.to_string())
            .unwrap_or_else(|| panic!("{} should sanitize to a version", tag))
    }

    #[rstest]
    #[case("release-3_0_2", "3.0.2")]
    #[case("2.3.4-p2", "2.3.4.post2")]
    #[case("v1.2.3", "1.2.3")]
    #[case("foo-1.2.3", "1.2.3")]
    #[case("1.2.3", "1.2.3")]
    #[case("Release 2.4.1 (stable)", "2.4.1")]
    #[case("1.10.2rc1-final", "1.10.2rc1")]
    fn sanitize_version_accepts_common_tags(#[case] tag: &str, #[case] expected: &str) {
        assert_eq!(valid(tag, false), expected);
    }

    #[rstest]
    #[case("v1.10.x-dev", InvalidReason::DevelopmentLine)]
    #[case("nightly", InvalidReason::Unparseable)]
    #[case("", InvalidReason::Unparseable)]
    #[case("2.0-devel", InvalidReason::Prerelease)]
    #[case("1.0rc1", InvalidReason::Prerelease)]
    #[case("build-1.x5", InvalidReason::Unparseable)]
    fn sanitize_version_rejects_with_reason(#[case] tag: &str, #[case] reason: InvalidReason) {
        assert_eq!(
            sanitize_version(tag, false, None, None),
            Sanitized::Invalid(reason)
        );
    }

    #[test]
    fn post_release_is_not_a_prerelease() {
        let version = sanitize_version("2.3.4-p2", false, None, None)
            .into_version()
            .unwrap();

        assert!(version.is_post());
        assert!(!is_prerelease(&version));
    }

    #[test]
    fn dev_release_is_accepted_when_prereleases_allowed() {
        assert_eq!(valid("2.0-devel", true), "2.0.dev0");
    }

    #[test]
    fn development_line_is_rejected_even_when_prereleases_allowed() {
        assert_eq!(
            sanitize_version("v1.10.x-dev", true, None, None),
            Sanitized::Invalid(InvalidReason::DevelopmentLine)
        );
    }

    #[test]
    fn canonical_input_matches_direct_parse() {
        assert_eq!(
            sanitize_version("1.2.3", false, None, None),
            Sanitized::Valid(parse_version("1.2.3").unwrap())
        );
    }

    #[rstest]
    #[case("3.0.2", Some("3"), true)]
    #[case("4.0.0", Some("3"), false)]
    #[case("release-3_0_2", Some("3"), true)]
    #[case("4.0.0", Some(""), true)]
    #[case("4.0.0", None, true)]
    fn sanitize_version_applies_major_filter(
        #[case] tag: &str,
        #[case] major: Option<&str>,
        #[case] accepted: bool,
    ) {
        assert_eq!(
            sanitize_version(tag, false, major, None).is_valid(),
            accepted
        );
    }

    #[test]
    fn major_filter_reports_outside_major() {
        assert_eq!(
            sanitize_version("4.0.0", false, Some("3"), None),
            Sanitized::Invalid(InvalidReason::OutsideMajor)
        );
    }

    #[test]
    fn major_filter_sees_text_before_fallback_extraction() {
        // Extraction keeps only 8.0.1, but "7." is still in the rewritten tag
        let result = sanitize_version("8.0.1-for-php7.4", false, Some("7"), None);

        assert_eq!(result.version().map(|v| v.to_string()), Some("8.0.1".to_string()));
    }

    #[test]
    fn branch_filters_override_major_heuristic() {
        let branches = BranchFilters::new([("stable", r"^2\.4\.")]).unwrap();

        assert!(sanitize_version("2.4.7", false, Some("stable"), Some(&branches)).is_valid());
        assert_eq!(
            sanitize_version("2.5.0", false, Some("stable"), Some(&branches)),
            Sanitized::Invalid(InvalidReason::OutsideMajor)
        );
    }

    #[test]
    fn tag_sanitizer_from_config_compiles_branches() {
        let config = HolderConfig {
            allow_prerelease: true,
            major: Some("stable".to_string()),
            branches: IndexMap::from([("stable".to_string(), r"^2\.4\.".to_string())]),
        };

        let sanitizer = TagSanitizer::from_config(&config).unwrap();

        assert!(sanitizer.allow_prerelease());
        assert_eq!(sanitizer.major(), Some("stable"));
        assert_eq!(
            sanitizer.sanitize("2.4.0rc1").version().map(|v| v.to_string()),
            Some("2.4.0rc1".to_string())
        );
        assert!(!sanitizer.sanitize("2.5.0").is_valid());
    }

    #[test]
    fn tag_sanitizer_from_config_rejects_bad_pattern() {
        let config = HolderConfig {
            branches: IndexMap::from([("3".to_string(), "[".to_string())]),
            ..HolderConfig::default()
        };

        assert!(matches!(
            TagSanitizer::from_config(&config),
            Err(ConfigError::InvalidBranchPattern { .. })
        ));
    }

    #[test]
    fn tag_sanitizer_with_branches_replaces_overrides() {
        let sanitizer = TagSanitizer::new(false, Some("3".to_string()))
            .with_branches(BranchFilters::new([("3", "^feature")]).unwrap());

        assert!(sanitizer.matches_major("feature-next"));
        assert!(!sanitizer.matches_major("3.0.2"));
    }

    #[test]
    fn tag_sanitizer_without_major_accepts_any_line() {
        let sanitizer = TagSanitizer::default();

        assert!(sanitizer.matches_major("9.9.9"));
        assert!(sanitizer.sanitize("9.9.9").is_valid());
    }

    #[test]
    fn sanitized_display_renders_version_or_reason() {
        assert_eq!(
            sanitize_version("2.3.4-p2", false, None, None).to_string(),
            "2.3.4.post2"
        );
        assert_eq!(
            sanitize_version("nightly", false, None, None).to_string(),
            "invalid: nothing in the tag looks like a version"
        );
    }
}
