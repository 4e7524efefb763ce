//! Strict PEP 440 parsing of (already rewritten) tag text

use std::str::FromStr;

use pep508_rs::pep440_rs::Version;
use tracing::debug;

/// A normalized, totally ordered version
///
/// Renders back to its normalized form through `Display`
/// (e.g. `2.0-devel` ends up as `2.0.dev0`).
pub type CanonicalVersion = Version;

/// Parse a string as a PEP 440 version.
///
/// Accepts an optional `v` prefix, epoch, release segments and
/// pre/post/dev/local qualifiers. Returns `None` instead of failing.
pub fn parse_version(version: &str) -> Option<CanonicalVersion> {
    Version::from_str(version)
        .inspect_err(|e| debug!("Failed to parse {} as Version: {}", version, e))
        .ok()
}

/// Whether a version counts as a pre-release (alpha, beta, rc or dev)
pub fn is_prerelease(version: &CanonicalVersion) -> bool {
    version.any_prerelease()
}
