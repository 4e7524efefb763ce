//! Latest release selection
//!
//! Picks the greatest accepted version from the tags a holder published.

use crate::version::parser::CanonicalVersion;
use crate::version::sanitizer::TagSanitizer;

/// A tag together with the version it sanitized to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    pub tag: String,
    pub version: CanonicalVersion,
}

/// Find the greatest version among `tags`
///
/// Tags the sanitizer rejects are skipped. When two tags resolve to the same
/// version (`v1.0.0` and `1.0.0`), the first one wins.
pub fn latest_release<'a, I>(tags: I, sanitizer: &TagSanitizer) -> Option<LatestRelease>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            sanitizer
                .sanitize(tag)
                .into_version()
                .map(|version| LatestRelease {
                    tag: tag.to_string(),
                    version,
                })
        })
        .reduce(|best, candidate| {
            if candidate.version > best.version {
                candidate
            } else {
                best
            }
        })
}
