use thiserror::Error;

/// Why a raw tag did not produce a version
///
/// None of these are faults: most tags in the wild are not versions, and
/// callers move on to the next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("nothing in the tag looks like a version")]
    Unparseable,

    #[error("tag names an unresolved development line (ends with .x)")]
    DevelopmentLine,

    #[error("tag is a pre-release and pre-releases are not allowed")]
    Prerelease,

    #[error("tag is outside the requested major")]
    OutsideMajor,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid branch pattern for major {major}: {source}")]
    InvalidBranchPattern {
        major: String,
        #[source]
        source: regex::Error,
    },
}
