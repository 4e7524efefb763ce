use indexmap::IndexMap;
use serde::Deserialize;

// =============================================================================
// Holder-related constants
// =============================================================================

/// Number of URL path segments that make up a project (`owner/name`)
pub const DEFAULT_PATH_COMPONENTS: usize = 2;

/// Per-holder version selection settings
///
/// ```json
/// { "allowPrerelease": false, "major": "3", "branches": { "3": "^3\\.0\\." } }
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HolderConfig {
    /// Accept pre-release and dev versions
    pub allow_prerelease: bool,
    /// Restrict accepted versions to this major or branch label
    pub major: Option<String>,
    /// Regex per major label, overriding the `"<major>."` substring test
    pub branches: IndexMap<String, String>,
}
