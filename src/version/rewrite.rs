//! Tag rewrite rules applied before strict parsing
//!
//! Each rule handles one tagging convention and leaves the tag untouched when
//! the convention does not apply. Rules run in the order of [`REWRITE_RULES`]:
//!
//! 1. `label_prefix`: `release-1.2.3` -> `1.2.3`
//! 2. `dev_release`: `2.0-devel` -> `2.0.dev0`
//! 3. `post_release`: `2.3.4-p2` -> `2.3.4.post2`
//! 4. `underscores`: `3_0_2` -> `3.0.2`

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static POST_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-p(\d+)$").expect("valid post-release regex"));

static UNDERSCORE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+_)+\d+").expect("valid underscore regex"));

/// A named text rewrite
pub struct RewriteRule {
    name: &'static str,
    rewrite: fn(&str) -> Option<String>,
}

impl RewriteRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the rewritten tag, or `None` if the rule does not apply
    pub fn apply(&self, tag: &str) -> Option<String> {
        (self.rewrite)(tag)
    }
}

/// All rules, in application order
pub static REWRITE_RULES: [RewriteRule; 4] = [
    RewriteRule {
        name: "label_prefix",
        rewrite: strip_label_prefix,
    },
    RewriteRule {
        name: "dev_release",
        rewrite: rewrite_dev_release,
    },
    RewriteRule {
        name: "post_release",
        rewrite: rewrite_post_release,
    },
    RewriteRule {
        name: "underscores",
        rewrite: normalize_underscores,
    },
];

/// Run every rule over the tag, in order
pub fn apply_rewrites(tag: &str) -> String {
    REWRITE_RULES
        .iter()
        .fold(tag.to_string(), |current, rule| match rule.apply(&current) {
            Some(rewritten) => {
                debug!("Rule {} rewrote {} to {}", rule.name(), current, rewritten);
                rewritten
            }
            None => current,
        })
}

/// Drop an alphabetic label before the first dash (`release-1.2.3`, `foo-1.2.3`)
pub fn strip_label_prefix(tag: &str) -> Option<String> {
    let (label, rest) = tag.split_once('-')?;
    if !label.is_empty() && label.chars().all(char::is_alphabetic) {
        Some(rest.to_string())
    } else {
        None
    }
}

/// Trailing `-devel` becomes a PEP 440 developmental release
pub fn rewrite_dev_release(tag: &str) -> Option<String> {
    tag.strip_suffix("-devel")
        .map(|base| format!("{}.dev0", base))
}

/// Trailing `-p<N>` patch marker becomes a post release (Magento `2.3.4-p2`)
pub fn rewrite_post_release(tag: &str) -> Option<String> {
    POST_RELEASE
        .is_match(tag)
        .then(|| POST_RELEASE.replace(tag, ".post$1").into_owned())
}

/// Underscore-delimited numbers (`3_0_2`, common on Mercurial holders)
pub fn normalize_underscores(tag: &str) -> Option<String> {
    UNDERSCORE_VERSION
        .is_match(tag)
        .then(|| tag.replace('_', "."))
}
