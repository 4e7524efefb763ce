//! Static per-holder metadata and the lookups built on it

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::info;
use url::Url;

use crate::config::DEFAULT_PATH_COMPONENTS;
use crate::holder::types::HolderType;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Describes how a holder recognizes the repositories it serves.
///
/// Built once when the holder is registered and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HolderDescriptor {
    holder_type: HolderType,
    /// Well-known domain usable by everyone (`github.com`); self-hosted-only
    /// holders such as Mercurial have none
    default_hostname: Option<String>,
    /// URL prefix -> holder, checked in insertion order
    known_url_prefixes: IndexMap<String, HolderType>,
    /// Bare project name -> holder
    known_names: HashMap<String, HolderType>,
    /// Path segments that make up a project (`owner/name` = 2, hg.nginx.org/nginx = 1)
    path_components: usize,
    /// Used when nothing else claims a repo
    default_holder: bool,
}

impl HolderDescriptor {
    pub fn new(holder_type: HolderType) -> Self {
        Self {
            holder_type,
            default_hostname: None,
            known_url_prefixes: IndexMap::new(),
            known_names: HashMap::new(),
            path_components: DEFAULT_PATH_COMPONENTS,
            default_holder: false,
        }
    }

    pub fn with_default_hostname(mut self, hostname: &str) -> Self {
        self.default_hostname = Some(hostname.to_string());
        self
    }

    pub fn with_known_url(mut self, prefix: &str, holder_type: HolderType) -> Self {
        self.known_url_prefixes.insert(prefix.to_string(), holder_type);
        self
    }

    pub fn with_known_name(mut self, name: &str, holder_type: HolderType) -> Self {
        self.known_names.insert(name.to_string(), holder_type);
        self
    }

    /// Zero is treated as one
    pub fn with_path_components(mut self, count: usize) -> Self {
        self.path_components = count.max(1);
        self
    }

    pub fn as_default_holder(mut self) -> Self {
        self.default_holder = true;
        self
    }

    pub fn holder_type(&self) -> HolderType {
        self.holder_type
    }

    pub fn default_hostname(&self) -> Option<&str> {
        self.default_hostname.as_deref()
    }

    pub fn path_components(&self) -> usize {
        self.path_components
    }

    pub fn is_default_holder(&self) -> bool {
        self.default_holder
    }

    /// Decide which holder owns `repo` according to this descriptor's tables.
    ///
    /// URLs (`http://`, `https://`) are matched against the known URL
    /// prefixes, first match wins. Anything else is looked up as an exact
    /// known name, then as a scheme-less URL whose host part equals a known
    /// prefix (`github.com/foo/bar`).
    pub fn classify(&self, repo: &str) -> Option<HolderType> {
        if has_scheme(repo) {
            let (prefix, holder_type) = self.known_url_prefixes.iter().find(|(prefix, _)| {
                repo.starts_with(prefix.as_str())
                    || SCHEMES
                        .iter()
                        .any(|scheme| repo.starts_with(&format!("{}{}", scheme, prefix)))
            })?;
            info!("{} Starts with {}", repo, prefix);
            return Some(*holder_type);
        }

        if let Some(holder_type) = self.known_names.get(repo) {
            info!("Selecting known repo {}", repo);
            return Some(*holder_type);
        }

        let (prefix, holder_type) = self
            .known_url_prefixes
            .iter()
            .find(|(prefix, _)| starts_with_host(repo, prefix))?;
        info!("{} Starts with {}", repo, prefix);
        Some(*holder_type)
    }

    /// Returns the default hostname if `repo` is a URL on it
    pub fn matching_hostname(&self, repo: &str) -> Option<&str> {
        let hostname = self.default_hostname.as_deref()?;
        SCHEMES
            .iter()
            .any(|scheme| repo.starts_with(&format!("{}{}", scheme, hostname)))
            .then_some(hostname)
    }

    /// Extract the project identity (`owner/name`) from a repo identifier.
    ///
    /// URLs, with or without scheme, keep their first `path_components`
    /// path segments, minus a trailing `.git`. Bare names are returned as-is
    /// when they already have exactly that many segments.
    pub fn project_path(&self, repo: &str) -> Option<String> {
        let url = if has_scheme(repo) {
            Url::parse(repo).ok()?
        } else if looks_like_host(repo) {
            Url::parse(&format!("https://{}", repo)).ok()?
        } else {
            let segments: Vec<&str> = repo.split('/').filter(|s| !s.is_empty()).collect();
            return (segments.len() == self.path_components).then(|| segments.join("/"));
        };

        let segments: Vec<&str> = url
            .path_segments()?
            .filter(|s| !s.is_empty())
            .take(self.path_components)
            .collect();
        if segments.len() < self.path_components {
            return None;
        }

        let path = segments.join("/");
        Some(path.strip_suffix(".git").map(str::to_string).unwrap_or(path))
    }
}

fn has_scheme(repo: &str) -> bool {
    SCHEMES.iter().any(|scheme| repo.starts_with(scheme))
}

/// `repo` starts with `prefix` followed by a path or nothing at all
fn starts_with_host(repo: &str, prefix: &str) -> bool {
    match repo.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

/// `example.com/...`: the first segment has a dot, so it is a hostname
fn looks_like_host(repo: &str) -> bool {
    repo.split('/')
        .next()
        .is_some_and(|first| first.contains('.'))
}
