//! Registry of holders, in registration order
//!
//! The registry is built once and only read afterwards, so the order in which
//! descriptors were registered is the order in which they get to claim a repo.

use tracing::{debug, info};

use crate::holder::descriptor::HolderDescriptor;
use crate::holder::types::HolderType;

/// Immutable set of holder descriptors
#[derive(Debug, Clone, PartialEq)]
pub struct HolderRegistry {
    descriptors: Vec<HolderDescriptor>,
}

impl HolderRegistry {
    /// Create a registry from descriptors, keeping their order
    pub fn new(descriptors: impl IntoIterator<Item = HolderDescriptor>) -> Self {
        Self {
            descriptors: descriptors.into_iter().collect(),
        }
    }

    pub fn descriptors(&self) -> &[HolderDescriptor] {
        &self.descriptors
    }

    /// Get the first descriptor registered for a holder type
    pub fn descriptor(&self, holder_type: HolderType) -> Option<&HolderDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.holder_type() == holder_type)
    }

    /// Find the holder whose known URLs or names claim `repo`
    pub fn classify(&self, repo: &str) -> Option<HolderType> {
        self.descriptors.iter().find_map(|d| d.classify(repo))
    }

    /// Find the holder whose default hostname `repo` is a URL on
    pub fn holder_for_hostname(&self, repo: &str) -> Option<HolderType> {
        self.descriptors.iter().find_map(|d| {
            d.matching_hostname(repo).map(|hostname| {
                debug!("{} is on {}", repo, hostname);
                d.holder_type()
            })
        })
    }

    /// The holder used when nothing else claims a repo
    pub fn default_holder(&self) -> Option<HolderType> {
        self.descriptors
            .iter()
            .find(|d| d.is_default_holder())
            .map(HolderDescriptor::holder_type)
    }

    /// Pick a holder for `repo`: known URLs and names first, then default
    /// hostnames, then the default holder.
    pub fn resolve(&self, repo: &str) -> Option<HolderType> {
        let holder_type = self
            .classify(repo)
            .or_else(|| self.holder_for_hostname(repo))
            .or_else(|| self.default_holder());

        if let Some(holder_type) = holder_type {
            info!("Using {} project holder for {}", holder_type, repo);
        }
        holder_type
    }
}

impl Default for HolderRegistry {
    /// The built-in holders
    fn default() -> Self {
        Self::new([
            HolderDescriptor::new(HolderType::GitHub)
                .with_default_hostname("github.com")
                .with_known_url("mysqltuner.com", HolderType::GitHub)
                .with_known_url("openresty.org", HolderType::GitHub)
                .with_known_url("nginx.org", HolderType::GitHub)
                .with_known_url("transmissionbt.com", HolderType::GitHub)
                .with_known_name("php", HolderType::GitHub)
                .with_known_name("linux", HolderType::GitHub)
                .with_known_name("kernel", HolderType::GitHub)
                .with_known_name("openssl", HolderType::GitHub)
                .with_known_name("python", HolderType::GitHub)
                .with_known_name("nginx", HolderType::GitHub)
                .as_default_holder(),
            HolderDescriptor::new(HolderType::GitLab)
                .with_default_hostname("gitlab.com")
                .with_known_url("gitlab.gnome.org", HolderType::GitLab)
                .with_known_url("gitlab.freedesktop.org", HolderType::GitLab)
                .with_known_url("salsa.debian.org", HolderType::GitLab)
                .with_known_name("mesa", HolderType::GitLab),
            HolderDescriptor::new(HolderType::BitBucket).with_default_hostname("bitbucket.org"),
            HolderDescriptor::new(HolderType::Gitea)
                .with_default_hostname("gitea.com")
                .with_known_url("codeberg.org", HolderType::Gitea),
            HolderDescriptor::new(HolderType::Mercurial)
                .with_known_url("hg.nginx.org", HolderType::Mercurial)
                .with_known_url("hg.mozilla.org", HolderType::Mercurial)
                .with_path_components(1),
            HolderDescriptor::new(HolderType::PyPI).with_default_hostname("pypi.org"),
            HolderDescriptor::new(HolderType::SourceForge).with_default_hostname("sourceforge.net"),
            HolderDescriptor::new(HolderType::WordPress)
                .with_default_hostname("wordpress.org")
                .with_path_components(1),
            HolderDescriptor::new(HolderType::Wikipedia)
                .with_default_hostname("en.wikipedia.org")
                .with_path_components(1),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn github_only() -> HolderRegistry {
        HolderRegistry::new([HolderDescriptor::new(HolderType::GitHub)
            .with_known_url("github.com", HolderType::GitHub)])
    }

    #[rstest]
    #[case("https://github.com/foo/bar", Some(HolderType::GitHub))]
    #[case("github.com/foo/bar", Some(HolderType::GitHub))]
    #[case("unknown-project", None)]
    fn classify_with_registered_prefix(#[case] repo: &str, #[case] expected: Option<HolderType>) {
        assert_eq!(github_only().classify(repo), expected);
    }

    #[test]
    fn classify_respects_registration_order() {
        let registry = HolderRegistry::new([
            HolderDescriptor::new(HolderType::Gitea)
                .with_known_url("git.example.org", HolderType::Gitea),
            HolderDescriptor::new(HolderType::GitLab)
                .with_known_url("git.example.org", HolderType::GitLab),
        ]);

        assert_eq!(
            registry.classify("https://git.example.org/foo/bar"),
            Some(HolderType::Gitea)
        );
    }

    #[rstest]
    #[case("https://hg.nginx.org/nginx", Some(HolderType::Mercurial))]
    #[case("https://codeberg.org/forgejo/forgejo", Some(HolderType::Gitea))]
    #[case("https://nginx.org/", Some(HolderType::GitHub))]
    #[case("mesa", Some(HolderType::GitLab))]
    #[case("linux", Some(HolderType::GitHub))]
    #[case("https://github.com/foo/bar", None)]
    #[case("foo/bar", None)]
    fn default_registry_classify(#[case] repo: &str, #[case] expected: Option<HolderType>) {
        assert_eq!(HolderRegistry::default().classify(repo), expected);
    }

    #[rstest]
    #[case("https://gitlab.com/foo/bar", Some(HolderType::GitLab))]
    #[case("https://bitbucket.org/foo/bar", Some(HolderType::BitBucket))]
    #[case("https://pypi.org/project/requests", Some(HolderType::PyPI))]
    #[case("https://hg.nginx.org/nginx", None)]
    #[case("gitlab.com/foo/bar", None)]
    fn default_registry_holder_for_hostname(
        #[case] repo: &str,
        #[case] expected: Option<HolderType>,
    ) {
        assert_eq!(HolderRegistry::default().holder_for_hostname(repo), expected);
    }

    #[rstest]
    #[case("https://hg.nginx.org/nginx", HolderType::Mercurial)]
    #[case("https://sourceforge.net/projects/foo", HolderType::SourceForge)]
    #[case("foo/bar", HolderType::GitHub)]
    #[case("https://example.com/foo/bar", HolderType::GitHub)]
    fn default_registry_resolve(#[case] repo: &str, #[case] expected: HolderType) {
        assert_eq!(HolderRegistry::default().resolve(repo), Some(expected));
    }

    #[test]
    fn resolve_without_default_holder_can_miss() {
        assert_eq!(github_only().resolve("foo/bar"), None);
    }

    #[test]
    fn descriptor_looks_up_by_type() {
        let registry = HolderRegistry::default();

        let hg = registry.descriptor(HolderType::Mercurial).unwrap();
        assert_eq!(hg.path_components(), 1);
        assert_eq!(hg.default_hostname(), None);
        assert_eq!(registry.default_holder(), Some(HolderType::GitHub));
        assert!(github_only().descriptor(HolderType::GitLab).is_none());
    }
}
