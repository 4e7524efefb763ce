//! Common types for holders

/// Kind of project holder (hosting provider)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolderType {
    /// github.com
    GitHub,
    /// gitlab.com and self-hosted GitLab
    GitLab,
    /// bitbucket.org
    BitBucket,
    /// Gitea/Forgejo instances (codeberg.org, gitea.com)
    Gitea,
    /// Mercurial web UIs (hg.nginx.org)
    Mercurial,
    /// pypi.org
    PyPI,
    /// sourceforge.net
    SourceForge,
    /// wordpress.org plugins
    WordPress,
    /// Wikipedia software infoboxes
    Wikipedia,
}

impl HolderType {
    /// Returns the string representation of the holder type
    pub fn as_str(&self) -> &'static str {
        match self {
            HolderType::GitHub => "github",
            HolderType::GitLab => "gitlab",
            HolderType::BitBucket => "bitbucket",
            HolderType::Gitea => "gitea",
            HolderType::Mercurial => "hg",
            HolderType::PyPI => "pip",
            HolderType::SourceForge => "sf",
            HolderType::WordPress => "wp",
            HolderType::Wikipedia => "wiki",
        }
    }
}

impl std::fmt::Display for HolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HolderType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(HolderType::GitHub),
            "gitlab" => Ok(HolderType::GitLab),
            "bitbucket" => Ok(HolderType::BitBucket),
            "gitea" => Ok(HolderType::Gitea),
            "hg" => Ok(HolderType::Mercurial),
            "pip" => Ok(HolderType::PyPI),
            "sf" => Ok(HolderType::SourceForge),
            "wp" => Ok(HolderType::WordPress),
            "wiki" => Ok(HolderType::Wikipedia),
            _ => Err(()),
        }
    }
}
