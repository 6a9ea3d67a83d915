use serde::{Deserialize, Serialize};

const LABEL_WIDTH: usize = "Copyright: ".len();

/// Optional credits printed under the version line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerMetadata {
    pub author: Option<String>,
    pub company: Option<String>,
    pub copyright: Option<String>,
    pub repo: Option<String>,
}

impl BannerMetadata {
    /// Label-aligned rows for every present field, in display order.
    ///
    /// Empty or whitespace-only values are treated as absent.
    pub fn lines(&self) -> Vec<String> {
        [
            ("Author", &self.author),
            ("Company", &self.company),
            ("Copyright", &self.copyright),
            ("Repo", &self.repo),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            let value = value.as_deref().filter(|v| !v.trim().is_empty())?;
            Some(format!("{:<LABEL_WIDTH$}{value}", format!("{label}:")))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Fills fields that are unset here from `other`.
    #[must_use]
    pub fn or(self, other: BannerMetadata) -> Self {
        Self {
            author: self.author.or(other.author),
            company: self.company.or(other.company),
            copyright: self.copyright.or(other.copyright),
            repo: self.repo.or(other.repo),
        }
    }
}
