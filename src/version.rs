use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Grammar reported back in [`Error::InvalidVersionFormat`].
pub const VERSION_GRAMMAR: &str = "X.Y.Z[:HASH][-alpha|beta|dev|canary|rcN]";

/// A parsed software version.
///
/// Produced by [`parse`], which guarantees an uppercase hexadecimal `hash` and a
/// lowercase `suffix` from the accepted set. Records built by hand are still
/// formatted permissively: empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionRecord {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub hash: Option<String>,
    pub suffix: Option<String>,
}

/// JSON shape of a [`VersionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionJson {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
}

/// Parses a version string.
///
/// Supported formats:
/// - `0.0.1` version only
/// - `0.0.1-canary` version with build type
/// - `0.0.1:4f00` version with hash
/// - `v0.0.1:4f00-beta` version with hash and build type
///
/// Surrounding whitespace and a single leading `v`/`V` are ignored.
pub fn parse(raw: &str) -> Result<VersionRecord> {
    let trimmed = raw.trim();
    let input = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let invalid = || Error::InvalidVersionFormat {
        input: trimmed.to_string(),
        expected: VERSION_GRAMMAR.to_string(),
    };

    if input.is_empty() {
        return Err(invalid());
    }

    let (head, suffix) = match input.split_once('-') {
        Some((head, suffix)) => (head, Some(suffix)),
        None => (input, None),
    };
    let (triple, hash) = match head.split_once(':') {
        Some((triple, hash)) => (triple, Some(hash)),
        None => (head, None),
    };

    let mut numbers = triple.split('.').map(parse_number);
    let (major, minor, patch) = match (
        numbers.next(),
        numbers.next(),
        numbers.next(),
        numbers.next(),
    ) {
        (Some(Some(major)), Some(Some(minor)), Some(Some(patch)), None) => (major, minor, patch),
        _ => return Err(invalid()),
    };

    let hash = match hash {
        Some(hash) if is_hex(hash) => Some(hash.to_ascii_uppercase()),
        Some(_) => return Err(invalid()),
        None => None,
    };

    let suffix = match suffix {
        Some(suffix) if is_known_suffix(suffix) => Some(suffix.to_string()),
        Some(_) => return Err(invalid()),
        None => None,
    };

    Ok(VersionRecord {
        major,
        minor,
        patch,
        hash,
        suffix,
    })
}

fn parse_number(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn is_hex(hash: &str) -> bool {
    !hash.is_empty() && hash.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_known_suffix(suffix: &str) -> bool {
    match suffix {
        "alpha" | "beta" | "dev" | "canary" => true,
        _ => suffix
            .strip_prefix("rc")
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit())),
    }
}

impl FromStr for VersionRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl VersionRecord {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref().filter(|h| !h.is_empty())
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }

    /// `MAJOR.MINOR.PATCH` without any decoration.
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Short form, e.g. `v0.2.0-dev`.
    pub fn short(&self) -> String {
        match self.suffix() {
            Some(suffix) => format!("v{}-{suffix}", self.core()),
            None => format!("v{}", self.core()),
        }
    }

    pub fn is_release(&self) -> bool {
        self.suffix().is_none()
    }

    pub fn is_dev(&self) -> bool {
        self.suffix() == Some("dev")
    }

    /// True for alpha, beta and release-candidate builds.
    pub fn is_pre_release(&self) -> bool {
        self.suffix()
            .is_some_and(|s| s.starts_with("alpha") || s.starts_with("beta") || s.starts_with("rc"))
    }

    /// Plain text form, e.g. `v0.1.0 (4FD00) [BETA]`.
    pub fn text(&self) -> String {
        let mut text = format!("v{}", self.core());
        if let Some(hash) = self.hash() {
            text.push_str(&format!(" ({hash})"));
        }
        if let Some(suffix) = self.suffix() {
            text.push_str(&format!(" [{}]", suffix.to_uppercase()));
        }
        text
    }

    /// Line shown in banners, e.g. `v1.2.3 ABC123 [BETA]`.
    pub fn banner_line(&self) -> String {
        let mut parts = vec![format!("v{}", self.core())];
        if let Some(hash) = self.hash() {
            parts.push(hash.to_string());
        }
        if let Some(suffix) = self.suffix() {
            parts.push(format!("[{}]", suffix.to_uppercase()));
        }
        parts.join(" ")
    }

    pub fn to_json(&self) -> VersionJson {
        VersionJson {
            version: self.core(),
            hash: self.hash().map(str::to_string),
            build_type: self.suffix().map(str::to_string),
        }
    }

    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    pub fn json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core())?;
        if let Some(hash) = self.hash() {
            write!(f, ":{hash}")?;
        }
        if let Some(suffix) = self.suffix() {
            write!(f, "-{suffix}")?;
        }
        Ok(())
    }
}
