//! Version strings for `--version` output.
//!
//! [`version::parse`] turns `v1.2.3:abc123-beta` style strings into a
//! [`VersionRecord`], which renders as plain text, JSON, or a banner laid out
//! by [`banner::Banner`] with an optional large-letter title.

pub mod art;
pub mod banner;
pub mod config;
pub mod error;
pub mod output;
pub mod version;

pub use banner::{simple_banner, Banner, BannerMetadata, Frame, LayoutOptions};
pub use error::{Error, Result};
pub use version::{parse, VersionRecord};
