mod styling;
mod tables;

use serde::{Deserialize, Serialize};

use crate::art::ArtRenderer;
use crate::banner::{Banner, BannerMetadata, LayoutOptions};
use crate::error::Result;
use crate::version::VersionRecord;

pub use styling::{bright_green, bright_red, dim, magenta_bold};
pub use tables::fonts_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Banner,
}

/// Everything a banner needs besides the version itself.
pub struct BannerContext<'a, R> {
    pub banner: &'a Banner<R>,
    pub title: &'a str,
    pub metadata: &'a BannerMetadata,
    pub options: &'a LayoutOptions,
}

/// Renders `version` in the requested format.
///
/// `pretty` only affects JSON.
pub fn render_version<R: ArtRenderer>(
    version: &VersionRecord,
    format: OutputFormat,
    pretty: bool,
    ctx: &BannerContext<'_, R>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(version.text()),
        OutputFormat::Json if pretty => version.json_pretty(),
        OutputFormat::Json => version.json(),
        OutputFormat::Banner => {
            let BannerContext {
                banner,
                title,
                metadata,
                options,
            } = *ctx;
            Ok(banner.render(title, version, metadata, options))
        }
    }
}
