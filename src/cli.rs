use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use verbanner::art::{FigletRenderer, FontStyle};
use verbanner::banner::{Banner, BannerMetadata, LayoutOptions};
use verbanner::config::Config;
use verbanner::output::{self, BannerContext, OutputFormat};
use verbanner::version::{self, VersionRecord};

#[derive(Parser)]
#[command(name = "verbanner")]
#[command(author, version, about = "Version strings as text, JSON or banners", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./verbanner.{toml,json,yaml,yml})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a version as text, JSON or a banner
    Show {
        /// Version string, e.g. 1.2.3:abc123-beta
        #[arg(value_name = "VERSION", env = "VERBANNER_VERSION")]
        raw: Option<String>,

        #[command(flatten)]
        banner: BannerArgs,
    },

    /// Validate a version string
    Check {
        #[arg(value_name = "VERSION")]
        raw: String,
    },

    /// List font styles and where they are loaded from
    Fonts {
        #[arg(long)]
        font_dir: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BannerArgs {
    /// Banner title
    #[arg(short, long)]
    name: Option<String>,

    #[arg(long)]
    author: Option<String>,

    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    copyright: Option<String>,

    #[arg(long)]
    repo: Option<String>,

    /// Render the title as large-letter art
    #[arg(long)]
    stylized: bool,

    /// Fit the banner to its content
    #[arg(long, conflicts_with = "width")]
    auto_width: bool,

    /// Fixed banner width
    #[arg(short, long)]
    width: Option<usize>,

    #[arg(long)]
    font: Option<FontStyle>,

    #[arg(long, overrides_with = "no_border")]
    border: bool,

    #[arg(long, overrides_with = "border")]
    no_border: bool,

    /// Directory holding <style>.flf FIGlet fonts
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

impl BannerArgs {
    /// CLI flags layered over the config file's layout.
    fn layout(&self, base: &LayoutOptions) -> LayoutOptions {
        let mut opts = base.clone();
        opts.use_stylized_title |= self.stylized;
        if self.auto_width {
            opts.auto_width = true;
        }
        if let Some(width) = self.width {
            opts.auto_width = false;
            opts.fixed_width = Some(width);
        }
        if let Some(font) = self.font {
            opts.font_style = font;
        }
        if self.border {
            opts.show_border = Some(true);
        } else if self.no_border {
            opts.show_border = Some(false);
        }
        opts
    }

    fn metadata(&self, base: &BannerMetadata) -> BannerMetadata {
        BannerMetadata {
            author: self.author.clone(),
            company: self.company.clone(),
            copyright: self.copyright.clone(),
            repo: self.repo.clone(),
        }
        .or(base.clone())
    }
}

fn renderer(font_dir: Option<&PathBuf>, config: &Config) -> FigletRenderer {
    match font_dir.or(config.fonts.dir.as_ref()) {
        Some(dir) => FigletRenderer::with_font_dir(dir),
        None => FigletRenderer::new(),
    }
}

impl Cli {
    fn execute_show(&self, config: &Config, raw: Option<&str>, args: &BannerArgs) -> Result<()> {
        let raw = raw
            .or(config.app.version.as_deref())
            .context("No version given: pass VERSION or set app.version in the config")?;
        let version: VersionRecord = version::parse(raw)?;

        let format = self.format.unwrap_or(config.output.format);
        let pretty = self.pretty || config.output.pretty;
        info!("Rendering {version} as {format:?}");

        let banner = Banner::new(renderer(args.font_dir.as_ref(), config))
            .with_frame(config.frame.clone());
        let title = args
            .name
            .as_deref()
            .or(config.app.name.as_deref())
            .unwrap_or_default();
        let metadata = args.metadata(&config.metadata);
        let options = args.layout(&config.layout);

        let ctx = BannerContext {
            banner: &banner,
            title,
            metadata: &metadata,
            options: &options,
        };
        let rendered = output::render_version(&version, format, pretty, &ctx)?;
        println!("{rendered}");
        Ok(())
    }

    fn execute_check(raw: &str) -> Result<()> {
        match version::parse(raw) {
            Ok(version) => {
                eprintln!(
                    "{} {} {}",
                    output::bright_green("✓"),
                    output::magenta_bold(version.short()),
                    output::dim(version.to_json().version)
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("{} {e}", output::bright_red("✗"));
                Err(e.into())
            }
        }
    }

    fn execute_fonts(config: &Config, font_dir: Option<&PathBuf>) {
        println!("{}", output::fonts_table(&renderer(font_dir, config)));
    }

    pub fn execute(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Commands::Show { raw, banner } => self.execute_show(&config, raw.as_deref(), banner),
            Commands::Check { raw } => Self::execute_check(raw),
            Commands::Fonts { font_dir } => {
                Self::execute_fonts(&config, font_dir.as_ref());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_parse(args: &str) -> Result<Cli, clap::Error> {
        let argv = std::iter::once("verbanner").chain(args.split_whitespace());
        Cli::try_parse_from(argv)
    }

    fn parse(args: &str) -> Cli {
        try_parse(args).unwrap()
    }

    fn banner_args(cli: Cli) -> BannerArgs {
        match cli.command {
            Commands::Show { banner, .. } => banner,
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn width_flag_disables_auto_width() {
        let args = banner_args(parse("show 1.0.0 --width 100"));
        let opts = args.layout(&LayoutOptions::default());
        assert!(!opts.auto_width);
        assert_eq!(opts.fixed_width, Some(100));
        assert!(opts.border_visible());
    }

    #[test]
    fn flags_override_config_layout() {
        let base = LayoutOptions {
            auto_width: false,
            fixed_width: Some(60),
            show_border: Some(true),
            ..LayoutOptions::default()
        };
        let cli = parse("show 1.0.0 --auto-width --no-border --stylized --font big");
        let args = banner_args(cli);
        let opts = args.layout(&base);
        assert!(opts.auto_width);
        assert!(opts.use_stylized_title);
        assert_eq!(opts.font_style, FontStyle::Big);
        assert_eq!(opts.show_border, Some(false));
    }

    #[test]
    fn last_border_flag_wins() {
        let args = banner_args(parse("show 1.0.0 --no-border --border"));
        let opts = args.layout(&LayoutOptions::default());
        assert_eq!(opts.show_border, Some(true));
    }

    #[test]
    fn metadata_flags_fill_over_config() {
        let base = BannerMetadata {
            author: Some("Config Author".into()),
            company: Some("Acme".into()),
            ..BannerMetadata::default()
        };
        let args = banner_args(parse("show 1.0.0 --author Flag"));
        let metadata = args.metadata(&base);
        assert_eq!(metadata.author.as_deref(), Some("Flag"));
        assert_eq!(metadata.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn global_format_flag_parses() {
        let cli = parse("-f json --pretty check 1.2.3");
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.pretty);
    }

    #[test]
    fn rejects_invalid_flags() {
        assert!(try_parse("show 1.0.0 --font wingdings").is_err());
        assert!(try_parse("show 1.0.0 --width 80 --auto-width").is_err());
    }

    #[test]
    fn check_rejects_bad_versions() {
        assert!(Cli::execute_check("1.2.3:abc-beta").is_ok());
        assert!(Cli::execute_check("1.2").is_err());
    }
}
