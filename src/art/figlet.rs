use figlet_rs::FIGfont;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use super::{ArtRenderer, FontStyle};

/// Environment variable FIGlet itself reads for its font directory.
pub const FONT_DIR_ENV: &str = "FIGLET_FONTDIR";

/// Where a stock FIGlet install puts its fonts.
const SYSTEM_FONT_DIRS: [&str; 4] = [
    "/usr/share/figlet",
    "/usr/local/share/figlet",
    "/usr/local/share/figlet/fonts",
    "/opt/homebrew/share/figlet/fonts",
];

/// Where a font style would be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontAvailability {
    /// Bundled with the renderer.
    Embedded,
    /// Found as a `.flf` file in one of the font directories.
    File(PathBuf),
    /// Not available; rendering falls back to the embedded font.
    Missing,
}

/// FIGlet renderer backed by `figlet-rs`.
///
/// Only the `standard` font is embedded. Other styles are read from
/// `<dir>/<name>.flf` in the first font directory that has them; when that
/// fails the embedded font is used so a banner never aborts program startup.
///
/// Fonts are parsed once per style and shared between clones.
#[derive(Debug, Clone)]
pub struct FigletRenderer {
    font_dirs: Vec<PathBuf>,
    fonts: Arc<Mutex<HashMap<FontStyle, Arc<FIGfont>>>>,
}

impl Default for FigletRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FigletRenderer {
    /// Searches `$FIGLET_FONTDIR`, then the usual system font directories.
    pub fn new() -> Self {
        let font_dirs = std::env::var_os(FONT_DIR_ENV)
            .map(PathBuf::from)
            .into_iter()
            .chain(SYSTEM_FONT_DIRS.iter().map(PathBuf::from))
            .collect();
        Self::with_font_dirs(font_dirs)
    }

    /// Searches only `font_dir`.
    pub fn with_font_dir(font_dir: impl Into<PathBuf>) -> Self {
        Self::with_font_dirs(vec![font_dir.into()])
    }

    fn with_font_dirs(font_dirs: Vec<PathBuf>) -> Self {
        Self {
            font_dirs,
            fonts: Arc::default(),
        }
    }

    pub fn font_dirs(&self) -> &[PathBuf] {
        &self.font_dirs
    }

    pub fn availability(&self, style: FontStyle) -> FontAvailability {
        if style == FontStyle::Standard {
            return FontAvailability::Embedded;
        }
        self.font_dirs
            .iter()
            .map(|dir| dir.join(format!("{}.flf", style.name())))
            .find(|path| path.is_file())
            .map_or(FontAvailability::Missing, FontAvailability::File)
    }

    fn font(&self, style: FontStyle) -> Option<Arc<FIGfont>> {
        let mut fonts = self.fonts.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(font) = fonts.get(&style) {
            return Some(Arc::clone(font));
        }

        let font = Arc::new(self.load_font(style)?);
        fonts.insert(style, Arc::clone(&font));
        Some(font)
    }

    fn load_font(&self, style: FontStyle) -> Option<FIGfont> {
        match self.availability(style) {
            FontAvailability::File(path) => match FIGfont::from_file(&path.to_string_lossy()) {
                Ok(font) => {
                    debug!("Loaded font '{style}' from {}", path.display());
                    return Some(font);
                }
                Err(e) => warn!("Failed to load font {}: {e}", path.display()),
            },
            FontAvailability::Missing => {
                warn!("Font style '{style}' not found, using embedded standard font");
            }
            FontAvailability::Embedded => {}
        }

        FIGfont::standard()
            .inspect_err(|e| warn!("Failed to load embedded standard font: {e}"))
            .ok()
    }
}

impl ArtRenderer for FigletRenderer {
    fn render(&self, text: &str, style: FontStyle) -> String {
        let Some(font) = self.font(style) else {
            return text.to_string();
        };

        match font.convert(text) {
            Some(figure) => figure.to_string(),
            None => {
                debug!("Font '{style}' could not render {text:?}, using literal text");
                text.to_string()
            }
        }
    }
}
