use serde::{Deserialize, Serialize};

use crate::art::FontStyle;

/// How a banner is sized and decorated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LayoutOptions {
    /// Render the title as large-letter art instead of literal text
    pub use_stylized_title: bool,

    /// Size the box to fit its content; overrides `fixed_width`
    pub auto_width: bool,

    /// Box width when `auto_width` is off. Unset (or zero) grows from the
    /// frame's default width to fit the content.
    pub fixed_width: Option<usize>,

    /// Art font, only used with `use_stylized_title`
    pub font_style: FontStyle,

    /// Border visibility. Unset means bordered for fixed width, plain for auto width.
    pub show_border: Option<bool>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            use_stylized_title: false,
            auto_width: true,
            fixed_width: None,
            font_style: FontStyle::default(),
            show_border: None,
        }
    }
}

impl LayoutOptions {
    pub fn border_visible(&self) -> bool {
        self.show_border.unwrap_or(!self.auto_width)
    }

    /// Explicit width, if one was configured.
    pub fn explicit_width(&self) -> Option<usize> {
        self.fixed_width.filter(|w| *w > 0)
    }
}

/// Drawing constants for a bordered box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Frame {
    pub border: char,
    /// Spaces between the border and the content, per side
    pub padding: usize,
    /// Minimum box width when no width is configured
    pub default_width: usize,
    /// Extra per-side margin subtracted from a fixed width before wrapping art
    pub art_margin: usize,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            border: '*',
            padding: 1,
            default_width: 80,
            art_margin: 2,
        }
    }
}

impl Frame {
    /// Columns a framed row spends on border and padding.
    pub fn chrome(&self) -> usize {
        2 + 2 * self.padding
    }

    pub fn inner_width(&self, box_width: usize) -> usize {
        box_width.saturating_sub(self.chrome())
    }
}
