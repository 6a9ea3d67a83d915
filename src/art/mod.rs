//! Large-letter title rendering.
//!
//! The banner treats rendering as a black box behind [`ArtRenderer`]. The
//! concrete [`FigletRenderer`] draws FIGlet fonts; tests plug in closures.

mod figlet;
mod title;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use figlet::{FigletRenderer, FontAvailability, FONT_DIR_ENV};
pub use title::{max_line_width, produce_title_lines, split_literal_title};

/// Renders `text` as multi-line large-letter art in the given style.
///
/// Implementations must be deterministic: the same input always yields the
/// same block, since word-wrapping renders candidates repeatedly.
pub trait ArtRenderer {
    fn render(&self, text: &str, style: FontStyle) -> String;
}

impl<F> ArtRenderer for F
where
    F: Fn(&str, FontStyle) -> String,
{
    fn render(&self, text: &str, style: FontStyle) -> String {
        self(text, style)
    }
}

macro_rules! font_styles {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Named FIGlet font styles: the fonts a stock FIGlet install ships.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum FontStyle {
            $($variant,)+
        }

        impl FontStyle {
            pub const ALL: &'static [FontStyle] = &[$(FontStyle::$variant,)+];

            /// FIGlet font name, which is also the `.flf` file stem.
            pub fn name(self) -> &'static str {
                match self {
                    $(FontStyle::$variant => $name,)+
                }
            }
        }
    };
}

font_styles! {
    Banner => "banner",
    Big => "big",
    Block => "block",
    Bubble => "bubble",
    Digital => "digital",
    Lean => "lean",
    Mini => "mini",
    Script => "script",
    Shadow => "shadow",
    Slant => "slant",
    Small => "small",
    Smscript => "smscript",
    Smshadow => "smshadow",
    Smslant => "smslant",
    Standard => "standard",
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::Standard
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown font style: {s}"))
    }
}

impl TryFrom<String> for FontStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontStyle> for String {
    fn from(style: FontStyle) -> Self {
        style.name().to_string()
    }
}
