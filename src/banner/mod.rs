mod layout;
mod metadata;
mod options;

pub use layout::{center_text, layout, visible_width};
pub use metadata::BannerMetadata;
pub use options::{Frame, LayoutOptions};

use crate::art::{produce_title_lines, ArtRenderer, FigletRenderer};
use crate::version::VersionRecord;

/// Renders complete banners: title production followed by layout.
#[derive(Debug, Clone, Default)]
pub struct Banner<R = FigletRenderer> {
    renderer: R,
    frame: Frame,
}

impl<R: ArtRenderer> Banner<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            frame: Frame::default(),
        }
    }

    #[must_use]
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Width available to stylized art before it must wrap.
    ///
    /// Only a fixed width constrains art; auto width lets it take its natural size.
    fn art_constraint(&self, opts: &LayoutOptions) -> Option<usize> {
        if opts.auto_width {
            return None;
        }
        let width = opts.explicit_width()?;
        let margins = self.frame.chrome() + 2 * self.frame.art_margin;
        Some(width.saturating_sub(margins))
    }

    pub fn title_lines(&self, title: &str, opts: &LayoutOptions) -> Vec<String> {
        let lines = produce_title_lines(
            title,
            self.art_constraint(opts),
            opts.font_style,
            opts.use_stylized_title,
            &self.renderer,
        );
        if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        }
    }

    pub fn render(
        &self,
        title: &str,
        version: &VersionRecord,
        metadata: &BannerMetadata,
        opts: &LayoutOptions,
    ) -> String {
        let title_lines = self.title_lines(title, opts);
        layout(&title_lines, version, metadata, opts, &self.frame)
    }
}

/// Literal-title, auto-width banner without a border.
pub fn simple_banner(title: &str, version: &VersionRecord, metadata: &BannerMetadata) -> String {
    Banner::new(FigletRenderer::new())
        .render(title, version, metadata, &LayoutOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::FontStyle;

    /// Renders each character as a 3-wide block over two rows.
    fn blocky(text: &str, _style: FontStyle) -> String {
        let top: String = text.chars().map(|c| format!("{c}{c}{c}")).collect();
        let bottom = "-".repeat(top.chars().count());
        format!("{top}\n{bottom}\n")
    }

    fn stylized(auto_width: bool, fixed_width: Option<usize>) -> LayoutOptions {
        LayoutOptions {
            use_stylized_title: true,
            auto_width,
            fixed_width,
            font_style: FontStyle::Big,
            show_border: None,
        }
    }

    #[test]
    fn auto_width_art_is_not_constrained() {
        let banner = Banner::new(blocky);
        let lines = banner.title_lines("ab cd ef", &stylized(true, Some(20)));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 24);
    }

    #[test]
    fn fixed_width_art_wraps_inside_margins() {
        // 40 - 4 chrome - 4 margin leaves 32 columns: "ab cd ef" renders 24,
        // adding " gh" makes 33.
        let banner = Banner::new(blocky);
        let opts = stylized(false, Some(40));
        let lines = banner.title_lines("ab cd ef gh", &opts);
        assert_eq!(
            lines,
            vec![
                "aaabbb   cccddd   eeefff",
                "------------------------",
                "",
                "ggghhh",
                "------",
            ]
        );
    }

    #[test]
    fn unset_width_art_is_not_constrained() {
        let banner = Banner::new(blocky);
        let lines = banner.title_lines("ab cd ef gh", &stylized(false, None));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn blank_stylized_title_becomes_one_empty_row() {
        let banner = Banner::new(blocky);
        let lines = banner.title_lines("   ", &stylized(true, None));
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn renders_stylized_banner_in_fixed_box() {
        let banner = Banner::new(blocky);
        let out = banner.render(
            "App",
            &VersionRecord::new(2, 0, 0).with_suffix("beta"),
            &BannerMetadata::default(),
            &stylized(false, Some(30)),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "*".repeat(30));
        assert!(lines.iter().all(|l| l.chars().count() == 30));
        let title_row = format!("* {}AAApppppp{} *", " ".repeat(8), " ".repeat(9));
        assert!(lines.contains(&title_row.as_str()));
        assert!(lines.iter().any(|l| l.contains("v2.0.0 [BETA]")));
    }

    #[test]
    fn wrapped_art_keeps_blank_row_inside_border() {
        let banner = Banner::new(blocky);
        let out = banner.render(
            "ab cd ef gh",
            &VersionRecord::new(1, 0, 0),
            &BannerMetadata::default(),
            &stylized(false, Some(40)),
        );
        let lines: Vec<&str> = out.lines().collect();
        let first = lines.iter().position(|l| l.contains("aaabbb")).unwrap();

        assert!(lines[first + 1].contains("------------------------"));
        assert_eq!(lines[first + 2], format!("*{}*", " ".repeat(38)));
        assert!(lines[first + 3].contains("ggghhh"));
        assert!(lines.iter().all(|l| l.chars().count() == 40));
    }

    #[test]
    fn simple_banner_uses_literal_title() {
        let out = simple_banner(
            "Microservice API",
            &VersionRecord::new(3, 5, 7).with_hash("ABC1234"),
            &BannerMetadata {
                author: Some("Development Team".into()),
                copyright: Some("2025".into()),
                ..BannerMetadata::default()
            },
        );
        assert_eq!(
            out,
            [
                "Microservice API",
                "",
                " v3.5.7 ABC1234 ",
                "",
                "Author:    Development Team",
                "Copyright: 2025",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn custom_frame_flows_through_render() {
        let banner = Banner::new(blocky).with_frame(Frame {
            border: '=',
            ..Frame::default()
        });
        let opts = LayoutOptions {
            show_border: Some(true),
            ..LayoutOptions::default()
        };
        let out = banner.render(
            "x",
            &VersionRecord::new(1, 0, 0),
            &BannerMetadata::default(),
            &opts,
        );
        assert!(out.starts_with("=========="));
        assert_eq!(banner.frame().border, '=');
    }
}
