use log::debug;

use super::{BannerMetadata, Frame, LayoutOptions};
use crate::version::VersionRecord;

/// Lays out a banner from already produced title rows.
///
/// Row order is fixed: top border, blank, title, blank, version, blank,
/// metadata, blank (only with metadata), bottom border. Borders and the
/// leading blank row exist only when the border is visible. Content that does
/// not fit a fixed width is truncated, never rejected. A fixed width is never
/// narrower than the frame chrome.
pub fn layout(
    title_lines: &[String],
    version: &VersionRecord,
    metadata: &BannerMetadata,
    opts: &LayoutOptions,
    frame: &Frame,
) -> String {
    let bordered = opts.border_visible();
    let version_line = version.banner_line();
    let metadata_lines = metadata.lines();

    let max_title_width = longest_line_width(title_lines);
    let content_width = max_title_width
        .max(visible_width(&version_line))
        .max(longest_line_width(&metadata_lines));

    let box_width = if opts.auto_width {
        content_width + frame.chrome()
    } else if let Some(width) = opts.explicit_width() {
        width.max(frame.chrome())
    } else {
        (content_width + frame.chrome()).max(frame.default_width)
    };
    debug!("Banner box width {box_width} (content {content_width}, bordered: {bordered})");

    let inner_width = frame.inner_width(box_width);
    let mut rows = Vec::with_capacity(title_lines.len() + metadata_lines.len() + 8);
    let blank = |rows: &mut Vec<String>| {
        rows.push(if bordered {
            frame_row("", box_width, frame)
        } else {
            String::new()
        });
    };

    if bordered {
        rows.push(border_row(box_width, frame));
        blank(&mut rows);
    }

    for line in title_lines {
        rows.push(if bordered {
            frame_row(&center_text(line, inner_width), box_width, frame)
        } else {
            line.clone()
        });
    }
    blank(&mut rows);

    rows.push(if bordered {
        frame_row(&center_text(&version_line, inner_width), box_width, frame)
    } else {
        center_text(&version_line, max_title_width)
    });
    blank(&mut rows);

    for line in &metadata_lines {
        rows.push(if bordered {
            frame_row(line, box_width, frame)
        } else {
            line.clone()
        });
    }
    if !metadata_lines.is_empty() {
        blank(&mut rows);
    }

    if bordered {
        rows.push(border_row(box_width, frame));
    }

    rows.join("\n")
}

/// Codepoints in `line`, ignoring trailing spaces and tabs.
pub fn visible_width(line: &str) -> usize {
    line.trim_end_matches([' ', '\t']).chars().count()
}

fn longest_line_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(0)
}

/// Centers `text` within `width` columns; text already that wide is returned as is.
///
/// An odd leftover column goes to the right.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = visible_width(text);
    if text_width >= width {
        return text.to_string();
    }

    let remaining = width - text_width;
    let left = remaining / 2;
    let right = remaining - left;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text.trim_end_matches([' ', '\t']),
        " ".repeat(right)
    )
}

fn border_row(box_width: usize, frame: &Frame) -> String {
    std::iter::repeat(frame.border).take(box_width).collect()
}

/// Wraps `content` in border and padding, truncating or padding it to the
/// inner width on codepoint boundaries.
fn frame_row(content: &str, box_width: usize, frame: &Frame) -> String {
    let inner_width = frame.inner_width(box_width);
    let mut inner: String = content.chars().take(inner_width).collect();
    let used = inner.chars().count();
    inner.extend(std::iter::repeat(' ').take(inner_width - used));

    let padding = " ".repeat(frame.padding);
    format!(
        "{border}{padding}{inner}{padding}{border}",
        border = frame.border
    )
}
