use log::debug;
use std::collections::HashMap;

use super::{ArtRenderer, FontStyle};

/// Resolves a banner title into display rows.
///
/// Literal titles are split with [`split_literal_title`]. Stylized titles go
/// through `renderer`; when `constraint_width` is set and the full render is
/// wider, words are wrapped greedily by their *rendered* width, with one blank
/// row between wrapped blocks. Blocks that render blank add no rows.
pub fn produce_title_lines<R>(
    title: &str,
    constraint_width: Option<usize>,
    style: FontStyle,
    use_stylized: bool,
    renderer: &R,
) -> Vec<String>
where
    R: ArtRenderer + ?Sized,
{
    if !use_stylized {
        return split_literal_title(title);
    }
    if title.trim().is_empty() {
        return Vec::new();
    }

    let mut cache = RenderCache::new(renderer, style);
    let full = cache.render(title);

    let limit = match constraint_width.filter(|w| *w > 0) {
        Some(limit) if max_line_width(&full) > limit => limit,
        _ => return trim_blank_rows(&full),
    };

    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() <= 1 {
        return trim_blank_rows(&full);
    }

    let text_lines = wrap_words(&words, limit, &mut cache);
    debug!(
        "Wrapped title into {} line(s) to fit {limit} columns",
        text_lines.len()
    );

    let mut rows = Vec::new();
    for line in &text_lines {
        let block = trim_blank_rows(&cache.render(line));
        if block.is_empty() {
            continue;
        }
        if !rows.is_empty() {
            rows.push(String::new());
        }
        rows.extend(block);
    }
    rows
}

fn wrap_words<R>(words: &[&str], limit: usize, cache: &mut RenderCache<'_, R>) -> Vec<String>
where
    R: ArtRenderer + ?Sized,
{
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for &word in words {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {word}", current.join(" "))
        };

        if max_line_width(&cache.render(&candidate)) > limit && !current.is_empty() {
            lines.push(current.join(" "));
            current = vec![word];
        } else {
            current.push(word);
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// Memoizes renders within one title pass.
struct RenderCache<'a, R: ?Sized> {
    renderer: &'a R,
    style: FontStyle,
    rendered: HashMap<String, String>,
}

impl<'a, R> RenderCache<'a, R>
where
    R: ArtRenderer + ?Sized,
{
    fn new(renderer: &'a R, style: FontStyle) -> Self {
        Self {
            renderer,
            style,
            rendered: HashMap::new(),
        }
    }

    fn render(&mut self, text: &str) -> String {
        if let Some(hit) = self.rendered.get(text) {
            return hit.clone();
        }
        let art = self.renderer.render(text, self.style);
        self.rendered.insert(text.to_string(), art.clone());
        art
    }
}

/// Splits a literal title into rows.
///
/// Line endings are normalized and enclosing blank rows dropped; interior
/// blank rows are kept. Never returns an empty vector.
pub fn split_literal_title(title: &str) -> Vec<String> {
    let normalized = title.replace("\r\n", "\n").replace('\r', "");
    let lines = trim_blank_rows(&normalized);
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn trim_blank_rows(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |i| i + 1);

    lines[start..end]
        .iter()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

/// Widest row of a rendered block, in codepoints.
pub fn max_line_width(text: &str) -> usize {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r').chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Two rows per text: the text itself, then an underline twice as wide.
    fn doubling(text: &str, _style: FontStyle) -> String {
        format!("\n{text}\n{}\n\n", "=".repeat(text.chars().count() * 2))
    }

    mod literal {
        use super::*;

        #[test]
        fn trims_enclosing_blank_rows_only() {
            let lines = split_literal_title("\n  \nMONEYGROW AI\n\nBACKEND SERVER\n\t\n");
            assert_eq!(lines, vec!["MONEYGROW AI", "", "BACKEND SERVER"]);
        }

        #[test]
        fn normalizes_line_endings() {
            let lines = split_literal_title("A\r\nB\rC\r\n");
            assert_eq!(lines, vec!["A", "BC"]);
        }

        #[test]
        fn empty_title_yields_one_empty_row() {
            assert_eq!(split_literal_title(""), vec![String::new()]);
            assert_eq!(split_literal_title(" \n\t\n "), vec![String::new()]);
        }

        #[test]
        fn literal_mode_never_calls_renderer() {
            let renderer = |_: &str, _: FontStyle| -> String { panic!("renderer called") };
            let lines = produce_title_lines("MyApp", Some(3), FontStyle::Slant, false, &renderer);
            assert_eq!(lines, vec!["MyApp"]);
        }
    }

    mod stylized {
        use super::*;

        #[test]
        fn blank_title_renders_nothing() {
            let calls = RefCell::new(0);
            let renderer = |text: &str, style: FontStyle| {
                *calls.borrow_mut() += 1;
                doubling(text, style)
            };
            let lines = produce_title_lines("  ", None, FontStyle::Big, true, &renderer);
            assert!(lines.is_empty());
            assert_eq!(*calls.borrow(), 0);
        }

        #[test]
        fn unconstrained_render_is_trimmed() {
            let lines = produce_title_lines("App", None, FontStyle::Big, true, &doubling);
            assert_eq!(lines, vec!["App", "======"]);
        }

        #[test]
        fn zero_constraint_means_unconstrained() {
            let lines = produce_title_lines("a b c", Some(0), FontStyle::Big, true, &doubling);
            assert_eq!(lines, vec!["a b c", "=========="]);
        }

        #[test]
        fn fitting_render_is_not_wrapped() {
            let lines = produce_title_lines("aa bb", Some(10), FontStyle::Big, true, &doubling);
            assert_eq!(lines, vec!["aa bb", "=========="]);
        }

        #[test]
        fn wraps_after_two_words_when_prefix_fits() {
            // "aa bb cc" renders 16 wide, "aa bb" renders 10 wide.
            let lines = produce_title_lines("aa bb cc", Some(12), FontStyle::Big, true, &doubling);
            assert_eq!(lines, vec!["aa bb", "==========", "", "cc", "===="]);
        }

        #[test]
        fn wrap_is_keyed_on_rendered_width() {
            // Character count alone would fit "ab cd" (5) within 6.
            let lines = produce_title_lines("ab cd", Some(6), FontStyle::Big, true, &doubling);
            assert_eq!(lines, vec!["ab", "====", "", "cd", "===="]);
        }

        #[test]
        fn oversized_single_word_is_kept_whole() {
            let lines = produce_title_lines("enormous", Some(4), FontStyle::Big, true, &doubling);
            assert_eq!(lines, vec!["enormous", "================"]);
        }

        #[test]
        fn oversized_word_gets_its_own_line() {
            let lines =
                produce_title_lines("a enormous b", Some(6), FontStyle::Big, true, &doubling);
            assert_eq!(
                lines,
                vec!["a", "==", "", "enormous", "================", "", "b", "=="]
            );
        }

        /// Like `doubling`, but "zz" renders as whitespace only.
        fn blank_zz(text: &str, style: FontStyle) -> String {
            if text == "zz" {
                "\n   \n  \n".to_string()
            } else {
                doubling(text, style)
            }
        }

        #[test]
        fn blank_block_adds_no_separator() {
            let lines = produce_title_lines("aa zz bb", Some(4), FontStyle::Big, true, &blank_zz);
            assert_eq!(lines, vec!["aa", "====", "", "bb", "===="]);
        }

        #[test]
        fn trailing_blank_block_leaves_no_blank_row() {
            let lines = produce_title_lines("aa zz", Some(4), FontStyle::Big, true, &blank_zz);
            assert_eq!(lines, vec!["aa", "===="]);
        }

        #[test]
        fn style_is_forwarded_to_renderer() {
            let renderer = |text: &str, style: FontStyle| format!("{style}|{text}");
            let lines = produce_title_lines("x", None, FontStyle::Smshadow, true, &renderer);
            assert_eq!(lines, vec!["smshadow|x"]);
        }

        #[test]
        fn identical_renders_are_memoized() {
            let calls = RefCell::new(Vec::new());
            let renderer = |text: &str, style: FontStyle| {
                calls.borrow_mut().push(text.to_string());
                doubling(text, style)
            };
            produce_title_lines("aa bb cc", Some(12), FontStyle::Big, true, &renderer);

            let calls = calls.borrow();
            let mut unique = calls.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(calls.len(), unique.len());
        }
    }

    #[test]
    fn max_line_width_counts_codepoints() {
        assert_eq!(max_line_width("██╗\n█\n"), 3);
        assert_eq!(max_line_width(""), 0);
    }
}
