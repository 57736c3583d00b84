//! Pure text wrapping utilities and dimensional constants for the ComposerBox.
//!
//! Also home to [`WrapProbe`], the terminal's answer to "how tall is this text".

use crate::core::height::{Constraints, HeightProbe};

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Build textwrap options configured for the composer inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text, accounting for trailing newlines
/// that textwrap may not represent as empty lines.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = u16::try_from(lines.len()).unwrap_or(u16::MAX).max(1);

    // textwrap doesn't always produce an empty trailing line for a trailing newline
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count = count.saturating_add(1);
    }

    count
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Measures text the way the bordered composer box lays it out: wrapped
/// lines at the inner width plus the top and bottom border.
#[derive(Debug, Default, Clone, Copy)]
pub struct WrapProbe;

impl HeightProbe for WrapProbe {
    fn measure_content_height(&self, text: &str, constraints: &Constraints) -> u16 {
        wrap_line_count(text, inner_width(constraints.width)).saturating_add(VERTICAL_OVERHEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- wrap_line_count -------------------------------------------------

    #[test]
    fn wrap_line_count_empty_string() {
        assert_eq!(wrap_line_count("", 80), 1);
    }

    #[test]
    fn wrap_line_count_zero_width() {
        assert_eq!(wrap_line_count("hello", 0), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        // 10 chars into a 5-wide column -> 2 lines
        assert_eq!(wrap_line_count("aaaaaaaaaa", 5), 2);
    }

    #[test]
    fn wrap_line_count_trailing_newline_adds_line() {
        assert_eq!(wrap_line_count("hello\n", 80), 2);
    }

    #[test]
    fn wrap_line_count_saturates_on_huge_input() {
        assert_eq!(wrap_line_count(&"\n".repeat(70_000), 80), u16::MAX);
    }

    #[test]
    fn wrap_line_count_explicit_newlines() {
        assert_eq!(wrap_line_count("a\nb\nc", 80), 3);
    }

    // -- char boundaries -------------------------------------------------

    #[test]
    fn prev_char_boundary_multibyte() {
        // "café": 'é' starts at byte 3 and is two bytes long
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
    }

    #[test]
    fn next_char_boundary_emoji() {
        let s = "a🔥b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(next_char_boundary(s, 5), 6);
    }

    // -- WrapProbe -------------------------------------------------------

    #[test]
    fn probe_empty_is_one_line_plus_border() {
        let c = Constraints { width: 40 };
        assert_eq!(WrapProbe.measure_content_height("", &c), 3);
    }

    #[test]
    fn probe_counts_wrapped_lines() {
        // inner width 10 - 4 = 6; twelve chars wrap onto two lines
        let c = Constraints { width: 10 };
        assert_eq!(WrapProbe.measure_content_height("abcdefghijkl", &c), 4);
    }

    #[test]
    fn measured_height_saturates_instead_of_wrapping_around() {
        let c = Constraints { width: 40 };
        assert_eq!(WrapProbe.measure_content_height(&"\n".repeat(65_536), &c), u16::MAX);
        // 65,535 wrapped lines plus the border would overflow
        assert_eq!(WrapProbe.measure_content_height(&"\n".repeat(65_534), &c), u16::MAX);
    }

    #[test]
    fn probe_counts_newlines() {
        let c = Constraints { width: 40 };
        assert_eq!(WrapProbe.measure_content_height("one\ntwo\nthree", &c), 5);
    }
}
