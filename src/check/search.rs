//! Literal substring search over asset contents.

/// Returns the 1-based line of the first occurrence of `needle` in `content`.
///
/// The match is exact and case-sensitive with no word-boundary anchoring, so
/// `window.ApertureClientUploaderX` contains `window.ApertureClientUploader`.
pub fn first_occurrence_line(content: &str, needle: &str) -> Option<usize> {
    content
        .find(needle)
        .map(|offset| content[..offset].matches('\n').count() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEEDLE: &str = "window.ApertureClientUploader";

    #[test]
    fn test_match_on_first_line() {
        let content = "const x = 1; window.ApertureClientUploader = foo;";
        assert_eq!(first_occurrence_line(content, NEEDLE), Some(1));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_occurrence_line("const x = 1;", NEEDLE), None);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let content = "WINDOW.ApertureClientUploader = foo;";
        assert_eq!(first_occurrence_line(content, NEEDLE), None);
    }

    #[test]
    fn test_match_ignores_word_boundaries() {
        let content = "window.ApertureClientUploaderX = foo;";
        assert_eq!(first_occurrence_line(content, NEEDLE), Some(1));
    }

    #[test]
    fn test_reports_line_of_first_occurrence() {
        let content = "(function () {\n  'use strict';\n  window.ApertureClientUploader = u;\n})();\nwindow.ApertureClientUploader;\n";
        assert_eq!(first_occurrence_line(content, NEEDLE), Some(3));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "a\r\nb\r\nwindow.ApertureClientUploader\r\n";
        assert_eq!(first_occurrence_line(content, NEEDLE), Some(3));
    }

    #[test]
    fn test_match_split_across_lines_is_not_a_match() {
        let content = "window.\nApertureClientUploader";
        assert_eq!(first_occurrence_line(content, NEEDLE), None);
    }
}
