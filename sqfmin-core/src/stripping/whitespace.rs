//! Whitespace collapsing
//!
//! Third and fourth passes of the stripper. Works line by line:
//!
//! - A run of spaces and tabs is one unit. Tabs always go. A run holding two or
//!   more spaces goes entirely, a run holding one space keeps it.
//! - Whitespace at the end of a line goes, so blank-looking lines end up empty.
//! - Two or more line feeds in a row collapse to one.
//!
//! Removing a run must not change how the next run reads the text. When the
//! gap separates `/` from `/` or `*`, or when it is all that keeps a `#` away
//! from the start of a line, a single space is left in its place.

/// Collapse indentation, blank lines and trailing whitespace
pub fn collapse_whitespace(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for (index, line) in text.split('\n').enumerate() {
        // Empty lines add nothing, so line feed runs collapse as we go
        if index > 0 && !output.ends_with('\n') {
            output.push('\n');
        }
        collapse_line(&mut output, line);
    }

    output
}

/// Remove a single leading line feed
pub fn trim_leading_newline(mut text: String) -> String {
    if text.starts_with('\n') {
        text.remove(0);
    }
    text
}

fn collapse_line(output: &mut String, line: &str) {
    let line_start = output.len();
    let mut rest = line;

    while let Some(start) = rest.find(is_blank) {
        let (before, tail) = rest.split_at(start);
        output.push_str(before);

        let run_len = tail.find(|c: char| !is_blank(c)).unwrap_or(tail.len());
        let (run, after) = tail.split_at(run_len);
        rest = after;

        if after.is_empty() {
            // Trailing whitespace
            break;
        }

        let spaces = run.chars().filter(|&c| c == ' ').count();
        let at_line_start = output.len() == line_start;
        let forms_marker =
            output.ends_with('/') && (after.starts_with('/') || after.starts_with('*'));
        let exposes_hash = at_line_start && after.starts_with('#');

        if spaces == 1 || forms_marker || exposes_hash {
            output.push(' ');
        }
    }

    output.push_str(rest);
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_tabs_and_space_runs() {
        assert_eq!(collapse_whitespace("a\t\tb  c"), "abc");
    }

    #[test]
    fn test_keeps_single_spaces() {
        assert_eq!(collapse_whitespace("_x = _y + 1;"), "_x = _y + 1;");
    }

    #[test]
    fn test_tab_next_to_single_space() {
        assert_eq!(collapse_whitespace("a\t b"), "a b");
        assert_eq!(collapse_whitespace("a \t b"), "ab");
    }

    #[test]
    fn test_strips_trailing_whitespace() {
        assert_eq!(collapse_whitespace("a \n#b \t\nc "), "a\n#b\nc");
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(collapse_whitespace("#a\n\n\n#b\n"), "#a\n#b\n");
        assert_eq!(collapse_whitespace("#a\n  \n\t\n#b"), "#a\n#b");
    }

    #[test]
    fn test_leading_line_feed_survives_collapse() {
        assert_eq!(collapse_whitespace("\n\n#a\n"), "\n#a\n");
    }

    #[test]
    fn test_indentation_is_removed() {
        assert_eq!(collapse_whitespace("#a\n    b;"), "#a\nb;");
        assert_eq!(collapse_whitespace("#a\n b;"), "#a\n b;");
    }

    #[test]
    fn test_does_not_form_comment_markers() {
        assert_eq!(collapse_whitespace("a /  / b"), "a / / b");
        assert_eq!(collapse_whitespace("a/\t*b"), "a/ *b");
        assert_eq!(collapse_whitespace("a*\t/b"), "a*/b");
    }

    #[test]
    fn test_does_not_expose_hash_at_line_start() {
        assert_eq!(collapse_whitespace("#a\n  #b"), "#a\n #b");
        assert_eq!(collapse_whitespace("\t#b"), " #b");
        assert_eq!(collapse_whitespace("x  #b"), "x#b");
    }

    #[test]
    fn test_trim_leading_newline() {
        assert_eq!(trim_leading_newline("\n#a\nb".to_string()), "#a\nb");
        assert_eq!(trim_leading_newline("a\n".to_string()), "a\n");
        assert_eq!(trim_leading_newline(String::new()), "");
    }
}
