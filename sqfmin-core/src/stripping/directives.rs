//! Directive isolation
//!
//! Second pass of the stripper. Every line that starts with `#` is wrapped in
//! line feeds so it ends up alone on its line. All other lines are glued
//! together with no separator, which is where most of the size reduction comes
//! from: after this pass the only line feeds left are the ones around
//! directives.

/// Isolate directive lines and join everything else
pub fn isolate_directives(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 2);

    for line in split_lines(text) {
        if line.starts_with('#') {
            output.push('\n');
            output.push_str(line);
            output.push('\n');
        } else {
            join_line(&mut output, line);
        }
    }

    output
}

/// Append a non-directive line without letting the seam form a comment marker
///
/// `a/` followed by `/b` would otherwise read as `a//b` on the next run.
fn join_line(output: &mut String, line: &str) {
    if output.ends_with('/') && (line.starts_with('/') || line.starts_with('*')) {
        output.push(' ');
    }
    output.push_str(line);
}

/// Split on `\n`, `\r\n` and lone `\r`
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_plain_lines() {
        assert_eq!(isolate_directives("a = 1;\nb = 2;\n"), "a = 1;b = 2;");
    }

    #[test]
    fn test_wraps_directive() {
        assert_eq!(
            isolate_directives("#define A 1\nx = A;"),
            "\n#define A 1\nx = A;"
        );
    }

    #[test]
    fn test_directive_between_content() {
        assert_eq!(
            isolate_directives("a;\n#ifdef B\nb;\n#endif\nc;"),
            "a;\n#ifdef B\nb;\n#endif\nc;"
        );
    }

    #[test]
    fn test_adjacent_directives_double_up() {
        assert_eq!(isolate_directives("#a\n#b"), "\n#a\n\n#b\n");
    }

    #[test]
    fn test_indented_hash_is_not_a_directive() {
        assert_eq!(isolate_directives("x;\n  #a"), "x;  #a");
    }

    #[test]
    fn test_crlf_and_lone_cr() {
        assert_eq!(isolate_directives("a;\r\n#b\r\nc;\rd;"), "a;\n#b\nc;d;");
    }

    #[test]
    fn test_join_does_not_form_comment_markers() {
        assert_eq!(isolate_directives("a /\n/ b"), "a / / b");
        assert_eq!(isolate_directives("a/\n/b"), "a/ /b");
        assert_eq!(isolate_directives("a/\n*b"), "a/ *b");
        assert_eq!(isolate_directives("a*\n/b"), "a*/b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(isolate_directives(""), "");
    }
}
