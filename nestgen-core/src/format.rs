//! Formatting passes applied to rendered source text.
//!
//! Rendered template output arrives with arbitrary whitespace. It is
//! normalized in two passes before it reaches disk: [`format_code`]
//! re-indents every line by bracket depth using tabs, then
//! [`format_indentation`] replaces those tabs with the configured
//! indentation and guarantees a single trailing line terminator.

use crate::Indent;

/// Re-indent source text by bracket depth.
///
/// Each line is trimmed and prefixed with one tab per open `(`, `{` or
/// `[` above it. Block-comment continuation lines (leading `*`) are
/// re-aligned with a single leading space. The result carries no
/// trailing newline.
pub fn format_code(source: &str) -> String {
    let mut depth: usize = 0;
    let lines: Vec<String> = source
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            let line = if trimmed.starts_with('*') {
                format!(" {trimmed}")
            } else {
                trimmed.to_string()
            };
            let mut level = depth;
            if line.ends_with('(') || line.ends_with('{') || line.ends_with('[') {
                depth += 1;
            }
            if (line.starts_with(')') || line.starts_with('}') || line.starts_with(']'))
                && level > 0
            {
                depth -= 1;
                level -= 1;
            }
            if line.is_empty() {
                line
            } else {
                format!("{}{}", "\t".repeat(level), line)
            }
        })
        .collect();
    lines.join("\n")
}

/// Replace tab indentation with the configured indent and terminate
/// the content with exactly one newline.
pub fn format_indentation(source: &str, indent: Indent) -> String {
    let content: Vec<String> = source
        .lines()
        .map(|line| match indent {
            Indent::Tab => line.to_string(),
            _ => line.replace('\t', indent.as_str()),
        })
        .collect();
    format!("{}\n", content.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_code_plain_text() {
        assert_eq!(format_code("nestDto"), "nestDto");
    }

    #[test]
    fn test_format_code_indents_by_brackets() {
        let raw = "export class UserDto {\n@Expose()\nname: string;\n}";
        let expected = "export class UserDto {\n\t@Expose()\n\tname: string;\n}";
        assert_eq!(format_code(raw), expected);
    }

    #[test]
    fn test_format_code_nested_brackets() {
        let raw = "a({\nb: [\n1,\n],\n});";
        let expected = "a({\n\tb: [\n\t\t1,\n\t],\n});";
        assert_eq!(format_code(raw), expected);
    }

    #[test]
    fn test_format_code_trims_incoming_whitespace() {
        let raw = "   export class UserDto {\n      name: string;\n   }";
        let expected = "export class UserDto {\n\tname: string;\n}";
        assert_eq!(format_code(raw), expected);
    }

    #[test]
    fn test_format_code_realigns_doc_comments() {
        let raw = "/**\n* A user.\n*/";
        assert_eq!(format_code(raw), "/**\n * A user.\n */");
    }

    #[test]
    fn test_format_code_keeps_blank_lines_empty() {
        let raw = "a {\n\nb;\n}";
        assert_eq!(format_code(raw), "a {\n\n\tb;\n}");
    }

    #[test]
    fn test_format_indentation_appends_terminator() {
        assert_eq!(format_indentation("nestDto", Indent::SPACE_2), "nestDto\n");
        assert_eq!(format_indentation("nestDto", Indent::TAB), "nestDto\n");
    }

    #[test]
    fn test_format_indentation_spaces() {
        let tabbed = "a {\n\tb;\n}";
        assert_eq!(
            format_indentation(tabbed, Indent::SPACE_2),
            "a {\n  b;\n}\n"
        );
        assert_eq!(
            format_indentation(tabbed, Indent::SPACE_4),
            "a {\n    b;\n}\n"
        );
    }

    #[test]
    fn test_format_indentation_tab_passthrough() {
        let tabbed = "a {\n\t\tb;\n}";
        assert_eq!(format_indentation(tabbed, Indent::TAB), "a {\n\t\tb;\n}\n");
    }
}
