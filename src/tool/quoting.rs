//! Command-line quoting.
//!
//! Arguments are rendered into a single command line the way the Windows C
//! runtime (and .NET's process layer on every platform) expects to parse it:
//! whitespace separates arguments, double quotes group them, and backslashes
//! only escape when they precede a double quote.

/// Wraps `value` in double quotes so it is parsed back as exactly one argument.
///
/// Embedded quotes are escaped with a backslash, and backslashes that end up
/// in front of a quote (embedded or the closing one) are doubled.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');

    let mut backslashes = 0usize;
    for ch in value.chars() {
        match ch {
            '\\' => backslashes += 1,
            '"' => {
                quoted.push_str(&"\\".repeat(backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            _ => {
                quoted.push_str(&"\\".repeat(backslashes));
                backslashes = 0;
                quoted.push(ch);
            }
        }
    }

    // Trailing backslashes sit in front of the closing quote.
    quoted.push_str(&"\\".repeat(backslashes * 2));
    quoted.push('"');
    quoted
}

/// Joins an argument vector into one command line, tokens separated by a space.
///
/// Tokens are emitted as-is; any quoting must already be part of the token.
#[must_use]
pub fn render_command_line(arguments: &[String]) -> String {
    arguments.join(" ")
}

/// Splits a command line into arguments.
///
/// Inverse of [`render_command_line`] for tokens produced by [`quote`]:
/// a quoted token comes back unquoted, and `""` comes back as one empty
/// argument.
#[must_use]
pub fn split_command_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            ' ' | '\t' if !in_quotes => {
                if in_token {
                    arguments.push(std::mem::take(&mut current));
                    in_token = false;
                }
                i += 1;
            }
            '\\' => {
                let start = i;
                while i < chars.len() && chars[i] == '\\' {
                    i += 1;
                }
                let count = i - start;
                in_token = true;
                if i < chars.len() && chars[i] == '"' {
                    current.push_str(&"\\".repeat(count / 2));
                    if count % 2 == 1 {
                        current.push('"');
                        i += 1;
                    }
                } else {
                    current.push_str(&"\\".repeat(count));
                }
            }
            '"' => {
                in_token = true;
                if in_quotes && chars.get(i + 1) == Some(&'"') {
                    current.push('"');
                    i += 2;
                } else {
                    in_quotes = !in_quotes;
                    i += 1;
                }
            }
            _ => {
                in_token = true;
                current.push(ch);
                i += 1;
            }
        }
    }

    if in_token {
        arguments.push(current);
    }

    arguments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(value: &str) -> Vec<String> {
        split_command_line(&quote(value))
    }

    #[test]
    fn test_quote_plain_value() {
        assert_eq!(quote("release"), "\"release\"");
        assert_eq!(quote("/tmp/proj"), "\"/tmp/proj\"");
    }

    #[test]
    fn test_quote_empty_value() {
        assert_eq!(quote(""), "\"\"");
        assert_eq!(round_trip(""), vec![String::new()]);
    }

    #[test]
    fn test_quote_windows_path_with_space_round_trips() {
        assert_eq!(quote(r"C:\My Project"), r#""C:\My Project""#);
        assert_eq!(round_trip(r"C:\My Project"), vec![r"C:\My Project"]);
    }

    #[test]
    fn test_quote_trailing_backslash() {
        assert_eq!(quote(r"C:\My Project\"), r#""C:\My Project\\""#);
        assert_eq!(round_trip(r"C:\My Project\"), vec![r"C:\My Project\"]);
    }

    #[test]
    fn test_quote_embedded_quotes() {
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(round_trip(r#"say "hi""#), vec![r#"say "hi""#]);
        assert_eq!(round_trip(r#"a\"b"#), vec![r#"a\"b"#]);
    }

    #[test]
    fn test_split_plain_tokens() {
        assert_eq!(
            split_command_line("write  2.3.0-beta\t-n"),
            vec!["write", "2.3.0-beta", "-n"]
        );
        assert!(split_command_line("   ").is_empty());
    }

    #[test]
    fn test_split_empty_quoted_token() {
        assert_eq!(split_command_line(r#"label """#), vec!["label", ""]);
    }

    #[test]
    fn test_split_backslashes_without_quote_are_literal() {
        assert_eq!(split_command_line(r"C:\dir\\sub"), vec![r"C:\dir\\sub"]);
    }

    #[test]
    fn test_render_then_split_list_command() {
        let arguments = vec![
            "list".to_string(),
            "-d".to_string(),
            quote("/tmp/my proj"),
            "-p".to_string(),
            quote("ci"),
        ];
        let line = render_command_line(&arguments);
        assert_eq!(line, r#"list -d "/tmp/my proj" -p "ci""#);
        assert_eq!(
            split_command_line(&line),
            vec!["list", "-d", "/tmp/my proj", "-p", "ci"]
        );
    }
}
