use crate::constants::markup::{COMMENT_PREFIX, CONTROL_CHAR};

/// Classification of a single source line
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// `.\"` comment, produces no output
    Comment,
    /// Dot-prefixed macro invocation
    Macro(Invocation),
    /// Anything else
    Text(&'a str),
}

/// A parsed macro call: `.NAME arg "quoted arg" ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

/// Classifies a raw input line.
///
/// # Examples
/// ```
/// use man2md::parser::{classify, Line};
///
/// assert_eq!(classify(".\\\" a comment"), Line::Comment);
/// assert_eq!(classify("plain text"), Line::Text("plain text"));
/// match classify(".SH \"SEE ALSO\"") {
///     Line::Macro(invocation) => {
///         assert_eq!(invocation.name, "SH");
///         assert_eq!(invocation.args, vec!["SEE ALSO"]);
///     }
///     _ => panic!("expected a macro"),
/// }
/// ```
pub fn classify(line: &str) -> Line<'_> {
    if line.starts_with(COMMENT_PREFIX) {
        Line::Comment
    } else if line.starts_with(CONTROL_CHAR) {
        Line::Macro(Invocation::parse(line))
    } else {
        Line::Text(line)
    }
}

impl Invocation {
    /// Parses a macro line. The leading control character is dropped from the name.
    pub fn parse(line: &str) -> Self {
        let words: Vec<&str> = line.split(' ').collect();
        let name = words[0]
            .strip_prefix(CONTROL_CHAR)
            .unwrap_or(words[0])
            .to_string();

        Self {
            name,
            args: parse_arguments(&words[1..]),
        }
    }
}

/// Splits macro arguments into bare words and double-quoted groups.
///
/// A quoted group runs until a word ending in `"`. Words inside a group are
/// rejoined with single spaces, so repeated spaces survive as empty words.
/// An unterminated group swallows the rest of the line.
fn parse_arguments(words: &[&str]) -> Vec<String> {
    let mut args = Vec::new();
    let mut words = words.iter();

    while let Some(&word) = words.next() {
        if word.starts_with('"') {
            let mut quoted = vec![word];
            let mut terminated = word.len() > 1 && word.ends_with('"');

            while !terminated {
                match words.next() {
                    Some(&next) => {
                        quoted.push(next);
                        terminated = next.ends_with('"');
                    }
                    None => break,
                }
            }
            args.push(strip_quotes(&quoted.join(" "), terminated));
        } else if !word.is_empty() {
            args.push(word.to_string());
        }
    }
    args
}

fn strip_quotes(group: &str, terminated: bool) -> String {
    let inner = &group[1..];
    if terminated {
        inner.strip_suffix('"').unwrap_or(inner).to_string()
    } else {
        inner.to_string()
    }
}
