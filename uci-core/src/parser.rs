use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::section::{OptionValue, Package, Section};

/// Errors that can occur while parsing UCI text into a [`Package`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read input file.
    #[error("failed to read UCI file: {0}")]
    Io(#[from] std::io::Error),
    /// A line did not follow `config` / `option` / `list` syntax.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

impl ParseError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// Parse UCI text into a [`Package`] with the given name.
pub fn parse(text: &str, package: &str) -> Result<Package, ParseError> {
    let mut pkg = Package::new(package);
    let mut current: Option<Section> = None;

    // A quoted value may span lines; `pending` holds the statement so far.
    let mut pending = String::new();
    let mut line_no = 0;

    for (idx, raw) in text.lines().enumerate() {
        if pending.is_empty() {
            line_no = idx + 1;
            pending.push_str(raw);
        } else {
            pending.push('\n');
            pending.push_str(raw);
        }
        let words = match tokenize(&pending) {
            Ok(words) => words,
            Err(TokenError::Unterminated(_)) => continue,
            Err(err) => return Err(ParseError::syntax(line_no, err.to_string())),
        };
        pending.clear();
        let Some((keyword, args)) = words.split_first() else {
            continue;
        };

        match keyword.as_str() {
            "package" => {}
            "config" => {
                if let Some(done) = current.take() {
                    pkg.sections.push(done);
                }
                let (kind, name) = match args {
                    [kind] => (kind.clone(), anonymous_name(&pkg, kind)),
                    [kind, name] => (kind.clone(), name.clone()),
                    _ => {
                        return Err(ParseError::syntax(
                            line_no,
                            "expected `config <type> [name]`",
                        ))
                    }
                };
                if kind.is_empty() || name.is_empty() {
                    return Err(ParseError::syntax(line_no, "empty section type or name"));
                }
                current = Some(Section::new(kind, name));
            }
            "option" | "list" => {
                let section = current
                    .as_mut()
                    .ok_or_else(|| ParseError::syntax(line_no, "option outside of a section"))?;
                let [key, value] = args else {
                    return Err(ParseError::syntax(
                        line_no,
                        format!("expected `{keyword} <name> <value>`"),
                    ));
                };
                if !valid_option_name(key) {
                    return Err(ParseError::syntax(
                        line_no,
                        format!("invalid option name {key:?}"),
                    ));
                }
                if keyword == "option" {
                    section
                        .options
                        .insert(key.clone(), OptionValue::Single(value.clone()));
                } else {
                    section.push_list(key, value.clone());
                }
            }
            other => {
                return Err(ParseError::syntax(
                    line_no,
                    format!("unknown keyword {other:?}"),
                ))
            }
        }
    }

    if !pending.is_empty() {
        if let Err(err) = tokenize(&pending) {
            return Err(ParseError::syntax(line_no, err.to_string()));
        }
    }
    if let Some(done) = current {
        pkg.sections.push(done);
    }
    Ok(pkg)
}

/// Parse a UCI file. The package is named after the file.
pub fn parse_file(path: &Path) -> Result<Package, ParseError> {
    let text = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse(&text, &name)
}

fn anonymous_name(pkg: &Package, kind: &str) -> String {
    let index = pkg.sections_of_kind(kind).count();
    format!("@{kind}[{index}]")
}

fn valid_option_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, Error, PartialEq, Eq)]
enum TokenError {
    #[error("unterminated {0} quote")]
    Unterminated(&'static str),
    #[error("dangling escape")]
    DanglingEscape,
}

/// Split one statement into shell-like words.
///
/// Single quotes are literal, double quotes honour backslash escapes, and adjacent
/// quoted/bare fragments join into one word (`'it'\''s'` is `it's`). A `#` outside
/// quotes starts a comment.
fn tokenize(line: &str) -> Result<Vec<String>, TokenError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '#' if !in_word => break,
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => word.push(ch),
                        None => return Err(TokenError::Unterminated("single")),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch) => word.push(ch),
                            None => return Err(TokenError::DanglingEscape),
                        },
                        Some(ch) => word.push(ch),
                        None => return Err(TokenError::Unterminated("double")),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(ch) => word.push(ch),
                    None => return Err(TokenError::DanglingEscape),
                }
            }
            other => {
                in_word = true;
                word.push(other);
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}
