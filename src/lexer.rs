//! Shell-style word splitting for one script line.

use crate::error::ScriptError;

/// Split one line of script text into word tokens.
///
/// Follows shell quoting rules: whitespace separates tokens; single quotes
/// group their contents literally; double quotes group their contents with
/// `\"` and `\\` escapes honored inside; a bare backslash escapes the next
/// character; an unquoted `#` starts a comment that discards the rest of
/// the line (terminating any word in progress). Quote characters are
/// stripped from token values.
///
/// An empty or comment-only line yields an empty token sequence.
///
/// # Examples
///
/// ```
/// use shelly_cli::lexer::split;
///
/// let tokens = split(r#"useradd -c "Service User" influxdb"#).unwrap();
/// assert_eq!(tokens, ["useradd", "-c", "Service User", "influxdb"]);
///
/// assert!(split("# just a comment").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns [`ScriptError::UnterminatedQuote`] if a quote is left open and
/// [`ScriptError::DanglingEscape`] if the line ends in a lone backslash.
pub fn split(line: &str) -> Result<Vec<String>, ScriptError> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => word.push(inner),
                        None => return Err(ScriptError::UnterminatedQuote),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(esc @ ('"' | '\\')) => word.push(esc),
                            Some(other) => {
                                // Backslash is literal before anything else
                                word.push('\\');
                                word.push(other);
                            }
                            None => return Err(ScriptError::UnterminatedQuote),
                        },
                        Some(inner) => word.push(inner),
                        None => return Err(ScriptError::UnterminatedQuote),
                    }
                }
            }
            '\\' => {
                let Some(esc) = chars.next() else {
                    return Err(ScriptError::DanglingEscape);
                };
                in_word = true;
                word.push(esc);
            }
            '#' => break,
            _ if c.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            _ => {
                in_word = true;
                word.push(c);
            }
        }
    }

    if in_word {
        tokens.push(word);
    }
    Ok(tokens)
}
