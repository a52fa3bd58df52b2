use csnades_scraping_utils::regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("embedded fragment is not a well-formed string literal: {0}")]
pub struct MalformedEscapeError(#[from] serde_json::Error);

/// Pulls the console command out of a detail page. The first escaped
/// `console` field wins; a page without one, or one whose value fails to
/// decode, yields `None`.
pub fn extract_console_text(document: &str) -> Option<String> {
    let captures = regex!(r#"\\"console\\":\\"([^"]*)\\""#).captures(document)?;
    unescape_fragment(&captures[1]).ok()
}

/// Decodes a fragment escaped with the JSON string convention (`\"`, `\n`,
/// `\\`, `\uXXXX`) into plain text, with serde_json's string grammar as the
/// decoding engine. The fragment is first re-escaped just enough to form a
/// valid string literal: raw quotes are protected and backslashes that do
/// not open a recognized escape are doubled, while recognized sequences are
/// passed through for the decoder to interpret.
pub fn unescape_fragment(fragment: &str) -> Result<String, MalformedEscapeError> {
    let mut literal = String::with_capacity(fragment.len() + 2);
    literal.push('"');
    let mut rest = fragment.chars().peekable();
    while let Some(c) = rest.next() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => match rest.peek().copied() {
                Some(next) if matches!(next, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                    literal.push('\\');
                    literal.push(next);
                    rest.next();
                }
                // Leave `\u` for the decoder, which validates the hex digits.
                Some('u') => literal.push('\\'),
                _ => literal.push_str("\\\\"),
            },
            _ => literal.push(c),
        }
    }
    literal.push('"');
    Ok(serde_json::from_str(&literal)?)
}
