use crate::compiler::error::{ParseError, ParseResult};
use crate::types::VALUE_DELIMITER;

const DOUBLE_QUOTE: char = '"';
const SINGLE_QUOTE: char = '\'';

/// Split the payload of `VALUES( ... )` into raw parameter strings.
///
/// A comma ends a parameter unless a quote is open. A quote only opens at the
/// very start of a parameter; anywhere else it is kept as a literal character.
/// Whitespace outside quotes around a parameter is not part of it. The result
/// has one entry per position, empty parameters included.
pub fn isolate_values(payload: &str) -> ParseResult<Vec<String>> {
    let mut values = Vec::new();
    let mut current = String::new();
    // whitespace seen after content, only kept if more content follows
    let mut pending = String::new();
    let mut quote: Option<char> = None;

    for c in payload.chars() {
        match (c, quote) {
            (VALUE_DELIMITER, None) => {
                values.push(std::mem::take(&mut current));
                pending.clear();
            }
            (DOUBLE_QUOTE | SINGLE_QUOTE, Some(open)) if open == c => {
                quote = None;
            }
            (DOUBLE_QUOTE | SINGLE_QUOTE, None) if current.is_empty() => {
                quote = Some(c);
            }
            (_, Some(_)) => current.push(c),
            (_, None) if c.is_whitespace() => {
                if !current.is_empty() {
                    pending.push(c);
                }
            }
            (_, None) => {
                current.push_str(&pending);
                pending.clear();
                current.push(c);
            }
        }
    }

    if let Some(open) = quote {
        return Err(ParseError::UnterminatedQuote { quote: open, value: current });
    }

    values.push(current);
    Ok(values)
}
