use crate::compiler::ast::ColumnDef;
use crate::compiler::error::{ParseError, ParseResult};
use crate::compiler::token::Token;

/// Parse the column tail of CREATE TABLE / ALTER TABLE into (name, raw type) pairs.
///
/// Accepted shapes:
/// - nothing at all, for a table without columns
/// - `name type`, a single column with or without the wrapping parentheses
/// - `( name type, name type, ... )`
///
/// Type tokens are not validated here, see `type_checker`.
pub fn parse_columns(tail: &[Token]) -> ParseResult<Vec<ColumnDef>> {
    let lexemes: Vec<&str> = tail.iter().map(|t| t.lexeme).collect();
    parse_column_lexemes(&lexemes)
}

pub fn parse_column_lexemes(tail: &[&str]) -> ParseResult<Vec<ColumnDef>> {
    match tail.len() {
        0 => Ok(Vec::new()),
        2 => Ok(vec![parse_single_column(tail[0], tail[1])?]),
        n if n % 2 != 0 => Err(ParseError::OddColumnArgumentCount(n)),
        _ => parse_column_list(tail),
    }
}

/**
single_column := (? identifier type )?
 */
fn parse_single_column(name: &str, data_type: &str) -> ParseResult<ColumnDef> {
    let name = name.strip_prefix('(').unwrap_or(name);
    column(name, strip_redundant_paren(data_type))
}

/// A bare `(` leaves nothing behind once stripped
fn column(name: &str, data_type: &str) -> ParseResult<ColumnDef> {
    if name.is_empty() {
        return Err(ParseError::MissingColumnName(data_type.to_string()));
    }
    Ok(ColumnDef::new(name, data_type))
}

/// Drop a trailing `)` that closes the column list rather than a VARCHAR size,
/// so `INT)` becomes `INT` while `VARCHAR(10)` is left alone.
fn strip_redundant_paren(data_type: &str) -> &str {
    match data_type.strip_suffix(')') {
        Some(rest) if !rest.ends_with(|c: char| c.is_ascii_digit()) => rest,
        _ => data_type,
    }
}

/**
column_list := ( identifier type (, identifier type)* )
 */
fn parse_column_list(tail: &[&str]) -> ParseResult<Vec<ColumnDef>> {
    let last_index = tail.len() - 1;

    // the list must be wrapped with parentheses
    let first = tail[0]
        .strip_prefix('(')
        .ok_or(ParseError::MissingColumnParentheses)?;
    let last = tail[last_index]
        .strip_suffix(')')
        .ok_or(ParseError::MissingColumnParentheses)?;

    let mut unwrapped = tail.to_vec();
    unwrapped[0] = first;
    unwrapped[last_index] = last;

    let mut columns = Vec::with_capacity(tail.len() / 2);
    for (pair_index, pair) in unwrapped.chunks_exact(2).enumerate() {
        let (name, data_type) = (pair[0], pair[1]);
        let is_last = pair_index * 2 + 1 == last_index;

        // every column but the last is followed by a comma
        let data_type = if is_last {
            data_type
        } else {
            data_type
                .strip_suffix(',')
                .ok_or_else(|| ParseError::MissingColumnSeparator(data_type.to_string()))?
        };

        columns.push(column(name, data_type)?);
    }

    Ok(columns)
}
