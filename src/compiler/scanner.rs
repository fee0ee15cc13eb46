use crate::compiler::error::{ParseError, ParseResult};
use crate::compiler::token::Token;
use crate::types::{TERMINATOR, TOKEN_DELIMITER};

pub struct Scanner<'a> {
    source: &'a str,
}

impl<'a> Scanner<'a> {

    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Split the line into tokens and drop the statement terminator
    pub fn scan(&self) -> ParseResult<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        for lexeme in self.source.split(TOKEN_DELIMITER) {
            // repeated spaces produce empty pieces, skip them
            if !lexeme.is_empty() {
                tokens.push(Token::new(lexeme, offset));
            }
            offset += lexeme.len() + TOKEN_DELIMITER.len_utf8();
        }

        self.strip_terminator(&mut tokens);

        if tokens.is_empty() {
            return Err(ParseError::EmptyStatement);
        }
        Ok(tokens)
    }

    /// Remove exactly one trailing terminator from the last token
    fn strip_terminator(&self, tokens: &mut Vec<Token<'a>>) {
        let Some(last) = tokens.last().copied() else { return };
        match last.lexeme.strip_suffix(TERMINATOR) {
            Some("") => {
                tokens.pop();
            }
            Some(stripped) => {
                if let Some(token) = tokens.last_mut() {
                    token.lexeme = stripped;
                }
            }
            None => {}
        }
    }
}
