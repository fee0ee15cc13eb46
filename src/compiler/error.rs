use std::fmt;

use crate::compiler::token::CommandKind;

pub type ParseResult<T> = Result<T, ParseError>;

/// Reasons for rejecting a line before it reaches the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Brackets are not balanced in input: {0}")]
    UnbalancedBrackets(String),

    #[error("Empty statement")]
    EmptyStatement,

    #[error("Command {0} does not exist")]
    UnknownCommand(String),

    #[error("{token} is not a valid argument of command {command}")]
    InvalidSubcommand { command: CommandKind, token: String },

    #[error("[{command}] supplied argument count ({actual}) does not match required argument count ({expected})")]
    ArgumentCount {
        command: CommandKind,
        expected: usize,
        actual: usize,
    },

    #[error("[{command}] unknown argument(s): {{{}}}", .tokens.join(", "))]
    UnexpectedArguments {
        command: CommandKind,
        tokens: Vec<String>,
    },

    #[error("Number of column arguments ({0}) is not even")]
    OddColumnArgumentCount(usize),

    #[error("Column arguments are not wrapped with ()")]
    MissingColumnParentheses,

    #[error("Missing column name before data type {0}")]
    MissingColumnName(String),

    #[error("Missing ',' after data type {0}")]
    MissingColumnSeparator(String),

    #[error("{}", join_type_errors(.0))]
    InvalidTypes(Vec<TypeError>),

    #[error("INSERT INTO parameters not formatted correctly, expected VALUES(x, y, z, ...): {0}")]
    MalformedValuesClause(String),

    #[error("Unterminated {quote} quote in value {value}")]
    UnterminatedQuote { quote: char, value: String },
}

/// A single invalid type token. The validator reports every one it finds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("VARCHAR size ({size}) {reason} in {token}")]
    InvalidVarcharSize {
        token: String,
        size: String,
        reason: SizeViolation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeViolation {
    Empty,
    Negative,
    NonDigit,
    TooLarge,
}

impl fmt::Display for SizeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SizeViolation::Empty => "is empty",
            SizeViolation::Negative => "cannot be negative",
            SizeViolation::NonDigit => "contains non digit characters",
            SizeViolation::TooLarge => "is too large",
        };
        f.write_str(text)
    }
}

fn join_type_errors(errors: &[TypeError]) -> String {
    errors
        .iter()
        .map(|e| format!("TYPE ERROR: {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
