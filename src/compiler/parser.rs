use tracing::debug;
use crate::compiler::ast::*;
use crate::compiler::bracket::check_balanced;
use crate::compiler::column_parser::parse_columns;
use crate::compiler::error::{ParseError, ParseResult};
use crate::compiler::scanner::Scanner;
use crate::compiler::token::{CommandKind, Token};
use crate::compiler::type_checker::check_types;
use crate::compiler::values::isolate_values;
use crate::types::VALUES_KEYWORD;

/// Run the whole pipeline on one input line
pub fn parse_line(line: &str) -> ParseResult<Statement> {
    check_balanced(line)?;
    let scanner = Scanner::new(line);
    let mut parser = Parser::new(line, scanner.scan()?);
    parser.parse()
}

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Parser<'a> {

    /// Creating parser from scanner result
    pub fn new(source: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Parser { source, tokens }
    }

    /**
    statement := create_stmt
    | drop_stmt
    | use_stmt
    | alter_stmt
    | select_stmt
    | insert_stmt;
     */
    pub fn parse(&mut self) -> ParseResult<Statement> {
        let first = self.tokens.first().ok_or(ParseError::EmptyStatement)?;
        let command = CommandKind::from_upper(&first.to_upper())
            .ok_or_else(|| ParseError::UnknownCommand(first.lexeme.to_string()))?;
        debug!(%command, tokens = self.tokens.len(), "dispatching statement");

        match command {
            CommandKind::Create => self.parse_create(),
            CommandKind::Drop => self.parse_drop(),
            CommandKind::Use => self.parse_use(),
            CommandKind::Alter => self.parse_alter(),
            CommandKind::Select => self.parse_select(),
            CommandKind::Insert => self.parse_insert(),
        }
    }

    /**
    create_database_stmt := CREATE DATABASE identifier
    create_table_stmt := CREATE TABLE identifier column_list?
     */
    fn parse_create(&self) -> ParseResult<Statement> {
        let command = CommandKind::Create;
        let subcommand = self.subcommand(command, 3)?;

        if subcommand.is_keyword("DATABASE") {
            self.expect_exact(command, 3)?;
            Ok(Statement::CreateDatabase { name: self.lexeme(2) })
        } else if subcommand.is_keyword("TABLE") {
            self.expect_at_least(command, 3)?;
            let columns = self.parse_typed_columns(&self.tokens[3..])?;
            Ok(Statement::CreateTable { name: self.lexeme(2), columns })
        } else {
            Err(self.invalid_subcommand(command, subcommand))
        }
    }

    /**
    drop_database_stmt := DROP DATABASE identifier
    drop_table_stmt := DROP TABLE identifier
    */
    fn parse_drop(&self) -> ParseResult<Statement> {
        let command = CommandKind::Drop;
        let subcommand = self.subcommand(command, 3)?;

        if subcommand.is_keyword("DATABASE") {
            self.expect_exact(command, 3)?;
            Ok(Statement::DropDatabase { name: self.lexeme(2) })
        } else if subcommand.is_keyword("TABLE") {
            self.expect_exact(command, 3)?;
            Ok(Statement::DropTable { name: self.lexeme(2) })
        } else {
            Err(self.invalid_subcommand(command, subcommand))
        }
    }

    /**
    use_stmt := USE identifier
    */
    fn parse_use(&self) -> ParseResult<Statement> {
        self.expect_exact(CommandKind::Use, 2)?;
        Ok(Statement::UseDatabase { name: self.lexeme(1) })
    }

    /**
    alter_stmt := ALTER TABLE identifier ADD? column_list
    */
    fn parse_alter(&self) -> ParseResult<Statement> {
        let command = CommandKind::Alter;
        let subcommand = self.subcommand(command, 4)?;
        if !subcommand.is_keyword("TABLE") {
            return Err(self.invalid_subcommand(command, subcommand));
        }
        self.expect_at_least(command, 4)?;

        // the ADD verb is optional and something has to follow it.
        // `add INT` is a single column named add, not the verb.
        let mut tail = &self.tokens[3..];
        if tail[0].is_keyword("ADD") && tail.len() != 2 {
            self.expect_at_least(command, 5)?;
            tail = &tail[1..];
        }

        let columns = self.parse_typed_columns(tail)?;
        Ok(Statement::AlterTable { table: self.lexeme(2), columns })
    }

    /**
    select_stmt := SELECT * FROM identifier
    */
    fn parse_select(&self) -> ParseResult<Statement> {
        let command = CommandKind::Select;
        self.expect_at_least(command, 4)?;

        if self.tokens[1].lexeme != "*" {
            return Err(self.invalid_subcommand(command, &self.tokens[1]));
        }
        if !self.tokens[2].is_keyword("FROM") {
            return Err(self.invalid_subcommand(command, &self.tokens[2]));
        }
        self.expect_exact(command, 4)?;

        Ok(Statement::SelectAll { table: self.lexeme(3) })
    }

    /**
    insert_stmt := INSERT INTO identifier VALUES ( value (, value)* )
    */
    fn parse_insert(&self) -> ParseResult<Statement> {
        let command = CommandKind::Insert;
        let subcommand = self.subcommand(command, 4)?;
        if !subcommand.is_keyword("INTO") {
            return Err(self.invalid_subcommand(command, subcommand));
        }
        self.expect_at_least(command, 4)?;

        // slice the clause out of the line so spacing inside quotes survives
        let clause = self.source_from(3);
        let payload = values_payload(clause)
            .ok_or_else(|| ParseError::MalformedValuesClause(clause.to_string()))?;
        let values = isolate_values(payload)?;
        debug!(table = self.tokens[2].lexeme, count = values.len(), "isolated insert values");

        Ok(Statement::InsertInto { table: self.lexeme(2), values })
    }

    /// column list followed by type validation of every column
    fn parse_typed_columns(&self, tail: &[Token]) -> ParseResult<Vec<ColumnDef>> {
        let columns = parse_columns(tail)?;
        check_types(columns.iter().map(|c| c.data_type.as_str()))
            .map_err(ParseError::InvalidTypes)?;
        debug!(count = columns.len(), "parsed column definitions");
        Ok(columns)
    }

    // helper functions
    fn lexeme(&self, index: usize) -> String {
        self.tokens[index].lexeme.to_string()
    }

    /// raw text from the token at `index` to the end of the last token
    fn source_from(&self, index: usize) -> &'a str {
        let start = self.tokens[index].offset;
        let end = self.tokens.last().map_or(start, |t| t.offset + t.lexeme.len());
        &self.source[start..end]
    }

    /// second token, reported as a missing argument when absent
    fn subcommand(&self, command: CommandKind, expected: usize) -> ParseResult<&Token<'a>> {
        self.tokens.get(1).ok_or(ParseError::ArgumentCount {
            command,
            expected,
            actual: self.tokens.len(),
        })
    }

    fn expect_at_least(&self, command: CommandKind, expected: usize) -> ParseResult<()> {
        if self.tokens.len() < expected {
            return Err(ParseError::ArgumentCount {
                command,
                expected,
                actual: self.tokens.len(),
            });
        }
        Ok(())
    }

    fn expect_exact(&self, command: CommandKind, expected: usize) -> ParseResult<()> {
        self.expect_at_least(command, expected)?;
        if self.tokens.len() > expected {
            return Err(ParseError::UnexpectedArguments {
                command,
                tokens: self.tokens[expected..].iter().map(|t| t.lexeme.to_string()).collect(),
            });
        }
        Ok(())
    }

    fn invalid_subcommand(&self, command: CommandKind, token: &Token) -> ParseError {
        ParseError::InvalidSubcommand { command, token: token.lexeme.to_string() }
    }
}

/// Text between `VALUES(` and the final `)`. The keyword is case-insensitive
/// and may be separated from the parenthesis by spaces.
fn values_payload(clause: &str) -> Option<&str> {
    let keyword = clause.get(..VALUES_KEYWORD.len())?;
    if !keyword.eq_ignore_ascii_case(VALUES_KEYWORD) {
        return None;
    }
    clause[VALUES_KEYWORD.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}
