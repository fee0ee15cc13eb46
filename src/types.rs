use crate::compiler::error::ParseError;

// global constants
pub const TERMINATOR: char = ';';
pub const TOKEN_DELIMITER: char = ' ';
pub const VALUE_DELIMITER: char = ',';
pub const VARCHAR_PREFIX: &str = "VARCHAR(";
pub const VALUES_KEYWORD: &str = "VALUES";

// global types
pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Failed to create database {0} because it already exists.")]
    DatabaseExists(String),

    #[error("Database {0} does not exist.")]
    DatabaseNotFound(String),

    #[error("Cannot drop the currently selected database {0}.")]
    DatabaseInUse(String),

    #[error("No database is selected.")]
    NoDatabaseSelected,

    #[error("Table {0} already exists.")]
    TableExists(String),

    #[error("Table {table} does not exist in database {database}.")]
    TableNotFound { database: String, table: String },

    #[error("Duplicate column name {0}.")]
    DuplicateColumn(String),

    #[error("Table {table} expects {expected} values but {actual} were supplied.")]
    ColumnCountMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("Value {value} does not fit column {column} of type {data_type}.")]
    TypeMismatch {
        column: String,
        data_type: String,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
