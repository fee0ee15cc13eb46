pub mod execution_context;
pub mod executor;

use tracing::warn;
use execution_context::ExecutionContext;
use crate::compiler::ast::Statement;
use crate::compiler::parser::parse_line;
use crate::interpreter::executor::Executor;
use crate::storage::{MemoryStorage, Storage};
use crate::types::DbResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    Success(String),
    AffectedRows(usize, String),
    QueryResult(Vec<Vec<String>>),
}

pub struct Interpreter<S: Storage = MemoryStorage> {
    pub context: ExecutionContext<S>,
}

impl Interpreter<MemoryStorage> {
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}

impl<S: Storage> Interpreter<S> {
    pub fn new(storage: S) -> Self {
        Self { context: ExecutionContext::new(storage) }
    }

    /// Parse one input line and execute the resulting statement
    pub fn run_line(&mut self, line: &str) -> DbResult<ExecResult> {
        let result = parse_line(line)
            .map_err(Into::into)
            .and_then(|stmt| self.execute(stmt));

        if let Err(err) = &result {
            warn!(%line, error = %err, "statement rejected");
        }
        result
    }

    /// Entry point for SQL interpreter
    pub fn execute(&mut self, stmt: Statement) -> DbResult<ExecResult> {
        let mut executor = Executor::new(&mut self.context);
        executor.execute(stmt)
    }
}
