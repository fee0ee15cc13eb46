#![allow(dead_code)]

use drizzle_db::interpreter::{ExecResult, Interpreter};
use drizzle_db::types::{DbError, DbResult};

pub fn setup_interpreter() -> Interpreter {
    Interpreter::in_memory()
}

/// Run each line in order, stopping at the first failure
pub fn test_sql(lines: &[&str], interpreter: &mut Interpreter) -> DbResult<Vec<ExecResult>> {
    lines.iter().map(|line| interpreter.run_line(line)).collect()
}

pub fn assert_sql_success(lines: &[&str], interpreter: &mut Interpreter) {
    if let Err(err) = test_sql(lines, interpreter) {
        panic!("expected {lines:?} to succeed, got {err}");
    }
}

pub fn assert_sql_failure(line: &str, interpreter: &mut Interpreter) -> DbError {
    match interpreter.run_line(line) {
        Ok(result) => panic!("expected {line:?} to fail, got {result:?}"),
        Err(err) => err,
    }
}

/// Interpreter with database `db1` created and selected
pub fn setup_database() -> Interpreter {
    let mut interpreter = setup_interpreter();
    assert_sql_success(&["CREATE DATABASE db1;", "USE db1;"], &mut interpreter);
    interpreter
}
