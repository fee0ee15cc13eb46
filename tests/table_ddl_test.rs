mod common;

use drizzle_db::compiler::ast::ColumnDef;
use drizzle_db::compiler::error::ParseError;
use drizzle_db::interpreter::ExecResult;
use drizzle_db::storage::{DatabaseHandle, MemoryDatabase, TableHandle};
use drizzle_db::types::DbError;
use crate::common::{assert_sql_failure, assert_sql_success, setup_database, setup_interpreter};

fn database(interpreter: &drizzle_db::interpreter::Interpreter) -> &MemoryDatabase {
    interpreter.context.current_database().unwrap()
}

#[test]
fn test_create_table() {
    let mut interpreter = setup_database();
    assert_sql_success(&["CREATE TABLE users (id INT, name VARCHAR(5));"], &mut interpreter);

    let table = database(&interpreter).get_table("users").expect("Table should exist");
    assert_eq!(table.name(), "users");
    assert_eq!(
        table.columns(),
        &[ColumnDef::new("id", "INT"), ColumnDef::new("name", "VARCHAR(5)")]
    );
}

#[test]
fn test_create_table_duplicate_error() {
    let mut interpreter = setup_database();
    assert_sql_success(&["CREATE TABLE users (id INT);"], &mut interpreter);

    let err = assert_sql_failure("CREATE TABLE users (id INT);", &mut interpreter);
    assert!(matches!(err, DbError::TableExists(_)));
}

#[test]
fn test_create_table_duplicate_column() {
    let mut interpreter = setup_database();
    let err = assert_sql_failure("CREATE TABLE users (id INT, id FLOAT);", &mut interpreter);
    assert!(matches!(err, DbError::DuplicateColumn(name) if name == "id"));
    assert!(!database(&interpreter).table_exists("users"));
}

#[test]
fn test_invalid_types_leave_database_untouched() {
    let mut interpreter = setup_database();
    let err = assert_sql_failure("CREATE TABLE t (a VARCHAR(-1), b BLOB);", &mut interpreter);
    assert!(matches!(err, DbError::Parse(ParseError::InvalidTypes(ref e)) if e.len() == 2));
    assert!(!database(&interpreter).table_exists("t"));
}

#[test]
fn test_drop_table() {
    let mut interpreter = setup_database();
    assert_sql_success(
        &["CREATE TABLE temp (id INT);", "CREATE TABLE keep;", "DROP TABLE temp;"],
        &mut interpreter,
    );
    assert!(!database(&interpreter).table_exists("temp"));
    assert_eq!(database(&interpreter).list_tables(), vec!["keep".to_string()]);

    let err = assert_sql_failure("DROP TABLE temp;", &mut interpreter);
    assert!(matches!(err, DbError::TableNotFound { .. }));
}

#[test]
fn test_alter_table() {
    let mut interpreter = setup_database();
    assert_sql_success(
        &[
            "CREATE TABLE users (id INT);",
            "INSERT INTO users VALUES(1);",
            "ALTER TABLE users ADD (name VARCHAR(10), score FLOAT);",
        ],
        &mut interpreter,
    );

    let table = database(&interpreter).get_table("users").unwrap();
    assert_eq!(table.columns().len(), 3);

    // existing rows are padded with NULL
    assert_eq!(table.select_all()[1], vec!["1".to_string(), String::new(), String::new()]);
}

#[test]
fn test_alter_table_duplicate_column() {
    let mut interpreter = setup_database();
    assert_sql_success(&["CREATE TABLE users (id INT);"], &mut interpreter);

    let err = assert_sql_failure("ALTER TABLE users (id FLOAT);", &mut interpreter);
    assert!(matches!(err, DbError::DuplicateColumn(_)));
}

#[test]
fn test_alter_missing_table() {
    let mut interpreter = setup_database();
    let err = assert_sql_failure("ALTER TABLE ghost (id INT);", &mut interpreter);
    assert!(matches!(err, DbError::TableNotFound { .. }));
}

#[test]
fn test_insert_and_select() {
    let mut interpreter = setup_database();
    assert_sql_success(
        &[
            "CREATE TABLE people (id INT, name VARCHAR(20), grade CHAR);",
            "INSERT INTO people VALUES(1, 'Ada, Countess', \"A\");",
            "INSERT INTO people VALUES(2, Bob, B);",
        ],
        &mut interpreter,
    );

    assert_eq!(database(&interpreter).get_table("people").unwrap().row_count(), 2);

    let result = interpreter.run_line("SELECT * FROM people;").unwrap();
    assert_eq!(
        result,
        ExecResult::QueryResult(vec![
            vec!["id INT".to_string(), "name VARCHAR(20)".to_string(), "grade CHAR".to_string()],
            vec!["1".to_string(), "Ada, Countess".to_string(), "A".to_string()],
            vec!["2".to_string(), "Bob".to_string(), "B".to_string()],
        ])
    );
}

#[test]
fn test_insert_reports_affected_rows() {
    let mut interpreter = setup_database();
    assert_sql_success(&["CREATE TABLE t (a INT);"], &mut interpreter);
    assert_eq!(
        interpreter.run_line("INSERT INTO t VALUES(7);").unwrap(),
        ExecResult::AffectedRows(1, "1 new record inserted.".to_string())
    );
}

#[test]
fn test_insert_value_count_mismatch() {
    let mut interpreter = setup_database();
    assert_sql_success(&["CREATE TABLE t (a INT, b INT);"], &mut interpreter);

    let err = assert_sql_failure("INSERT INTO t VALUES(1);", &mut interpreter);
    assert!(matches!(err, DbError::ColumnCountMismatch { expected: 2, actual: 1, .. }));
}

#[test]
fn test_insert_type_mismatch() {
    let mut interpreter = setup_database();
    assert_sql_success(&["CREATE TABLE t (a INT, b VARCHAR(3));"], &mut interpreter);

    let err = assert_sql_failure("INSERT INTO t VALUES(x, 'ab');", &mut interpreter);
    assert!(matches!(err, DbError::TypeMismatch { ref column, .. } if column == "a"));

    let err = assert_sql_failure("INSERT INTO t VALUES(1, 'abcd');", &mut interpreter);
    assert!(matches!(err, DbError::TypeMismatch { ref column, .. } if column == "b"));
}

#[test]
fn test_insert_missing_table() {
    let mut interpreter = setup_database();
    let err = assert_sql_failure("INSERT INTO ghost VALUES(1);", &mut interpreter);
    assert!(matches!(err, DbError::TableNotFound { .. }));
}

#[test]
fn test_table_operations_without_database() {
    let mut interpreter = setup_interpreter();
    for sql in [
        "CREATE TABLE failure (id INT);",
        "DROP TABLE failure;",
        "ALTER TABLE failure (id INT);",
        "SELECT * FROM failure;",
        "INSERT INTO failure VALUES(1);",
    ] {
        let err = assert_sql_failure(sql, &mut interpreter);
        assert!(matches!(err, DbError::NoDatabaseSelected), "{sql}: {err}");
    }
}
