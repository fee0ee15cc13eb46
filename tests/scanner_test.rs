use drizzle_db::compiler::bracket::{check_balanced, is_balanced};
use drizzle_db::compiler::error::ParseError;
use drizzle_db::compiler::scanner::Scanner;
use rstest::rstest;

fn lexemes(line: &str) -> Vec<&str> {
    Scanner::new(line)
        .scan()
        .unwrap()
        .into_iter()
        .map(|t| t.lexeme)
        .collect()
}

#[test]
fn test_create_database() {
    assert_eq!(lexemes("CREATE DATABASE db_1;"), vec!["CREATE", "DATABASE", "db_1"]);
}

#[test]
fn test_case_preserved() {
    assert_eq!(lexemes("create Table Users;"), vec!["create", "Table", "Users"]);
}

#[test]
fn test_without_terminator() {
    assert_eq!(lexemes("USE db1"), vec!["USE", "db1"]);
}

#[test]
fn test_strips_only_one_terminator() {
    assert_eq!(lexemes("USE db1;;"), vec!["USE", "db1;"]);
}

#[test]
fn test_detached_terminator_dropped() {
    assert_eq!(lexemes("USE db1 ;"), vec!["USE", "db1"]);
}

#[test]
fn test_repeated_spaces() {
    assert_eq!(lexemes("  SELECT   *  FROM t;"), vec!["SELECT", "*", "FROM", "t"]);
}

#[test]
fn test_token_offsets() {
    let tokens = Scanner::new("USE  db1;").scan().unwrap();
    assert_eq!(tokens[0].offset, 0);
    assert_eq!(tokens[1].offset, 5);
}

#[test]
fn test_keyword_comparison_ignores_case() {
    let tokens = Scanner::new("dAtAbAsE").scan().unwrap();
    assert!(tokens[0].is_keyword("DATABASE"));
    assert!(!tokens[0].is_keyword("TABLE"));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(";")]
#[case(" ; ")]
fn test_empty_statement(#[case] line: &str) {
    assert_eq!(Scanner::new(line).scan().unwrap_err(), ParseError::EmptyStatement);
}

#[rstest]
#[case("CREATE TABLE t (a INT)")]
#[case("INSERT INTO t VALUES(1, 'a')")]
#[case("{[()()]}")]
#[case("no brackets at all")]
#[case("CREATE TABLE t (a VARCHAR(10), b INT)")]
fn test_balanced(#[case] line: &str) {
    assert!(is_balanced(line));
}

#[rstest]
#[case("CREATE TABLE t (a INT")]
#[case("CREATE TABLE t a INT)")]
#[case("(]")]
#[case("([)]")]
#[case("{")]
#[case(")(")]
fn test_unbalanced(#[case] line: &str) {
    assert_eq!(
        check_balanced(line),
        Err(ParseError::UnbalancedBrackets(line.to_string()))
    );
}
