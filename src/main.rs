use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use drizzle_db::config::ShellConfig;
use drizzle_db::interpreter::{ExecResult, Interpreter};
use drizzle_db::types::{DbError, TERMINATOR};

const CONFIG_FILE: &str = "drizzle.json";

fn execute_input(input: &str, interpreter: &mut Interpreter) {
    match interpreter.run_line(input) {
        Ok(result) => print_exec_result(result),
        Err(err) => print_db_error(err),
    }
}

fn print_exec_result(result: ExecResult) {
    match result {
        ExecResult::Success(msg) => {
            println!("-- {msg}");
        }

        ExecResult::AffectedRows(_, msg) => {
            println!("-- {msg}");
        }

        ExecResult::QueryResult(rows) => {
            print_table(rows);
        }
    }
}

fn print_db_error(error: DbError) {
    for line in error.to_string().lines() {
        println!("-- !{line}");
    }
}

fn print_table(rows: Vec<Vec<String>>) {
    for line in table_lines(&rows) {
        println!("-- {line}");
    }
}

/// First row is the `name type` header, the rest are stored rows in insert order.
fn table_lines(rows: &[Vec<String>]) -> Vec<String> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render = |row: &[String]| {
        row.iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(render(header));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    lines.extend(body.iter().map(|row| render(row)));
    if body.is_empty() {
        lines.push("(no rows)".to_string());
    }
    lines
}

fn is_exit(input: &str) -> bool {
    let command = input.trim().trim_end_matches(TERMINATOR);
    command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case(".exit")
}

fn main() -> Result<(), DbError> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_FILE.to_string());
    let config = ShellConfig::load_config(&config_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut interpreter = Interpreter::in_memory();

    println!("DrizzleDB Shell");
    println!("Type SQL statements, one per line, ending with '{TERMINATOR}'");
    println!("Type 'EXIT' to quit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", config.prompt);
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim_end_matches(['\r', '\n']);

        if is_exit(input) {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }
        if config.echo_input {
            println!("{input}");
        }

        execute_input(input, &mut interpreter);
    }

    println!("-- All done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_table_lines_pad_to_widest_cell() {
        let rows = vec![row(&["id INT", "name VARCHAR(10)"]), row(&["1", "Alice"]), row(&["22", "Bob"])];
        assert_eq!(
            table_lines(&rows),
            vec![
                "id INT | name VARCHAR(10)",
                "-------+-----------------",
                "1      | Alice           ",
                "22     | Bob             ",
            ]
        );
    }

    #[test]
    fn test_table_lines_header_only() {
        let rows = vec![row(&["a INT"])];
        assert_eq!(table_lines(&rows), vec!["a INT", "-----", "(no rows)"]);
    }
}
