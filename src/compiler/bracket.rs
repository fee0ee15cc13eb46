use crate::compiler::error::{ParseError, ParseResult};

/// Check that `()`, `{}` and `[]` are correctly nested across the whole line.
///
/// Only nesting is checked, not what sits between the brackets. Quotes are
/// not special: a bracket inside a string literal still counts.
pub fn check_balanced(line: &str) -> ParseResult<()> {
    let mut stack = Vec::new();

    for c in line.chars() {
        match c {
            '(' | '{' | '[' => stack.push(c),
            ')' | '}' | ']' => {
                let opener = match c {
                    ')' => '(',
                    '}' => '{',
                    _ => '[',
                };
                if stack.pop() != Some(opener) {
                    return Err(ParseError::UnbalancedBrackets(line.to_string()));
                }
            }
            _ => {}
        }
    }

    if stack.is_empty() {
        Ok(())
    } else {
        Err(ParseError::UnbalancedBrackets(line.to_string()))
    }
}

pub fn is_balanced(line: &str) -> bool {
    check_balanced(line).is_ok()
}
