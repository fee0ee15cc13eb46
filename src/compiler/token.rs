use std::fmt;

/// Command keyword that starts every statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Create,
    Drop,
    Use,
    Alter,
    Select,
    Insert,
}

impl CommandKind {
    /// Classify an *upper-cased* word. Returns `None` for anything that is not a command.
    pub fn from_upper(word: &str) -> Option<Self> {
        let kind = match word {
            "CREATE" => CommandKind::Create,
            "DROP" => CommandKind::Drop,
            "USE" => CommandKind::Use,
            "ALTER" => CommandKind::Alter,
            "SELECT" => CommandKind::Select,
            "INSERT" => CommandKind::Insert,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CommandKind::Create => "CREATE",
            CommandKind::Drop => "DROP",
            CommandKind::Use => "USE",
            CommandKind::Alter => "ALTER",
            CommandKind::Select => "SELECT",
            CommandKind::Insert => "INSERT",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A space-delimited slice of the input line, case preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme: &'a str,
    pub offset: usize, // byte offset in the line
}

impl<'a> Token<'a> {
    pub fn new(lexeme: &'a str, offset: usize) -> Self {
        Self { lexeme, offset }
    }

    /// Case-insensitive keyword comparison
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.lexeme.eq_ignore_ascii_case(keyword)
    }

    pub fn to_upper(&self) -> String {
        self.lexeme.to_ascii_uppercase()
    }
}
