pub mod ast;
pub mod bracket;
pub mod column_parser;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod type_checker;
pub mod values;
