pub mod compiler;
pub mod config;
pub mod interpreter;
pub mod storage;
pub mod types;
