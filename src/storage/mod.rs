pub mod memory;

use crate::compiler::ast::ColumnDef;
use crate::types::DbResult;

pub use memory::{MemoryDatabase, MemoryStorage, MemoryTable};

/// Storage collaborator. The interpreter only calls it once a statement has
/// been fully validated.
pub trait Storage {
    type Database: DatabaseHandle;

    fn database_exists(&self, name: &str) -> bool;

    fn get_database(&self, name: &str) -> Option<&Self::Database>;

    fn get_database_mut(&mut self, name: &str) -> Option<&mut Self::Database>;

    fn create_database(&mut self, name: &str) -> &mut Self::Database;

    fn drop_database(&mut self, name: &str);
}

pub trait DatabaseHandle {
    type Table: TableHandle;

    fn name(&self) -> &str;

    fn table_exists(&self, name: &str) -> bool;

    fn create_table(&mut self, name: &str, columns: Vec<ColumnDef>) -> DbResult<()>;

    fn drop_table(&mut self, name: &str);

    fn add_columns(&mut self, name: &str, columns: Vec<ColumnDef>) -> DbResult<()>;

    fn get_table(&self, name: &str) -> Option<&Self::Table>;

    fn get_table_mut(&mut self, name: &str) -> Option<&mut Self::Table>;
}

pub trait TableHandle {
    fn name(&self) -> &str;

    fn columns(&self) -> &[ColumnDef];

    fn insert_row(&mut self, values: Vec<String>) -> DbResult<()>;

    /// Header row (`name TYPE` per column) followed by every stored row
    fn select_all(&self) -> Vec<Vec<String>>;
}
