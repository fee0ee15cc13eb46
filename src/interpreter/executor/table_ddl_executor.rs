use std::collections::HashSet;
use tracing::info;
use crate::compiler::ast::ColumnDef;
use crate::interpreter::ExecResult;
use crate::interpreter::executor::Executor;
use crate::storage::{DatabaseHandle, Storage, TableHandle};
use crate::types::{DbError, DbResult};

impl<S: Storage> Executor<'_, S> {

    pub fn create_table(&mut self, name: &str, columns: Vec<ColumnDef>) -> DbResult<ExecResult> {
        // check there is no duplicate table name in current database
        if self.context.current_database()?.table_exists(name) {
            return Err(DbError::TableExists(name.to_string()));
        }

        check_duplicate_columns(&[], &columns)?;

        self.context.current_database_mut()?.create_table(name, columns)?;
        info!(table = name, "table created");
        Ok(ExecResult::Success(format!("Table {} created.", name)))
    }

    pub fn drop_table(&mut self, name: &str) -> DbResult<ExecResult> {
        self.context.require_table(name)?;

        self.context.current_database_mut()?.drop_table(name);
        info!(table = name, "table dropped");
        Ok(ExecResult::Success(format!("Table {} deleted.", name)))
    }

    pub fn alter_table(&mut self, name: &str, columns: Vec<ColumnDef>) -> DbResult<ExecResult> {
        let database = self.context.require_table(name)?;

        // new columns must not clash with the existing schema or each other
        if let Some(table) = database.get_table(name) {
            check_duplicate_columns(table.columns(), &columns)?;
        }

        self.context.current_database_mut()?.add_columns(name, columns)?;
        info!(table = name, "table modified");
        Ok(ExecResult::Success(format!("Table {} modified.", name)))
    }
}

fn check_duplicate_columns(existing: &[ColumnDef], added: &[ColumnDef]) -> DbResult<()> {
    let mut names: HashSet<&str> = existing.iter().map(|c| c.name.as_str()).collect();
    for col in added {
        if !names.insert(&col.name) {
            return Err(DbError::DuplicateColumn(col.name.clone()));
        }
    }
    Ok(())
}
