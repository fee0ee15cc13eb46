use tracing::info;
use crate::interpreter::ExecResult;
use crate::interpreter::executor::Executor;
use crate::storage::{DatabaseHandle, Storage, TableHandle};
use crate::types::{DbError, DbResult};

impl<S: Storage> Executor<'_, S> {

    pub fn select_all(&self, table: &str) -> DbResult<ExecResult> {
        let database = self.context.require_table(table)?;
        let handle = database.get_table(table).ok_or_else(|| DbError::TableNotFound {
            database: database.name().to_string(),
            table: table.to_string(),
        })?;

        Ok(ExecResult::QueryResult(handle.select_all()))
    }

    pub fn insert_into(&mut self, table: &str, values: Vec<String>) -> DbResult<ExecResult> {
        let database = self.context.current_database_mut()?;
        let database_name = database.name().to_string();
        let handle = database.get_table_mut(table).ok_or_else(|| DbError::TableNotFound {
            database: database_name,
            table: table.to_string(),
        })?;

        handle.insert_row(values)?;
        info!(table, "row inserted");
        Ok(ExecResult::AffectedRows(1, String::from("1 new record inserted.")))
    }
}
