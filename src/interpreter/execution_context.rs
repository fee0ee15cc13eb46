use crate::storage::{DatabaseHandle, Storage};
use crate::types::{DbError, DbResult};

pub struct ExecutionContext<S: Storage> {
    pub current_db: Option<String>,
    pub storage: S,
}

impl<S: Storage> ExecutionContext<S> {
    pub fn new(storage: S) -> ExecutionContext<S> {
        Self {
            current_db: None,
            storage,
        }
    }

    /// Database selected with USE
    pub fn current_database(&self) -> DbResult<&S::Database> {
        let name = self.current_db.as_deref().ok_or(DbError::NoDatabaseSelected)?;
        self.storage
            .get_database(name)
            .ok_or_else(|| DbError::DatabaseNotFound(name.to_string()))
    }

    pub fn current_database_mut(&mut self) -> DbResult<&mut S::Database> {
        let name = self.current_db.as_deref().ok_or(DbError::NoDatabaseSelected)?;
        self.storage
            .get_database_mut(name)
            .ok_or_else(|| DbError::DatabaseNotFound(name.to_string()))
    }

    /// Fail unless the selected database holds the table
    pub fn require_table(&self, table: &str) -> DbResult<&S::Database> {
        let database = self.current_database()?;
        if !database.table_exists(table) {
            return Err(DbError::TableNotFound {
                database: database.name().to_string(),
                table: table.to_string(),
            });
        }
        Ok(database)
    }
}
