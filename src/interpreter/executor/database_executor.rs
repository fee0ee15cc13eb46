use tracing::info;
use crate::interpreter::ExecResult;
use crate::interpreter::executor::Executor;
use crate::storage::Storage;
use crate::types::{DbError, DbResult};

impl<S: Storage> Executor<'_, S> {
    pub fn create_database(&mut self, name: &str) -> DbResult<ExecResult> {
        // the database already exists
        if self.context.storage.database_exists(name) {
            return Err(DbError::DatabaseExists(name.to_string()));
        }

        self.context.storage.create_database(name);
        info!(database = name, "database created");
        Ok(ExecResult::Success(format!("Database {} created.", name)))
    }

    pub fn drop_database(&mut self, name: &str) -> DbResult<ExecResult> {
        // check the database exists
        if !self.context.storage.database_exists(name) {
            return Err(DbError::DatabaseNotFound(name.to_string()));
        }

        // check the database is not in use
        if self.context.current_db.as_deref() == Some(name) {
            return Err(DbError::DatabaseInUse(name.to_string()));
        }

        self.context.storage.drop_database(name);
        info!(database = name, "database dropped");
        Ok(ExecResult::Success(format!("Database {} deleted.", name)))
    }

    pub fn use_database(&mut self, name: &str) -> DbResult<ExecResult> {
        if !self.context.storage.database_exists(name) {
            return Err(DbError::DatabaseNotFound(name.to_string()));
        }

        self.context.current_db = Some(name.to_string());
        info!(database = name, "database selected");
        Ok(ExecResult::Success(format!("Using database {}.", name)))
    }
}
