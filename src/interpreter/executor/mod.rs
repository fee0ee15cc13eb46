mod database_executor;
mod table_ddl_executor;
mod table_dml_executor;

use crate::compiler::ast::Statement;
use crate::interpreter::ExecResult;
use crate::interpreter::execution_context::ExecutionContext;
use crate::storage::Storage;
use crate::types::DbResult;

pub struct Executor<'a, S: Storage> {
    context: &'a mut ExecutionContext<S>,
}

impl<'a, S: Storage> Executor<'a, S> {
    pub fn new(context: &'a mut ExecutionContext<S>) -> Self {
        Self { context }
    }

    pub fn execute(&mut self, stmt: Statement) -> DbResult<ExecResult> {
        match stmt {
            Statement::CreateDatabase { name } => self.create_database(&name),
            Statement::DropDatabase { name } => self.drop_database(&name),
            Statement::UseDatabase { name } => self.use_database(&name),
            Statement::CreateTable { name, columns } => self.create_table(&name, columns),
            Statement::DropTable { name } => self.drop_table(&name),
            Statement::AlterTable { table, columns } => self.alter_table(&table, columns),
            Statement::SelectAll { table } => self.select_all(&table),
            Statement::InsertInto { table, values } => self.insert_into(&table, values),
        }
    }
}
