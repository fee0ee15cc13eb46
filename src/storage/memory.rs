use linked_hash_map::LinkedHashMap;
use tracing::trace;
use crate::compiler::ast::{ColumnDef, DataType};
use crate::compiler::error::ParseError;
use crate::storage::{DatabaseHandle, Storage, TableHandle};
use crate::types::{DbError, DbResult};

/// In-memory collaborator. Databases and tables keep their creation order.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    databases: LinkedHashMap<String, MemoryDatabase>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_databases(&self) -> Vec<String> {
        self.databases.keys().cloned().collect()
    }
}

impl Storage for MemoryStorage {
    type Database = MemoryDatabase;

    fn database_exists(&self, name: &str) -> bool {
        self.databases.contains_key(name)
    }

    fn get_database(&self, name: &str) -> Option<&MemoryDatabase> {
        self.databases.get(name)
    }

    fn get_database_mut(&mut self, name: &str) -> Option<&mut MemoryDatabase> {
        self.databases.get_mut(name)
    }

    fn create_database(&mut self, name: &str) -> &mut MemoryDatabase {
        self.databases
            .entry(name.to_string())
            .or_insert_with(|| MemoryDatabase::new(name))
    }

    fn drop_database(&mut self, name: &str) {
        self.databases.remove(name);
    }
}

#[derive(Debug)]
pub struct MemoryDatabase {
    name: String,
    tables: LinkedHashMap<String, MemoryTable>,
}

impl MemoryDatabase {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tables: LinkedHashMap::new(),
        }
    }

    pub fn list_tables(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}

impl DatabaseHandle for MemoryDatabase {
    type Table = MemoryTable;

    fn name(&self) -> &str {
        &self.name
    }

    fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    fn create_table(&mut self, name: &str, columns: Vec<ColumnDef>) -> DbResult<()> {
        if self.table_exists(name) {
            return Err(DbError::TableExists(name.to_string()));
        }
        let table = MemoryTable::new(name, columns)?;
        self.tables.insert(name.to_string(), table);
        Ok(())
    }

    fn drop_table(&mut self, name: &str) {
        self.tables.remove(name);
    }

    fn add_columns(&mut self, name: &str, columns: Vec<ColumnDef>) -> DbResult<()> {
        let table = self.tables.get_mut(name).ok_or_else(|| DbError::TableNotFound {
            database: self.name.clone(),
            table: name.to_string(),
        })?;
        table.add_columns(columns)
    }

    fn get_table(&self, name: &str) -> Option<&MemoryTable> {
        self.tables.get(name)
    }

    fn get_table_mut(&mut self, name: &str) -> Option<&mut MemoryTable> {
        self.tables.get_mut(name)
    }
}

#[derive(Debug)]
pub struct MemoryTable {
    name: String,
    columns: Vec<ColumnDef>,
    types: Vec<DataType>,
    rows: Vec<Vec<String>>,
}

impl MemoryTable {
    pub fn new(name: &str, columns: Vec<ColumnDef>) -> DbResult<Self> {
        let mut table = Self {
            name: name.to_string(),
            columns: Vec::new(),
            types: Vec::new(),
            rows: Vec::new(),
        };
        table.add_columns(columns)?;
        Ok(table)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn add_columns(&mut self, columns: Vec<ColumnDef>) -> DbResult<()> {
        // resolve every type before touching the schema
        let types = columns
            .iter()
            .map(|c| c.resolve_type())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbError::Parse(ParseError::InvalidTypes(vec![e])))?;

        // existing rows get NULL for the new columns
        for row in &mut self.rows {
            row.resize(row.len() + columns.len(), String::new());
        }
        self.columns.extend(columns);
        self.types.extend(types);
        Ok(())
    }
}

impl TableHandle for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn insert_row(&mut self, values: Vec<String>) -> DbResult<()> {
        if values.len() != self.columns.len() {
            return Err(DbError::ColumnCountMismatch {
                table: self.name.clone(),
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        for ((value, column), data_type) in values.iter().zip(&self.columns).zip(&self.types) {
            if !data_type.accepts(value) {
                return Err(DbError::TypeMismatch {
                    column: column.name.clone(),
                    data_type: data_type.to_string(),
                    value: value.clone(),
                });
            }
        }

        trace!(table = %self.name, ?values, "row stored");
        self.rows.push(values);
        Ok(())
    }

    fn select_all(&self) -> Vec<Vec<String>> {
        let header = self.columns
            .iter()
            .zip(&self.types)
            .map(|(column, data_type)| format!("{} {}", column.name, data_type))
            .collect();

        let mut result = Vec::with_capacity(self.rows.len() + 1);
        result.push(header);
        result.extend(self.rows.iter().cloned());
        result
    }
}
