use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::compiler::error::TypeError;
use crate::compiler::type_checker;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {

    CreateDatabase { name: String },
    DropDatabase { name: String },
    UseDatabase { name: String },

    CreateTable {
        name: String,
        columns: Vec<ColumnDef>,
    },
    DropTable { name: String },

    AlterTable {
        table: String,
        columns: Vec<ColumnDef>,
    },

    SelectAll { table: String },

    InsertInto {
        table: String,
        values: Vec<String>,
    },
}

/// Column Definition, type kept as the raw token the user typed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self { name: name.into(), data_type: data_type.into() }
    }

    /// Resolve the raw type token
    pub fn resolve_type(&self) -> Result<DataType, TypeError> {
        self.data_type.parse()
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)
    }
}

/// Column Data Type. Only VARCHAR carries a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Float,
    Char,
    Varchar(Option<u32>), // VARCHAR or VARCHAR(n)
}

impl DataType {
    /// Classify an *upper-cased* base type name
    pub fn from_base(name: &str) -> Option<Self> {
        match name {
            "INT" => Some(DataType::Int),
            "FLOAT" => Some(DataType::Float),
            "CHAR" => Some(DataType::Char),
            "VARCHAR" => Some(DataType::Varchar(None)),
            _ => None,
        }
    }

    /// Check a raw value against this type. An empty value is NULL and always fits.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match self {
            DataType::Int => value.parse::<i64>().is_ok(),
            DataType::Float => value.parse::<f64>().is_ok(),
            DataType::Char => value.chars().count() <= 1,
            DataType::Varchar(None) => true,
            DataType::Varchar(Some(size)) => value.chars().count() <= *size as usize,
        }
    }
}

impl FromStr for DataType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type_checker::check_type(s)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => f.write_str("INT"),
            DataType::Float => f.write_str("FLOAT"),
            DataType::Char => f.write_str("CHAR"),
            DataType::Varchar(None) => f.write_str("VARCHAR"),
            DataType::Varchar(Some(size)) => write!(f, "VARCHAR({size})"),
        }
    }
}
