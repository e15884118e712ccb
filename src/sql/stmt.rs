//! Parsed SQL statement and literal value types
//!
//! A closed vocabulary shared between the parser (producer) and the executor
//! (consumer). All sets are deliberately flat tagged unions so the executor
//! handles every statement and value kind exhaustively at compile time.
//! These types are immutable data; they carry no behavior beyond
//! construction and field access.

use serde::{Deserialize, Serialize};

/// Column value types supported by the SQL surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlValueType {
    /// 64-bit signed integer
    Integer,
    /// Boolean
    Boolean,
    /// UTF-8 string
    String,
    /// Raw byte sequence
    Blob,
    /// Point in time
    Timestamp,
}

impl SqlValueType {
    /// Returns the type name for error messages and explain output
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValueType::Integer => "integer",
            SqlValueType::Boolean => "boolean",
            SqlValueType::String => "string",
            SqlValueType::Blob => "blob",
            SqlValueType::Timestamp => "timestamp",
        }
    }
}

/// A column definition: name plus value type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColSpec {
    /// Column name
    pub name: String,
    /// Column value type
    pub col_type: SqlValueType,
}

impl ColSpec {
    /// Creates a column spec
    pub fn new(name: impl Into<String>, col_type: SqlValueType) -> Self {
        Self {
            name: name.into(),
            col_type,
        }
    }
}

/// Parsed SQL statements (closed set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlStmt {
    /// CREATE DATABASE db
    CreateDatabase {
        /// Database name
        db: String,
    },
    /// USE DATABASE db
    UseDatabase {
        /// Database name
        db: String,
    },
    /// CREATE TABLE table (cols...)
    CreateTable {
        /// Table name
        table: String,
        /// Ordered column definitions
        cols: Vec<ColSpec>,
    },
    /// CREATE INDEX ON table(col)
    CreateIndex {
        /// Table name
        table: String,
        /// Indexed column name
        col: String,
    },
    /// ALTER TABLE table ADD COLUMN col
    AddColumn {
        /// Table name
        table: String,
        /// New column definition
        col_spec: ColSpec,
    },
    /// ALTER TABLE table ALTER COLUMN col
    AlterColumn {
        /// Table name
        table: String,
        /// Updated column definition
        col_spec: ColSpec,
    },
    /// INSERT INTO table (cols...) VALUES (values...)
    InsertInto {
        /// Table name
        table: String,
        /// Ordered target column names
        cols: Vec<String>,
        /// Ordered literal values, positionally matching `cols`
        values: Vec<Value>,
    },
}

impl SqlStmt {
    /// Returns the statement kind name for explain output
    pub fn stmt_name(&self) -> &'static str {
        match self {
            SqlStmt::CreateDatabase { .. } => "create_database",
            SqlStmt::UseDatabase { .. } => "use_database",
            SqlStmt::CreateTable { .. } => "create_table",
            SqlStmt::CreateIndex { .. } => "create_index",
            SqlStmt::AddColumn { .. } => "add_column",
            SqlStmt::AlterColumn { .. } => "alter_column",
            SqlStmt::InsertInto { .. } => "insert_into",
        }
    }
}

/// SQL literal values (closed set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean literal
    Boolean(bool),
    /// Integer literal
    Integer(i64),
    /// String literal
    String(String),
    /// Binary literal
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the value type of this literal
    pub fn value_type(&self) -> SqlValueType {
        match self {
            Value::Boolean(_) => SqlValueType::Boolean,
            Value::Integer(_) => SqlValueType::Integer,
            Value::String(_) => SqlValueType::String,
            Value::Blob(_) => SqlValueType::Blob,
        }
    }
}
