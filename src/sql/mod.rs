//! SQL type vocabulary for orcadb
//!
//! Plain data definitions bridging the SQL parser and the executor. No
//! parsing or execution lives here.

mod stmt;

pub use stmt::{ColSpec, SqlStmt, SqlValueType, Value};
