// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! MySQL compatible functions for SQLite.
//!
//! ```no_run
//! use mysqlite::rusqlite::Connection;
//!
//! let conn = Connection::open_in_memory()?;
//! mysqlite::create_functions(&conn, None)?;
//!
//! let year: i64 = conn.query_row("SELECT year('2014-11-14')", [], |row| row.get(0))?;
//! assert_eq!(year, 2014);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use mysqlite_function::{
	AggregateFunction, Arity, Catalog, FunctionEntry, FunctionKind, Implementation, ScalarFunction, aggregate, catalog,
	comparison, datetime, flow, math, text,
};
pub use mysqlite_sqlite::{
	DRIVER, Error, FunctionConfig, FunctionHost, FunctionOptions, Result, create_functions, create_functions_with,
};
pub use mysqlite_type::{FunctionError, FunctionResult, Value};
pub use rusqlite;

/// Names of every implemented MySQL function, lowercase.
pub fn function_list() -> Vec<&'static str> {
	catalog().list()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_function_list() {
		let list = function_list();
		assert!(list.contains(&"bit_or"));
		assert!(list.contains(&"unix_timestamp"));
		assert_eq!(list.len(), catalog().len());
	}
}
