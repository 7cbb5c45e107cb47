// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mysqlite_function::{AggregateFunction, ScalarFunction};
use rusqlite::{Connection, functions::FunctionFlags};

use crate::{aggregate::FoldAggregate, value};

/// Driver identity of the only supported engine.
pub const DRIVER: &str = "sqlite";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionOptions {
	/// Same arguments always give the same result, lets the planner fold calls.
	pub deterministic: bool,
	/// Callable only from top-level SQL, not from views, triggers or schema.
	pub direct_only: bool,
}

impl FunctionOptions {
	pub fn flags(&self) -> FunctionFlags {
		let mut flags = FunctionFlags::SQLITE_UTF8;
		if self.deterministic {
			flags |= FunctionFlags::SQLITE_DETERMINISTIC;
		}
		if self.direct_only {
			flags |= FunctionFlags::SQLITE_DIRECTONLY;
		}
		flags
	}
}

/// A connection that user defined functions can be attached to.
pub trait FunctionHost {
	fn driver_name(&self) -> &str;

	/// `n_arg` of -1 accepts any argument count.
	fn register_scalar(
		&self,
		name: &'static str,
		n_arg: i32,
		options: FunctionOptions,
		function: &'static dyn ScalarFunction,
	) -> rusqlite::Result<()>;

	fn register_aggregate(
		&self,
		name: &'static str,
		n_arg: i32,
		options: FunctionOptions,
		function: &'static dyn AggregateFunction,
	) -> rusqlite::Result<()>;
}

impl FunctionHost for Connection {
	fn driver_name(&self) -> &str {
		DRIVER
	}

	fn register_scalar(
		&self,
		name: &'static str,
		n_arg: i32,
		options: FunctionOptions,
		function: &'static dyn ScalarFunction,
	) -> rusqlite::Result<()> {
		self.create_scalar_function(name, n_arg, options.flags(), move |ctx| {
			let args = value::arguments(ctx);
			function
				.scalar(&args)
				.map(value::to_sql)
				.map_err(|err| rusqlite::Error::UserFunctionError(Box::new(err)))
		})
	}

	fn register_aggregate(
		&self,
		name: &'static str,
		n_arg: i32,
		options: FunctionOptions,
		function: &'static dyn AggregateFunction,
	) -> rusqlite::Result<()> {
		self.create_aggregate_function(name, n_arg, options.flags(), FoldAggregate {
			function,
		})
	}
}

#[cfg(test)]
mod tests {
	use mysqlite_function::{
		aggregate::BitOr,
		comparison::{IsNull, Least},
	};

	use super::*;

	#[test]
	fn test_flags() {
		assert_eq!(FunctionOptions::default().flags().bits(), FunctionFlags::SQLITE_UTF8.bits());

		let flags = FunctionOptions {
			deterministic: true,
			direct_only: true,
		}
		.flags();
		assert!(flags.contains(FunctionFlags::SQLITE_DETERMINISTIC));
		assert!(flags.contains(FunctionFlags::SQLITE_DIRECTONLY));
	}

	#[test]
	fn test_connection_is_sqlite() {
		let conn = Connection::open_in_memory().unwrap();
		assert_eq!(conn.driver_name(), DRIVER);
	}

	#[test]
	fn test_register_scalar() {
		let conn = Connection::open_in_memory().unwrap();
		conn.register_scalar("isnull", 1, FunctionOptions::default(), &IsNull).unwrap();

		let result: i64 = conn.query_row(r#"SELECT "isnull"(NULL)"#, [], |row| row.get(0)).unwrap();
		assert_eq!(result, 1);
		let result: i64 = conn.query_row(r#"SELECT "isnull"(0)"#, [], |row| row.get(0)).unwrap();
		assert_eq!(result, 0);
	}

	#[test]
	fn test_bare_isnull_is_the_postfix_operator() {
		let conn = Connection::open_in_memory().unwrap();
		conn.register_scalar("isnull", 1, FunctionOptions::default(), &IsNull).unwrap();

		let err = conn.prepare("SELECT isnull(NULL)").unwrap_err();
		assert!(err.to_string().contains("syntax error"), "{err}");
	}

	#[test]
	fn test_function_error_reaches_caller() {
		let conn = Connection::open_in_memory().unwrap();
		conn.register_scalar("least", -1, FunctionOptions::default(), &Least).unwrap();

		let err = conn.query_row("SELECT least()", [], |row| row.get::<_, i64>(0)).unwrap_err();
		assert!(err.to_string().contains("least"), "{err}");
	}

	#[test]
	fn test_register_aggregate() {
		let conn = Connection::open_in_memory().unwrap();
		conn.register_aggregate("bit_or", 1, FunctionOptions::default(), &BitOr).unwrap();
		conn.execute_batch("CREATE TABLE t (v INTEGER); INSERT INTO t VALUES (1), (2), (4);").unwrap();

		let result: i64 = conn.query_row("SELECT bit_or(v) FROM t", [], |row| row.get(0)).unwrap();
		assert_eq!(result, 7);
	}
}
