// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! String functions.
//!
//! <http://dev.mysql.com/doc/refman/8.0/en/string-functions.html>

use mysqlite_type::{FunctionResult, Value};

use crate::{ScalarFunction, args};

/// `CONCAT(v1, ..., vn)`. NULL arguments contribute nothing.
pub struct Concat;

impl ScalarFunction for Concat {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		let mut result = String::new();
		for arg in args {
			if let Some(text) = arg.as_text() {
				result.push_str(&text);
			}
		}
		Ok(Value::Text(result))
	}
}

/// `CONCAT_WS(separator, v1, ..., vn)`. A NULL separator yields NULL and
/// NULL values are skipped together with their separator.
pub struct ConcatWs;

impl ScalarFunction for ConcatWs {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::at_least_one("concat_ws", args)?;
		let Some(separator) = args[0].as_text() else {
			return Ok(Value::Null);
		};

		let parts: Vec<_> = args[1..].iter().filter_map(Value::as_text).collect();
		Ok(Value::Text(parts.join(separator.as_ref())))
	}
}
