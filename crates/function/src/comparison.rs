// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Comparison functions and operators.
//!
//! <http://dev.mysql.com/doc/refman/8.0/en/comparison-operators.html>

use std::cmp::Ordering;

use mysqlite_type::{FunctionResult, Value};

use crate::{ScalarFunction, args};

/// `ISNULL(expr)`: 1 when `expr` is NULL, 0 otherwise.
///
/// SQLite parses a bare `isnull` as its postfix `x ISNULL` operator, so SQL
/// callers have to quote the name: `SELECT "isnull"(x)`.
pub struct IsNull;

impl ScalarFunction for IsNull {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("isnull", args, 1)?;
		Ok(Value::Integer(args[0].is_null() as i64))
	}
}

/// `LEAST(v1, ..., vn)`
pub struct Least;

impl ScalarFunction for Least {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::at_least_one("least", args)?;
		Ok(pick(args, Ordering::Less))
	}
}

/// `GREATEST(v1, ..., vn)`
pub struct Greatest;

impl ScalarFunction for Greatest {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::at_least_one("greatest", args)?;
		Ok(pick(args, Ordering::Greater))
	}
}

// NULL wins, otherwise the first argument that orders furthest in `wanted`.
fn pick(args: &[Value], wanted: Ordering) -> Value {
	if args.iter().any(Value::is_null) {
		return Value::Null;
	}

	let numeric = args.iter().all(Value::is_numeric);
	let mut best = &args[0];
	for candidate in &args[1..] {
		if compare(candidate, best, numeric) == wanted {
			best = candidate;
		}
	}
	best.clone()
}

fn compare(left: &Value, right: &Value, numeric: bool) -> Ordering {
	if numeric {
		if let (Some(l), Some(r)) = (left.as_f64(), right.as_f64()) {
			return l.partial_cmp(&r).unwrap_or(Ordering::Equal);
		}
	}
	left.to_string().cmp(&right.to_string())
}
