// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bitwise aggregate functions.
//!
//! Each is usable both over a column and over a fixed argument list,
//! `BIT_OR(1, 2, 4)`. NULL values are skipped in both forms.
//!
//! <http://dev.mysql.com/doc/refman/8.0/en/aggregate-functions.html>

use mysqlite_type::{FunctionResult, Value};

use crate::{AggregateFunction, ScalarFunction};

pub struct BitOr;

impl AggregateFunction for BitOr {
	fn identity(&self) -> i64 {
		0
	}

	fn combine(&self, acc: i64, value: i64) -> i64 {
		acc | value
	}
}

impl ScalarFunction for BitOr {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		Ok(Value::Integer(self.fold(args)))
	}
}

/// All bits set over zero rows.
pub struct BitAnd;

impl AggregateFunction for BitAnd {
	fn identity(&self) -> i64 {
		-1
	}

	fn combine(&self, acc: i64, value: i64) -> i64 {
		acc & value
	}
}

impl ScalarFunction for BitAnd {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		Ok(Value::Integer(self.fold(args)))
	}
}

pub struct BitXor;

impl AggregateFunction for BitXor {
	fn identity(&self) -> i64 {
		0
	}

	fn combine(&self, acc: i64, value: i64) -> i64 {
		acc ^ value
	}
}

impl ScalarFunction for BitXor {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		Ok(Value::Integer(self.fold(args)))
	}
}
