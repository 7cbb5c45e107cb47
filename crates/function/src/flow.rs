// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Flow control functions.
//!
//! <http://dev.mysql.com/doc/refman/8.0/en/flow-control-functions.html>

use mysqlite_type::{FunctionResult, Value};

use crate::{ScalarFunction, args};

/// `IF(cond, then, else)`
pub struct If;

impl ScalarFunction for If {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("if", args, 3)?;
		Ok(if args[0].is_truthy() {
			args[1].clone()
		} else {
			args[2].clone()
		})
	}
}

#[cfg(test)]
mod tests {
	use mysqlite_type::FunctionError;

	use super::*;

	fn choose(cond: Value) -> Value {
		If.scalar(&[cond, Value::text("yes"), Value::text("no")]).unwrap()
	}

	#[test]
	fn test_truthy() {
		for cond in [Value::Integer(1), Value::Integer(-3), Value::Real(0.5), Value::Boolean(true), Value::text("2abc")]
		{
			assert_eq!(choose(cond), Value::text("yes"));
		}
	}

	#[test]
	fn test_falsy() {
		for cond in [Value::Null, Value::Integer(0), Value::Real(0.0), Value::Boolean(false), Value::text("abc"), Value::text("")]
		{
			assert_eq!(choose(cond), Value::text("no"));
		}
	}

	#[test]
	fn test_arity() {
		assert_eq!(
			If.scalar(&[Value::Integer(1), Value::Integer(2)]),
			Err(FunctionError::ArityMismatch {
				function: "if",
				expected: 3,
				actual: 2,
			})
		);
	}
}
