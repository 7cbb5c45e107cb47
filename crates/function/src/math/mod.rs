// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Mathematical functions.
//!
//! <http://dev.mysql.com/doc/refman/8.0/en/mathematical-functions.html>

use mysqlite_type::{FunctionResult, Value};

use crate::{ScalarFunction, args};

/// `SQRT(x)`. NULL and negative input yield NULL.
pub struct Sqrt;

impl ScalarFunction for Sqrt {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("sqrt", args, 1)?;
		if args[0].is_null() {
			return Ok(Value::Null);
		}

		let x = args::number("sqrt", args, 0)?;
		if x < 0.0 {
			return Ok(Value::Null);
		}
		Ok(Value::Real(x.sqrt()))
	}
}

/// `RAND()`: uniform in `[0, 1)`, unseeded.
pub struct Rand;

impl ScalarFunction for Rand {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("rand", args, 0)?;
		Ok(Value::Real(rand::random::<f64>()))
	}
}
