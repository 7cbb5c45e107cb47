// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mysqlite_type::{FunctionError, FunctionResult, Value};

pub(crate) fn exactly(function: &'static str, args: &[Value], expected: usize) -> FunctionResult<()> {
	if args.len() != expected {
		return Err(FunctionError::ArityMismatch {
			function,
			expected,
			actual: args.len(),
		});
	}
	Ok(())
}

pub(crate) fn between(function: &'static str, args: &[Value], min: usize, max: usize) -> FunctionResult<()> {
	if args.len() < min {
		return Err(FunctionError::NotEnoughArguments {
			function,
			min,
			actual: args.len(),
		});
	}
	if args.len() > max {
		return Err(FunctionError::TooManyArguments {
			function,
			max,
			actual: args.len(),
		});
	}
	Ok(())
}

pub(crate) fn at_least_one(function: &'static str, args: &[Value]) -> FunctionResult<()> {
	if args.is_empty() {
		return Err(FunctionError::NoArguments {
			function,
		});
	}
	Ok(())
}

pub(crate) fn number(function: &'static str, args: &[Value], index: usize) -> FunctionResult<f64> {
	args[index].as_f64().ok_or_else(|| FunctionError::NotNumeric {
		function,
		index,
		value: args[index].to_string(),
	})
}
