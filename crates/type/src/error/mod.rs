// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub type FunctionResult<T> = std::result::Result<T, FunctionError>;

/// Failure raised while evaluating a compatibility function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
	#[error("Function {function} requires at least one argument")]
	NoArguments {
		function: &'static str,
	},

	#[error("Function {function} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		function: &'static str,
		expected: usize,
		actual: usize,
	},

	#[error("Function {function} accepts at most {max} arguments, got {actual}")]
	TooManyArguments {
		function: &'static str,
		max: usize,
		actual: usize,
	},

	#[error("Function {function} requires at least {min} arguments, got {actual}")]
	NotEnoughArguments {
		function: &'static str,
		min: usize,
		actual: usize,
	},

	#[error("Function {function} cannot parse '{input}' as a date")]
	InvalidDate {
		function: &'static str,
		input: String,
	},

	#[error("Function {function} argument {} is not numeric: '{value}'", index + 1)]
	NotNumeric {
		function: &'static str,
		index: usize,
		value: String,
	},

	#[error("Function {function} timestamp {timestamp} is out of range")]
	TimestampOutOfRange {
		function: &'static str,
		timestamp: i64,
	},
}

impl FunctionError {
	pub fn code(&self) -> &'static str {
		match self {
			FunctionError::NoArguments {
				..
			} => "FUNCTION_001",
			FunctionError::ArityMismatch {
				..
			} => "FUNCTION_002",
			FunctionError::TooManyArguments {
				..
			} => "FUNCTION_003",
			FunctionError::NotEnoughArguments {
				..
			} => "FUNCTION_004",
			FunctionError::InvalidDate {
				..
			} => "FUNCTION_005",
			FunctionError::NotNumeric {
				..
			} => "FUNCTION_006",
			FunctionError::TimestampOutOfRange {
				..
			} => "FUNCTION_007",
		}
	}

	pub fn function(&self) -> &'static str {
		match self {
			FunctionError::NoArguments {
				function,
			}
			| FunctionError::ArityMismatch {
				function,
				..
			}
			| FunctionError::TooManyArguments {
				function,
				..
			}
			| FunctionError::NotEnoughArguments {
				function,
				..
			}
			| FunctionError::InvalidDate {
				function,
				..
			}
			| FunctionError::NotNumeric {
				function,
				..
			}
			| FunctionError::TimestampOutOfRange {
				function,
				..
			} => *function,
		}
	}
}
