// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! MySQL compatible function implementations.
//!
//! Every function takes its arguments as an ordered slice of [`Value`]s and is
//! independent of the engine it is eventually registered with. The
//! [`catalog`] binds each implementation to its MySQL name and arity.

use std::fmt::{self, Debug, Display, Formatter};

pub use mysqlite_type::{FunctionError, FunctionResult, Value};

pub mod aggregate;
mod args;
pub mod catalog;
pub mod comparison;
pub mod datetime;
pub mod flow;
pub mod math;
pub mod text;

pub use catalog::{Catalog, catalog};

pub trait ScalarFunction: Send + Sync {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value>;
}

/// Integer reduction over the rows of a group. NULL rows are skipped.
pub trait AggregateFunction: Send + Sync {
	/// Result over zero rows.
	fn identity(&self) -> i64;

	fn combine(&self, acc: i64, value: i64) -> i64;

	fn fold(&self, values: &[Value]) -> i64 {
		values.iter().filter(|v| !v.is_null()).fold(self.identity(), |acc, v| self.combine(acc, v.to_i64()))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
	// select "isnull"(x)
	Scalar,
	// select bit_or(flags) from t
	Aggregate,
}

impl Display for FunctionKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let label = match self {
			FunctionKind::Scalar => "Scalar",
			FunctionKind::Aggregate => "Aggregate",
		};
		write!(f, "{}", label)
	}
}

/// Number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
	Fixed(u8),
	/// Optional trailing arguments, inclusive bounds.
	Between(u8, u8),
	Variable,
}

impl Arity {
	pub fn accepts(&self, count: usize) -> bool {
		match *self {
			Arity::Fixed(n) => count == n as usize,
			Arity::Between(min, max) => (min as usize..=max as usize).contains(&count),
			Arity::Variable => true,
		}
	}

	/// Argument counts to register with the engine, `-1` meaning any.
	pub fn engine_arities(&self) -> Vec<i32> {
		match *self {
			Arity::Fixed(n) => vec![n as i32],
			Arity::Between(min, max) => (min as i32..=max as i32).collect(),
			Arity::Variable => vec![-1],
		}
	}
}

#[derive(Clone, Copy)]
pub enum Implementation {
	Scalar(&'static dyn ScalarFunction),
	/// `aggregate` runs once per row; `scalar` covers the fixed argument list form.
	Aggregate {
		aggregate: &'static dyn AggregateFunction,
		scalar: &'static dyn ScalarFunction,
	},
}

#[derive(Clone, Copy)]
pub struct FunctionEntry {
	pub name: &'static str,
	/// For aggregates this is the per-row arity.
	pub arity: Arity,
	/// Same arguments always produce the same result.
	pub deterministic: bool,
	pub implementation: Implementation,
}

impl FunctionEntry {
	pub fn scalar(name: &'static str, arity: Arity, function: &'static dyn ScalarFunction) -> Self {
		Self {
			name,
			arity,
			deterministic: true,
			implementation: Implementation::Scalar(function),
		}
	}

	pub fn aggregate<F>(name: &'static str, function: &'static F) -> Self
	where
		F: AggregateFunction + ScalarFunction,
	{
		Self {
			name,
			arity: Arity::Fixed(1),
			deterministic: true,
			implementation: Implementation::Aggregate {
				aggregate: function,
				scalar: function,
			},
		}
	}

	pub fn volatile(mut self) -> Self {
		self.deterministic = false;
		self
	}

	pub fn kind(&self) -> FunctionKind {
		match self.implementation {
			Implementation::Scalar(_) => FunctionKind::Scalar,
			Implementation::Aggregate {
				..
			} => FunctionKind::Aggregate,
		}
	}

	/// Evaluates the scalar form of this entry.
	pub fn call(&self, args: &[Value]) -> FunctionResult<Value> {
		match self.implementation {
			Implementation::Scalar(function) => function.scalar(args),
			Implementation::Aggregate {
				scalar,
				..
			} => scalar.scalar(args),
		}
	}
}

impl Debug for FunctionEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionEntry")
			.field("name", &self.name)
			.field("arity", &self.arity)
			.field("deterministic", &self.deterministic)
			.field("kind", &self.kind())
			.finish()
	}
}
