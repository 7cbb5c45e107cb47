// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fmt::{Display, Formatter},
};

mod coerce;

pub use coerce::numeric_prefix;

/// A SQL value as seen by a compatibility function.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// SQL NULL
	Null,
	/// A boolean. SQLite never produces one, direct callers may.
	Boolean(bool),
	/// An 8-byte signed integer
	Integer(i64),
	/// An 8-byte floating point
	Real(f64),
	/// A UTF-8 encoded text
	Text(String),
	/// A binary large object
	Blob(Vec<u8>),
}

impl Value {
	pub fn null() -> Self {
		Value::Null
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn integer(v: impl Into<i64>) -> Self {
		Value::Integer(v.into())
	}

	pub fn real(v: impl Into<f64>) -> Self {
		Value::Real(v.into())
	}

	pub fn text(v: impl Into<String>) -> Self {
		Value::Text(v.into())
	}

	pub fn blob(v: impl Into<Vec<u8>>) -> Self {
		Value::Blob(v.into())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Text representation used by string functions, `None` for NULL.
	pub fn as_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Value::Null => None,
			Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
			Value::Blob(b) => Some(String::from_utf8_lossy(b)),
			other => Some(Cow::Owned(other.to_string())),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("NULL"),
			Value::Boolean(true) => f.write_str("1"),
			Value::Boolean(false) => f.write_str("0"),
			Value::Integer(v) => Display::fmt(v, f),
			Value::Real(v) => Display::fmt(v, f),
			Value::Text(v) => f.write_str(v),
			Value::Blob(v) => f.write_str(&String::from_utf8_lossy(v)),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Integer(v as i64)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Integer(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::Integer(v as i64)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Real(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		Value::Blob(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Null)
	}
}
