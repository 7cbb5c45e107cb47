// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Numeric and boolean coercion following SQLite's conversion rules.

use super::Value;

struct Prefix<'a> {
	text: &'a str,
	consumed: usize,
	integral: bool,
}

fn scan(input: &str) -> Option<Prefix<'_>> {
	let trimmed = input.trim_start();
	let skipped = input.len() - trimmed.len();
	let bytes = trimmed.as_bytes();
	let mut pos = 0;
	let mut digits = 0;
	let mut integral = true;

	if matches!(bytes.first(), Some(b'+' | b'-')) {
		pos += 1;
	}
	while pos < bytes.len() && bytes[pos].is_ascii_digit() {
		pos += 1;
		digits += 1;
	}
	if pos < bytes.len() && bytes[pos] == b'.' {
		let mut end = pos + 1;
		let mut fraction = 0;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
			fraction += 1;
		}
		if digits + fraction > 0 {
			pos = end;
			digits += fraction;
			integral = false;
		}
	}
	if digits == 0 {
		return None;
	}
	if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
		let mut end = pos + 1;
		if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
			end += 1;
		}
		let start = end;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
		}
		if end > start {
			pos = end;
			integral = false;
		}
	}

	Some(Prefix {
		text: &trimmed[..pos],
		consumed: skipped + pos,
		integral,
	})
}

/// The longest leading numeric literal of `input`, the way SQLite reads text
/// in a numeric context. `None` when the text does not start with a number.
pub fn numeric_prefix(input: &str) -> Option<f64> {
	scan(input).and_then(|p| p.text.parse::<f64>().ok())
}

fn text_to_i64(input: &str) -> i64 {
	match scan(input) {
		Some(prefix) if prefix.integral => prefix
			.text
			.parse::<i64>()
			.unwrap_or_else(|_| prefix.text.parse::<f64>().map(|f| f as i64).unwrap_or(0)),
		Some(prefix) => prefix.text.parse::<f64>().map(|f| f as i64).unwrap_or(0),
		None => 0,
	}
}

fn text_to_f64(input: &str) -> Option<f64> {
	let prefix = scan(input)?;
	if prefix.consumed != input.trim_end().len() {
		return None;
	}
	prefix.text.parse::<f64>().ok()
}

impl Value {
	/// True for numbers, booleans and text that is entirely a number.
	pub fn is_numeric(&self) -> bool {
		self.as_f64().is_some()
	}

	/// Strict numeric view: text must be a complete number, blobs and NULL
	/// are not numeric.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
			Value::Integer(v) => Some(*v as f64),
			Value::Real(v) => Some(*v),
			Value::Text(v) => text_to_f64(v),
			Value::Null | Value::Blob(_) => None,
		}
	}

	/// Integer view with `CAST(x AS INTEGER)` semantics: reals truncate,
	/// text contributes its numeric prefix, everything else is 0.
	pub fn to_i64(&self) -> i64 {
		match self {
			Value::Null => 0,
			Value::Boolean(v) => *v as i64,
			Value::Integer(v) => *v,
			Value::Real(v) => *v as i64,
			Value::Text(v) => text_to_i64(v),
			Value::Blob(v) => text_to_i64(&String::from_utf8_lossy(v)),
		}
	}

	/// Boolean coercion used by conditional functions.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Null => false,
			Value::Boolean(v) => *v,
			Value::Integer(v) => *v != 0,
			Value::Real(v) => *v != 0.0,
			Value::Text(v) => numeric_prefix(v).is_some_and(|f| f != 0.0),
			Value::Blob(v) => numeric_prefix(&String::from_utf8_lossy(v)).is_some_and(|f| f != 0.0),
		}
	}
}
