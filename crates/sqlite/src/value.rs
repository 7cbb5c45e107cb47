// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Conversion between SQLite values and [`Value`].

use mysqlite_type::Value;
use rusqlite::{functions::Context, types::ValueRef};

pub(crate) fn from_sql(value: ValueRef<'_>) -> Value {
	match value {
		ValueRef::Null => Value::Null,
		ValueRef::Integer(v) => Value::Integer(v),
		ValueRef::Real(v) => Value::Real(v),
		ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
		ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
	}
}

// SQLite has no boolean storage class.
pub(crate) fn to_sql(value: Value) -> rusqlite::types::Value {
	use rusqlite::types::Value as Sql;

	match value {
		Value::Null => Sql::Null,
		Value::Boolean(v) => Sql::Integer(v as i64),
		Value::Integer(v) => Sql::Integer(v),
		Value::Real(v) => Sql::Real(v),
		Value::Text(v) => Sql::Text(v),
		Value::Blob(v) => Sql::Blob(v),
	}
}

pub(crate) fn arguments(ctx: &Context<'_>) -> Vec<Value> {
	(0..ctx.len()).map(|i| from_sql(ctx.get_raw(i))).collect()
}
