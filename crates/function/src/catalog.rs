// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::{Arity, FunctionEntry, aggregate, comparison, datetime, flow, math, text};

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::standard);

/// The process-wide catalog. Built on first use and never mutated.
pub fn catalog() -> &'static Catalog {
	&CATALOG
}

/// Every MySQL function this crate implements, keyed by lowercase name.
#[derive(Debug)]
pub struct Catalog {
	entries: IndexMap<&'static str, FunctionEntry>,
}

impl Catalog {
	fn standard() -> Self {
		let entries = [
			// comparison; SQLite reads a bare `isnull` as its postfix operator, so
			// SQL callers write "isnull"(x)
			FunctionEntry::scalar("isnull", Arity::Fixed(1), &comparison::IsNull),
			FunctionEntry::scalar("least", Arity::Variable, &comparison::Least),
			FunctionEntry::scalar("greatest", Arity::Variable, &comparison::Greatest),
			// date and time
			FunctionEntry::scalar("now", Arity::Fixed(0), &datetime::Now).volatile(),
			FunctionEntry::scalar("curdate", Arity::Fixed(0), &datetime::CurDate).volatile(),
			FunctionEntry::scalar("datediff", Arity::Fixed(2), &datetime::DateDiff),
			FunctionEntry::scalar("to_days", Arity::Fixed(1), &datetime::ToDays).volatile(),
			FunctionEntry::scalar("from_days", Arity::Fixed(1), &datetime::FromDays),
			FunctionEntry::scalar("unix_timestamp", Arity::Between(0, 1), &datetime::UnixTimestamp).volatile(),
			FunctionEntry::scalar("from_unixtime", Arity::Between(1, 2), &datetime::FromUnixTime).volatile(),
			FunctionEntry::scalar("year", Arity::Fixed(1), &datetime::Year),
			FunctionEntry::scalar("month", Arity::Fixed(1), &datetime::Month),
			FunctionEntry::scalar("day", Arity::Fixed(1), &datetime::Day),
			FunctionEntry::scalar("dayofmonth", Arity::Fixed(1), &datetime::DayOfMonth),
			FunctionEntry::scalar("dayofweek", Arity::Fixed(1), &datetime::DayOfWeek),
			FunctionEntry::scalar("weekday", Arity::Fixed(1), &datetime::WeekDay),
			FunctionEntry::scalar("dayofyear", Arity::Fixed(1), &datetime::DayOfYear),
			FunctionEntry::scalar("hour", Arity::Fixed(1), &datetime::Hour),
			FunctionEntry::scalar("minute", Arity::Fixed(1), &datetime::Minute),
			FunctionEntry::scalar("second", Arity::Fixed(1), &datetime::Second),
			FunctionEntry::scalar("date_format", Arity::Fixed(2), &datetime::DateFormat),
			// aggregate
			FunctionEntry::aggregate("bit_or", &aggregate::BitOr),
			FunctionEntry::aggregate("bit_and", &aggregate::BitAnd),
			FunctionEntry::aggregate("bit_xor", &aggregate::BitXor),
			// string
			FunctionEntry::scalar("concat", Arity::Variable, &text::Concat),
			FunctionEntry::scalar("concat_ws", Arity::Variable, &text::ConcatWs),
			// math
			FunctionEntry::scalar("rand", Arity::Fixed(0), &math::Rand).volatile(),
			FunctionEntry::scalar("sqrt", Arity::Fixed(1), &math::Sqrt),
			// flow control
			FunctionEntry::scalar("if", Arity::Fixed(3), &flow::If),
		];

		Self {
			entries: entries.into_iter().map(|entry| (entry.name, entry)).collect(),
		}
	}

	/// Looks up a function by name, ignoring case.
	pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
		self.entries.get(name).or_else(|| self.entries.get(name.to_ascii_lowercase().as_str()))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Function names in registration order.
	pub fn list(&self) -> Vec<&'static str> {
		self.entries.keys().copied().collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = &FunctionEntry> {
		self.entries.values()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
