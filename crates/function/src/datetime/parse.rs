// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use mysqlite_type::{FunctionError, FunctionResult};

const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

// Width of the widest forward transition handled.
const GAP_HOURS: i64 = 1;

/// A parsed date argument: either wall-clock time to be read in some
/// timezone, or an instant that carried its own offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Moment {
	Naive(NaiveDateTime),
	Zoned(DateTime<FixedOffset>),
}

impl Moment {
	/// Wall-clock reading, in the offset the input carried if any.
	pub(crate) fn wall(&self) -> NaiveDateTime {
		match self {
			Moment::Naive(dt) => *dt,
			Moment::Zoned(dt) => dt.naive_local(),
		}
	}

	/// Seconds since the Unix epoch, reading naive input in `tz`. Ambiguous
	/// local times resolve to the earlier instant. Times skipped by a forward
	/// transition are read with the offset in force before the gap.
	pub(crate) fn epoch_seconds<Tz: TimeZone>(&self, tz: &Tz) -> Option<i64> {
		match self {
			Moment::Naive(dt) => match tz.from_local_datetime(dt) {
				LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => Some(t.timestamp()),
				LocalResult::None => {
					let before = dt.checked_sub_signed(TimeDelta::hours(GAP_HOURS))?;
					let t = tz.from_local_datetime(&before).earliest()?;
					Some(t.timestamp() + GAP_HOURS * 3600)
				}
			},
			Moment::Zoned(dt) => Some(dt.timestamp()),
		}
	}
}

pub(crate) fn parse(function: &'static str, input: &str) -> FunctionResult<Moment> {
	let text = input.trim();

	if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
		return Ok(Moment::Zoned(dt));
	}
	for format in ZONED_FORMATS {
		if let Ok(dt) = DateTime::parse_from_str(text, format) {
			return Ok(Moment::Zoned(dt));
		}
	}
	for format in NAIVE_FORMATS {
		if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
			return Ok(Moment::Naive(dt));
		}
	}
	if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
		return Ok(Moment::Naive(date.and_time(NaiveTime::MIN)));
	}

	Err(FunctionError::InvalidDate {
		function,
		input: input.to_string(),
	})
}
