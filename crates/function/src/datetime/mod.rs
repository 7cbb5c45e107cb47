// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Date and time functions.
//!
//! "Local" means the timezone of the running process. Functions whose result
//! depends on it have a `*_in` variant taking an explicit timezone.
//!
//! <http://dev.mysql.com/doc/refman/8.0/en/date-and-time-functions.html>

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use mysqlite_type::{FunctionError, FunctionResult, Value};

use crate::{ScalarFunction, args};

mod format;
mod parse;

/// Day number of 1970-01-01 counted from 0000-01-01.
pub const DAYS_AT_UNIX_EPOCH: i64 = 719528;

/// Largest day number MySQL renders, 9999-12-31.
pub const MAX_DAYS: i64 = 3652424;

const SECONDS_PER_DAY: i64 = 86400;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const ZERO_DATE: &str = "0000-00-00";

/// `NOW()`: the local date and time as `YYYY-MM-DD HH:MM:SS`.
pub struct Now;

impl ScalarFunction for Now {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("now", args, 0)?;
		Ok(Value::Text(Local::now().format(DATETIME_FORMAT).to_string()))
	}
}

/// `CURDATE()`: the local date as `YYYY-MM-DD`.
pub struct CurDate;

impl ScalarFunction for CurDate {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("curdate", args, 0)?;
		Ok(Value::Text(Local::now().format(DATE_FORMAT).to_string()))
	}
}

/// `DATEDIFF(date1, date2)`: whole days between the two calendar dates,
/// regardless of order or time of day.
pub struct DateDiff;

impl ScalarFunction for DateDiff {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("datediff", args, 2)?;
		let (Some(left), Some(right)) = (args[0].as_text(), args[1].as_text()) else {
			return Ok(Value::Null);
		};

		let left = parse::parse("datediff", &left)?.wall().date();
		let right = parse::parse("datediff", &right)?.wall().date();
		Ok(Value::Integer((left - right).num_days().abs()))
	}
}

/// `TO_DAYS(date)`: days since year 0.
///
/// The date is read as local time and the *current* UTC offset of the process
/// is subtracted once more before dividing into days. West of UTC this still
/// lands on the right day; east of UTC the result is one day short. Callers
/// depend on this exact arithmetic, so it is kept as is.
pub struct ToDays;

impl ScalarFunction for ToDays {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("to_days", args, 1)?;
		let Some(text) = args[0].as_text() else {
			return Ok(Value::Null);
		};

		let offset = Local::now().offset().local_minus_utc();
		to_days_in(&Local, offset, &text).map(Value::Integer)
	}
}

/// [`ToDays`] reading the date in `tz` and subtracting `utc_offset` seconds.
pub fn to_days_in<Tz: TimeZone>(tz: &Tz, utc_offset: i32, input: &str) -> FunctionResult<i64> {
	let seconds = epoch_seconds("to_days", tz, input)?;
	let days = (seconds - utc_offset as i64) as f64 / SECONDS_PER_DAY as f64;
	Ok((DAYS_AT_UNIX_EPOCH as f64 + days).trunc() as i64)
}

/// `FROM_DAYS(n)`: the date `n` days after 0000-01-01. Day numbers before
/// year 1 or after year 9999 yield `0000-00-00`.
pub struct FromDays;

impl ScalarFunction for FromDays {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("from_days", args, 1)?;
		if args[0].is_null() {
			return Ok(Value::Null);
		}

		let days = args[0].to_i64();
		if !(366..=MAX_DAYS).contains(&days) {
			return Ok(Value::text(ZERO_DATE));
		}

		NaiveDate::from_ymd_opt(0, 1, 1)
			.and_then(|origin| origin.checked_add_days(Days::new(days as u64)))
			.map(|date| Value::Text(date.format(DATE_FORMAT).to_string()))
			.ok_or(FunctionError::TimestampOutOfRange {
				function: "from_days",
				timestamp: days,
			})
	}
}

/// `UNIX_TIMESTAMP([date])`: seconds since the Unix epoch, for now or for a
/// date read as local time. A NULL date counts as now.
pub struct UnixTimestamp;

impl ScalarFunction for UnixTimestamp {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::between("unix_timestamp", args, 0, 1)?;
		match args.first().and_then(Value::as_text) {
			None => Ok(Value::Integer(Utc::now().timestamp())),
			Some(text) => unix_timestamp_in(&Local, &text).map(Value::Integer),
		}
	}
}

/// Wall-clock times skipped by a forward transition are read with the offset
/// in force before it, `02:30` on a spring-forward night equals `03:30`.
pub fn unix_timestamp_in<Tz: TimeZone>(tz: &Tz, input: &str) -> FunctionResult<i64> {
	epoch_seconds("unix_timestamp", tz, input)
}

/// `FROM_UNIXTIME(ts[, format])`: the local date and time of `ts`, rendered
/// with MySQL format specifiers or as ISO-8601 (`2016-02-05T19:33:57+0000`).
pub struct FromUnixTime;

impl ScalarFunction for FromUnixTime {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::between("from_unixtime", args, 1, 2)?;
		let timestamp = match &args[0] {
			Value::Null => return Ok(Value::Null),
			Value::Integer(v) => *v,
			_ => args::number("from_unixtime", args, 0)?.trunc() as i64,
		};
		let format = args.get(1).and_then(Value::as_text);

		from_unixtime_in(&Local, timestamp, format.as_deref()).map(Value::Text)
	}
}

pub fn from_unixtime_in<Tz>(tz: &Tz, timestamp: i64, format: Option<&str>) -> FunctionResult<String>
where
	Tz: TimeZone,
	Tz::Offset: std::fmt::Display,
{
	let dt = tz.timestamp_opt(timestamp, 0).single().ok_or(FunctionError::TimestampOutOfRange {
		function: "from_unixtime",
		timestamp,
	})?;

	Ok(match format {
		Some(pattern) => format::render(&dt.naive_local(), pattern),
		None => dt.format(ISO_8601_FORMAT).to_string(),
	})
}

/// `DATE_FORMAT(date, format)`
pub struct DateFormat;

impl ScalarFunction for DateFormat {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		args::exactly("date_format", args, 2)?;
		let (Some(date), Some(pattern)) = (args[0].as_text(), args[1].as_text()) else {
			return Ok(Value::Null);
		};

		let wall = parse::parse("date_format", &date)?.wall();
		Ok(Value::Text(format::render(&wall, &pattern)))
	}
}

/// `YEAR(date)`, 0 for NULL.
pub struct Year;

impl ScalarFunction for Year {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("year", args, |dt| dt.year() as i64)
	}
}

/// `MONTH(date)`, 0 for NULL.
pub struct Month;

impl ScalarFunction for Month {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("month", args, |dt| dt.month() as i64)
	}
}

pub struct Day;

impl ScalarFunction for Day {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("day", args, |dt| dt.day() as i64)
	}
}

pub struct DayOfMonth;

impl ScalarFunction for DayOfMonth {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("dayofmonth", args, |dt| dt.day() as i64)
	}
}

/// 1 = Sunday ... 7 = Saturday
pub struct DayOfWeek;

impl ScalarFunction for DayOfWeek {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("dayofweek", args, |dt| dt.weekday().number_from_sunday() as i64)
	}
}

/// 0 = Monday ... 6 = Sunday
pub struct WeekDay;

impl ScalarFunction for WeekDay {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("weekday", args, |dt| dt.weekday().num_days_from_monday() as i64)
	}
}

pub struct DayOfYear;

impl ScalarFunction for DayOfYear {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("dayofyear", args, |dt| dt.ordinal() as i64)
	}
}

pub struct Hour;

impl ScalarFunction for Hour {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("hour", args, |dt| dt.hour() as i64)
	}
}

pub struct Minute;

impl ScalarFunction for Minute {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("minute", args, |dt| dt.minute() as i64)
	}
}

pub struct Second;

impl ScalarFunction for Second {
	fn scalar(&self, args: &[Value]) -> FunctionResult<Value> {
		component("second", args, |dt| dt.second() as i64)
	}
}

// Extraction functions answer 0 for NULL instead of propagating it.
fn component(function: &'static str, args: &[Value], extract: fn(&NaiveDateTime) -> i64) -> FunctionResult<Value> {
	args::exactly(function, args, 1)?;
	let Some(text) = args[0].as_text() else {
		return Ok(Value::Integer(0));
	};

	let wall = parse::parse(function, &text)?.wall();
	Ok(Value::Integer(extract(&wall)))
}

fn epoch_seconds<Tz: TimeZone>(function: &'static str, tz: &Tz, input: &str) -> FunctionResult<i64> {
	parse::parse(function, input)?.epoch_seconds(tz).ok_or_else(|| FunctionError::InvalidDate {
		function,
		input: input.to_string(),
	})
}
