// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Rendering of MySQL `DATE_FORMAT` patterns.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Renders `dt` using MySQL format specifiers. An unknown specifier renders
/// as its own character and a trailing `%` renders as itself.
pub(crate) fn render(dt: &NaiveDateTime, pattern: &str) -> String {
	let mut result = String::with_capacity(pattern.len() * 2);
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch != '%' {
			result.push(ch);
			continue;
		}

		let Some(specifier) = chars.next() else {
			result.push('%');
			break;
		};

		let month = MONTHS[dt.month0() as usize];
		let weekday = WEEKDAYS[dt.weekday().num_days_from_sunday() as usize];

		match specifier {
			'a' => result.push_str(&weekday[..3]),
			'b' => result.push_str(&month[..3]),
			'c' => result.push_str(&dt.month().to_string()),
			'D' => result.push_str(&format!("{}{}", dt.day(), ordinal_suffix(dt.day()))),
			'd' => result.push_str(&format!("{:02}", dt.day())),
			'e' => result.push_str(&dt.day().to_string()),
			'f' => result.push_str(&format!("{:06}", (dt.nanosecond() / 1_000).min(999_999))),
			'H' => result.push_str(&format!("{:02}", dt.hour())),
			'h' | 'I' => result.push_str(&format!("{:02}", dt.hour12().1)),
			'i' => result.push_str(&format!("{:02}", dt.minute())),
			'j' => result.push_str(&format!("{:03}", dt.ordinal())),
			'k' => result.push_str(&dt.hour().to_string()),
			'l' => result.push_str(&dt.hour12().1.to_string()),
			'M' => result.push_str(month),
			'm' => result.push_str(&format!("{:02}", dt.month())),
			'p' => result.push_str(meridiem(dt)),
			'r' => result.push_str(&format!(
				"{:02}:{:02}:{:02} {}",
				dt.hour12().1,
				dt.minute(),
				dt.second(),
				meridiem(dt)
			)),
			'S' | 's' => result.push_str(&format!("{:02}", dt.second())),
			'T' => result.push_str(&format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())),
			'U' => result.push_str(&dt.format("%U").to_string()),
			'u' => result.push_str(&format!("{:02}", monday_week(dt.date()))),
			'V' => result.push_str(&format!("{:02}", sunday_week(dt.date()).1)),
			'v' => result.push_str(&format!("{:02}", dt.iso_week().week())),
			'W' => result.push_str(weekday),
			'w' => result.push_str(&dt.weekday().num_days_from_sunday().to_string()),
			'X' => result.push_str(&format!("{:04}", sunday_week(dt.date()).0)),
			'x' => result.push_str(&format!("{:04}", dt.iso_week().year())),
			'Y' => result.push_str(&format!("{:04}", dt.year())),
			'y' => result.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
			other => result.push(other),
		}
	}

	result
}

fn meridiem(dt: &NaiveDateTime) -> &'static str {
	if dt.hour12().0 { "PM" } else { "AM" }
}

fn ordinal_suffix(day: u32) -> &'static str {
	match (day % 10, day % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th",
	}
}

// Week 0..53, Monday first, week 1 is the first week with four or more days
// in the year.
fn monday_week(date: NaiveDate) -> u32 {
	let Some(jan1) = NaiveDate::from_ymd_opt(date.year(), 1, 1) else {
		return 0;
	};
	let offset = jan1.weekday().num_days_from_monday() as u64;
	let first = if offset <= 3 {
		jan1.checked_sub_days(Days::new(offset))
	} else {
		jan1.checked_add_days(Days::new(7 - offset))
	};
	match first {
		Some(first) if date >= first => ((date - first).num_days() / 7 + 1) as u32,
		_ => 0,
	}
}

// (year, week 1..53), Sunday first, week 1 starts on the first Sunday of the
// year; earlier days count toward the previous year.
fn sunday_week(date: NaiveDate) -> (i32, u32) {
	let first_sunday = |year: i32| {
		NaiveDate::from_ymd_opt(year, 1, 1).and_then(|jan1| {
			let ahead = (7 - jan1.weekday().num_days_from_sunday()) % 7;
			jan1.checked_add_days(Days::new(ahead as u64))
		})
	};

	let mut year = date.year();
	let mut start = first_sunday(year);
	if start.is_some_and(|s| date < s) {
		year -= 1;
		start = first_sunday(year);
	}
	match start {
		Some(start) => (year, ((date - start).num_days() / 7 + 1) as u32),
		None => (year, 0),
	}
}
