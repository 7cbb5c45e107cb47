// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chrono::{Local, NaiveDateTime, Utc};
use mysqlite::create_functions;
use mysqlite_testing::init_tracing;
use rusqlite::{Connection, types::FromSql};

fn connection() -> Connection {
	init_tracing();
	let conn = Connection::open_in_memory().unwrap();
	create_functions(&conn, None).unwrap();
	conn
}

fn select<T: FromSql>(conn: &Connection, sql: &str) -> T {
	conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

#[test]
fn test_isnull() {
	let conn = connection();
	assert_eq!(select::<i64>(&conn, r#"SELECT "isnull"(NULL)"#), 1);
	for expr in ["0", "''", "'null'", "4", "21.34", "'words'"] {
		assert_eq!(select::<i64>(&conn, &format!(r#"SELECT "isnull"({expr})"#)), 0, "{expr}");
	}
}

#[test]
fn test_unquoted_isnull_is_a_syntax_error() {
	let conn = connection();
	let err = conn.query_row("SELECT isnull(NULL)", [], |row| row.get::<_, i64>(0)).unwrap_err();
	assert!(err.to_string().contains("syntax error"), "{err}");

	// the postfix operator itself is untouched
	assert_eq!(select::<i64>(&conn, "SELECT NULL ISNULL"), 1);
}

#[test]
fn test_least_and_greatest() {
	let conn = connection();
	assert_eq!(select::<i64>(&conn, "SELECT least(1, 2, 3, 4)"), 1);
	assert_eq!(select::<i64>(&conn, "SELECT greatest(0, 3, 5)"), 5);
	assert_eq!(select::<String>(&conn, "SELECT greatest('A', 'L', 'Z')"), "Z");
	assert_eq!(select::<Option<i64>>(&conn, "SELECT least(1, NULL)"), None);
}

#[test]
fn test_least_without_arguments_fails() {
	let conn = connection();
	let err = conn.query_row("SELECT least()", [], |row| row.get::<_, i64>(0)).unwrap_err();
	assert!(err.to_string().contains("requires at least one argument"), "{err}");
}

#[test]
fn test_now_and_curdate() {
	let conn = connection();
	let before: String = select(&conn, "SELECT curdate()");
	let now: String = select(&conn, "SELECT now()");
	let after: String = select(&conn, "SELECT curdate()");
	assert!(NaiveDateTime::parse_from_str(&now, "%Y-%m-%d %H:%M:%S").is_ok());

	assert_eq!(before.len(), 10);
	// a midnight rollover can land between the reads
	assert!(now.starts_with(&before) || now.starts_with(&after), "{before} {now} {after}");
}

#[test]
fn test_datediff() {
	let conn = connection();
	assert_eq!(select::<i64>(&conn, "SELECT datediff('2014-01-03', '2014-01-01 23:00:00')"), 2);
	assert_eq!(select::<i64>(&conn, "SELECT datediff(curdate(), date('now', 'localtime', '-2 days'))"), 2);
}

#[test]
fn test_to_days_matches_local_computation() {
	let conn = connection();
	let offset = Local::now().offset().local_minus_utc();
	let expected = mysqlite::datetime::to_days_in(&Local, offset, "2014-01-01").unwrap();
	assert_eq!(select::<i64>(&conn, "SELECT to_days('2014-01-01')"), expected);
}

#[test]
fn test_unix_timestamp() {
	let conn = connection();
	let before = Utc::now().timestamp();
	let now: i64 = select(&conn, "SELECT unix_timestamp()");
	assert!(now >= before && now <= Utc::now().timestamp());

	let round_trip: i64 = select(&conn, "SELECT unix_timestamp(from_unixtime(1454700837))");
	assert_eq!(round_trip, 1454700837);
}

#[test]
fn test_from_unixtime_with_format() {
	let conn = connection();
	let expected = mysqlite::datetime::from_unixtime_in(&Local, 1454700837, Some("%Y")).unwrap();
	assert_eq!(select::<String>(&conn, "SELECT from_unixtime(1454700837, '%Y')"), expected);
}

#[test]
fn test_year_and_month() {
	let conn = connection();
	assert_eq!(select::<i64>(&conn, "SELECT year('2014-11-14 07:31:08')"), 2014);
	assert_eq!(select::<i64>(&conn, "SELECT month('1990-09-14 07:31:08')"), 9);
	assert_eq!(select::<i64>(&conn, "SELECT year(NULL)"), 0);
	assert_eq!(select::<i64>(&conn, "SELECT month(NULL)"), 0);
}

#[test]
fn test_invalid_date_fails() {
	let conn = connection();
	let err = conn.query_row("SELECT year('not a date')", [], |row| row.get::<_, i64>(0)).unwrap_err();
	assert!(err.to_string().contains("cannot parse"), "{err}");
}

#[test]
fn test_concat() {
	let conn = connection();
	let result: String = select(&conn, "SELECT concat('test1', ' ', 'test2', ' ', 'test4')");
	assert_eq!(result, "test1 test2 test4");
	assert_eq!(select::<String>(&conn, "SELECT concat_ws('-', 'a', NULL, 'b')"), "a-b");
}

#[test]
fn test_rand_orders_rows() {
	let conn = connection();
	conn.execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1), (2), (3), (4), (5);").unwrap();

	let mut stmt = conn.prepare("SELECT id FROM t ORDER BY rand()").unwrap();
	let mut ids: Vec<i64> = stmt.query_map([], |row| row.get(0)).unwrap().map(Result::unwrap).collect();
	ids.sort();
	assert_eq!(ids, vec![1, 2, 3, 4, 5]);

	let value: f64 = select(&conn, "SELECT rand()");
	assert!((0.0..1.0).contains(&value));
}

#[test]
fn test_sqrt() {
	let conn = connection();
	assert_eq!(select::<f64>(&conn, "SELECT sqrt(16)"), 4.0);
	assert_eq!(select::<Option<f64>>(&conn, "SELECT sqrt(-1)"), None);
}

#[test]
fn test_if() {
	let conn = connection();
	assert_eq!(select::<String>(&conn, "SELECT if(1, 'yes', 'no')"), "yes");
	assert_eq!(select::<String>(&conn, "SELECT if(0, 'yes', 'no')"), "no");
	assert_eq!(select::<String>(&conn, "SELECT if(NULL, 'yes', 'no')"), "no");
	assert_eq!(select::<String>(&conn, "SELECT if('abc', 'yes', 'no')"), "no");
}
