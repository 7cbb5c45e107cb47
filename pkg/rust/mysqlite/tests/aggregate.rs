// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mysqlite::create_functions;
use mysqlite_testing::init_tracing;
use rusqlite::Connection;

fn connection() -> Connection {
	init_tracing();
	let conn = Connection::open_in_memory().unwrap();
	create_functions(&conn, None).unwrap();
	conn.execute_batch("CREATE TABLE flags (grp TEXT, v INTEGER)").unwrap();
	conn
}

fn query_i64(conn: &Connection, sql: &str) -> i64 {
	conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

#[test]
fn test_bit_or_scalar() {
	let conn = connection();
	assert_eq!(query_i64(&conn, "SELECT bit_or(1, 2, 4)"), 7);
}

#[test]
fn test_bit_or_over_rows() {
	let conn = connection();
	conn.execute_batch("INSERT INTO flags VALUES ('a', 1), ('a', 2), ('a', 4)").unwrap();
	assert_eq!(query_i64(&conn, "SELECT bit_or(v) FROM flags"), 7);
}

#[test]
fn test_bit_or_over_no_rows() {
	let conn = connection();
	assert_eq!(query_i64(&conn, "SELECT bit_or(v) FROM flags"), 0);
	assert_eq!(query_i64(&conn, "SELECT bit_and(v) FROM flags"), -1);
}

#[test]
fn test_null_rows_are_skipped() {
	let conn = connection();
	conn.execute_batch("INSERT INTO flags VALUES ('a', 8), ('a', NULL), ('a', 1)").unwrap();
	assert_eq!(query_i64(&conn, "SELECT bit_or(v) FROM flags"), 9);
	assert_eq!(query_i64(&conn, "SELECT bit_xor(v) FROM flags"), 9);
}

#[test]
fn test_group_by() {
	let conn = connection();
	conn.execute_batch("INSERT INTO flags VALUES ('a', 1), ('b', 6), ('a', 2), ('b', 3)").unwrap();

	let mut stmt = conn.prepare("SELECT grp, bit_or(v), bit_and(v) FROM flags GROUP BY grp ORDER BY grp").unwrap();
	let rows: Vec<(String, i64, i64)> =
		stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?))).unwrap().map(Result::unwrap).collect();
	assert_eq!(rows, vec![("a".to_string(), 3, 0), ("b".to_string(), 7, 2)]);
}
