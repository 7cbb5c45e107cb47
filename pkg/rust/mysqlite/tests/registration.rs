// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mysqlite::{Error, FunctionConfig, FunctionKind, create_functions, create_functions_with, function_list};
use mysqlite_testing::{RecordingHost, init_tracing};
use rusqlite::Connection;

#[test]
fn test_returns_the_same_connection() {
	init_tracing();
	let conn = Connection::open_in_memory().unwrap();
	let returned = create_functions(&conn, None).unwrap();
	assert!(std::ptr::eq(returned, &conn));
}

#[test]
fn test_unsupported_driver_registers_nothing() {
	init_tracing();
	let host = RecordingHost::new("mysql");

	let err = create_functions(&host, None).unwrap_err();
	assert!(matches!(&err, Error::Configuration { driver } if driver == "mysql"));
	assert_eq!(err.code(), "CONFIG_001");
	assert!(host.registrations().is_empty());
}

#[test]
fn test_registers_whole_catalog() {
	init_tracing();
	let host = RecordingHost::sqlite();
	create_functions(&host, None).unwrap();
	assert_eq!(host.names(), function_list());
}

#[test]
fn test_selected_names_only() {
	init_tracing();
	let host = RecordingHost::sqlite();
	create_functions(&host, Some(&["bit_or", "UNKNOWN_FUNCTION"])).unwrap();
	assert_eq!(host.names(), vec!["bit_or"]);
}

#[test]
fn test_aggregate_registers_both_forms() {
	init_tracing();
	let host = RecordingHost::sqlite();
	create_functions(&host, Some(&["bit_or"])).unwrap();

	let registrations = host.registrations();
	assert!(registrations.iter().any(|r| r.kind == FunctionKind::Aggregate && r.n_arg == 1));
	assert!(registrations.iter().any(|r| r.kind == FunctionKind::Scalar && r.n_arg == -1));
}

#[test]
fn test_optional_argument_registers_each_arity() {
	init_tracing();
	let host = RecordingHost::sqlite();
	create_functions(&host, Some(&["unix_timestamp", "concat"])).unwrap();

	let arities: Vec<(&str, i32)> = host.registrations().iter().map(|r| (r.name, r.n_arg)).collect();
	assert_eq!(arities, vec![("unix_timestamp", 0), ("unix_timestamp", 1), ("concat", -1)]);
}

#[test]
fn test_options() {
	init_tracing();
	let host = RecordingHost::sqlite();
	create_functions_with(&host, &FunctionConfig::new().functions(["sqrt", "rand"]).direct_only(true)).unwrap();

	for registration in host.registrations() {
		assert!(registration.options.direct_only);
		assert_eq!(registration.options.deterministic, registration.name == "sqrt");
	}

	let host = RecordingHost::sqlite();
	create_functions_with(&host, &FunctionConfig::new().functions(["sqrt"]).deterministic(false)).unwrap();
	assert!(host.registrations().iter().all(|r| !r.options.deterministic));
}

#[test]
fn test_only_bit_or_on_sqlite() {
	init_tracing();
	let conn = Connection::open_in_memory().unwrap();
	create_functions(&conn, Some(&["bit_or"])).unwrap();

	let result: i64 = conn.query_row("SELECT bit_or(1, 2, 4)", [], |row| row.get(0)).unwrap();
	assert_eq!(result, 7);

	let err = conn.query_row("SELECT unix_timestamp()", [], |row| row.get::<_, i64>(0)).unwrap_err();
	assert!(err.to_string().contains("no such function"), "{err}");
}
