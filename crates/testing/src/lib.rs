// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Helpers shared by the integration tests.

use std::{cell::RefCell, sync::Once};

use mysqlite_function::{AggregateFunction, FunctionKind, ScalarFunction};
use mysqlite_sqlite::{FunctionHost, FunctionOptions};
use tracing_subscriber::EnvFilter;

/// Installs a test writer subscriber once per process. `RUST_LOG` overrides
/// the default `debug` filter.
pub fn init_tracing() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
		let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
	});
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
	pub name: &'static str,
	pub n_arg: i32,
	pub kind: FunctionKind,
	pub options: FunctionOptions,
}

/// A host that remembers every registration instead of performing it.
#[derive(Debug)]
pub struct RecordingHost {
	driver: String,
	registrations: RefCell<Vec<Registration>>,
}

impl RecordingHost {
	pub fn new(driver: impl Into<String>) -> Self {
		Self {
			driver: driver.into(),
			registrations: RefCell::new(Vec::new()),
		}
	}

	pub fn sqlite() -> Self {
		Self::new(mysqlite_sqlite::DRIVER)
	}

	pub fn registrations(&self) -> Vec<Registration> {
		self.registrations.borrow().clone()
	}

	/// Distinct registered names, in registration order.
	pub fn names(&self) -> Vec<&'static str> {
		let mut names: Vec<&'static str> = Vec::new();
		for registration in self.registrations.borrow().iter() {
			if !names.contains(&registration.name) {
				names.push(registration.name);
			}
		}
		names
	}

	fn record(&self, name: &'static str, n_arg: i32, kind: FunctionKind, options: FunctionOptions) {
		self.registrations.borrow_mut().push(Registration {
			name,
			n_arg,
			kind,
			options,
		});
	}
}

impl FunctionHost for RecordingHost {
	fn driver_name(&self) -> &str {
		&self.driver
	}

	fn register_scalar(
		&self,
		name: &'static str,
		n_arg: i32,
		options: FunctionOptions,
		_function: &'static dyn ScalarFunction,
	) -> rusqlite::Result<()> {
		self.record(name, n_arg, FunctionKind::Scalar, options);
		Ok(())
	}

	fn register_aggregate(
		&self,
		name: &'static str,
		n_arg: i32,
		options: FunctionOptions,
		_function: &'static dyn AggregateFunction,
	) -> rusqlite::Result<()> {
		self.record(name, n_arg, FunctionKind::Aggregate, options);
		Ok(())
	}
}
