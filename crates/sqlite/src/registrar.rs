// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mysqlite_function::{Implementation, catalog};
use tracing::{debug, instrument, trace, warn};

use crate::{DRIVER, Error, FunctionConfig, FunctionHost, FunctionOptions, Result};

/// Registers the catalog, or the subset named in `names`, on `host`.
pub fn create_functions<'a, H>(host: &'a H, names: Option<&[&str]>) -> Result<&'a H>
where
	H: FunctionHost + ?Sized,
{
	let config = match names {
		Some(names) => FunctionConfig::new().functions(names),
		None => FunctionConfig::new(),
	};
	create_functions_with(host, &config)
}

/// Fails with [`Error::Configuration`] before touching `host` when it is not
/// a sqlite connection. Returns `host` for chaining.
#[instrument(name = "sqlite::functions::create", level = "debug", skip_all, fields(driver = %host.driver_name()))]
pub fn create_functions_with<'a, H>(host: &'a H, config: &FunctionConfig) -> Result<&'a H>
where
	H: FunctionHost + ?Sized,
{
	let driver = host.driver_name();
	if driver != DRIVER {
		warn!(driver, "refusing to register functions on unsupported driver");
		return Err(Error::Configuration {
			driver: driver.to_string(),
		});
	}

	let catalog = catalog();
	if let Some(names) = &config.names {
		for name in names.iter().filter(|name| !catalog.contains(name)) {
			debug!(name = %name, "skipping unknown function");
		}
	}

	let mut registered = 0usize;
	for entry in catalog.iter().filter(|entry| config.selects(entry.name)) {
		let options = FunctionOptions {
			deterministic: entry.deterministic && config.deterministic,
			direct_only: config.direct_only,
		};
		let failed = |source: rusqlite::Error| Error::Registration {
			function: entry.name,
			source,
		};

		match entry.implementation {
			Implementation::Scalar(function) => {
				for n_arg in entry.arity.engine_arities() {
					host.register_scalar(entry.name, n_arg, options, function).map_err(failed)?;
				}
			}
			Implementation::Aggregate {
				aggregate,
				scalar,
			} => {
				for n_arg in entry.arity.engine_arities() {
					host.register_aggregate(entry.name, n_arg, options, aggregate).map_err(failed)?;
				}
				// SQLite prefers the exact arity aggregate for a single argument
				host.register_scalar(entry.name, -1, options, scalar).map_err(failed)?;
			}
		}

		trace!(function = entry.name, kind = %entry.kind(), deterministic = options.deterministic, "registered");
		registered += 1;
	}

	debug!(registered, "functions registered");
	Ok(host)
}
