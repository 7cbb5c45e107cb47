// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unsupported driver '{driver}', functions can only be registered on sqlite connections")]
	Configuration {
		driver: String,
	},

	#[error("Failed to register function {function}: {source}")]
	Registration {
		function: &'static str,
		#[source]
		source: rusqlite::Error,
	},
}

impl Error {
	pub fn code(&self) -> &'static str {
		match self {
			Error::Configuration {
				..
			} => "CONFIG_001",
			Error::Registration {
				..
			} => "ENGINE_001",
		}
	}
}
