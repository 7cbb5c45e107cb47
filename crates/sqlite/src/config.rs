// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Which functions to register and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
	/// `None` registers the whole catalog.
	pub names: Option<Vec<String>>,
	pub direct_only: bool,
	/// Allow deterministic functions to be flagged as such.
	pub deterministic: bool,
}

impl Default for FunctionConfig {
	fn default() -> Self {
		Self {
			names: None,
			direct_only: false,
			deterministic: true,
		}
	}
}

impl FunctionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts registration to `names`, compared case-insensitively.
	pub fn functions<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.names = Some(names.into_iter().map(|name| name.as_ref().to_ascii_lowercase()).collect());
		self
	}

	pub fn direct_only(mut self, direct_only: bool) -> Self {
		self.direct_only = direct_only;
		self
	}

	pub fn deterministic(mut self, deterministic: bool) -> Self {
		self.deterministic = deterministic;
		self
	}

	pub fn selects(&self, name: &str) -> bool {
		match &self.names {
			None => true,
			Some(names) => names.iter().any(|n| n.eq_ignore_ascii_case(name)),
		}
	}
}
