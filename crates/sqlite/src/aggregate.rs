// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Adapts an [`AggregateFunction`] to SQLite's step / finalize aggregate
//! protocol.

use mysqlite_function::AggregateFunction;
use mysqlite_type::Value;
use rusqlite::functions::{Aggregate, Context};

use crate::value;

/// Running state of one aggregate evaluation.
#[derive(Debug)]
pub(crate) struct Accumulator {
	value: i64,
}

impl Accumulator {
	pub(crate) fn new(function: &dyn AggregateFunction) -> Self {
		Self {
			value: function.identity(),
		}
	}

	pub(crate) fn step(&mut self, function: &dyn AggregateFunction, value: &Value) {
		if !value.is_null() {
			self.value = function.combine(self.value, value.to_i64());
		}
	}

	pub(crate) fn finish(self) -> i64 {
		self.value
	}
}

pub(crate) struct FoldAggregate {
	pub(crate) function: &'static dyn AggregateFunction,
}

impl Aggregate<Accumulator, i64> for FoldAggregate {
	fn init(&self, _ctx: &mut Context<'_>) -> rusqlite::Result<Accumulator> {
		Ok(Accumulator::new(self.function))
	}

	fn step(&self, ctx: &mut Context<'_>, acc: &mut Accumulator) -> rusqlite::Result<()> {
		acc.step(self.function, &value::from_sql(ctx.get_raw(0)));
		Ok(())
	}

	// SQLite only calls init once a row arrives, so an empty group
	// finalizes with no accumulator.
	fn finalize(&self, _ctx: &mut Context<'_>, acc: Option<Accumulator>) -> rusqlite::Result<i64> {
		Ok(acc.map_or_else(|| self.function.identity(), Accumulator::finish))
	}
}
