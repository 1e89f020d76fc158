// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A calendar interval. Months and days are kept apart from the exact
/// nanosecond part because their length depends on the calendar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
	months: i32,
	days: i32,
	nanos: i64,
}

impl Interval {
	pub fn new(months: i32, days: i32, nanos: i64) -> Self {
		Self {
			months,
			days,
			nanos,
		}
	}

	pub fn from_days(days: i32) -> Self {
		Self::new(0, days, 0)
	}

	pub fn from_seconds(seconds: i64) -> Self {
		Self::new(0, 0, seconds.saturating_mul(1_000_000_000))
	}

	pub fn months(&self) -> i32 {
		self.months
	}

	pub fn days(&self) -> i32 {
		self.days
	}

	pub fn nanos(&self) -> i64 {
		self.nanos
	}
}

impl Display for Interval {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "P{}M{}DT{}N", self.months, self.days, self.nanos)
	}
}
