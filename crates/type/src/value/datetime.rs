// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{
	date::Date,
	time::{NANOS_PER_SECOND, Time},
};
use crate::error::TypeError;

const SECONDS_PER_DAY: i64 = 86_400;

/// A point in time in UTC: seconds since the Unix epoch plus a nanosecond
/// component in `0..1_000_000_000`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i64, u32)", into = "(i64, u32)")]
pub struct DateTime {
	seconds: i64,
	nanos: u32,
}

impl DateTime {
	pub fn from_parts(seconds: i64, nanos: u32) -> Result<Self, TypeError> {
		if nanos as u64 >= NANOS_PER_SECOND {
			return Err(TypeError::InvalidNanos {
				nanos,
			});
		}
		Ok(Self {
			seconds,
			nanos,
		})
	}

	pub fn new(date: Date, time: Time) -> Self {
		let seconds = date.to_days_since_epoch() as i64 * SECONDS_PER_DAY
			+ (time.to_nanos_since_midnight() / NANOS_PER_SECOND) as i64;
		Self {
			seconds,
			nanos: time.nanosecond(),
		}
	}

	pub fn to_parts(&self) -> (i64, u32) {
		(self.seconds, self.nanos)
	}

	pub fn date(&self) -> Date {
		Date::from_days_since_epoch(self.seconds.div_euclid(SECONDS_PER_DAY) as i32)
	}

	pub fn time(&self) -> Time {
		let seconds_of_day = self.seconds.rem_euclid(SECONDS_PER_DAY) as u64;
		// seconds_of_day < 86_400 keeps this within one day
		Time::from_nanos_since_midnight(seconds_of_day * NANOS_PER_SECOND + self.nanos as u64)
			.unwrap_or_default()
	}
}

impl TryFrom<(i64, u32)> for DateTime {
	type Error = TypeError;

	fn try_from((seconds, nanos): (i64, u32)) -> Result<Self, Self::Error> {
		Self::from_parts(seconds, nanos)
	}
}

impl From<DateTime> for (i64, u32) {
	fn from(datetime: DateTime) -> Self {
		datetime.to_parts()
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}T{}Z", self.date(), self.time())
	}
}
