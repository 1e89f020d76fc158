// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

pub(crate) const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_DAY: u64 = 86_400 * NANOS_PER_SECOND;

/// A time of day with nanosecond precision, stored as nanoseconds since
/// midnight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Time {
	nanos_since_midnight: u64,
}

impl Time {
	pub fn new(hour: u32, minute: u32, second: u32, nano: u32) -> Result<Self, TypeError> {
		if hour > 23 || minute > 59 || second > 59 || nano as u64 >= NANOS_PER_SECOND {
			return Err(TypeError::InvalidTime {
				hour,
				minute,
				second,
				nano,
			});
		}
		let seconds = hour as u64 * 3600 + minute as u64 * 60 + second as u64;
		Ok(Self {
			nanos_since_midnight: seconds * NANOS_PER_SECOND + nano as u64,
		})
	}

	/// `None` if the value is not within one day.
	pub fn from_nanos_since_midnight(nanos: u64) -> Option<Self> {
		(nanos < NANOS_PER_DAY).then_some(Self {
			nanos_since_midnight: nanos,
		})
	}

	pub fn to_nanos_since_midnight(&self) -> u64 {
		self.nanos_since_midnight
	}

	pub fn hour(&self) -> u32 {
		(self.nanos_since_midnight / NANOS_PER_SECOND / 3600) as u32
	}

	pub fn minute(&self) -> u32 {
		(self.nanos_since_midnight / NANOS_PER_SECOND / 60 % 60) as u32
	}

	pub fn second(&self) -> u32 {
		(self.nanos_since_midnight / NANOS_PER_SECOND % 60) as u32
	}

	pub fn nanosecond(&self) -> u32 {
		(self.nanos_since_midnight % NANOS_PER_SECOND) as u32
	}
}

impl TryFrom<u64> for Time {
	type Error = TypeError;

	fn try_from(nanos: u64) -> Result<Self, Self::Error> {
		Self::from_nanos_since_midnight(nanos).ok_or(TypeError::InvalidTimeNanos {
			nanos,
		})
	}
}

impl From<Time> for u64 {
	fn from(time: Time) -> Self {
		time.nanos_since_midnight
	}
}

impl Display for Time {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02}:{:02}:{:02}.{:09}", self.hour(), self.minute(), self.second(), self.nanosecond())
	}
}
