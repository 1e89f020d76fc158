// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::r#type::Type;

/// Failure to construct a value from raw components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
	#[error("NaN is not a valid {ty} value")]
	NotANumber {
		ty: Type,
	},

	#[error("invalid date {year}-{month:02}-{day:02}")]
	InvalidDate {
		year: i32,
		month: u32,
		day: u32,
	},

	#[error("invalid time {hour:02}:{minute:02}:{second:02}.{nano:09}")]
	InvalidTime {
		hour: u32,
		minute: u32,
		second: u32,
		nano: u32,
	},

	#[error("{nanos} nanoseconds is not within one day")]
	InvalidTimeNanos {
		nanos: u64,
	},

	#[error("nanosecond component {nanos} must be below 1_000_000_000")]
	InvalidNanos {
		nanos: u32,
	},

	#[error("invalid decimal literal '{literal}'")]
	InvalidDecimal {
		literal: String,
	},

	#[error("decimal scale {scale} exceeds the maximum of {max}")]
	DecimalScaleTooLarge {
		scale: u8,
		max: u8,
	},
}
