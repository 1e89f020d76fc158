// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// All datum kinds a column can declare.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// A 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A fixed-point decimal with a 16-byte mantissa and a declared scale
	Decimal {
		scale: u8,
	},
	/// A date value (days since 1970-01-01)
	Date,
	/// A time of day with nanosecond precision
	Time,
	/// A date and time value with nanosecond precision in UTC
	DateTime,
	/// A calendar interval (months, days, nanoseconds)
	Interval,
	/// A 128-bit UUID
	Uuid,
	/// A binary large object (BLOB)
	Blob,
	/// A UTF-8 encoded text
	Utf8,
	/// An ordered list of nested values
	List,
	/// A record of nested values
	Record,
}

impl Type {
	/// Natural width in bytes, or `None` for variable-length kinds.
	pub const fn fixed_size(&self) -> Option<usize> {
		match self {
			Type::Boolean | Type::Int1 | Type::Uint1 => Some(1),
			Type::Int2 | Type::Uint2 => Some(2),
			Type::Int4 | Type::Uint4 | Type::Float4 | Type::Date => Some(4),
			Type::Int8 | Type::Uint8 | Type::Float8 | Type::Time => Some(8),
			Type::DateTime => Some(12), // seconds: i64 + nanos: u32
			Type::Int16
			| Type::Uint16
			| Type::Decimal {
				..
			}
			| Type::Interval
			| Type::Uuid => Some(16),
			Type::Blob | Type::Utf8 | Type::List | Type::Record => None,
		}
	}

	pub const fn is_variable(&self) -> bool {
		self.fixed_size().is_none()
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::DateTime | Type::Time | Type::Interval)
	}

	pub fn is_nested(&self) -> bool {
		matches!(self, Type::List | Type::Record)
	}
}

impl Type {
	/// Stable one-byte code, used when fingerprinting schemas and layouts.
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Boolean => 0x01,
			Type::Int1 => 0x02,
			Type::Int2 => 0x03,
			Type::Int4 => 0x04,
			Type::Int8 => 0x05,
			Type::Int16 => 0x06,
			Type::Uint1 => 0x07,
			Type::Uint2 => 0x08,
			Type::Uint4 => 0x09,
			Type::Uint8 => 0x0A,
			Type::Uint16 => 0x0B,
			Type::Float4 => 0x0C,
			Type::Float8 => 0x0D,
			Type::Decimal {
				..
			} => 0x0E,
			Type::Date => 0x0F,
			Type::Time => 0x10,
			Type::DateTime => 0x11,
			Type::Interval => 0x12,
			Type::Uuid => 0x13,
			Type::Blob => 0x14,
			Type::Utf8 => 0x15,
			Type::List => 0x16,
			Type::Record => 0x17,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Uint16 => f.write_str("Uint16"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Decimal {
				scale,
			} => write!(f, "Decimal({scale})"),
			Type::Date => f.write_str("Date"),
			Type::Time => f.write_str("Time"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Interval => f.write_str("Interval"),
			Type::Uuid => f.write_str("Uuid"),
			Type::Blob => f.write_str("Blob"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::List => f.write_str("List"),
			Type::Record => f.write_str("Record"),
		}
	}
}
