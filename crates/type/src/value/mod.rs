// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub mod blob;
pub mod date;
pub mod datetime;
mod de;
pub mod decimal;
mod from;
pub mod interval;
pub mod ordered_f32;
pub mod ordered_f64;
pub mod time;
pub mod r#type;
pub mod uuid;

pub use de::{MAX_NESTING_DEPTH, NestedSeed};
pub use from::FromValue;

use self::{
	blob::Blob, date::Date, datetime::DateTime, decimal::Decimal, interval::Interval, ordered_f32::OrderedF32,
	ordered_f64::OrderedF64, time::Time, r#type::Type, uuid::Uuid,
};

/// A single datum: one typed value or null.
///
/// Variant order defines the ordering between values of different kinds;
/// `Null` sorts before everything else.
// the variant list is mirrored by `de::Tag`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Value {
	/// Value is absent
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// A 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A fixed-point decimal
	Decimal(Decimal),
	/// A date value (year, month, day)
	Date(Date),
	/// A time value (hour, minute, second, nanosecond)
	Time(Time),
	/// A date and time value with nanosecond precision in UTC
	DateTime(DateTime),
	/// An interval representing a calendar duration
	Interval(Interval),
	/// A 128-bit UUID
	Uuid(Uuid),
	/// A binary large object (BLOB)
	Blob(Blob),
	/// A UTF-8 encoded text
	Utf8(String),
	/// An ordered list of nested values
	List(Vec<Value>),
	/// A record of nested values
	Record(Vec<Value>),
}

impl Value {
	pub fn null() -> Self {
		Value::Null
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn int16(v: impl Into<i128>) -> Self {
		Value::Int16(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn uint16(v: impl Into<u128>) -> Self {
		Value::Uint16(v.into())
	}

	/// NaN has no ordered representation and becomes `Null`.
	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Null)
	}

	/// NaN has no ordered representation and becomes `Null`.
	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Null)
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	pub fn date(v: impl Into<Date>) -> Self {
		Value::Date(v.into())
	}

	pub fn time(v: impl Into<Time>) -> Self {
		Value::Time(v.into())
	}

	pub fn datetime(v: impl Into<DateTime>) -> Self {
		Value::DateTime(v.into())
	}

	pub fn interval(v: impl Into<Interval>) -> Self {
		Value::Interval(v.into())
	}

	pub fn uuid(v: impl Into<Uuid>) -> Self {
		Value::Uuid(v.into())
	}

	pub fn blob(v: impl Into<Blob>) -> Self {
		Value::Blob(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
		Value::List(values.into_iter().collect())
	}

	pub fn record(values: impl IntoIterator<Item = Value>) -> Self {
		Value::Record(values.into_iter().collect())
	}
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// The kind of this value; `None` for `Null`.
	pub fn get_type(&self) -> Option<Type> {
		let ty = match self {
			Value::Null => return None,
			Value::Boolean(_) => Type::Boolean,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Decimal(d) => Type::Decimal {
				scale: d.scale(),
			},
			Value::Date(_) => Type::Date,
			Value::Time(_) => Type::Time,
			Value::DateTime(_) => Type::DateTime,
			Value::Interval(_) => Type::Interval,
			Value::Uuid(_) => Type::Uuid,
			Value::Blob(_) => Type::Blob,
			Value::Utf8(_) => Type::Utf8,
			Value::List(_) => Type::List,
			Value::Record(_) => Type::Record,
		};
		Some(ty)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::Date(value) => Display::fmt(value, f),
			Value::Time(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
			Value::Interval(value) => Display::fmt(value, f),
			Value::Uuid(value) => Display::fmt(value, f),
			Value::Blob(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::List(values) => write_nested(f, '[', values, ']'),
			Value::Record(values) => write_nested(f, '{', values, '}'),
		}
	}
}

fn write_nested(f: &mut Formatter<'_>, open: char, values: &[Value], close: char) -> std::fmt::Result {
	write!(f, "{open}")?;
	for (idx, value) in values.iter().enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		Display::fmt(value, f)?;
	}
	write!(f, "{close}")
}
