// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{
	Value, blob::Blob, date::Date, datetime::DateTime, decimal::Decimal, interval::Interval,
	ordered_f32::OrderedF32, ordered_f64::OrderedF64, time::Time, r#type::GetType, uuid::Uuid,
};

/// Extracts a native value from a [`Value`] of the matching kind.
pub trait FromValue: GetType + Sized {
	fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_value_conversions {
	($($native:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$native> for Value {
				fn from(value: $native) -> Self {
					Value::$variant(value)
				}
			}

			impl FromValue for $native {
				fn from_value(value: Value) -> Option<Self> {
					match value {
						Value::$variant(v) => Some(v),
						_ => None,
					}
				}
			}
		)*
	};
}

impl_value_conversions! {
	bool => Boolean,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	OrderedF32 => Float4,
	OrderedF64 => Float8,
	Date => Date,
	Time => Time,
	DateTime => DateTime,
	Interval => Interval,
	Uuid => Uuid,
	Blob => Blob,
	String => Utf8,
}

impl FromValue for f32 {
	fn from_value(value: Value) -> Option<Self> {
		OrderedF32::from_value(value).map(f32::from)
	}
}

impl FromValue for f64 {
	fn from_value(value: Value) -> Option<Self> {
		OrderedF64::from_value(value).map(f64::from)
	}
}

impl From<Decimal> for Value {
	fn from(value: Decimal) -> Self {
		Value::Decimal(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Null)
	}
}
