// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Type;
use crate::value::{
	blob::Blob, date::Date, datetime::DateTime, interval::Interval, ordered_f32::OrderedF32,
	ordered_f64::OrderedF64, time::Time, uuid::Uuid,
};

/// Maps a native Rust type to the column kind it is stored as.
pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($native:ty => $ty:expr),* $(,)?) => {
		$(
			impl GetType for $native {
				fn get_type() -> Type {
					$ty
				}
			}
		)*
	};
}

impl_get_type! {
	bool => Type::Boolean,
	i8 => Type::Int1,
	i16 => Type::Int2,
	i32 => Type::Int4,
	i64 => Type::Int8,
	i128 => Type::Int16,
	u8 => Type::Uint1,
	u16 => Type::Uint2,
	u32 => Type::Uint4,
	u64 => Type::Uint8,
	u128 => Type::Uint16,
	f32 => Type::Float4,
	f64 => Type::Float8,
	OrderedF32 => Type::Float4,
	OrderedF64 => Type::Float8,
	Date => Type::Date,
	Time => Type::Time,
	DateTime => Type::DateTime,
	Interval => Type::Interval,
	Uuid => Type::Uuid,
	Blob => Type::Blob,
	String => Type::Utf8,
}
