// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowcodec_type::{Date, DateTime, Decimal, Interval, OrderedF32, OrderedF64, Time, Type, Uuid, Value};

use crate::error::{CorruptReason, Error, Result};

/// Write a fixed-width value into `out`, which is exactly the column's
/// width. The value's kind has already been checked against the column.
pub(crate) fn write(out: &mut [u8], value: &Value) {
	match value {
		Value::Boolean(v) => out[0] = *v as u8,
		Value::Int1(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Int2(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Int4(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Int8(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Int16(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Uint1(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Uint2(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Uint4(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Uint8(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Uint16(v) => out.copy_from_slice(&v.to_ne_bytes()),
		Value::Float4(v) => out.copy_from_slice(&v.to_bits().to_ne_bytes()),
		Value::Float8(v) => out.copy_from_slice(&v.to_bits().to_ne_bytes()),
		Value::Decimal(v) => out.copy_from_slice(&v.mantissa().to_ne_bytes()),
		Value::Date(v) => out.copy_from_slice(&v.to_days_since_epoch().to_ne_bytes()),
		Value::Time(v) => out.copy_from_slice(&v.to_nanos_since_midnight().to_ne_bytes()),
		Value::DateTime(v) => {
			let (seconds, nanos) = v.to_parts();
			out[..8].copy_from_slice(&seconds.to_ne_bytes());
			out[8..12].copy_from_slice(&nanos.to_ne_bytes());
		}
		Value::Interval(v) => {
			out[..4].copy_from_slice(&v.months().to_ne_bytes());
			out[4..8].copy_from_slice(&v.days().to_ne_bytes());
			out[8..16].copy_from_slice(&v.nanos().to_ne_bytes());
		}
		Value::Uuid(v) => out.copy_from_slice(v.as_bytes()),
		Value::Null | Value::Blob(_) | Value::Utf8(_) | Value::List(_) | Value::Record(_) => {
			debug_assert!(false, "not a fixed-width value: {value:?}")
		}
	}
}

/// Read a fixed-width value of kind `ty` from `bytes`.
pub(crate) fn read(ordinal: usize, ty: Type, bytes: &[u8]) -> Result<Value> {
	let invalid = || {
		Error::corrupt(CorruptReason::InvalidValue {
			ordinal,
			ty,
		})
	};

	Ok(match ty {
		Type::Boolean => match take::<1>(bytes, invalid)? {
			[0] => Value::Boolean(false),
			[1] => Value::Boolean(true),
			_ => return Err(invalid()),
		},
		Type::Int1 => Value::Int1(i8::from_ne_bytes(take(bytes, invalid)?)),
		Type::Int2 => Value::Int2(i16::from_ne_bytes(take(bytes, invalid)?)),
		Type::Int4 => Value::Int4(i32::from_ne_bytes(take(bytes, invalid)?)),
		Type::Int8 => Value::Int8(i64::from_ne_bytes(take(bytes, invalid)?)),
		Type::Int16 => Value::Int16(i128::from_ne_bytes(take(bytes, invalid)?)),
		Type::Uint1 => Value::Uint1(u8::from_ne_bytes(take(bytes, invalid)?)),
		Type::Uint2 => Value::Uint2(u16::from_ne_bytes(take(bytes, invalid)?)),
		Type::Uint4 => Value::Uint4(u32::from_ne_bytes(take(bytes, invalid)?)),
		Type::Uint8 => Value::Uint8(u64::from_ne_bytes(take(bytes, invalid)?)),
		Type::Uint16 => Value::Uint16(u128::from_ne_bytes(take(bytes, invalid)?)),
		Type::Float4 => {
			let bits = u32::from_ne_bytes(take(bytes, invalid)?);
			Value::Float4(OrderedF32::from_bits(bits).map_err(|_| invalid())?)
		}
		Type::Float8 => {
			let bits = u64::from_ne_bytes(take(bytes, invalid)?);
			Value::Float8(OrderedF64::from_bits(bits).map_err(|_| invalid())?)
		}
		Type::Decimal {
			scale,
		} => {
			let mantissa = i128::from_ne_bytes(take(bytes, invalid)?);
			Value::Decimal(Decimal::new(mantissa, scale).map_err(|_| invalid())?)
		}
		Type::Date => Value::Date(Date::from_days_since_epoch(i32::from_ne_bytes(take(bytes, invalid)?))),
		Type::Time => {
			let nanos = u64::from_ne_bytes(take(bytes, invalid)?);
			Value::Time(Time::from_nanos_since_midnight(nanos).ok_or_else(invalid)?)
		}
		Type::DateTime => {
			let raw: [u8; 12] = take(bytes, invalid)?;
			let seconds = i64::from_ne_bytes(take(&raw[..8], invalid)?);
			let nanos = u32::from_ne_bytes(take(&raw[8..], invalid)?);
			Value::DateTime(DateTime::from_parts(seconds, nanos).map_err(|_| invalid())?)
		}
		Type::Interval => {
			let raw: [u8; 16] = take(bytes, invalid)?;
			let months = i32::from_ne_bytes(take(&raw[..4], invalid)?);
			let days = i32::from_ne_bytes(take(&raw[4..8], invalid)?);
			let nanos = i64::from_ne_bytes(take(&raw[8..], invalid)?);
			Value::Interval(Interval::new(months, days, nanos))
		}
		Type::Uuid => Value::Uuid(Uuid::from_bytes(take(bytes, invalid)?)),
		Type::Blob | Type::Utf8 | Type::List | Type::Record => return Err(invalid()),
	})
}

#[inline]
fn take<const N: usize>(bytes: &[u8], invalid: impl Fn() -> Error) -> Result<[u8; N]> {
	bytes.get(..N).and_then(|b| b.try_into().ok()).ok_or_else(invalid)
}
