// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rowcodec_core::{ColumnDef, Permutation, RowSchema};
use rowcodec_type::{Blob, Date, DateTime, Decimal, Interval, Time, Type, Uuid, Value};

const NANOS_PER_DAY: u64 = 86_400 * 1_000_000_000;

/// Every column kind; decimals are given a random scale when drawn.
pub const TYPES: [Type; 23] = [
	Type::Boolean,
	Type::Int1,
	Type::Int2,
	Type::Int4,
	Type::Int8,
	Type::Int16,
	Type::Uint1,
	Type::Uint2,
	Type::Uint4,
	Type::Uint8,
	Type::Uint16,
	Type::Float4,
	Type::Float8,
	Type::Decimal {
		scale: 0,
	},
	Type::Date,
	Type::Time,
	Type::DateTime,
	Type::Interval,
	Type::Uuid,
	Type::Blob,
	Type::Utf8,
	Type::List,
	Type::Record,
];

/// Deterministic random data for property tests.
pub struct Generator {
	rng: StdRng,
}

impl Generator {
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}

	pub fn rng(&mut self) -> &mut StdRng {
		&mut self.rng
	}

	pub fn r#type(&mut self) -> Type {
		match TYPES[self.rng.random_range(0..TYPES.len())] {
			Type::Decimal {
				..
			} => Type::Decimal {
				scale: self.rng.random_range(0..=10),
			},
			ty => ty,
		}
	}

	/// A schema of up to `max_columns` columns of random kinds, about half
	/// of them nullable.
	pub fn schema(&mut self, max_columns: usize) -> RowSchema {
		let columns = self.rng.random_range(0..=max_columns);
		let defs = (0..columns)
			.map(|_| {
				let ty = self.r#type();
				if self.rng.random_bool(0.5) {
					ColumnDef::nullable(ty)
				} else {
					ColumnDef::not_null(ty)
				}
			})
			.collect();
		RowSchema::new(defs)
	}

	/// Values consistent with `schema`; nullable columns are null with
	/// probability `null_ratio`.
	pub fn values(&mut self, schema: &RowSchema, null_ratio: f64) -> Vec<Value> {
		schema.columns()
			.iter()
			.map(|column| {
				if column.nullable && self.rng.random_bool(null_ratio) {
					Value::Null
				} else {
					self.value(column.ty)
				}
			})
			.collect()
	}

	/// A non-null value of kind `ty`.
	pub fn value(&mut self, ty: Type) -> Value {
		let rng = &mut self.rng;
		match ty {
			Type::Boolean => Value::Boolean(rng.random()),
			Type::Int1 => Value::Int1(rng.random()),
			Type::Int2 => Value::Int2(rng.random()),
			Type::Int4 => Value::Int4(rng.random()),
			Type::Int8 => Value::Int8(rng.random()),
			Type::Int16 => Value::Int16(rng.random()),
			Type::Uint1 => Value::Uint1(rng.random()),
			Type::Uint2 => Value::Uint2(rng.random()),
			Type::Uint4 => Value::Uint4(rng.random()),
			Type::Uint8 => Value::Uint8(rng.random()),
			Type::Uint16 => Value::Uint16(rng.random()),
			Type::Float4 => Value::float4(rng.random_range(-1.0e6f32..1.0e6)),
			Type::Float8 => Value::float8(rng.random_range(-1.0e12f64..1.0e12)),
			Type::Decimal {
				scale,
			} => {
				let mantissa = rng.random_range(-1_000_000_000_000i128..1_000_000_000_000);
				// no value exists for a scale past the maximum
				Decimal::new(mantissa, scale).map(Value::Decimal).unwrap_or(Value::Null)
			}
			Type::Date => Value::Date(Date::from_days_since_epoch(rng.random_range(-1_000_000..1_000_000))),
			Type::Time => Value::Time(
				Time::from_nanos_since_midnight(rng.random_range(0..NANOS_PER_DAY)).unwrap_or_default(),
			),
			Type::DateTime => Value::DateTime(
				DateTime::from_parts(rng.random_range(-1i64 << 40..1 << 40), rng.random_range(0..1_000_000_000))
					.unwrap_or_default(),
			),
			Type::Interval => Value::Interval(Interval::new(rng.random(), rng.random(), rng.random())),
			Type::Uuid => Value::Uuid(Uuid::from_bytes(rng.random())),
			Type::Blob => {
				let len = self.payload_len();
				Value::Blob(Blob::new(self.bytes(len)))
			}
			Type::Utf8 => {
				let len = self.payload_len();
				Value::Utf8(self.text(len))
			}
			Type::List => Value::List(self.nested()),
			Type::Record => Value::Record(self.nested()),
		}
	}

	/// A length that lands in the `u8` tier most of the time, the `u16`
	/// tier sometimes and the `u32` tier rarely.
	pub fn payload_len(&mut self) -> usize {
		match self.rng.random_range(0..100) {
			0..80 => self.rng.random_range(0..=u8::MAX as usize),
			80..98 => self.rng.random_range(256..4_096),
			_ => self.rng.random_range(65_536..70_000),
		}
	}

	pub fn bytes(&mut self, len: usize) -> Vec<u8> {
		let mut bytes = vec![0u8; len];
		self.rng.fill(bytes.as_mut_slice());
		bytes
	}

	/// Random text of roughly `len` bytes, mixing ASCII and multi-byte
	/// characters.
	pub fn text(&mut self, len: usize) -> String {
		let mut text = String::with_capacity(len + 4);
		while text.len() < len {
			if self.rng.random_bool(0.9) {
				text.push(self.rng.random_range('a'..='z'));
			} else {
				text.push(self.rng.random::<char>());
			}
		}
		text
	}

	fn nested(&mut self) -> Vec<Value> {
		let len = self.rng.random_range(0..6);
		(0..len)
			.map(|_| match self.rng.random_range(0..5) {
				0 => Value::Null,
				1 => Value::Int4(self.rng.random()),
				2 => Value::Boolean(self.rng.random()),
				3 => {
					let len = self.rng.random_range(0..16);
					Value::Utf8(self.text(len))
				}
				_ => Value::List(vec![Value::Uint8(self.rng.random())]),
			})
			.collect()
	}

	/// A uniformly shuffled permutation of `0..columns`.
	pub fn permutation(&mut self, columns: usize) -> Permutation {
		let mut order: Vec<usize> = (0..columns).collect();
		order.shuffle(&mut self.rng);
		Permutation::new(order).unwrap_or_else(|_| Permutation::identity(columns))
	}
}
