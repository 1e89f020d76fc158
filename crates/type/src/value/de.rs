// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt;

use serde::{
	Deserialize, Deserializer,
	de::{self, DeserializeSeed, EnumAccess, SeqAccess, VariantAccess, Visitor},
};

use super::Value;

/// The deepest chain of `List`/`Record` values accepted when decoding, and
/// when encoding a nested column.
pub const MAX_NESTING_DEPTH: usize = 32;

// upper bound on preallocation; the element count comes from untrusted input
const PREALLOCATE_LIMIT: usize = 1024;

const VARIANTS: &[&str] = &[
	"Null", "Boolean", "Int1", "Int2", "Int4", "Int8", "Int16", "Uint1", "Uint2", "Uint4", "Uint8", "Uint16",
	"Float4", "Float8", "Decimal", "Date", "Time", "DateTime", "Interval", "Uuid", "Blob", "Utf8", "List",
	"Record",
];

/// Variant names of `Value`, in declaration order.
#[derive(Deserialize)]
#[serde(variant_identifier)]
enum Tag {
	Null,
	Boolean,
	Int1,
	Int2,
	Int4,
	Int8,
	Int16,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	Uint16,
	Float4,
	Float8,
	Decimal,
	Date,
	Time,
	DateTime,
	Interval,
	Uuid,
	Blob,
	Utf8,
	List,
	Record,
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		ValueSeed {
			depth: 0,
		}
		.deserialize(deserializer)
	}
}

/// Deserializes the elements of a nested value.
///
/// `depth` counts the `List`/`Record` levels enclosing the elements, so the
/// payload of a top-level nested value starts at 1. Any chain deeper than
/// [`MAX_NESTING_DEPTH`] is rejected before it is descended into.
#[derive(Debug, Clone, Copy)]
pub struct NestedSeed {
	depth: usize,
}

impl NestedSeed {
	pub fn new(depth: usize) -> Self {
		Self {
			depth,
		}
	}
}

impl<'de> DeserializeSeed<'de> for NestedSeed {
	type Value = Vec<Value>;

	fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		if self.depth > MAX_NESTING_DEPTH {
			return Err(de::Error::custom(format!("nesting deeper than {MAX_NESTING_DEPTH} levels")));
		}
		deserializer.deserialize_seq(self)
	}
}

impl<'de> Visitor<'de> for NestedSeed {
	type Value = Vec<Value>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a sequence of values")
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(PREALLOCATE_LIMIT));
		while let Some(value) = seq.next_element_seed(ValueSeed {
			depth: self.depth,
		})? {
			values.push(value);
		}
		Ok(values)
	}
}

#[derive(Clone, Copy)]
struct ValueSeed {
	depth: usize,
}

impl<'de> DeserializeSeed<'de> for ValueSeed {
	type Value = Value;

	fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_enum("Value", VARIANTS, self)
	}
}

impl<'de> Visitor<'de> for ValueSeed {
	type Value = Value;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a value")
	}

	fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
	where
		A: EnumAccess<'de>,
	{
		let (tag, variant) = data.variant::<Tag>()?;
		let nested = NestedSeed::new(self.depth + 1);
		Ok(match tag {
			Tag::Null => {
				variant.unit_variant()?;
				Value::Null
			}
			Tag::Boolean => Value::Boolean(variant.newtype_variant()?),
			Tag::Int1 => Value::Int1(variant.newtype_variant()?),
			Tag::Int2 => Value::Int2(variant.newtype_variant()?),
			Tag::Int4 => Value::Int4(variant.newtype_variant()?),
			Tag::Int8 => Value::Int8(variant.newtype_variant()?),
			Tag::Int16 => Value::Int16(variant.newtype_variant()?),
			Tag::Uint1 => Value::Uint1(variant.newtype_variant()?),
			Tag::Uint2 => Value::Uint2(variant.newtype_variant()?),
			Tag::Uint4 => Value::Uint4(variant.newtype_variant()?),
			Tag::Uint8 => Value::Uint8(variant.newtype_variant()?),
			Tag::Uint16 => Value::Uint16(variant.newtype_variant()?),
			Tag::Float4 => Value::Float4(variant.newtype_variant()?),
			Tag::Float8 => Value::Float8(variant.newtype_variant()?),
			Tag::Decimal => Value::Decimal(variant.newtype_variant()?),
			Tag::Date => Value::Date(variant.newtype_variant()?),
			Tag::Time => Value::Time(variant.newtype_variant()?),
			Tag::DateTime => Value::DateTime(variant.newtype_variant()?),
			Tag::Interval => Value::Interval(variant.newtype_variant()?),
			Tag::Uuid => Value::Uuid(variant.newtype_variant()?),
			Tag::Blob => Value::Blob(variant.newtype_variant()?),
			Tag::Utf8 => Value::Utf8(variant.newtype_variant()?),
			Tag::List => Value::List(variant.newtype_variant_seed(nested)?),
			Tag::Record => Value::Record(variant.newtype_variant_seed(nested)?),
		})
	}
}

impl Value {
	/// The longest chain of `List`/`Record` values, counting this one.
	/// Scalars and `Null` have depth 0.
	pub fn nesting_depth(&self) -> usize {
		let mut deepest = 0;
		let mut pending = vec![(self, 0usize)];
		while let Some((value, depth)) = pending.pop() {
			if let Value::List(values) | Value::Record(values) = value {
				deepest = deepest.max(depth + 1);
				pending.extend(values.iter().map(|value| (value, depth + 1)));
			}
		}
		deepest
	}
}
