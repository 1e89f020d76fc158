// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::{error::TypeError, value::r#type::Type};

/// An `f64` with a total order, equality on bit patterns and no NaN.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}

	pub fn to_bits(&self) -> u64 {
		self.0.to_bits()
	}

	/// Rebuilds a value from its stored bit pattern.
	pub fn from_bits(bits: u64) -> Result<Self, TypeError> {
		Self::try_from(f64::from_bits(bits))
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		let a = self.0.to_bits() ^ ((self.0.to_bits() >> 63) & 0x7fffffffffffffff);
		let b = other.0.to_bits() ^ ((other.0.to_bits() >> 63) & 0x7fffffffffffffff);
		(a as i64).cmp(&(b as i64))
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl From<OrderedF64> for f64 {
	fn from(v: OrderedF64) -> Self {
		v.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = TypeError;

	fn try_from(f: f64) -> Result<Self, Self::Error> {
		// -0.0 and 0.0 share one representation
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		if f.is_nan() {
			Err(TypeError::NotANumber {
				ty: Type::Float8,
			})
		} else {
			Ok(OrderedF64(normalized))
		}
	}
}
