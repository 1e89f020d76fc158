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

/// An `f32` with a total order, equality on bit patterns and no NaN.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct OrderedF32(f32);

impl OrderedF32 {
	pub fn value(&self) -> f32 {
		self.0
	}

	pub fn to_bits(&self) -> u32 {
		self.0.to_bits()
	}

	/// Rebuilds a value from its stored bit pattern.
	pub fn from_bits(bits: u32) -> Result<Self, TypeError> {
		Self::try_from(f32::from_bits(bits))
	}
}

impl Deref for OrderedF32 {
	type Target = f32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl PartialEq for OrderedF32 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		let a = self.0.to_bits() ^ ((self.0.to_bits() >> 31) & 0x7fffffff);
		let b = other.0.to_bits() ^ ((other.0.to_bits() >> 31) & 0x7fffffff);
		(a as i32).cmp(&(b as i32))
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl From<OrderedF32> for f32 {
	fn from(v: OrderedF32) -> Self {
		v.0
	}
}

impl TryFrom<f32> for OrderedF32 {
	type Error = TypeError;

	fn try_from(f: f32) -> Result<Self, Self::Error> {
		// -0.0 and 0.0 share one representation
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		if f.is_nan() {
			Err(TypeError::NotANumber {
				ty: Type::Float4,
			})
		} else {
			Ok(OrderedF32(normalized))
		}
	}
}
