// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

mod parse;

/// The largest scale whose power of ten still fits an `i128` mantissa.
pub const MAX_SCALE: u8 = 38;

/// A fixed-point decimal: `mantissa * 10^-scale`.
///
/// Equality is structural, so `1.0` (scale 1) and `1` (scale 0) are distinct
/// values; a column declares one scale and every value stored in it uses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i128, u8)", into = "(i128, u8)")]
pub struct Decimal {
	mantissa: i128,
	scale: u8,
}

impl Decimal {
	pub fn new(mantissa: i128, scale: u8) -> Result<Self, TypeError> {
		if scale > MAX_SCALE {
			return Err(TypeError::DecimalScaleTooLarge {
				scale,
				max: MAX_SCALE,
			});
		}
		Ok(Self {
			mantissa,
			scale,
		})
	}

	pub fn mantissa(&self) -> i128 {
		self.mantissa
	}

	pub fn scale(&self) -> u8 {
		self.scale
	}

	/// The same value expressed with a larger scale, if it fits.
	pub fn rescale(&self, scale: u8) -> Option<Self> {
		if scale < self.scale || scale > MAX_SCALE {
			return None;
		}
		let factor = 10i128.checked_pow((scale - self.scale) as u32)?;
		Some(Self {
			mantissa: self.mantissa.checked_mul(factor)?,
			scale,
		})
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self {
			mantissa: value as i128,
			scale: 0,
		}
	}
}

impl TryFrom<(i128, u8)> for Decimal {
	type Error = TypeError;

	fn try_from((mantissa, scale): (i128, u8)) -> Result<Self, Self::Error> {
		Self::new(mantissa, scale)
	}
}

impl From<Decimal> for (i128, u8) {
	fn from(decimal: Decimal) -> Self {
		(decimal.mantissa, decimal.scale)
	}
}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> Ordering {
		let common = self.scale.max(other.scale);
		let numeric = match (self.rescale(common), other.rescale(common)) {
			(Some(l), Some(r)) => l.mantissa.cmp(&r.mantissa),
			// overflow while widening: the unscaled side has the larger magnitude
			(None, Some(_)) => self.mantissa.signum().cmp(&0),
			(Some(_), None) => 0.cmp(&other.mantissa.signum()),
			(None, None) => Ordering::Equal,
		};
		numeric.then(self.scale.cmp(&other.scale))
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let digits = self.mantissa.unsigned_abs().to_string();
		let sign = if self.mantissa < 0 {
			"-"
		} else {
			""
		};
		let scale = self.scale as usize;
		if scale == 0 {
			return write!(f, "{sign}{digits}");
		}
		if digits.len() > scale {
			let (int, frac) = digits.split_at(digits.len() - scale);
			write!(f, "{sign}{int}.{frac}")
		} else {
			write!(f, "{sign}0.{}{digits}", "0".repeat(scale - digits.len()))
		}
	}
}
