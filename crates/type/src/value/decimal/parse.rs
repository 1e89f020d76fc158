// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use super::{Decimal, MAX_SCALE};
use crate::error::TypeError;

impl FromStr for Decimal {
	type Err = TypeError;

	/// Parses plain decimal notation; the scale is the number of fractional
	/// digits written, so `"1.50"` has scale 2.
	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let invalid = || TypeError::InvalidDecimal {
			literal: raw.to_string(),
		};

		let trimmed = raw.trim();
		let value = if trimmed.as_bytes().contains(&b'_') {
			Cow::Owned(trimmed.replace('_', ""))
		} else {
			Cow::Borrowed(trimmed)
		};

		let (negative, unsigned) = match value.as_bytes().first() {
			Some(b'-') => (true, &value[1..]),
			Some(b'+') => (false, &value[1..]),
			Some(_) => (false, &value[..]),
			None => return Err(invalid()),
		};

		let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
		if int.is_empty() && frac.is_empty() {
			return Err(invalid());
		}
		if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
			return Err(invalid());
		}
		if frac.len() > MAX_SCALE as usize {
			return Err(TypeError::DecimalScaleTooLarge {
				scale: frac.len().min(u8::MAX as usize) as u8,
				max: MAX_SCALE,
			});
		}

		let mut mantissa: i128 = 0;
		for digit in int.bytes().chain(frac.bytes()) {
			mantissa = mantissa
				.checked_mul(10)
				.and_then(|m| m.checked_add((digit - b'0') as i128))
				.ok_or_else(invalid)?;
		}
		if negative {
			mantissa = -mantissa;
		}

		Decimal::new(mantissa, frac.len() as u8)
	}
}
