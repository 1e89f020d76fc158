// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Blob;

impl Blob {
	pub fn to_hex(&self) -> String {
		let mut out = String::with_capacity(2 + self.len() * 2);
		out.push_str("0x");
		for byte in self.as_bytes() {
			let _ = write!(out, "{byte:02x}");
		}
		out
	}

	/// Parses `0x`-prefixed or bare hex; `None` on odd length or non-hex digits.
	pub fn from_hex(text: &str) -> Option<Self> {
		let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
		if digits.len() % 2 != 0 {
			return None;
		}

		let bytes = digits
			.as_bytes()
			.chunks(2)
			.map(|pair| {
				let hi = (pair[0] as char).to_digit(16)?;
				let lo = (pair[1] as char).to_digit(16)?;
				Some((hi * 16 + lo) as u8)
			})
			.collect::<Option<Vec<u8>>>()?;

		Some(Blob::new(bytes))
	}
}
