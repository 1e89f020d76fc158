// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::classify::SLOT_SIZE;

/// Width class of a variable-length value's length prefix.
///
/// The encoder always picks the smallest tier whose prefix can hold the
/// payload length, so a value's encoding depends only on its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
	/// `u8` length prefix
	Tiny = 1,
	/// `u16` length prefix
	Short = 2,
	/// `u32` length prefix
	Long = 3,
	/// `u64` length prefix
	Huge = 4,
}

impl Tier {
	pub const ALL: [Tier; 4] = [Tier::Tiny, Tier::Short, Tier::Long, Tier::Huge];

	pub fn for_len(len: usize) -> Tier {
		let len = len as u64;
		if len <= u8::MAX as u64 {
			Tier::Tiny
		} else if len <= u16::MAX as u64 {
			Tier::Short
		} else if len <= u32::MAX as u64 {
			Tier::Long
		} else {
			Tier::Huge
		}
	}

	pub const fn tag(self) -> u8 {
		self as u8
	}

	pub const fn from_tag(tag: u8) -> Option<Tier> {
		match tag {
			1 => Some(Tier::Tiny),
			2 => Some(Tier::Short),
			3 => Some(Tier::Long),
			4 => Some(Tier::Huge),
			_ => None,
		}
	}

	/// Bytes taken by the length prefix.
	pub const fn prefix_width(self) -> usize {
		match self {
			Tier::Tiny => 1,
			Tier::Short => 2,
			Tier::Long => 4,
			Tier::Huge => 8,
		}
	}

	pub const fn max_len(self) -> u64 {
		match self {
			Tier::Tiny => u8::MAX as u64,
			Tier::Short => u16::MAX as u64,
			Tier::Long => u32::MAX as u64,
			Tier::Huge => u64::MAX,
		}
	}

	pub(crate) fn write_len(self, out: &mut Vec<u8>, len: usize) {
		match self {
			Tier::Tiny => out.push(len as u8),
			Tier::Short => out.extend_from_slice(&(len as u16).to_ne_bytes()),
			Tier::Long => out.extend_from_slice(&(len as u32).to_ne_bytes()),
			Tier::Huge => out.extend_from_slice(&(len as u64).to_ne_bytes()),
		}
	}

	/// `prefix` must be exactly `prefix_width()` bytes.
	pub(crate) fn read_len(self, prefix: &[u8]) -> Option<u64> {
		Some(match self {
			Tier::Tiny => *prefix.first()? as u64,
			Tier::Short => u16::from_ne_bytes(prefix.try_into().ok()?) as u64,
			Tier::Long => u32::from_ne_bytes(prefix.try_into().ok()?) as u64,
			Tier::Huge => u64::from_ne_bytes(prefix.try_into().ok()?),
		})
	}
}

/// The fixed-region entry of a variable-length column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
	/// Offset of the length prefix, relative to the variable region start
	pub offset: u32,
	/// Raw tier tag; zero for a slot that was never written
	pub tag: u8,
}

impl Slot {
	pub fn new(offset: u32, tier: Tier) -> Self {
		Self {
			offset,
			tag: tier.tag(),
		}
	}

	pub fn read(bytes: &[u8; SLOT_SIZE]) -> Self {
		Self {
			offset: u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
			tag: bytes[4],
		}
	}

	pub fn write(&self, out: &mut [u8]) {
		out[..4].copy_from_slice(&self.offset.to_ne_bytes());
		out[4] = self.tag;
	}

	pub fn is_empty(&self) -> bool {
		self.tag == 0
	}
}
