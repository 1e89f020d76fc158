// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use rowcodec_type::Type;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use super::ColumnDef;

/// Content hash of a schema's encoding-relevant shape: column kinds,
/// decimal scales and nullability. Names do not contribute.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaFingerprint(pub u64);

impl SchemaFingerprint {
	pub const fn zero() -> Self {
		Self(0)
	}

	pub fn as_u64(&self) -> u64 {
		self.0
	}
}

impl Display for SchemaFingerprint {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:016x}", self.0)
	}
}

pub(crate) fn compute_fingerprint(columns: &[ColumnDef]) -> SchemaFingerprint {
	let mut buf = Vec::with_capacity(8 + columns.len() * 3);
	buf.extend_from_slice(&(columns.len() as u64).to_le_bytes());
	for column in columns {
		buf.push(column.ty.to_u8());
		buf.push(match column.ty {
			Type::Decimal {
				scale,
			} => scale,
			_ => 0,
		});
		buf.push(column.nullable as u8);
	}
	SchemaFingerprint(xxh3_64(&buf))
}
