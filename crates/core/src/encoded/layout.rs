// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
	sync::Arc,
};

use rowcodec_type::Type;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use super::{classify::StorageClass, planner::PlannerConfig, schema::RowSchema};
use crate::error::{Error, Result};

/// Hash of a resolved layout. Two processes that planned the same schema
/// with the same permutation and configuration agree on it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutFingerprint(pub u64);

impl Display for LayoutFingerprint {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:016x}", self.0)
	}
}

/// A planned physical row layout, shared by every row encoded with it.
///
/// Rows are laid out as `[fixed region][null bitmap][variable region]`.
#[derive(Debug, Clone)]
pub struct Layout(Arc<LayoutInner>);

impl Deref for Layout {
	type Target = LayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq for Layout {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || (self.fingerprint == other.fingerprint && self.schema == other.schema)
	}
}

impl Eq for Layout {}

#[derive(Debug)]
pub struct LayoutInner {
	pub schema: RowSchema,
	pub config: PlannerConfig,
	pub fingerprint: LayoutFingerprint,
	/// Indexed by logical ordinal
	pub columns: Vec<ColumnLayout>,
	/// Indexed by physical position, holds logical ordinals
	pub order: Vec<usize>,
	/// size of the fixed region in bytes, a multiple of `alignment`
	pub fixed_size: usize,
	/// size of the null bitmap in bytes
	pub bitmap_size: usize,
	/// largest alignment of any fixed-region entry
	pub alignment: usize,
}

/// Placement of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
	pub ordinal: usize,
	pub position: usize,
	pub ty: Type,
	pub storage: StorageClass,
	/// Offset of the column's value or slot within the fixed region
	pub offset: usize,
	/// Bit in the null bitmap; `None` for non-nullable columns
	pub null_bit: Option<usize>,
}

impl ColumnLayout {
	pub fn is_nullable(&self) -> bool {
		self.null_bit.is_some()
	}

	pub fn is_variable(&self) -> bool {
		self.storage.is_variable()
	}

	/// Byte range of the column's fixed-region entry.
	pub fn fixed_range(&self) -> std::ops::Range<usize> {
		self.offset..self.offset + self.storage.region_width()
	}
}

impl Layout {
	pub(crate) fn new(
		schema: RowSchema,
		config: PlannerConfig,
		columns: Vec<ColumnLayout>,
		order: Vec<usize>,
		fixed_size: usize,
		bitmap_size: usize,
		alignment: usize,
	) -> Self {
		let fingerprint = compute_fingerprint(&schema, &config, &columns, &order, fixed_size, bitmap_size);
		Self(Arc::new(LayoutInner {
			schema,
			config,
			fingerprint,
			columns,
			order,
			fixed_size,
			bitmap_size,
			alignment,
		}))
	}
}

impl LayoutInner {
	pub fn schema(&self) -> &RowSchema {
		&self.schema
	}

	pub fn fingerprint(&self) -> LayoutFingerprint {
		self.fingerprint
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	#[inline]
	pub fn column(&self, ordinal: usize) -> Result<&ColumnLayout> {
		self.columns.get(ordinal).ok_or(Error::OutOfRange {
			ordinal,
			columns: self.columns.len(),
		})
	}

	pub fn columns(&self) -> &[ColumnLayout] {
		&self.columns
	}

	/// Physical position of a logical column.
	pub fn position(&self, ordinal: usize) -> Option<usize> {
		self.columns.get(ordinal).map(|c| c.position)
	}

	/// Logical ordinals in physical order.
	pub fn physical_order(&self) -> &[usize] {
		&self.order
	}

	pub const fn fixed_size(&self) -> usize {
		self.fixed_size
	}

	pub const fn bitmap_offset(&self) -> usize {
		self.fixed_size
	}

	pub const fn bitmap_size(&self) -> usize {
		self.bitmap_size
	}

	/// Size of the fixed region plus the null bitmap; the variable region
	/// starts here.
	pub const fn static_size(&self) -> usize {
		self.fixed_size + self.bitmap_size
	}

	pub const fn variable_start(&self) -> usize {
		self.static_size()
	}
}

fn compute_fingerprint(
	schema: &RowSchema,
	config: &PlannerConfig,
	columns: &[ColumnLayout],
	order: &[usize],
	fixed_size: usize,
	bitmap_size: usize,
) -> LayoutFingerprint {
	let mut buf = Vec::with_capacity(32 + order.len() * 32);
	buf.extend_from_slice(&schema.fingerprint().as_u64().to_le_bytes());
	buf.extend_from_slice(&(config.max_alignment as u64).to_le_bytes());
	buf.extend_from_slice(&(fixed_size as u64).to_le_bytes());
	buf.extend_from_slice(&(bitmap_size as u64).to_le_bytes());
	for &ordinal in order {
		let column = &columns[ordinal];
		buf.extend_from_slice(&(ordinal as u64).to_le_bytes());
		buf.extend_from_slice(&(column.offset as u64).to_le_bytes());
		buf.extend_from_slice(&column.null_bit.map_or(u64::MAX, |bit| bit as u64).to_le_bytes());
		match column.storage {
			StorageClass::Fixed {
				width,
				align,
			} => {
				buf.push(0);
				buf.extend_from_slice(&(width as u32).to_le_bytes());
				buf.extend_from_slice(&(align as u32).to_le_bytes());
			}
			StorageClass::Variable {
				prefix_align,
			} => {
				buf.push(1);
				buf.extend_from_slice(&(prefix_align as u32).to_le_bytes());
			}
		}
	}
	LayoutFingerprint(xxh3_64(&buf))
}
