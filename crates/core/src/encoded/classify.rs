// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowcodec_type::Type;

use super::schema::RowSchema;

/// Upper bound on the alignment of any fixed-width column.
pub const MAX_ALIGNMENT: usize = 16;

/// Alignment applied to variable-length length prefixes. Fixed at eight
/// bytes so encodings do not differ between 32- and 64-bit hosts.
pub const POINTER_ALIGNMENT: usize = 8;

/// Bytes a variable-length column occupies in the fixed region: a `u32`
/// offset into the variable region followed by a one-byte tier tag.
pub const SLOT_SIZE: usize = 5;

pub const SLOT_ALIGNMENT: usize = 4;

/// How a column kind is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
	Fixed {
		width: usize,
		align: usize,
	},
	Variable {
		prefix_align: usize,
	},
}

impl StorageClass {
	/// Bytes reserved in the fixed region.
	pub const fn region_width(&self) -> usize {
		match self {
			StorageClass::Fixed {
				width,
				..
			} => *width,
			StorageClass::Variable {
				..
			} => SLOT_SIZE,
		}
	}

	/// Alignment of the bytes reserved in the fixed region.
	pub const fn region_align(&self) -> usize {
		match self {
			StorageClass::Fixed {
				align,
				..
			} => *align,
			StorageClass::Variable {
				..
			} => SLOT_ALIGNMENT,
		}
	}

	pub const fn is_variable(&self) -> bool {
		matches!(self, StorageClass::Variable { .. })
	}
}

/// Classify every column of `schema`, in ordinal order, under the default
/// alignment cap.
pub fn classify(schema: &RowSchema) -> Vec<StorageClass> {
	classify_with(schema, MAX_ALIGNMENT)
}

pub fn classify_with(schema: &RowSchema, max_alignment: usize) -> Vec<StorageClass> {
	schema.types().map(|ty| classify_type(ty, max_alignment)).collect()
}

pub fn classify_type(ty: Type, max_alignment: usize) -> StorageClass {
	match ty.fixed_size() {
		Some(width) => StorageClass::Fixed {
			width,
			align: natural_alignment(width).min(max_alignment),
		},
		None => StorageClass::Variable {
			prefix_align: POINTER_ALIGNMENT.min(max_alignment),
		},
	}
}

// largest power of two dividing the width
const fn natural_alignment(width: usize) -> usize {
	1 << width.trailing_zeros()
}

#[inline]
pub(crate) const fn align_up(offset: usize, align: usize) -> usize {
	(offset + align - 1) & !(align - 1)
}
