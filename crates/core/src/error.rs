// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowcodec_type::Type;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("schema mismatch: {reason}")]
	SchemaMismatch {
		reason: MismatchReason,
	},

	#[error("column {ordinal} is out of range for a row of {columns} columns")]
	OutOfRange {
		ordinal: usize,
		columns: usize,
	},

	#[error("corrupt row: {reason}")]
	CorruptRow {
		reason: CorruptReason,
	},

	#[error("invalid permutation: {reason}")]
	InvalidPermutation {
		reason: PermutationReason,
	},

	#[error("variable region of {bytes} bytes cannot be addressed by a 32-bit slot offset")]
	RowTooLarge {
		bytes: usize,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MismatchReason {
	#[error("expected {expected} values, got {actual}")]
	Arity {
		expected: usize,
		actual: usize,
	},

	#[error("column {ordinal} expects {expected}, got {actual}")]
	Kind {
		ordinal: usize,
		expected: Type,
		actual: Type,
	},

	#[error("column {ordinal} is not nullable")]
	NotNullable {
		ordinal: usize,
	},

	#[error("layout was planned for a different schema")]
	ForeignLayout,

	#[error("permutation covers {actual} columns but the schema has {expected}")]
	PermutationArity {
		expected: usize,
		actual: usize,
	},

	#[error("column {ordinal} holds a nested value that cannot be encoded: {message}")]
	Nested {
		ordinal: usize,
		message: String,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorruptReason {
	#[error("{actual} bytes is shorter than the {expected} byte fixed region and null bitmap")]
	Truncated {
		expected: usize,
		actual: usize,
	},

	#[error("row was encoded with a different layout")]
	ForeignLayout,

	#[error("column {ordinal} carries unknown tier tag {tag}")]
	UnknownTier {
		ordinal: usize,
		tag: u8,
	},

	#[error("column {ordinal} is not null but its slot is empty")]
	EmptySlot {
		ordinal: usize,
	},

	#[error("column {ordinal} addresses bytes {start}..{end} of a {len} byte variable region")]
	OutOfBounds {
		ordinal: usize,
		start: usize,
		end: usize,
		len: usize,
	},

	#[error("column {ordinal} is not valid UTF-8")]
	InvalidUtf8 {
		ordinal: usize,
	},

	#[error("column {ordinal} holds an invalid {ty} value")]
	InvalidValue {
		ordinal: usize,
		ty: Type,
	},

	#[error("column {ordinal} holds an undecodable nested value: {message}")]
	Nested {
		ordinal: usize,
		message: String,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermutationReason {
	#[error("position {position} names column {ordinal}, but there are only {columns} columns")]
	OutOfRange {
		position: usize,
		ordinal: usize,
		columns: usize,
	},

	#[error("column {ordinal} appears more than once")]
	Duplicate {
		ordinal: usize,
	},
}

impl Error {
	pub(crate) fn mismatch(reason: MismatchReason) -> Self {
		Error::SchemaMismatch {
			reason,
		}
	}

	pub(crate) fn corrupt(reason: CorruptReason) -> Self {
		Error::CorruptRow {
			reason,
		}
	}

	pub fn is_corrupt(&self) -> bool {
		matches!(self, Error::CorruptRow { .. })
	}
}
