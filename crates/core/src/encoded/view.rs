// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::iter::FusedIterator;

use rowcodec_type::{Blob, NestedSeed, Type, Value};
use serde::de::DeserializeSeed;

use super::{
	classify::{SLOT_SIZE, StorageClass},
	fixed,
	layout::{ColumnLayout, Layout},
	row::Row,
	tier::{Slot, Tier},
};
use crate::error::{CorruptReason, Error, Result};

/// A borrowed, zero-copy reader over an encoded row.
///
/// Reading a column touches only its null bit, its fixed-region entry and,
/// for variable-length columns, its own payload.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
	layout: &'a Layout,
	bytes: &'a [u8],
}

impl Layout {
	/// View raw bytes encoded with this layout. Only the fixed region and
	/// bitmap are checked here; column reads check their own bytes.
	pub fn view<'a>(&'a self, bytes: &'a [u8]) -> Result<RowView<'a>> {
		if bytes.len() < self.static_size() {
			return Err(Error::corrupt(CorruptReason::Truncated {
				expected: self.static_size(),
				actual: bytes.len(),
			}));
		}
		Ok(RowView {
			layout: self,
			bytes,
		})
	}

	/// Read one column of a row encoded with this layout.
	pub fn get(&self, row: &Row, ordinal: usize) -> Result<Value> {
		if row.layout().fingerprint() != self.fingerprint() {
			return Err(Error::corrupt(CorruptReason::ForeignLayout));
		}
		self.view(row.as_bytes())?.get(ordinal)
	}
}

impl<'a> RowView<'a> {
	pub(crate) fn new_unchecked(layout: &'a Layout, bytes: &'a [u8]) -> Self {
		debug_assert!(bytes.len() >= layout.static_size());
		Self {
			layout,
			bytes,
		}
	}

	pub fn layout(&self) -> &'a Layout {
		self.layout
	}

	pub fn as_bytes(&self) -> &'a [u8] {
		self.bytes
	}

	pub fn fixed(&self) -> &'a [u8] {
		&self.bytes[..self.layout.fixed_size()]
	}

	pub fn bitmap(&self) -> &'a [u8] {
		&self.bytes[self.layout.bitmap_offset()..self.layout.static_size()]
	}

	pub fn variable(&self) -> &'a [u8] {
		&self.bytes[self.layout.variable_start()..]
	}

	pub fn len(&self) -> usize {
		self.layout.len()
	}

	pub fn is_empty(&self) -> bool {
		self.layout.is_empty()
	}

	#[inline]
	pub fn is_null(&self, ordinal: usize) -> Result<bool> {
		let column = self.layout.column(ordinal)?;
		Ok(self.null_bit_set(column))
	}

	#[inline]
	fn null_bit_set(&self, column: &ColumnLayout) -> bool {
		match column.null_bit {
			Some(bit) => self.bitmap()[bit / 8] & (1 << (bit % 8)) != 0,
			None => false,
		}
	}

	/// Decode column `ordinal`.
	pub fn get(&self, ordinal: usize) -> Result<Value> {
		let column = self.layout.column(ordinal)?;
		if self.null_bit_set(column) {
			return Ok(Value::Null);
		}

		match column.storage {
			StorageClass::Fixed {
				..
			} => fixed::read(ordinal, column.ty, &self.fixed()[column.fixed_range()]),
			StorageClass::Variable {
				..
			} => {
				let payload = self.payload(column)?;
				decode_variable(ordinal, column.ty, payload)
			}
		}
	}

	/// The raw payload bytes of a non-null variable-length column.
	fn payload(&self, column: &ColumnLayout) -> Result<&'a [u8]> {
		let ordinal = column.ordinal;
		let mut raw = [0u8; SLOT_SIZE];
		raw.copy_from_slice(&self.fixed()[column.fixed_range()]);
		let slot = Slot::read(&raw);

		if slot.is_empty() {
			return Err(Error::corrupt(CorruptReason::EmptySlot {
				ordinal,
			}));
		}
		let tier = Tier::from_tag(slot.tag).ok_or_else(|| {
			Error::corrupt(CorruptReason::UnknownTier {
				ordinal,
				tag: slot.tag,
			})
		})?;

		let variable = self.variable();
		let out_of_bounds = |start: usize, end: usize| {
			Error::corrupt(CorruptReason::OutOfBounds {
				ordinal,
				start,
				end,
				len: variable.len(),
			})
		};

		let start = slot.offset as usize;
		let prefix_end = start.saturating_add(tier.prefix_width());
		let prefix = variable.get(start..prefix_end).ok_or_else(|| out_of_bounds(start, prefix_end))?;
		let len = tier.read_len(prefix).ok_or_else(|| out_of_bounds(start, prefix_end))?;

		let end = usize::try_from(len)
			.ok()
			.and_then(|len| prefix_end.checked_add(len))
			.ok_or_else(|| out_of_bounds(prefix_end, usize::MAX))?;
		variable.get(prefix_end..end).ok_or_else(|| out_of_bounds(prefix_end, end))
	}

	/// Iterate `(ordinal, value)` pairs in logical order.
	pub fn iter(&self) -> RowIter<'a> {
		RowIter {
			view: *self,
			next: 0,
		}
	}

	/// Decode every column in logical order.
	pub fn unpack(&self) -> Result<Vec<Value>> {
		self.iter().map(|item| item.map(|(_, value)| value)).collect()
	}

	/// Decode every column, discarding the values.
	pub(crate) fn validate(&self) -> Result<()> {
		self.iter().try_for_each(|item| item.map(|_| ()))
	}
}

fn decode_variable(ordinal: usize, ty: Type, payload: &[u8]) -> Result<Value> {
	let nested = || -> Result<Vec<Value>> {
		let mut deserializer = postcard::Deserializer::from_bytes(payload);
		NestedSeed::new(1).deserialize(&mut deserializer).map_err(|err| {
			Error::corrupt(CorruptReason::Nested {
				ordinal,
				message: err.to_string(),
			})
		})
	};

	match ty {
		Type::Blob => Ok(Value::Blob(Blob::from_slice(payload))),
		Type::Utf8 => std::str::from_utf8(payload).map(|s| Value::Utf8(s.to_string())).map_err(|_| {
			Error::corrupt(CorruptReason::InvalidUtf8 {
				ordinal,
			})
		}),
		Type::List => nested().map(Value::List),
		Type::Record => nested().map(Value::Record),
		_ => Err(Error::corrupt(CorruptReason::InvalidValue {
			ordinal,
			ty,
		})),
	}
}

/// Lazy, restartable iterator over a row's columns.
#[derive(Debug, Clone)]
pub struct RowIter<'a> {
	view: RowView<'a>,
	next: usize,
}

impl<'a> Iterator for RowIter<'a> {
	type Item = Result<(usize, Value)>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.next >= self.view.len() {
			return None;
		}
		let ordinal = self.next;
		self.next += 1;
		Some(self.view.get(ordinal).map(|value| (ordinal, value)))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.view.len() - self.next;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for RowIter<'_> {}

impl FusedIterator for RowIter<'_> {}

#[cfg(test)]
pub mod tests {
	use rowcodec_type::{Type, Value};

	use super::*;
	use crate::encoded::{
		planner::plan,
		schema::{ColumnDef, RowSchema},
	};

	fn text_layout() -> Layout {
		plan(&RowSchema::testing(&[Type::Utf8]), None).unwrap()
	}

	mod read {
		use super::*;

		#[test]
		fn test_get_and_iter() {
			let schema = RowSchema::new(vec![
				ColumnDef::not_null(Type::Int4),
				ColumnDef::nullable(Type::Utf8),
				ColumnDef::not_null(Type::Boolean),
			]);
			let layout = plan(&schema, None).unwrap();
			let row = layout.encode(&[Value::Int4(42), Value::Null, Value::Boolean(true)]).unwrap();
			let view = layout.view(row.as_bytes()).unwrap();

			assert_eq!(view.get(1).unwrap(), Value::Null);
			assert_eq!(view.get(2).unwrap(), Value::Boolean(true));
			assert!(view.is_null(1).unwrap());
			assert!(!view.is_null(0).unwrap());

			let items: Vec<_> = view.iter().collect::<Result<_>>().unwrap();
			assert_eq!(items, vec![(0, Value::Int4(42)), (1, Value::Null), (2, Value::Boolean(true))]);
		}

		#[test]
		fn test_out_of_range() {
			let layout = text_layout();
			let row = layout.encode(&[Value::utf8("a")]).unwrap();
			assert_eq!(
				row.view().get(1).unwrap_err(),
				Error::OutOfRange {
					ordinal: 1,
					columns: 1
				}
			);
			assert!(row.view().is_null(5).is_err());
		}

		#[test]
		fn test_iter_restartable() {
			let layout = text_layout();
			let row = layout.encode(&[Value::utf8("again")]).unwrap();
			let view = row.view();
			let first: Vec<_> = view.iter().collect();
			let second: Vec<_> = view.iter().collect();
			assert_eq!(first, second);
			assert_eq!(view.iter().len(), 1);
		}

		#[test]
		fn test_nested() {
			let layout = plan(&RowSchema::testing(&[Type::List, Type::Record]), None).unwrap();
			let list = Value::list([Value::Int4(1), Value::Null, Value::utf8("two")]);
			let record = Value::record([Value::Boolean(true), Value::list([Value::Uint1(3)])]);
			let row = layout.encode(&[list.clone(), record.clone()]).unwrap();
			assert_eq!(row.get(0).unwrap(), list);
			assert_eq!(row.get(1).unwrap(), record);
		}

		#[test]
		fn test_empty_payloads() {
			let layout = plan(&RowSchema::testing(&[Type::Utf8, Type::Blob, Type::List]), None).unwrap();
			let values = [Value::utf8(""), Value::blob(Vec::<u8>::new()), Value::list([])];
			let row = layout.encode(&values).unwrap();
			assert_eq!(row.unpack().unwrap(), values.to_vec());
		}
	}

	mod corrupt {
		use super::*;

		fn encoded(text: &str) -> (Layout, Vec<u8>) {
			let layout = text_layout();
			let bytes = layout.encode(&[Value::utf8(text)]).unwrap().into_bytes();
			(layout, bytes)
		}

		#[test]
		fn test_truncated_static() {
			let layout = text_layout();
			assert_eq!(
				layout.view(&[0u8; 3]).unwrap_err(),
				Error::corrupt(CorruptReason::Truncated {
					expected: 9,
					actual: 3
				})
			);
		}

		#[test]
		fn test_truncated_payload() {
			let (layout, mut bytes) = encoded("hello");
			bytes.truncate(bytes.len() - 1);
			let err = layout.view(&bytes).unwrap().get(0).unwrap_err();
			assert!(matches!(
				err,
				Error::CorruptRow {
					reason: CorruptReason::OutOfBounds { .. }
				}
			));
		}

		#[test]
		fn test_unknown_tier() {
			let (layout, mut bytes) = encoded("hello");
			bytes[4] = 9;
			assert_eq!(
				layout.view(&bytes).unwrap().get(0).unwrap_err(),
				Error::corrupt(CorruptReason::UnknownTier {
					ordinal: 0,
					tag: 9
				})
			);
		}

		#[test]
		fn test_empty_slot() {
			let (layout, mut bytes) = encoded("hello");
			bytes[4] = 0;
			assert_eq!(
				layout.view(&bytes).unwrap().get(0).unwrap_err(),
				Error::corrupt(CorruptReason::EmptySlot {
					ordinal: 0
				})
			);
		}

		#[test]
		fn test_offset_past_end() {
			let (layout, mut bytes) = encoded("hello");
			bytes[..4].copy_from_slice(&1_000u32.to_ne_bytes());
			assert!(layout.view(&bytes).unwrap().get(0).unwrap_err().is_corrupt());
		}

		#[test]
		fn test_invalid_utf8() {
			let (layout, mut bytes) = encoded("hello");
			let last = bytes.len() - 1;
			bytes[last] = 0xFF;
			assert_eq!(
				layout.view(&bytes).unwrap().get(0).unwrap_err(),
				Error::corrupt(CorruptReason::InvalidUtf8 {
					ordinal: 0
				})
			);
		}

		#[test]
		fn test_null_bit_wins() {
			let (layout, mut bytes) = encoded("hello");
			bytes[layout.bitmap_offset()] = 1;
			assert_eq!(layout.view(&bytes).unwrap().get(0).unwrap(), Value::Null);
		}

		#[test]
		fn test_foreign_layout() {
			let (layout, _) = encoded("hello");
			let other = plan(&RowSchema::testing(&[Type::Blob]), None).unwrap();
			let row = other.encode(&[Value::blob(vec![1u8, 2])]).unwrap();
			assert_eq!(layout.get(&row, 0).unwrap_err(), Error::corrupt(CorruptReason::ForeignLayout));
			assert_eq!(other.get(&row, 0).unwrap(), Value::blob(vec![1u8, 2]));
		}
	}
}
