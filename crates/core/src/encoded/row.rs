// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Debug, Display, Formatter},
	hash::{Hash, Hasher},
};

use rowcodec_type::{CowVec, FromValue, Value};
use tracing::{instrument, warn};

use super::{
	layout::Layout,
	schema::RowSchema,
	view::{RowIter, RowView},
};
use crate::error::{Error, MismatchReason, Result};

/// An encoded row: `[fixed region][null bitmap][variable region]` in one
/// copy-on-write buffer, together with the layout that produced it.
///
/// Equality, ordering and hashing compare decoded values, so rows holding
/// the same values under different layouts are equal.
#[derive(Clone)]
pub struct Row {
	layout: Layout,
	data: CowVec<u8>,
}

impl Row {
	pub(crate) fn new(layout: Layout, data: CowVec<u8>) -> Self {
		Self {
			layout,
			data,
		}
	}

	/// Adopt bytes produced elsewhere, decoding every column once to
	/// reject corrupt input.
	#[instrument(name = "encoded::row::from_bytes", level = "trace", skip_all, fields(bytes = bytes.len()))]
	pub fn from_bytes(layout: &Layout, bytes: Vec<u8>) -> Result<Self> {
		if let Err(err) = layout.view(&bytes).and_then(|view| view.validate()) {
			warn!(fingerprint = %layout.fingerprint(), error = %err, "rejected encoded row");
			return Err(err);
		}
		Ok(Self::new(layout.clone(), CowVec::new(bytes)))
	}

	pub fn layout(&self) -> &Layout {
		&self.layout
	}

	pub fn schema(&self) -> &RowSchema {
		self.layout.schema()
	}

	pub fn column_count(&self) -> usize {
		self.layout.len()
	}

	pub fn byte_len(&self) -> usize {
		self.data.len()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	pub fn fixed(&self) -> &[u8] {
		self.view().fixed()
	}

	pub fn bitmap(&self) -> &[u8] {
		self.view().bitmap()
	}

	pub fn variable(&self) -> &[u8] {
		self.view().variable()
	}

	pub fn view(&self) -> RowView<'_> {
		RowView::new_unchecked(&self.layout, &self.data)
	}

	#[inline]
	pub fn get(&self, ordinal: usize) -> Result<Value> {
		self.view().get(ordinal)
	}

	/// Typed read; `None` for null.
	pub fn get_as<T: FromValue>(&self, ordinal: usize) -> Result<Option<T>> {
		let column = self.layout.column(ordinal)?;
		if column.ty != T::get_type() {
			return Err(Error::mismatch(MismatchReason::Kind {
				ordinal,
				expected: column.ty,
				actual: T::get_type(),
			}));
		}
		let value = self.get(ordinal)?;
		Ok(if value.is_null() {
			None
		} else {
			T::from_value(value)
		})
	}

	pub fn is_null(&self, ordinal: usize) -> Result<bool> {
		self.view().is_null(ordinal)
	}

	pub fn iter(&self) -> RowIter<'_> {
		self.view().iter()
	}

	pub fn unpack(&self) -> Result<Vec<Value>> {
		self.view().unpack()
	}

	/// Encode the same values under another layout of the same schema.
	#[instrument(name = "encoded::row::reencode", level = "trace", skip_all)]
	pub fn reencode(&self, layout: &Layout) -> Result<Row> {
		if layout.schema().fingerprint() != self.schema().fingerprint() {
			return Err(Error::mismatch(MismatchReason::ForeignLayout));
		}
		if layout.fingerprint() == self.layout.fingerprint() {
			return Ok(self.clone());
		}
		layout.encode(&self.unpack()?)
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.data.into_vec()
	}

	pub fn into_parts(self) -> (Layout, CowVec<u8>) {
		(self.layout, self.data)
	}

	fn values(&self) -> impl Iterator<Item = Option<Value>> + '_ {
		self.iter().map(|item| item.ok().map(|(_, value)| value))
	}
}

impl<'a> IntoIterator for &'a Row {
	type Item = Result<(usize, Value)>;
	type IntoIter = RowIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl PartialEq for Row {
	fn eq(&self, other: &Self) -> bool {
		self.values().eq(other.values())
	}
}

impl Eq for Row {}

impl PartialOrd for Row {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Row {
	fn cmp(&self, other: &Self) -> Ordering {
		self.values().cmp(other.values())
	}
}

impl Hash for Row {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_usize(self.column_count());
		for value in self.values() {
			value.hash(state);
		}
	}
}

impl Debug for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut list = f.debug_list();
		for item in self.iter() {
			match item {
				Ok((_, value)) => list.entry(&value),
				Err(err) => list.entry(&err),
			};
		}
		list.finish()
	}
}

impl Display for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("(")?;
		for (i, item) in self.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			match item {
				Ok((_, value)) => write!(f, "{value}")?,
				Err(_) => f.write_str("<corrupt>")?,
			}
		}
		f.write_str(")")
	}
}
