// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use rowcodec_type::{CowVec, MAX_NESTING_DEPTH, Value};

use super::{
	classify::{StorageClass, align_up},
	fixed,
	layout::{ColumnLayout, Layout},
	row::Row,
	schema::RowSchema,
	tier::{Slot, Tier},
};
use crate::error::{Error, MismatchReason, Result};

/// Encode `values` with `layout`, which must have been planned for `schema`.
pub fn encode(schema: &RowSchema, layout: &Layout, values: &[Value]) -> Result<Row> {
	if schema.fingerprint() != layout.schema().fingerprint() {
		return Err(Error::mismatch(MismatchReason::ForeignLayout));
	}
	layout.encode(values)
}

impl Layout {
	/// Encode one row. `values` are in logical order.
	pub fn encode(&self, values: &[Value]) -> Result<Row> {
		self.check(values)?;

		let variable_start = self.static_size();
		let mut data = vec![0u8; variable_start];

		for &ordinal in &self.order {
			let column = &self.columns[ordinal];
			let value = &values[ordinal];

			if value.is_null() {
				if let Some(bit) = column.null_bit {
					data[self.bitmap_offset() + bit / 8] |= 1 << (bit % 8);
				}
				continue;
			}

			match column.storage {
				StorageClass::Fixed {
					..
				} => fixed::write(&mut data[column.fixed_range()], value),
				StorageClass::Variable {
					prefix_align,
				} => {
					let payload = variable_payload(ordinal, value)?;
					let tier = Tier::for_len(payload.len());

					let relative = align_up(data.len() - variable_start, tier.prefix_width().min(prefix_align));
					let offset = u32::try_from(relative).map_err(|_| Error::RowTooLarge {
						bytes: relative,
					})?;

					data.resize(variable_start + relative, 0);
					tier.write_len(&mut data, payload.len());
					data.extend_from_slice(&payload);
					Slot::new(offset, tier).write(&mut data[column.fixed_range()]);
				}
			}
		}

		Ok(Row::new(self.clone(), CowVec::new(data)))
	}

	/// Validate `values` against the schema before anything is written.
	fn check(&self, values: &[Value]) -> Result<()> {
		if values.len() != self.columns.len() {
			return Err(Error::mismatch(MismatchReason::Arity {
				expected: self.columns.len(),
				actual: values.len(),
			}));
		}
		for (column, value) in self.columns.iter().zip(values) {
			check_value(column, value)?;
		}
		Ok(())
	}
}

fn check_value(column: &ColumnLayout, value: &Value) -> Result<()> {
	match value.get_type() {
		None if column.is_nullable() => Ok(()),
		None => Err(Error::mismatch(MismatchReason::NotNullable {
			ordinal: column.ordinal,
		})),
		Some(actual) if actual != column.ty => Err(Error::mismatch(MismatchReason::Kind {
			ordinal: column.ordinal,
			expected: column.ty,
			actual,
		})),
		Some(_) if value.nesting_depth() > MAX_NESTING_DEPTH => Err(Error::mismatch(MismatchReason::Nested {
			ordinal: column.ordinal,
			message: format!("nesting deeper than {MAX_NESTING_DEPTH} levels"),
		})),
		Some(_) => Ok(()),
	}
}

fn variable_payload(ordinal: usize, value: &Value) -> Result<Cow<'_, [u8]>> {
	let nested = |values: &[Value]| {
		postcard::to_stdvec(values).map(Cow::Owned).map_err(|err| {
			Error::mismatch(MismatchReason::Nested {
				ordinal,
				message: err.to_string(),
			})
		})
	};

	match value {
		Value::Blob(blob) => Ok(Cow::Borrowed(blob.as_bytes())),
		Value::Utf8(text) => Ok(Cow::Borrowed(text.as_bytes())),
		Value::List(values) | Value::Record(values) => nested(values),
		_ => Ok(Cow::Borrowed(&[])),
	}
}
