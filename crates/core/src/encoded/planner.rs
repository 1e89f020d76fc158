// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Reverse;

use tracing::{debug, instrument};

use super::{
	classify::{MAX_ALIGNMENT, align_up, classify_with},
	layout::{ColumnLayout, Layout},
	permutation::Permutation,
	schema::RowSchema,
};
use crate::error::{Error, MismatchReason, Result};

/// Resolved planner settings. Participates in the layout fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlannerConfig {
	/// Cap on fixed-width column alignment; a power of two in `1..=16`
	pub max_alignment: usize,
}

impl Default for PlannerConfig {
	fn default() -> Self {
		Self {
			max_alignment: MAX_ALIGNMENT,
		}
	}
}

/// Builder for [`PlannerConfig`] that also runs the planner.
///
/// ```
/// use rowcodec_core::{LayoutPlanner, RowSchema};
/// use rowcodec_type::Type;
///
/// let schema = RowSchema::testing(&[Type::Int8, Type::Utf8]);
/// let layout = LayoutPlanner::new().max_alignment(4).plan(&schema, None).unwrap();
/// assert_eq!(layout.alignment, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutPlanner {
	max_alignment: Option<usize>,
}

impl LayoutPlanner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Values outside `1..=16` are clamped and others are rounded down to a
	/// power of two.
	pub fn max_alignment(mut self, max_alignment: usize) -> Self {
		self.max_alignment = Some(max_alignment);
		self
	}

	pub fn config(&self) -> PlannerConfig {
		let max_alignment = match self.max_alignment {
			Some(n) => {
				let n = n.clamp(1, MAX_ALIGNMENT);
				1 << (usize::BITS - 1 - n.leading_zeros())
			}
			None => MAX_ALIGNMENT,
		};
		PlannerConfig {
			max_alignment,
		}
	}

	/// Plan the physical layout of `schema`.
	///
	/// Columns start in `permutation` order (schema order without one) and
	/// are then stably grouped by descending alignment, so no padding is
	/// needed between them except where a column kind's width is smaller
	/// than the alignment of the group that follows.
	#[instrument(name = "encoded::layout::plan", level = "trace", skip_all, fields(columns = schema.len()))]
	pub fn plan(&self, schema: &RowSchema, permutation: Option<&Permutation>) -> Result<Layout> {
		let config = self.config();
		let columns = schema.len();

		let mut order: Vec<usize> = match permutation {
			Some(p) if p.len() != columns => {
				return Err(Error::mismatch(MismatchReason::PermutationArity {
					expected: columns,
					actual: p.len(),
				}));
			}
			Some(p) => p.to_vec(),
			None => (0..columns).collect(),
		};

		let classes = classify_with(schema, config.max_alignment);
		order.sort_by_key(|&ordinal| Reverse(classes[ordinal].region_align()));

		let mut placed = Vec::with_capacity(columns);
		let mut offset = 0;
		let mut alignment = 1;
		let mut null_bits = 0;

		for (position, &ordinal) in order.iter().enumerate() {
			let def = &schema.columns[ordinal];
			let storage = classes[ordinal];
			let align = storage.region_align();

			offset = align_up(offset, align);
			let null_bit = if def.nullable {
				null_bits += 1;
				Some(null_bits - 1)
			} else {
				None
			};

			placed.push(ColumnLayout {
				ordinal,
				position,
				ty: def.ty,
				storage,
				offset,
				null_bit,
			});

			offset += storage.region_width();
			alignment = alignment.max(align);
		}
		placed.sort_by_key(|c| c.ordinal);

		let fixed_size = align_up(offset, alignment);
		let bitmap_size = null_bits.div_ceil(8);
		let layout = Layout::new(schema.clone(), config, placed, order, fixed_size, bitmap_size, alignment);

		debug!(
			fixed_size,
			bitmap_size,
			alignment,
			fingerprint = %layout.fingerprint(),
			"planned row layout"
		);
		Ok(layout)
	}
}

/// Plan with the default configuration.
pub fn plan(schema: &RowSchema, permutation: Option<&Permutation>) -> Result<Layout> {
	LayoutPlanner::new().plan(schema, permutation)
}
