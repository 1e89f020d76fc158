// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Randomized checks of the row format's core guarantees.

use std::ops::Range;

use rand::Rng;
use rowcodec_core::{Layout, LayoutPlanner, Row, StorageClass, Tier, plan};
use rowcodec_testing::{Generator, init_tracing};
use rowcodec_type::Value;

const ITERATIONS: usize = 200;
const MAX_COLUMNS: usize = 24;

/// Absolute byte range of a non-null variable column's prefix and payload.
fn payload_range(layout: &Layout, bytes: &[u8], ordinal: usize) -> Option<Range<usize>> {
	let column = &layout.columns[ordinal];
	if !column.is_variable() {
		return None;
	}
	let slot = &bytes[column.fixed_range()];
	let tier = Tier::from_tag(slot[4])?;
	let start = layout.variable_start() + u32::from_ne_bytes(slot[..4].try_into().unwrap()) as usize;
	let prefix = &bytes[start..start + tier.prefix_width()];
	let len = match tier {
		Tier::Tiny => prefix[0] as usize,
		Tier::Short => u16::from_ne_bytes(prefix.try_into().unwrap()) as usize,
		Tier::Long => u32::from_ne_bytes(prefix.try_into().unwrap()) as usize,
		Tier::Huge => u64::from_ne_bytes(prefix.try_into().unwrap()) as usize,
	};
	Some(start..start + tier.prefix_width() + len)
}

fn set_null_bit(layout: &Layout, bytes: &mut [u8], bit: usize) {
	bytes[layout.bitmap_offset() + bit / 8] ^= 1 << (bit % 8);
}

#[test]
fn test_random_access_matches_iteration() {
	init_tracing();
	let mut generator = Generator::seeded(0x5EED_0001);

	for _ in 0..ITERATIONS {
		let schema = generator.schema(MAX_COLUMNS);
		let layout = plan(&schema, None).unwrap();
		let row = layout.encode(&generator.values(&schema, 0.3)).unwrap();

		let iterated: Vec<_> = row.iter().collect();
		for ordinal in 0..schema.len() {
			assert_eq!(row.get(ordinal).unwrap(), iterated[ordinal].clone().unwrap().1);
		}
	}
}

#[test]
fn test_random_access_ignores_other_columns() {
	init_tracing();
	let mut generator = Generator::seeded(0x5EED_0002);

	for _ in 0..ITERATIONS / 4 {
		let schema = generator.schema(MAX_COLUMNS);
		let permutation = generator.permutation(schema.len());
		let layout = plan(&schema, Some(&permutation)).unwrap();
		let row = layout.encode(&generator.values(&schema, 0.3)).unwrap();
		let original = row.as_bytes();

		for target in 0..schema.len() {
			let expected = row.get(target).unwrap();
			let mut scribbled = original.to_vec();

			for other in (0..schema.len()).filter(|&o| o != target) {
				if let Some(range) = payload_range(&layout, original, other) {
					scribbled[range].fill(0xA5);
				}
				scribbled[layout.columns[other].fixed_range()].fill(0x5A);
				if let Some(bit) = layout.columns[other].null_bit {
					set_null_bit(&layout, &mut scribbled, bit);
				}
			}

			assert_eq!(layout.view(&scribbled).unwrap().get(target).unwrap(), expected);
		}
	}
}

#[test]
fn test_roundtrip() {
	init_tracing();
	let mut generator = Generator::seeded(0x5EED_0003);

	for _ in 0..ITERATIONS {
		let schema = generator.schema(MAX_COLUMNS);
		let values = generator.values(&schema, 0.25);
		let layout = plan(&schema, None).unwrap();
		let row = rowcodec_core::encode(&schema, &layout, &values).unwrap();

		assert_eq!(row.unpack().unwrap(), values);

		let adopted = Row::from_bytes(&layout, row.clone().into_bytes()).unwrap();
		assert_eq!(adopted.unpack().unwrap(), values);
		assert_eq!(adopted.as_bytes(), row.as_bytes());
	}
}

#[test]
fn test_alignment_invariant() {
	let mut generator = Generator::seeded(0x5EED_0004);

	for _ in 0..ITERATIONS {
		let schema = generator.schema(MAX_COLUMNS);
		let max_alignment = 1 << generator.rng().random_range(0..=4);
		let permutation = generator.permutation(schema.len());
		let layout = LayoutPlanner::new().max_alignment(max_alignment).plan(&schema, Some(&permutation)).unwrap();

		let mut entries: Vec<_> = layout.columns().iter().map(|c| c.fixed_range()).collect();
		for column in layout.columns() {
			let align = column.storage.region_align();
			assert_eq!(column.offset % align, 0, "{} at {}", column.ty, column.offset);
			if let StorageClass::Fixed {
				align,
				..
			} = column.storage
			{
				assert!(align <= max_alignment);
			}
		}
		assert_eq!(layout.fixed_size % layout.alignment, 0);

		entries.sort_by_key(|r| r.start);
		for pair in entries.windows(2) {
			assert!(pair[0].end <= pair[1].start, "overlapping entries {:?}", pair);
		}
		if let Some(last) = entries.last() {
			assert!(last.end <= layout.fixed_size);
		}
	}
}

#[test]
fn test_null_correctness() {
	let mut generator = Generator::seeded(0x5EED_0005);

	for _ in 0..ITERATIONS {
		let schema = generator.schema(MAX_COLUMNS);
		let layout = plan(&schema, None).unwrap();
		let values = generator.values(&schema, 0.5);
		let row = layout.encode(&values).unwrap();

		for (ordinal, value) in values.iter().enumerate() {
			assert_eq!(row.is_null(ordinal).unwrap(), value.is_null());
			if !value.is_null() {
				continue;
			}
			// a null column is answered from the bitmap alone
			let mut scribbled = row.as_bytes().to_vec();
			scribbled[layout.columns[ordinal].fixed_range()].fill(0xFF);
			assert_eq!(layout.view(&scribbled).unwrap().get(ordinal).unwrap(), Value::Null);
		}

		let again = layout.encode(&row.unpack().unwrap()).unwrap();
		assert_eq!(again.bitmap(), row.bitmap());
		for ordinal in 0..schema.len() {
			assert_eq!(again.is_null(ordinal).unwrap(), row.is_null(ordinal).unwrap());
		}
	}
}

#[test]
fn test_tier_selection() {
	let mut generator = Generator::seeded(0x5EED_0006);
	let schema = rowcodec_core::RowSchema::testing(&[rowcodec_type::Type::Blob]);
	let layout = plan(&schema, None).unwrap();

	for _ in 0..ITERATIONS {
		let len = generator.payload_len();
		let payload = generator.bytes(len);
		let row = layout.encode(&[Value::blob(payload.clone())]).unwrap();

		let tier = Tier::from_tag(row.fixed()[4]).unwrap();
		assert_eq!(tier, Tier::for_len(len));
		assert!(len as u64 <= tier.max_len());
		if tier != Tier::Tiny {
			let smaller = Tier::from_tag(tier.tag() - 1).unwrap();
			assert!(len as u64 > smaller.max_len());
		}
		assert_eq!(row.get(0).unwrap(), Value::blob(payload));
	}
}

#[test]
fn test_permutation_transparency() {
	let mut generator = Generator::seeded(0x5EED_0007);

	for _ in 0..ITERATIONS {
		let schema = generator.schema(MAX_COLUMNS);
		let values = generator.values(&schema, 0.3);
		let a = plan(&schema, Some(&generator.permutation(schema.len()))).unwrap();
		let b = plan(&schema, Some(&generator.permutation(schema.len()))).unwrap();

		let ra = a.encode(&values).unwrap();
		let rb = b.encode(&values).unwrap();

		let ia: Vec<_> = ra.iter().map(Result::unwrap).collect();
		let ib: Vec<_> = rb.iter().map(Result::unwrap).collect();
		assert_eq!(ia, ib);
		assert_eq!(ra, rb);
		assert_eq!(ra.reencode(&b).unwrap().as_bytes(), rb.as_bytes());
	}
}
