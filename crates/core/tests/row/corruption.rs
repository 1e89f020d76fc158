// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Malformed buffers are reported as errors, never as panics.

use rand::Rng;
use rowcodec_core::{CorruptReason, Error, Layout, Row, RowSchema, Tier, plan};
use rowcodec_testing::{Generator, init_tracing};
use rowcodec_type::{MAX_NESTING_DEPTH, Type, Value};

#[test]
fn test_random_damage_never_panics() {
	init_tracing();
	let mut generator = Generator::seeded(0xBAD_5EED);

	for _ in 0..200 {
		let schema = generator.schema(12);
		let layout = plan(&schema, None).unwrap();
		let mut bytes = layout.encode(&generator.values(&schema, 0.3)).unwrap().into_bytes();

		if bytes.is_empty() {
			assert!(Row::from_bytes(&layout, bytes).is_ok());
			continue;
		}

		let flips = generator.rng().random_range(1..=4);
		for _ in 0..flips {
			let at = generator.rng().random_range(0..bytes.len());
			bytes[at] ^= generator.rng().random::<u8>() | 1;
		}
		if generator.rng().random_bool(0.3) {
			let len = generator.rng().random_range(0..bytes.len());
			bytes.truncate(len);
		}

		match Row::from_bytes(&layout, bytes.clone()) {
			Ok(row) => {
				// whatever survived validation decodes cleanly
				assert!(row.unpack().is_ok());
			}
			Err(err) => assert!(err.is_corrupt(), "{err}"),
		}

		if let Ok(view) = layout.view(&bytes) {
			for item in view.iter() {
				let _ = item;
			}
		}
	}
}

#[test]
fn test_truncated_fixed_region() {
	let layout = plan(&RowSchema::testing(&[Type::Int8, Type::Int8]), None).unwrap();
	let bytes = layout.encode(&[Value::Int8(1), Value::Int8(2)]).unwrap().into_bytes();
	assert_eq!(
		Row::from_bytes(&layout, bytes[..10].to_vec()).unwrap_err(),
		Error::CorruptRow {
			reason: CorruptReason::Truncated {
				expected: 17,
				actual: 10
			}
		}
	);
}

#[test]
fn test_undecodable_nested() {
	let layout = plan(&RowSchema::testing(&[Type::List]), None).unwrap();
	let row = layout.encode(&[Value::list([Value::Int4(1), Value::Int4(2)])]).unwrap();
	let mut bytes = row.into_bytes();

	// claim far more elements than the payload holds
	let first = layout.variable_start() + 1;
	bytes[first] = 0x7F;

	assert!(matches!(
		Row::from_bytes(&layout, bytes),
		Err(Error::CorruptRow {
			reason: CorruptReason::Nested { .. }
		})
	));
}

/// A one-column `List` row whose payload is `payload`, behind a Long prefix.
fn list_row(payload: &[u8]) -> (Layout, Vec<u8>) {
	let layout = plan(&RowSchema::testing(&[Type::List]), None).unwrap();
	let mut bytes = layout.encode(&[Value::list([])]).unwrap().into_bytes();
	bytes.truncate(layout.variable_start());

	let slot = layout.column(0).unwrap().fixed_range();
	bytes[slot.start..slot.start + 4].copy_from_slice(&0u32.to_ne_bytes());
	bytes[slot.start + 4] = Tier::Long.tag();
	bytes.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
	bytes.extend_from_slice(payload);
	(layout, bytes)
}

fn assert_nested_corrupt(layout: &Layout, bytes: Vec<u8>) {
	assert!(matches!(
		layout.view(&bytes).unwrap().get(0),
		Err(Error::CorruptRow {
			reason: CorruptReason::Nested {
				ordinal: 0,
				..
			}
		})
	));
	assert!(matches!(
		Row::from_bytes(layout, bytes),
		Err(Error::CorruptRow {
			reason: CorruptReason::Nested {
				ordinal: 0,
				..
			}
		})
	));
}

#[test]
fn test_crafted_payload_decodes() {
	let (layout, bytes) = list_row(&postcard::to_stdvec(&vec![Value::Int4(5), Value::utf8("x")]).unwrap());
	let row = Row::from_bytes(&layout, bytes).unwrap();
	assert_eq!(row.get(0).unwrap(), Value::list([Value::Int4(5), Value::utf8("x")]));
}

#[test]
fn test_deeply_nested_payload() {
	// one element holding a List, over and over
	let mut payload = Vec::new();
	for _ in 0..200_000 {
		payload.extend_from_slice(&[1, 22]);
	}
	payload.push(0);
	let (layout, bytes) = list_row(&payload);
	assert_nested_corrupt(&layout, bytes);
}

#[test]
fn test_nesting_at_limit() {
	let mut value = Value::Int4(1);
	for _ in 0..MAX_NESTING_DEPTH {
		value = Value::list([value]);
	}
	let layout = plan(&RowSchema::testing(&[Type::List]), None).unwrap();
	let row = layout.encode(&[value.clone()]).unwrap();
	let adopted = Row::from_bytes(&layout, row.into_bytes()).unwrap();
	assert_eq!(adopted.get(0).unwrap(), value);
}

#[test]
fn test_nested_nan() {
	let mut payload = vec![1, 12];
	payload.extend_from_slice(&f32::NAN.to_le_bytes());
	let (layout, bytes) = list_row(&payload);
	assert_nested_corrupt(&layout, bytes);
}

#[test]
fn test_nested_time_past_midnight() {
	let payload = [1, 16, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
	let (layout, bytes) = list_row(&payload);
	assert_nested_corrupt(&layout, bytes);
}

#[test]
fn test_nested_decimal_scale() {
	// mantissa 1 (zigzag varint), scale 39
	let payload = [1, 14, 2, 39];
	let (layout, bytes) = list_row(&payload);
	assert_nested_corrupt(&layout, bytes);
}

#[test]
fn test_nested_datetime_nanos() {
	let mut payload = vec![1, 17, 0];
	payload.extend_from_slice(&[0x80, 0x94, 0xEB, 0xDC, 0x03]);
	let (layout, bytes) = list_row(&payload);
	assert_nested_corrupt(&layout, bytes);
}

#[test]
fn test_out_of_range_ordinal() {
	let layout = plan(&RowSchema::testing(&[Type::Int4]), None).unwrap();
	let row = layout.encode(&[Value::Int4(1)]).unwrap();
	assert_eq!(
		row.get(1).unwrap_err(),
		Error::OutOfRange {
			ordinal: 1,
			columns: 1
		}
	);
	assert_eq!(
		layout.get(&row, usize::MAX).unwrap_err(),
		Error::OutOfRange {
			ordinal: usize::MAX,
			columns: 1
		}
	);
}
