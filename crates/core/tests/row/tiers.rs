// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowcodec_core::{RowSchema, Tier, classify_type, plan};
use rowcodec_type::{Type, Value};
use rstest::rstest;

#[rstest]
#[case(0, Tier::Tiny)]
#[case(1, Tier::Tiny)]
#[case(255, Tier::Tiny)]
#[case(256, Tier::Short)]
#[case(65_535, Tier::Short)]
#[case(65_536, Tier::Long)]
#[case(100_000, Tier::Long)]
fn test_blob_tier(#[case] len: usize, #[case] expected: Tier) {
	let layout = plan(&RowSchema::testing(&[Type::Boolean, Type::Blob]), None).unwrap();
	let payload = vec![0xABu8; len];
	let row = layout.encode(&[Value::Boolean(false), Value::blob(payload.clone())]).unwrap();

	let slot = layout.columns[1].fixed_range();
	assert_eq!(Tier::from_tag(row.as_bytes()[slot.end - 1]), Some(expected));
	assert_eq!(row.get(1).unwrap(), Value::blob(payload));
}

#[rstest]
#[case(Type::Boolean, 1)]
#[case(Type::Int2, 2)]
#[case(Type::Float4, 4)]
#[case(Type::Time, 8)]
#[case(Type::DateTime, 4)]
#[case(Type::Uuid, 16)]
#[case(Type::Decimal { scale: 4 }, 16)]
#[case(Type::Utf8, 4)]
fn test_region_alignment(#[case] ty: Type, #[case] align: usize) {
	assert_eq!(classify_type(ty, 16).region_align(), align);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
#[case(8)]
fn test_prefix_alignment_capped(#[case] max_alignment: usize) {
	let schema = RowSchema::testing(&[Type::Blob, Type::Blob]);
	let layout = rowcodec_core::LayoutPlanner::new().max_alignment(max_alignment).plan(&schema, None).unwrap();
	let row = layout.encode(&[Value::blob(vec![1u8]), Value::blob(vec![2u8; 70_000])]).unwrap();

	let slot = &row.as_bytes()[layout.columns[1].fixed_range()];
	let offset = u32::from_ne_bytes(slot[..4].try_into().unwrap()) as usize;
	assert_eq!(offset % Tier::Long.prefix_width().min(max_alignment), 0);
	assert_eq!(row.get(1).unwrap(), Value::blob(vec![2u8; 70_000]));
}
