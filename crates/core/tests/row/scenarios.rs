// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowcodec_core::{ColumnDef, Permutation, RowSchema, Tier, encode, plan};
use rowcodec_type::{Type, Value};

#[test]
fn test_null_text_between_fixed_columns() {
	let schema = RowSchema::new(vec![
		ColumnDef::not_null(Type::Int4).named("id"),
		ColumnDef::nullable(Type::Utf8).named("name"),
		ColumnDef::not_null(Type::Boolean).named("active"),
	]);
	let layout = plan(&schema, None).unwrap();
	let row = encode(&schema, &layout, &[Value::Int4(42), Value::Null, Value::Boolean(true)]).unwrap();

	// the bool's byte is not consulted for the null column
	let mut bytes = row.as_bytes().to_vec();
	bytes[layout.columns[2].offset] = 0xEE;
	assert_eq!(layout.view(&bytes).unwrap().get(1).unwrap(), Value::Null);

	assert_eq!(row.get(1).unwrap(), Value::Null);
	assert_eq!(row.get(2).unwrap(), Value::Boolean(true));
	assert_eq!(row.get(schema.find_column("id").unwrap()).unwrap(), Value::Int4(42));

	let items: Vec<_> = row.iter().map(Result::unwrap).collect();
	assert_eq!(items, vec![(0, Value::Int4(42)), (1, Value::Null), (2, Value::Boolean(true))]);
}

#[test]
fn test_text_lengths_choose_tiers() {
	let schema = RowSchema::new(vec![ColumnDef::nullable(Type::Utf8)]);
	let layout = plan(&schema, None).unwrap();
	let slot = layout.columns[0].fixed_range();

	let mut seen = Vec::new();
	for (len, expected) in [(3, Tier::Tiny), (300, Tier::Short), (70_000, Tier::Long)] {
		let text = "x".repeat(len);
		let row = layout.encode(&[Value::utf8(text.clone())]).unwrap();

		let tier = Tier::from_tag(row.as_bytes()[slot.end - 1]).unwrap();
		assert_eq!(tier, expected);
		assert_eq!(row.variable().len(), tier.prefix_width() + len);
		assert_eq!(row.get(0).unwrap(), Value::Utf8(text));
		seen.push(tier);
	}
	seen.dedup();
	assert_eq!(seen.len(), 3);
}

#[test]
fn test_key_columns_first() {
	let schema = RowSchema::testing(&[Type::Utf8, Type::Int8, Type::Utf8, Type::Int8]);
	let keys = Permutation::keys_first(&[3, 2], schema.len()).unwrap();
	let layout = plan(&schema, Some(&keys)).unwrap();

	// alignment groups still win over the requested order
	assert_eq!(layout.physical_order(), &[3, 1, 2, 0]);

	let values = vec![Value::utf8("a"), Value::Int8(1), Value::utf8("b"), Value::Int8(2)];
	let row = layout.encode(&values).unwrap();
	assert_eq!(row.unpack().unwrap(), values);
}
