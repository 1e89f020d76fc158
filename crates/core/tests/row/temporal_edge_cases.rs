// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Temporal edge cases for the row format

use rowcodec_core::{Layout, RowSchema, plan};
use rowcodec_type::{Date, DateTime, Interval, Time, Type, Value};

fn layout(ty: Type) -> Layout {
	plan(&RowSchema::testing(&[ty]), None).unwrap()
}

fn roundtrip(layout: &Layout, value: Value) {
	let row = layout.encode(&[value.clone()]).unwrap();
	assert_eq!(row.get(0).unwrap(), value);
}

#[test]
fn test_date_boundaries() {
	let layout = layout(Type::Date);

	let dates = [
		Date::new(1, 1, 1).unwrap(),      // Minimum reasonable date
		Date::new(1970, 1, 1).unwrap(),   // Unix epoch
		Date::new(2000, 2, 29).unwrap(),  // Leap year
		Date::new(2100, 2, 28).unwrap(),  // Non-leap century
		Date::new(9999, 12, 31).unwrap(), // Far future
		Date::from_days_since_epoch(i32::MIN),
		Date::from_days_since_epoch(i32::MAX),
	];

	for date in dates {
		roundtrip(&layout, Value::Date(date));
	}
}

#[test]
fn test_datetime_precision_limits() {
	let layout = layout(Type::DateTime);

	let dt = DateTime::new(Date::new(2024, 12, 25).unwrap(), Time::new(12, 34, 56, 123_456_789).unwrap());
	let row = layout.encode(&[Value::DateTime(dt)]).unwrap();
	let Value::DateTime(retrieved) = row.get(0).unwrap() else {
		panic!("expected a datetime");
	};
	assert_eq!(retrieved.to_parts(), dt.to_parts());

	roundtrip(&layout, Value::DateTime(DateTime::from_parts(i64::MIN, 999_999_999).unwrap()));
	roundtrip(&layout, Value::DateTime(DateTime::from_parts(i64::MAX, 0).unwrap()));
	roundtrip(&layout, Value::DateTime(DateTime::from_parts(-1, 1).unwrap()));
}

#[test]
fn test_time_edge_values() {
	let layout = layout(Type::Time);

	let times = [
		Time::new(0, 0, 0, 0).unwrap(),             // Midnight
		Time::new(12, 0, 0, 0).unwrap(),            // Noon
		Time::new(23, 59, 59, 999_999_999).unwrap(), // Last nanosecond of day
		Time::new(0, 0, 0, 1).unwrap(),
	];

	for time in times {
		roundtrip(&layout, Value::Time(time));
	}
}

#[test]
fn test_interval_combinations() {
	let layout = layout(Type::Interval);

	let intervals = [
		Interval::from_seconds(0),
		Interval::from_seconds(-1),
		Interval::from_days(365),
		Interval::new(12, 30, 123_456_789),
		Interval::new(-12, -30, -123_456_789),
		Interval::new(i32::MAX, i32::MAX, i64::MAX),
		Interval::new(i32::MIN, i32::MIN, i64::MIN),
	];

	for interval in intervals {
		roundtrip(&layout, Value::Interval(interval));
	}
}

#[test]
fn test_temporal_columns_share_a_row() {
	let schema = RowSchema::testing(&[Type::Date, Type::Time, Type::DateTime, Type::Interval, Type::Boolean]);
	let layout = plan(&schema, None).unwrap();
	let values = vec![
		Value::Date(Date::new(2024, 2, 29).unwrap()),
		Value::Null,
		Value::DateTime(DateTime::from_parts(1_700_000_000, 5).unwrap()),
		Value::Interval(Interval::new(1, 2, 3)),
		Value::Boolean(true),
	];
	let row = layout.encode(&values).unwrap();
	assert_eq!(row.unpack().unwrap(), values);
	for column in layout.columns() {
		if let rowcodec_core::StorageClass::Fixed {
			align,
			..
		} = column.storage
		{
			assert_eq!(column.offset % align, 0);
		}
	}
}
