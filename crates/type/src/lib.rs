// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod util;
pub mod value;

pub use error::TypeError;
pub use util::cowvec::CowVec;
pub use value::{
	FromValue, MAX_NESTING_DEPTH, NestedSeed, Value,
	blob::Blob,
	date::Date,
	datetime::DateTime,
	decimal::Decimal,
	interval::Interval,
	ordered_f32::OrderedF32,
	ordered_f64::OrderedF64,
	time::Time,
	r#type::{GetType, Type},
	uuid::Uuid,
};
