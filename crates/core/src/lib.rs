// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod encoded;
pub mod error;

pub use encoded::{
	classify::{StorageClass, classify, classify_type},
	encode::encode,
	layout::{ColumnLayout, Layout, LayoutFingerprint},
	permutation::Permutation,
	planner::{LayoutPlanner, PlannerConfig, plan},
	row::Row,
	schema::{ColumnDef, RowSchema, fingerprint::SchemaFingerprint},
	tier::Tier,
	view::{RowIter, RowView},
};
pub use error::{CorruptReason, Error, MismatchReason, PermutationReason, Result};
