// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row schemas: the ordered list of column kinds and nullability that
//! layouts are planned from and rows are validated against.

pub mod fingerprint;

use std::{fmt::Debug, ops::Deref, sync::Arc};

use rowcodec_type::Type;
use serde::{Deserialize, Serialize};

use self::fingerprint::{SchemaFingerprint, compute_fingerprint};

/// A single column: its kind, whether it accepts null, and an optional
/// name used only for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: Option<String>,
	pub ty: Type,
	pub nullable: bool,
}

impl ColumnDef {
	pub fn nullable(ty: Type) -> Self {
		Self {
			name: None,
			ty,
			nullable: true,
		}
	}

	pub fn not_null(ty: Type) -> Self {
		Self {
			name: None,
			ty,
			nullable: false,
		}
	}

	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// An immutable, cheaply cloneable row schema.
#[derive(Clone)]
pub struct RowSchema(Arc<Inner>);

#[derive(Debug, PartialEq, Eq)]
pub struct Inner {
	pub fingerprint: SchemaFingerprint,
	/// Columns in logical (ordinal) order
	pub columns: Vec<ColumnDef>,
}

impl Deref for RowSchema {
	type Target = Inner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Debug for RowSchema {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl PartialEq for RowSchema {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.0.as_ref() == other.0.as_ref()
	}
}

impl Eq for RowSchema {}

impl RowSchema {
	pub fn new(columns: Vec<ColumnDef>) -> Self {
		let fingerprint = compute_fingerprint(&columns);
		Self(Arc::new(Inner {
			fingerprint,
			columns,
		}))
	}

	/// All columns nullable and unnamed.
	pub fn testing(types: &[Type]) -> Self {
		Self::new(types.iter().copied().map(ColumnDef::nullable).collect())
	}

	pub fn fingerprint(&self) -> SchemaFingerprint {
		self.fingerprint
	}

	pub fn columns(&self) -> &[ColumnDef] {
		&self.columns
	}

	pub fn column(&self, ordinal: usize) -> Option<&ColumnDef> {
		self.columns.get(ordinal)
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn find_column(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c.name.as_deref() == Some(name))
	}

	pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
		self.columns.iter().map(|c| c.ty)
	}

	pub fn nullable_count(&self) -> usize {
		self.columns.iter().filter(|c| c.nullable).count()
	}
}
