// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::util::cowvec::CowVec;

mod hex;

/// A binary large object: an owned, cheaply cloneable byte string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Blob(CowVec<u8>);

impl Blob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(CowVec::new(bytes))
	}

	pub fn from_slice(bytes: &[u8]) -> Self {
		Self(CowVec::new(bytes.to_vec()))
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.0.as_slice()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.0.into_vec()
	}
}

impl Deref for Blob {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		self.as_bytes()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self::new(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self::from_slice(bytes)
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex())
	}
}
