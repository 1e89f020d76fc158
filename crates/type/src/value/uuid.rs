// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// A 128-bit UUID of any version.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid(pub ::uuid::Uuid);

impl Uuid {
	pub fn new_v4() -> Self {
		Self(::uuid::Uuid::new_v4())
	}

	pub fn nil() -> Self {
		Self(::uuid::Uuid::nil())
	}

	pub fn from_bytes(bytes: [u8; 16]) -> Self {
		Self(::uuid::Uuid::from_bytes(bytes))
	}

	pub fn as_bytes(&self) -> &[u8; 16] {
		self.0.as_bytes()
	}
}

impl Deref for Uuid {
	type Target = ::uuid::Uuid;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<::uuid::Uuid> for Uuid {
	fn from(value: ::uuid::Uuid) -> Self {
		Self(value)
	}
}

impl Display for Uuid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
