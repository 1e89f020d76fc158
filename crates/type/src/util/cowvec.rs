// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Debug, Formatter},
	ops::Deref,
	sync::Arc,
};

use serde::{Deserialize, Serialize};

/// A shared, copy-on-write vector.
///
/// Clones share one allocation; taking ownership of the contents copies them
/// only while another handle is alive.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CowVec<T: Clone>(Arc<Vec<T>>);

impl<T: Clone> CowVec<T> {
	pub fn new(vec: Vec<T>) -> Self {
		Self(Arc::new(vec))
	}

	pub fn as_slice(&self) -> &[T] {
		self.0.as_slice()
	}

	/// The owned vector, copied only if another handle still shares it.
	pub fn into_vec(self) -> Vec<T> {
		Arc::try_unwrap(self.0).unwrap_or_else(|shared| shared.as_ref().clone())
	}
}

impl<T: Clone> Default for CowVec<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T: Clone> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.0.as_slice()
	}
}

impl<T: Clone> From<Vec<T>> for CowVec<T> {
	fn from(vec: Vec<T>) -> Self {
		Self::new(vec)
	}
}

impl<T: Clone + Debug> Debug for CowVec<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Debug::fmt(self.0.as_slice(), f)
	}
}
