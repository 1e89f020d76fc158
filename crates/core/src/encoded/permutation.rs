// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Error, PermutationReason, Result};

/// A requested physical column order: `order[p]` is the ordinal placed at
/// position `p` before the planner groups columns by alignment.
///
/// Always a bijection over `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation(Vec<usize>);

impl Permutation {
	pub fn new(order: Vec<usize>) -> Result<Self> {
		let columns = order.len();
		let mut seen = vec![false; columns];
		for (position, &ordinal) in order.iter().enumerate() {
			let Some(slot) = seen.get_mut(ordinal) else {
				return Err(Error::InvalidPermutation {
					reason: PermutationReason::OutOfRange {
						position,
						ordinal,
						columns,
					},
				});
			};
			if *slot {
				return Err(Error::InvalidPermutation {
					reason: PermutationReason::Duplicate {
						ordinal,
					},
				});
			}
			*slot = true;
		}
		Ok(Self(order))
	}

	pub fn identity(columns: usize) -> Self {
		Self((0..columns).collect())
	}

	/// `keys` first, in the given order, then every other column in
	/// ordinal order. Groups the columns a consumer reads together.
	pub fn keys_first(keys: &[usize], columns: usize) -> Result<Self> {
		if let Some((position, &ordinal)) = keys.iter().enumerate().find(|(_, ordinal)| **ordinal >= columns) {
			return Err(Error::InvalidPermutation {
				reason: PermutationReason::OutOfRange {
					position,
					ordinal,
					columns,
				},
			});
		}
		let mut order = keys.to_vec();
		order.extend((0..columns).filter(|ordinal| !keys.contains(ordinal)));
		Self::new(order)
	}

	/// The inverse mapping: `inverse()[ordinal]` is that column's position.
	pub fn inverse(&self) -> Vec<usize> {
		let mut inverse = vec![0; self.0.len()];
		for (position, &ordinal) in self.0.iter().enumerate() {
			inverse[ordinal] = position;
		}
		inverse
	}

	pub fn is_identity(&self) -> bool {
		self.0.iter().enumerate().all(|(position, &ordinal)| position == ordinal)
	}

	pub fn as_slice(&self) -> &[usize] {
		&self.0
	}

	pub fn into_vec(self) -> Vec<usize> {
		self.0
	}
}

impl Deref for Permutation {
	type Target = [usize];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl TryFrom<Vec<usize>> for Permutation {
	type Error = Error;

	fn try_from(order: Vec<usize>) -> Result<Self> {
		Self::new(order)
	}
}

impl From<Permutation> for Vec<usize> {
	fn from(permutation: Permutation) -> Self {
		permutation.0
	}
}
