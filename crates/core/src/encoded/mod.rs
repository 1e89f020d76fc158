// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The compact row format.
//!
//! A [`RowSchema`](schema::RowSchema) is classified into storage classes,
//! planned into a [`Layout`](layout::Layout) and used to encode
//! [`Row`](row::Row)s whose columns can be read individually in constant
//! time.

pub mod classify;
pub mod encode;
mod fixed;
pub mod layout;
pub mod permutation;
pub mod planner;
pub mod row;
pub mod schema;
pub mod tier;
pub mod view;
