// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test support for the row format: seeded generators for schemas, values
//! and permutations, and a tracing initializer for test binaries.

pub mod generate;
pub mod logging;

pub use generate::Generator;
pub use logging::init_tracing;
