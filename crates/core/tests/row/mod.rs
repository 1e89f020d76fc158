// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod corruption;
mod properties;
mod scenarios;
mod temporal_edge_cases;
mod tiers;
