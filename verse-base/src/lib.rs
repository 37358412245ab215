// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Base types shared by the Verse client crates.

pub mod data_types;
pub mod identifiers;
pub mod tracing;
