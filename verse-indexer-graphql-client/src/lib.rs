// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A GraphQL client for the social-graph indexer.

mod indexer;
pub mod utils;

pub use indexer::*;
pub use utils::*;
