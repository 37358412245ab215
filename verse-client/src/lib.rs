// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The session layer of the Verse social client: the state the view
//! renders, the gateways it reads from and the actions it dispatches.

pub mod avatar;
pub mod error;
pub mod indexer;
pub mod options;
pub mod session;
