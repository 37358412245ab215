// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module provides functionalities for accessing an Ethereum wallet
//! provider and the social-hub contract.

pub mod client;
pub mod common;
pub mod hub;
pub mod provider;

/// Helper types for tests.
pub mod test_utils;
