// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;
use verse_base::identifiers::PublicationId;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("indexer request failed: {0}")]
    Indexer(#[from] verse_indexer_graphql_client::RequestError),

    #[error("wallet error: {0}")]
    Wallet(#[from] verse_ethereum::common::EthereumWalletError),

    /// A follow was dispatched before any wallet account was connected.
    #[error("no wallet account connected")]
    NotConnected,

    /// The publication is not part of the loaded feed.
    #[error("unknown publication: {0}")]
    UnknownPublication(PublicationId),

    /// The publication carries no authoring profile to follow.
    #[error("publication {0} has no author")]
    MissingAuthor(PublicationId),
}
