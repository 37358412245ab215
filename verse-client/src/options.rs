// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use verse_base::identifiers::{ProfileId, PublicationId};
use verse_ethereum::hub::SOCIAL_HUB_ADDRESS;

/// The default indexer GraphQL endpoint.
pub const DEFAULT_INDEXER_URL: &str = "https://api.lens.dev";

/// The default wallet-capable Ethereum JSON-RPC endpoint.
pub const DEFAULT_ETHEREUM_URL: &str = "http://localhost:8545";

#[derive(Clone, Debug, Parser)]
#[command(name = "verse", about = "A client for the Verse social graph")]
pub struct ClientOptions {
    /// The URL of the social-graph indexer's GraphQL endpoint.
    #[arg(long, default_value = DEFAULT_INDEXER_URL)]
    pub indexer: String,

    /// The URL of the wallet-capable Ethereum JSON-RPC endpoint.
    #[arg(long, default_value = DEFAULT_ETHEREUM_URL)]
    pub ethereum: String,

    /// The address of the social-hub contract.
    #[arg(long, default_value_t = SOCIAL_HUB_ADDRESS.to_string())]
    pub hub_address: String,

    /// The auxiliary `bytes` datum paired with each followed profile, as
    /// hex. Forwarded to the hub as is.
    #[arg(long, default_value = "0x00")]
    pub follow_call_data: String,

    #[command(subcommand)]
    pub command: ClientCommand,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum ClientCommand {
    /// Print the recommended profiles.
    Suggestions,

    /// Print the publication feed.
    Feed,

    /// Connect the wallet and follow a profile on chain.
    Follow {
        /// The publication whose author to follow.
        #[arg(long, conflicts_with = "profile")]
        publication: Option<PublicationId>,

        /// The profile to follow directly.
        #[arg(long)]
        profile: Option<ProfileId>,
    },
}
