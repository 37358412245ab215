// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The `verse` command-line client.

use anyhow::{bail, Context as _, Result};
use clap::Parser as _;
use verse_client::{
    avatar,
    indexer::{IndexerService, SocialIndexer as _},
    options::{ClientCommand, ClientOptions},
    session::Session,
};
use verse_ethereum::{
    hub::{SocialHub, SocialHubConfig},
    provider::EthereumWalletClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    verse_base::tracing::init();
    let options = ClientOptions::parse();

    let indexer = IndexerService::new(&options.indexer);
    match &options.command {
        ClientCommand::Suggestions => {
            let profiles = indexer
                .recommended_profiles()
                .await
                .context("failed to query the recommended profiles")?;
            for profile in &profiles {
                println!(
                    "{}\t{}\t{}",
                    profile.handle,
                    profile.name.as_deref().unwrap_or("-"),
                    avatar::resolve_avatar(Some(profile)),
                );
            }
        }
        ClientCommand::Feed => {
            let posts = indexer
                .explore_publications()
                .await
                .context("failed to query the publication feed")?;
            for post in &posts {
                let author = post.profile.as_ref();
                println!(
                    "{}\t{}\t{}",
                    post.id,
                    author.map_or("-", |profile| profile.handle.as_str()),
                    avatar::resolve_avatar(author),
                );
                if let Some(content) = post
                    .metadata
                    .as_ref()
                    .and_then(|metadata| metadata.content.as_deref())
                {
                    println!("  {content}");
                }
            }
        }
        ClientCommand::Follow {
            publication,
            profile,
        } => {
            let config = SocialHubConfig::parse(&options.hub_address, &options.follow_call_data)
                .context("invalid hub configuration")?;
            let wallet = EthereumWalletClient::new(&options.ethereum)
                .context("failed to reach the Ethereum provider")?;
            let mut session = Session::new(indexer, SocialHub::new(wallet, config));

            let account = session
                .connect_wallet()
                .await
                .context("wallet authorization failed")?;
            tracing::info!(%account, "wallet connected");

            let confirmation = match (publication, profile) {
                (Some(publication), _) => {
                    session
                        .load_feed()
                        .await
                        .context("failed to load the feed")?;
                    session.follow_publication(publication).await?
                }
                (None, Some(profile)) => session.follow_profile(profile).await?,
                (None, None) => bail!("pass either --publication or --profile"),
            };

            match confirmation.block_number {
                Some(block) => println!(
                    "follow transaction {} mined in block {block}",
                    confirmation.transaction_hash
                ),
                None => println!(
                    "follow transaction {} submitted",
                    confirmation.transaction_hash
                ),
            }
            if !confirmation.succeeded {
                bail!("the follow transaction reverted");
            }
        }
    }
    Ok(())
}
