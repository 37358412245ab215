// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use verse_base::identifiers::ProfileId;
use verse_ethereum::{
    hub::{SocialHub, SocialHubConfig, DEFAULT_FOLLOW_CALL_DATA, SOCIAL_HUB_ADDRESS},
    test_utils::RecordingWallet,
};

const ACCOUNT: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

#[tokio::test]
async fn follow_submits_one_transaction() -> anyhow::Result<()> {
    let wallet = RecordingWallet::new(ACCOUNT);
    let hub = SocialHub::new(wallet.clone(), SocialHubConfig::default());

    let confirmation = hub.follow(ACCOUNT, &[ProfileId::new("0x21")]).await?;
    assert!(confirmation.succeeded);
    assert!(confirmation.block_number.is_some());

    let sent = wallet.sent().await;
    assert_eq!(sent.len(), 1);
    Ok(())
}

#[tokio::test]
async fn default_config_targets_the_deployed_hub() -> anyhow::Result<()> {
    let config = SocialHubConfig::default();
    assert_eq!(config.address, SOCIAL_HUB_ADDRESS);
    assert_eq!(&config.follow_call_data[..], &DEFAULT_FOLLOW_CALL_DATA);

    let parsed = SocialHubConfig::parse(&SOCIAL_HUB_ADDRESS.to_string(), "0x00")?;
    assert_eq!(parsed, config);
    Ok(())
}
