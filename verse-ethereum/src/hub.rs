// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{
    primitives::{address, Address, Bytes},
    rpc::types::eth::request::{TransactionInput, TransactionRequest},
    sol,
    sol_types::SolCall,
};

use verse_base::identifiers::ProfileId;

use crate::{
    client::WalletProvider,
    common::{profile_id_to_uint, EthereumWalletError, TransactionConfirmation},
};

sol! {
    /// The follow entry point of the social-hub contract.
    function follow(uint256[] profileIds, bytes[] datas);
}

/// The social-hub deployment the client follows through.
pub const SOCIAL_HUB_ADDRESS: Address = address!("Db46d1Dc155634FbC732f92E853b10B288AD5a1d");

/// The auxiliary datum submitted alongside each followed profile. The
/// deployed hub accepts a single zero byte; its on-chain meaning is left
/// undefined here and the value is configurable.
pub const DEFAULT_FOLLOW_CALL_DATA: [u8; 1] = [0x00];

/// Configuration of the hub binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialHubConfig {
    /// The address of the deployed hub contract.
    pub address: Address,
    /// The `bytes` entry paired with each followed profile id.
    pub follow_call_data: Bytes,
}

impl Default for SocialHubConfig {
    fn default() -> Self {
        Self {
            address: SOCIAL_HUB_ADDRESS,
            follow_call_data: Bytes::from_static(&DEFAULT_FOLLOW_CALL_DATA),
        }
    }
}

impl SocialHubConfig {
    /// Parses a configuration from the textual forms used on the command
    /// line: a hex contract address and hex calldata.
    pub fn parse(address: &str, follow_call_data: &str) -> Result<Self, EthereumWalletError> {
        Ok(Self {
            address: address.parse()?,
            follow_call_data: follow_call_data.parse()?,
        })
    }
}

/// The social-hub contract bound to a wallet provider.
pub struct SocialHub<P> {
    provider: P,
    config: SocialHubConfig,
}

impl<P> SocialHub<P>
where
    P: WalletProvider,
{
    pub fn new(provider: P, config: SocialHubConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &SocialHubConfig {
        &self.config
    }

    /// Submits one follow transaction from `from` covering all of
    /// `profiles` and waits for its confirmation. The relationship is
    /// irreversible once mined.
    pub async fn follow(
        &self,
        from: &str,
        profiles: &[ProfileId],
    ) -> Result<TransactionConfirmation, EthereumWalletError> {
        let tx = self.follow_request(from, profiles)?;
        self.provider.sign_and_send(tx).await
    }

    /// Builds the unsigned follow transaction for `profiles`, pairing each
    /// id with the configured auxiliary datum.
    pub fn follow_request(
        &self,
        from: &str,
        profiles: &[ProfileId],
    ) -> Result<TransactionRequest, EthereumWalletError> {
        let profile_ids = profiles
            .iter()
            .map(profile_id_to_uint)
            .collect::<Result<Vec<_>, _>>()?;
        let datas = vec![self.config.follow_call_data.clone(); profile_ids.len()];
        let call = followCall {
            profileIds: profile_ids,
            datas,
        };
        let from = from.parse::<Address>()?;
        let input = TransactionInput::new(call.abi_encode().into());
        Ok(TransactionRequest::default()
            .from(from)
            .to(self.config.address)
            .input(input))
    }
}
