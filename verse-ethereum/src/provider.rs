// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::eth::request::TransactionRequest,
    transports::http::{reqwest::Client, Http},
};
use async_trait::async_trait;
use url::Url;

use crate::{
    client::WalletProvider,
    common::{EthereumWalletError, TransactionConfirmation},
};

pub type HttpProvider = RootProvider<Http<Client>>;

/// A wallet client over a JSON-RPC node that manages its own accounts, such
/// as an injected provider or a development node. Signing happens on the
/// node side: transactions are submitted unsigned.
pub struct EthereumWalletClient<M> {
    pub provider: M,
}

impl EthereumWalletClient<HttpProvider> {
    /// Connects to an Ethereum provider reachable over HTTP and creates an
    /// `EthereumWalletClient` if successful.
    pub fn new(url: &str) -> Result<Self, EthereumWalletError> {
        let rpc_url = Url::parse(url)?;
        let provider = ProviderBuilder::new().on_http(rpc_url);
        Ok(Self { provider })
    }
}

#[async_trait]
impl WalletProvider for EthereumWalletClient<HttpProvider> {
    async fn request_account(&self) -> Result<String, EthereumWalletError> {
        let accounts = self.provider.get_accounts().await?;
        let account = accounts
            .first()
            .ok_or(EthereumWalletError::NoAuthorizedAccount)?;
        Ok(format!("{:?}", account))
    }

    async fn sign_and_send(
        &self,
        tx: TransactionRequest,
    ) -> Result<TransactionConfirmation, EthereumWalletError> {
        let receipt = self
            .provider
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;
        Ok(TransactionConfirmation {
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            block_number: receipt.block_number,
            succeeded: receipt.status(),
        })
    }
}
