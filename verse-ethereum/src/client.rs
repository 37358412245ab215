// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::rpc::types::eth::request::TransactionRequest;
use async_trait::async_trait;

use crate::common::{EthereumWalletError, TransactionConfirmation};

/// The capabilities of a wallet-managed Ethereum account. The wallet holds
/// the key: callers hand over unsigned transactions and never see it.
#[async_trait]
pub trait WalletProvider {
    /// Asks the wallet for an authorized account and returns its address.
    ///
    /// Suspends until the wallet answers; there is no timeout and no
    /// cancellation path.
    async fn request_account(&self) -> Result<String, EthereumWalletError>;

    /// Signs the transaction with the wallet-managed account, submits it
    /// and waits for it to be included in a block.
    async fn sign_and_send(
        &self,
        tx: TransactionRequest,
    ) -> Result<TransactionConfirmation, EthereumWalletError>;
}
