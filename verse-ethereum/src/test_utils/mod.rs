// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use alloy::rpc::types::eth::request::TransactionRequest;
use async_lock::Mutex;
use async_trait::async_trait;

use crate::{
    client::WalletProvider,
    common::{EthereumWalletError, TransactionConfirmation},
};

/// A wallet double that authorizes a fixed account and records every
/// submitted transaction instead of reaching a node. Clones share the
/// recorded history.
#[derive(Clone)]
pub struct RecordingWallet {
    inner: Arc<Inner>,
}

struct Inner {
    account: Option<String>,
    authorization_calls: Mutex<usize>,
    sent: Mutex<Vec<TransactionRequest>>,
}

impl RecordingWallet {
    /// A wallet whose holder authorizes `account` on request.
    pub fn new(account: impl Into<String>) -> Self {
        Self::with_account(Some(account.into()))
    }

    /// A wallet whose holder rejects every authorization request.
    pub fn rejecting() -> Self {
        Self::with_account(None)
    }

    fn with_account(account: Option<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                account,
                authorization_calls: Mutex::new(0),
                sent: Mutex::new(Vec::new()),
            }),
        }
    }

    /// How many times the wallet was asked for authorization.
    pub async fn authorization_calls(&self) -> usize {
        *self.inner.authorization_calls.lock().await
    }

    /// The transactions submitted so far, in submission order.
    pub async fn sent(&self) -> Vec<TransactionRequest> {
        self.inner.sent.lock().await.clone()
    }
}

#[async_trait]
impl WalletProvider for RecordingWallet {
    async fn request_account(&self) -> Result<String, EthereumWalletError> {
        *self.inner.authorization_calls.lock().await += 1;
        self.inner
            .account
            .clone()
            .ok_or(EthereumWalletError::AuthorizationRejected)
    }

    async fn sign_and_send(
        &self,
        tx: TransactionRequest,
    ) -> Result<TransactionConfirmation, EthereumWalletError> {
        let mut sent = self.inner.sent.lock().await;
        sent.push(tx);
        Ok(TransactionConfirmation {
            transaction_hash: format!("0x{:064x}", sent.len()),
            block_number: Some(sent.len() as u64),
            succeeded: true,
        })
    }
}
