// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{primitives::U256, rpc::json_rpc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use verse_base::identifiers::ProfileId;

#[derive(Debug, Error)]
pub enum EthereumWalletError {
    /// The wallet holder declined the authorization request.
    #[error("the wallet rejected the authorization request")]
    AuthorizationRejected,

    /// The wallet exposes no authorized account.
    #[error("the wallet exposes no authorized account")]
    NoAuthorizedAccount,

    /// The profile id is neither a hex quantity nor a decimal number.
    #[error("invalid profile id `{0}`")]
    InvalidProfileId(String),

    /// Hex parsing error
    #[error(transparent)]
    FromHexError(#[from] alloy::primitives::hex::FromHexError),

    /// RPC error
    #[error(transparent)]
    RpcError(#[from] json_rpc::RpcError<alloy::transports::TransportErrorKind>),

    /// The submitted transaction never became a receipt.
    #[error(transparent)]
    PendingTransactionError(#[from] alloy::providers::PendingTransactionError),

    /// URL parsing error
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
}

/// The on-chain confirmation of a submitted transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionConfirmation {
    pub transaction_hash: String,
    pub block_number: Option<u64>,
    pub succeeded: bool,
}

/// Converts a profile id into the `uint256` the hub contract expects.
///
/// Indexed ids are hex quantities (`0x…`) and parse base-16; bare numbers
/// parse base-10.
pub fn profile_id_to_uint(id: &ProfileId) -> Result<U256, EthereumWalletError> {
    let raw = id.as_str();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(digits) => U256::from_str_radix(digits, 16),
        None => U256::from_str_radix(raw, 10),
    };
    parsed.map_err(|_| EthereumWalletError::InvalidProfileId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_profile_ids_parse_base_16() {
        let id = ProfileId::new("0x21");
        assert_eq!(profile_id_to_uint(&id).unwrap(), U256::from(0x21));
    }

    #[test]
    fn bare_profile_ids_parse_base_10() {
        let id = ProfileId::new("33");
        assert_eq!(profile_id_to_uint(&id).unwrap(), U256::from(33));
    }

    #[test]
    fn malformed_profile_ids_are_rejected() {
        let id = ProfileId::new("0x21-0x05");
        assert!(matches!(
            profile_id_to_uint(&id),
            Err(EthereumWalletError::InvalidProfileId(_))
        ));
    }
}
