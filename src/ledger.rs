use async_trait::async_trait;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};
use tokio::time::sleep;

use crate::{constants::CONFIRMATION_POLL_INTERVAL, error::SdkError};

/// Read/submit access to the ledger.
///
/// Every call except the confirmation wait is a single attempt. Timeouts and
/// cancellation belong to the implementation; their errors are propagated
/// unchanged.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Raw account data, or `None` when the account does not exist.
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, SdkError>;

    /// Latest finalized blockhash.
    async fn get_latest_blockhash(&self) -> Result<Hash, SdkError>;

    /// Recent prioritization fees (micro-lamports per CU) observed for `addresses`.
    async fn get_recent_prioritization_fees(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<u64>, SdkError>;

    /// Raw token amount held by a token account.
    async fn get_token_account_balance(&self, address: &Pubkey) -> Result<u64, SdkError>;

    async fn send_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, SdkError>;

    /// Block until `signature` is finalized, or fail. `recent_blockhash` is the
    /// one the transaction was built with; once it expires an unlanded
    /// transaction can no longer be finalized.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        recent_blockhash: &Hash,
    ) -> Result<(), SdkError>;

    /// Send, then wait for confirmation. A failed wait after a successful send
    /// is reported as `SdkError::Unconfirmed` carrying the signature.
    async fn send_and_confirm_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, SdkError> {
        let signature = self.send_transaction(transaction).await?;
        self.confirm_transaction(&signature, transaction.message.recent_blockhash())
            .await
            .map_err(|err| SdkError::Unconfirmed {
                signature,
                reason: err.to_string(),
            })?;
        Ok(signature)
    }
}

/// `LedgerClient` over the nonblocking Solana RPC client.
pub struct RpcLedgerClient {
    rpc_client: RpcClient,
}

impl RpcLedgerClient {
    pub fn new(rpc_endpoint: &str, commitment_level: CommitmentLevel) -> Self {
        let commitment_config = CommitmentConfig {
            commitment: commitment_level,
        };
        Self {
            rpc_client: RpcClient::new_with_commitment(rpc_endpoint.to_string(), commitment_config),
        }
    }

    pub fn from_rpc_client(rpc_client: RpcClient) -> Self {
        Self { rpc_client }
    }

    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, SdkError> {
        let account = self
            .rpc_client
            .get_account_with_commitment(address, CommitmentConfig::processed())
            .await
            .map_err(|e| SdkError::account_lookup(address, e.to_string()))?
            .value;

        Ok(account.map(|account| account.data))
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, SdkError> {
        let (blockhash, _) = self
            .rpc_client
            .get_latest_blockhash_with_commitment(CommitmentConfig::finalized())
            .await?;
        Ok(blockhash)
    }

    async fn get_recent_prioritization_fees(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<u64>, SdkError> {
        let fees = self
            .rpc_client
            .get_recent_prioritization_fees(addresses)
            .await?;
        Ok(fees.into_iter().map(|fee| fee.prioritization_fee).collect())
    }

    async fn get_token_account_balance(&self, address: &Pubkey) -> Result<u64, SdkError> {
        let balance = self
            .rpc_client
            .get_token_account_balance_with_commitment(address, CommitmentConfig::confirmed())
            .await
            .map_err(|e| SdkError::account_lookup(address, e.to_string()))?
            .value;

        balance.amount.parse::<u64>().map_err(|e| {
            SdkError::account_lookup(
                address,
                format!("invalid token amount {:?}: {}", balance.amount, e),
            )
        })
    }

    async fn send_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, SdkError> {
        self.rpc_client
            .send_transaction(transaction)
            .await
            .map_err(|e| SdkError::Submission(e.to_string()))
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        recent_blockhash: &Hash,
    ) -> Result<(), SdkError> {
        loop {
            match self
                .rpc_client
                .get_signature_status_with_commitment(signature, CommitmentConfig::finalized())
                .await?
            {
                Some(Ok(())) => return Ok(()),
                Some(Err(e)) => {
                    return Err(SdkError::Submission(format!(
                        "transaction {} failed: {}",
                        signature, e
                    )));
                }
                None => {}
            }

            let blockhash_valid = self
                .rpc_client
                .is_blockhash_valid(recent_blockhash, CommitmentConfig::processed())
                .await?;
            if !blockhash_valid {
                // landed before expiry: finalization is still coming
                let landed = self
                    .rpc_client
                    .get_signature_status_with_commitment(signature, CommitmentConfig::confirmed())
                    .await?
                    .is_some();
                if !landed {
                    return Err(SdkError::Submission(format!(
                        "blockhash {} expired before transaction {} landed",
                        recent_blockhash, signature
                    )));
                }
            }

            sleep(CONFIRMATION_POLL_INTERVAL).await;
        }
    }
}
