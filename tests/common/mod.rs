#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use pumpfun_sdk::{
    LedgerClient, SdkError,
    constants::GLOBAL_ACCOUNT,
    pda::{derive_curve_addresses, user_token_account},
};
use solana_sdk::{
    hash::Hash, pubkey::Pubkey, signature::Signature, transaction::VersionedTransaction,
};

/// In-memory ledger. Sent transactions are recorded instead of submitted.
pub struct MockLedger {
    pub accounts: HashMap<Pubkey, Vec<u8>>,
    pub balances: HashMap<Pubkey, u64>,
    pub fee_samples: Vec<u64>,
    /// Account reads of these addresses fail.
    pub unreachable: Vec<Pubkey>,
    pub blockhash: Hash,
    pub fail_confirmation: bool,
    pub sent: Mutex<Vec<VersionedTransaction>>,
    /// Blockhashes handed to each confirmation wait.
    pub confirm_blockhashes: Mutex<Vec<Hash>>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            balances: HashMap::new(),
            fee_samples: vec![],
            unreachable: vec![],
            blockhash: Hash::new_unique(),
            fail_confirmation: false,
            sent: Mutex::new(vec![]),
            confirm_blockhashes: Mutex::new(vec![]),
        }
    }
}

impl MockLedger {
    pub fn with_curve(mut self, mint: &Pubkey, virtual_sol: u64, virtual_token: u64) -> Self {
        let curve = derive_curve_addresses(mint).unwrap();
        let mut data = Vec::new();
        data.extend_from_slice(&793_100_000_000_000u64.to_le_bytes());
        data.extend_from_slice(&virtual_token.to_le_bytes());
        data.extend_from_slice(&virtual_sol.to_le_bytes());
        data.extend_from_slice(&[0u8; 25]);
        self.accounts.insert(curve.bonding_curve, data);
        self
    }

    pub fn with_global(mut self, virtual_sol: u64, virtual_token: u64) -> Self {
        let mut data = vec![0u8; 8 + 1 + 32 + 32];
        data.extend_from_slice(&virtual_token.to_le_bytes());
        data.extend_from_slice(&virtual_sol.to_le_bytes());
        data.extend_from_slice(&793_100_000_000_000u64.to_le_bytes());
        data.extend_from_slice(&[0u8; 16]);
        self.accounts.insert(GLOBAL_ACCOUNT, data);
        self
    }

    pub fn with_token_account(mut self, owner: &Pubkey, mint: &Pubkey, balance: u64) -> Self {
        let ata = user_token_account(owner, mint);
        self.accounts.insert(ata, vec![0u8; 165]);
        self.balances.insert(ata, balance);
        self
    }

    pub fn with_unreachable(mut self, address: Pubkey) -> Self {
        self.unreachable.push(address);
        self
    }

    pub fn with_fee_samples(mut self, samples: Vec<u64>) -> Self {
        self.fee_samples = samples;
        self
    }

    pub fn failing_confirmation(mut self) -> Self {
        self.fail_confirmation = true;
        self
    }

    pub fn sent(&self) -> Vec<VersionedTransaction> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, SdkError> {
        if self.unreachable.contains(address) {
            return Err(SdkError::AccountLookup {
                address: *address,
                reason: "connection reset".to_string(),
            });
        }
        Ok(self.accounts.get(address).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, SdkError> {
        Ok(self.blockhash)
    }

    async fn get_recent_prioritization_fees(
        &self,
        _addresses: &[Pubkey],
    ) -> Result<Vec<u64>, SdkError> {
        Ok(self.fee_samples.clone())
    }

    async fn get_token_account_balance(&self, address: &Pubkey) -> Result<u64, SdkError> {
        self.balances.get(address).copied().ok_or(SdkError::AccountLookup {
            address: *address,
            reason: "could not find account".to_string(),
        })
    }

    async fn send_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, SdkError> {
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        recent_blockhash: &Hash,
    ) -> Result<(), SdkError> {
        self.confirm_blockhashes
            .lock()
            .unwrap()
            .push(*recent_blockhash);
        if self.fail_confirmation {
            return Err(SdkError::Submission(format!(
                "blockhash {} expired before transaction {} landed",
                recent_blockhash, signature
            )));
        }
        Ok(())
    }
}

pub fn data_u64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}
