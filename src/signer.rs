use solana_sdk::{
    message::VersionedMessage, pubkey::Pubkey, signature::Signature, signer::Signer,
    transaction::VersionedTransaction,
};

use crate::error::SdkError;

/// Signers available to a single transaction, looked up by public key.
#[derive(Default)]
pub struct SignerSet<'a> {
    signers: Vec<&'a (dyn Signer + Sync)>,
}

impl<'a> SignerSet<'a> {
    pub fn new(signers: Vec<&'a (dyn Signer + Sync)>) -> Self {
        Self { signers }
    }

    pub fn push(&mut self, signer: &'a (dyn Signer + Sync)) {
        self.signers.push(signer);
    }

    pub fn find(&self, key: &Pubkey) -> Result<&'a (dyn Signer + Sync), SdkError> {
        self.signers
            .iter()
            .copied()
            .find(|signer| signer.pubkey() == *key)
            .ok_or(SdkError::MissingSigner(*key))
    }

    /// Sign `message` with every key it requires, in message order.
    pub fn sign(&self, message: VersionedMessage) -> Result<VersionedTransaction, SdkError> {
        let required = usize::from(message.header().num_required_signatures);
        let message_data = message.serialize();

        let signatures = message
            .static_account_keys()
            .iter()
            .take(required)
            .map(|key| {
                let signer = self.find(key)?;
                Ok(signer.try_sign_message(&message_data)?)
            })
            .collect::<Result<Vec<Signature>, SdkError>>()?;

        Ok(VersionedTransaction {
            signatures,
            message,
        })
    }
}
