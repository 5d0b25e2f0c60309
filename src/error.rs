use solana_sdk::{pubkey::Pubkey, signature::Signature};
use thiserror::Error;

/// Typed failures raised by the SDK components.
///
/// Flow-level functions return `anyhow::Result` with step context layered on
/// top; the variant below stays reachable through `anyhow::Error::downcast_ref`.
#[derive(Debug, Error)]
pub enum SdkError {
    /// A program-derived address could not be found for the given seeds.
    #[error("failed to derive {what} address")]
    Derivation { what: &'static str },

    /// Bonding curve account data is shorter than the reserve layout.
    #[error("insufficient bonding curve data: expected at least {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Quote requested against a curve with zero virtual reserves.
    #[error("division by zero: bonding curve has zero virtual reserves")]
    DivisionByZero,

    #[error("arithmetic overflow while computing quote")]
    MathOverflow,

    /// No recent prioritization fee samples were returned.
    #[error("no prioritization fee data available")]
    NoFeeData,

    /// Account or balance query failed or returned unusable data.
    #[error("account lookup failed for {address}: {reason}")]
    AccountLookup { address: Pubkey, reason: String },

    /// The message requires a signature from a key that was not supplied.
    #[error("no signer found for key {0}")]
    MissingSigner(Pubkey),

    #[error("signing failed: {0}")]
    Signing(#[from] solana_sdk::signer::SignerError),

    /// Transaction could not be sent.
    #[error("transaction submission failed: {0}")]
    Submission(String),

    /// Transaction was sent but the confirmation wait failed. The outcome on
    /// chain is unknown; query the signature to find out.
    #[error("transaction {signature} was submitted but not confirmed: {reason}")]
    Unconfirmed { signature: Signature, reason: String },

    #[error("rpc error: {0}")]
    Rpc(#[from] solana_rpc_client_api::client_error::Error),

    /// Metadata upload endpoint failure.
    #[error("metadata upload failed: {0}")]
    Upload(String),

    #[error("unknown network: {0}")]
    InvalidNetwork(String),
}

impl SdkError {
    pub(crate) fn account_lookup(address: &Pubkey, reason: impl Into<String>) -> Self {
        Self::AccountLookup {
            address: *address,
            reason: reason.into(),
        }
    }

    /// Signature of a transaction that reached the network, if this error
    /// describes one.
    pub fn submitted_signature(&self) -> Option<&Signature> {
        match self {
            Self::Unconfirmed { signature, .. } => Some(signature),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upload(err.to_string())
    }
}
