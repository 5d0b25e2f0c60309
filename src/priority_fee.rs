use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{
        ASSOCIATED_TOKEN_PROGRAM_ID, EVENT_AUTHORITY, GLOBAL_ACCOUNT, METADATA_PROGRAM_ID,
        MINT_AUTHORITY, PUMP_PROGRAM_ID, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
    },
    error::SdkError,
};

/// Accounts touched by a create transaction, used to sample recent
/// prioritization fees.
pub fn priority_fee_accounts(payer: &Pubkey) -> Vec<Pubkey> {
    vec![
        *payer,
        PUMP_PROGRAM_ID,
        MINT_AUTHORITY,
        GLOBAL_ACCOUNT,
        METADATA_PROGRAM_ID,
        SYSTEM_PROGRAM_ID,
        TOKEN_PROGRAM_ID,
        ASSOCIATED_TOKEN_PROGRAM_ID,
        RENT_SYSVAR_ID,
        EVENT_AUTHORITY,
    ]
}

/// Arithmetic mean of the sampled fees, in micro-lamports per compute unit.
pub fn estimate_priority_fee(samples: &[u64]) -> Result<u64, SdkError> {
    if samples.is_empty() {
        return Err(SdkError::NoFeeData);
    }

    let total: u128 = samples.iter().map(|fee| u128::from(*fee)).sum();
    let mean = total / samples.len() as u128;

    // mean of u64 values always fits
    Ok(mean as u64)
}
