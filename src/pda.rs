use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

use crate::{
    constants::{
        BONDING_CURVE_SEED, METADATA_PROGRAM_ID, METADATA_SEED, PUMP_PROGRAM_ID, TOKEN_PROGRAM_ID,
    },
    error::SdkError,
};

/// Bonding curve account and the token account holding its reserve tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveAddresses {
    pub bonding_curve: Pubkey,
    pub associated_bonding_curve: Pubkey,
}

/// Derive the bonding curve and associated bonding curve for a mint.
pub fn derive_curve_addresses(mint: &Pubkey) -> Result<CurveAddresses, SdkError> {
    let (bonding_curve, _) =
        Pubkey::try_find_program_address(&[BONDING_CURVE_SEED, mint.as_ref()], &PUMP_PROGRAM_ID)
            .ok_or(SdkError::Derivation {
                what: "bonding curve",
            })?;

    let associated_bonding_curve = user_token_account(&bonding_curve, mint);

    log::debug!(
        "mint {} -> bonding curve {}, associated bonding curve {}",
        mint,
        bonding_curve,
        associated_bonding_curve
    );

    Ok(CurveAddresses {
        bonding_curve,
        associated_bonding_curve,
    })
}

/// Metaplex metadata account for a mint, used only when creating a token.
pub fn derive_metadata_address(mint: &Pubkey) -> Result<Pubkey, SdkError> {
    Pubkey::try_find_program_address(
        &[METADATA_SEED, METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &METADATA_PROGRAM_ID,
    )
    .map(|(address, _)| address)
    .ok_or(SdkError::Derivation {
        what: "token metadata",
    })
}

/// Associated token account of `owner` for `mint` under the classic token program.
pub fn user_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &TOKEN_PROGRAM_ID)
}
