use anyhow::{Context, Result};
use borsh::BorshSerialize;
use solana_sdk::instruction::Instruction;

use crate::{
    account_metas::{PumpBuy, PumpCreate, PumpSell},
    constants::{
        ASSOCIATED_TOKEN_PROGRAM_ID, BUY_DISCRIMINATOR, CREATE_DISCRIMINATOR, EVENT_AUTHORITY,
        GLOBAL_ACCOUNT, METADATA_PROGRAM_ID, MINT_AUTHORITY, PUMP_PROGRAM_ID, RENT_SYSVAR_ID,
        SELL_DISCRIMINATOR, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
    },
    params::{BuyParamsIx, CreateParamsIx, SellParamsIx},
    pda::{derive_curve_addresses, derive_metadata_address, user_token_account},
};

#[derive(BorshSerialize)]
struct BuyArgs {
    amount: u64,
    max_sol_cost: u64,
}

#[derive(BorshSerialize)]
struct SellArgs {
    amount: u64,
    min_sol_output: u64,
}

#[derive(BorshSerialize)]
struct CreateArgs<'a> {
    name: &'a str,
    symbol: &'a str,
    uri: &'a str,
}

fn encode<T: BorshSerialize>(discriminator: [u8; 8], args: &T) -> Result<Vec<u8>> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .context("Failed to serialize instruction args")?;
    Ok(data)
}

/// Build a pump.fun `buy` instruction
pub fn buy_ix(params: &BuyParamsIx) -> Result<Instruction> {
    let curve = derive_curve_addresses(&params.mint)?;
    let associated_user = user_token_account(&params.user, &params.mint);

    let data = encode(
        BUY_DISCRIMINATOR,
        &BuyArgs {
            amount: params.amount,
            max_sol_cost: params.max_sol_cost,
        },
    )?;

    Ok(Instruction {
        program_id: PUMP_PROGRAM_ID,
        accounts: PumpBuy {
            global: GLOBAL_ACCOUNT,
            fee_recipient: params.fee_recipient,
            mint: params.mint,
            bonding_curve: curve.bonding_curve,
            associated_bonding_curve: curve.associated_bonding_curve,
            associated_user,
            user: params.user,
            system_program: SYSTEM_PROGRAM_ID,
            token_program: TOKEN_PROGRAM_ID,
            rent: RENT_SYSVAR_ID,
            event_authority: EVENT_AUTHORITY,
            program: PUMP_PROGRAM_ID,
        }
        .into(),
        data,
    })
}

/// Build a pump.fun `sell` instruction
pub fn sell_ix(params: &SellParamsIx) -> Result<Instruction> {
    let curve = derive_curve_addresses(&params.mint)?;
    let associated_user = user_token_account(&params.user, &params.mint);

    let data = encode(
        SELL_DISCRIMINATOR,
        &SellArgs {
            amount: params.amount,
            min_sol_output: params.min_sol_output,
        },
    )?;

    Ok(Instruction {
        program_id: PUMP_PROGRAM_ID,
        accounts: PumpSell {
            global: GLOBAL_ACCOUNT,
            fee_recipient: params.fee_recipient,
            mint: params.mint,
            bonding_curve: curve.bonding_curve,
            associated_bonding_curve: curve.associated_bonding_curve,
            associated_user,
            user: params.user,
            system_program: SYSTEM_PROGRAM_ID,
            associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
            token_program: TOKEN_PROGRAM_ID,
            event_authority: EVENT_AUTHORITY,
            program: PUMP_PROGRAM_ID,
        }
        .into(),
        data,
    })
}

/// Build a pump.fun `create` instruction. The mint must co-sign.
pub fn create_ix(params: &CreateParamsIx) -> Result<Instruction> {
    let curve = derive_curve_addresses(&params.mint)?;
    let metadata = derive_metadata_address(&params.mint)?;

    let data = encode(
        CREATE_DISCRIMINATOR,
        &CreateArgs {
            name: &params.name,
            symbol: &params.symbol,
            uri: &params.uri,
        },
    )?;

    Ok(Instruction {
        program_id: PUMP_PROGRAM_ID,
        accounts: PumpCreate {
            mint: params.mint,
            mint_authority: MINT_AUTHORITY,
            bonding_curve: curve.bonding_curve,
            associated_bonding_curve: curve.associated_bonding_curve,
            global: GLOBAL_ACCOUNT,
            mpl_token_metadata: METADATA_PROGRAM_ID,
            metadata,
            user: params.user,
            system_program: SYSTEM_PROGRAM_ID,
            token_program: TOKEN_PROGRAM_ID,
            associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
            rent: RENT_SYSVAR_ID,
            event_authority: EVENT_AUTHORITY,
            program: PUMP_PROGRAM_ID,
        }
        .into(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn buy_data_is_discriminator_then_amounts() {
        let ix = buy_ix(&BuyParamsIx {
            mint: Pubkey::new_unique(),
            user: Pubkey::new_unique(),
            fee_recipient: Pubkey::new_unique(),
            amount: 999_001,
            max_sol_cost: 1_000,
        })
        .unwrap();

        assert_eq!(ix.program_id, PUMP_PROGRAM_ID);
        assert_eq!(&ix.data[..8], &BUY_DISCRIMINATOR);
        assert_eq!(&ix.data[8..16], &999_001u64.to_le_bytes());
        assert_eq!(&ix.data[16..24], &1_000u64.to_le_bytes());
        assert_eq!(ix.data.len(), 24);
        assert_eq!(ix.accounts.len(), 12);
    }

    #[test]
    fn buy_accounts_follow_program_order() {
        let mint = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let fee_recipient = Pubkey::new_unique();
        let ix = buy_ix(&BuyParamsIx {
            mint,
            user,
            fee_recipient,
            amount: 1,
            max_sol_cost: 1,
        })
        .unwrap();
        let curve = derive_curve_addresses(&mint).unwrap();

        assert_eq!(ix.accounts[0].pubkey, GLOBAL_ACCOUNT);
        assert_eq!(ix.accounts[1].pubkey, fee_recipient);
        assert!(ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, mint);
        assert_eq!(ix.accounts[3].pubkey, curve.bonding_curve);
        assert_eq!(ix.accounts[4].pubkey, curve.associated_bonding_curve);
        assert_eq!(ix.accounts[5].pubkey, user_token_account(&user, &mint));
        assert_eq!(ix.accounts[6].pubkey, user);
        assert!(ix.accounts[6].is_signer);
        assert_eq!(ix.accounts[11].pubkey, PUMP_PROGRAM_ID);
    }

    #[test]
    fn sell_data_is_discriminator_then_amounts() {
        let ix = sell_ix(&SellParamsIx {
            mint: Pubkey::new_unique(),
            user: Pubkey::new_unique(),
            fee_recipient: Pubkey::new_unique(),
            amount: 5_000,
            min_sol_output: 4,
        })
        .unwrap();

        assert_eq!(&ix.data[..8], &SELL_DISCRIMINATOR);
        assert_eq!(&ix.data[8..16], &5_000u64.to_le_bytes());
        assert_eq!(&ix.data[16..24], &4u64.to_le_bytes());
        assert_eq!(ix.accounts[8].pubkey, ASSOCIATED_TOKEN_PROGRAM_ID);
    }

    #[test]
    fn create_encodes_strings_and_requires_mint_signature() {
        let mint = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let ix = create_ix(&CreateParamsIx {
            mint,
            user,
            name: "Pepe".to_string(),
            symbol: "PEPE".to_string(),
            uri: "ipfs://x".to_string(),
        })
        .unwrap();

        let mut expected = CREATE_DISCRIMINATOR.to_vec();
        for s in ["Pepe", "PEPE", "ipfs://x"] {
            expected.extend_from_slice(&(s.len() as u32).to_le_bytes());
            expected.extend_from_slice(s.as_bytes());
        }
        assert_eq!(ix.data, expected);

        assert_eq!(ix.accounts[0].pubkey, mint);
        assert!(ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[6].pubkey, derive_metadata_address(&mint).unwrap());
        assert_eq!(ix.accounts[7].pubkey, user);
        assert!(ix.accounts[7].is_signer);
        assert_eq!(ix.accounts.len(), 14);
    }
}
