use anyhow::{Context, Result};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction, instruction::Instruction, pubkey::Pubkey,
};
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::{
    bonding_curve::{ReserveSnapshot, fetch_initial_reserves, fetch_reserve_snapshot},
    config::SdkConfig,
    constants::{GLOBAL_ACCOUNT, TOKEN_PROGRAM_ID},
    instructions::{buy_ix, create_ix, sell_ix},
    ledger::LedgerClient,
    math::{basis_points_to_multiplier, quote_buy, quote_sell},
    params::{BuyParamsIx, CreateParamsIx, SellAmount, SellParamsIx},
    pda::{derive_curve_addresses, user_token_account},
    priority_fee::{estimate_priority_fee, priority_fee_accounts},
};

/// Ordered instructions of one transaction and the keys that must sign it.
#[derive(Debug, Clone, PartialEq)]
pub struct TradePlan {
    pub instructions: Vec<Instruction>,
    pub signers: Vec<Pubkey>,
}

/// Builds buy, sell and create instruction lists.
///
/// Reads go through the ledger client; nothing is submitted here.
pub struct InstructionAssembler<'a, L: LedgerClient + ?Sized> {
    client: &'a L,
    config: &'a SdkConfig,
}

impl<'a, L: LedgerClient + ?Sized> InstructionAssembler<'a, L> {
    pub fn new(client: &'a L, config: &'a SdkConfig) -> Self {
        Self { client, config }
    }

    /// `[cu limit, cu price, (create ata)?, buy]`
    pub async fn buy_plan(
        &self,
        mint: &Pubkey,
        user: &Pubkey,
        lamports_in: u64,
        slippage_bps: u64,
    ) -> Result<TradePlan> {
        let curve = derive_curve_addresses(mint)?;
        let snapshot = fetch_reserve_snapshot(self.client, &curve.bonding_curve)
            .await
            .with_context(|| format!("Failed to fetch bonding curve for mint {}", mint))?;

        let mut instructions = self.compute_budget_ixs(self.config.buy_compute_unit_price);
        instructions.extend(
            self.buy_trade_ixs(mint, user, lamports_in, slippage_bps, &snapshot)
                .await?,
        );

        log::debug!("buy plan for {}: {} instructions", mint, instructions.len());

        Ok(TradePlan {
            instructions,
            signers: vec![*user],
        })
    }

    /// `[cu limit, cu price, sell]`
    pub async fn sell_plan(
        &self,
        mint: &Pubkey,
        user: &Pubkey,
        amount: SellAmount,
        slippage_bps: u64,
    ) -> Result<TradePlan> {
        let amount = match amount {
            SellAmount::Exact(amount) => amount,
            SellAmount::All => {
                let associated_user = user_token_account(user, mint);
                let balance = self
                    .client
                    .get_token_account_balance(&associated_user)
                    .await
                    .with_context(|| {
                        format!("Failed to read token balance of {}", associated_user)
                    })?;
                if balance == 0 {
                    log::warn!("selling all of {} but {} holds no tokens", mint, associated_user);
                }
                balance
            }
        };

        let curve = derive_curve_addresses(mint)?;
        let snapshot = fetch_reserve_snapshot(self.client, &curve.bonding_curve)
            .await
            .with_context(|| format!("Failed to fetch bonding curve for mint {}", mint))?;

        let multiplier = basis_points_to_multiplier(slippage_bps);
        let min_sol_output =
            quote_sell(amount, &snapshot, multiplier).context("Failed to quote sell")?;
        log::debug!(
            "sell quote: {} tokens -> at least {} lamports",
            amount,
            min_sol_output
        );

        let sell_instruction = sell_ix(&SellParamsIx {
            mint: *mint,
            user: *user,
            fee_recipient: self.config.fee_recipient(),
            amount,
            min_sol_output,
        })?;

        let mut instructions = self.compute_budget_ixs(self.config.sell_compute_unit_price);
        instructions.push(sell_instruction);

        Ok(TradePlan {
            instructions,
            signers: vec![*user],
        })
    }

    /// `[cu limit, cu price (estimated), create, ((create ata)?, buy)?]`
    ///
    /// The curve does not exist before `create` lands, so the initial buy is
    /// quoted against the initial reserves in the global config account.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_plan(
        &self,
        mint: &Pubkey,
        user: &Pubkey,
        name: &str,
        symbol: &str,
        uri: &str,
        initial_buy_lamports: u64,
        slippage_bps: u64,
    ) -> Result<TradePlan> {
        let fee_samples = self
            .client
            .get_recent_prioritization_fees(&priority_fee_accounts(user))
            .await
            .context("Failed to fetch recent prioritization fees")?;
        let compute_unit_price =
            estimate_priority_fee(&fee_samples).context("Failed to estimate priority fee")?;
        log::debug!(
            "estimated priority fee {} from {} samples",
            compute_unit_price,
            fee_samples.len()
        );

        let mut instructions = self.compute_budget_ixs(compute_unit_price);
        instructions.push(create_ix(&CreateParamsIx {
            mint: *mint,
            user: *user,
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        })?);

        if initial_buy_lamports > 0 {
            let snapshot = fetch_initial_reserves(self.client, &GLOBAL_ACCOUNT)
                .await
                .context("Failed to fetch initial curve reserves")?;
            instructions.extend(
                self.buy_trade_ixs(mint, user, initial_buy_lamports, slippage_bps, &snapshot)
                    .await?,
            );
        }

        log::debug!("create plan for {}: {} instructions", mint, instructions.len());

        Ok(TradePlan {
            instructions,
            signers: vec![*user, *mint],
        })
    }

    /// Whether the user's token account has to be created first.
    ///
    /// Only a lookup that reports the account as missing counts; a failed
    /// lookup is treated as an existing account.
    pub async fn needs_token_account(&self, mint: &Pubkey, user: &Pubkey) -> bool {
        let associated_user = user_token_account(user, mint);
        match self.client.get_account_data(&associated_user).await {
            Ok(Some(_)) => false,
            Ok(None) => {
                log::warn!("token account {} not found, creating it", associated_user);
                true
            }
            Err(e) => {
                log::warn!(
                    "token account lookup for {} failed, assuming it exists: {}",
                    associated_user,
                    e
                );
                false
            }
        }
    }

    fn compute_budget_ixs(&self, compute_unit_price: u64) -> Vec<Instruction> {
        vec![
            ComputeBudgetInstruction::set_compute_unit_limit(self.config.compute_unit_limit),
            ComputeBudgetInstruction::set_compute_unit_price(compute_unit_price),
        ]
    }

    // `(create ata)?, buy` without the compute budget pair
    async fn buy_trade_ixs(
        &self,
        mint: &Pubkey,
        user: &Pubkey,
        lamports_in: u64,
        slippage_bps: u64,
        snapshot: &ReserveSnapshot,
    ) -> Result<Vec<Instruction>> {
        let mut instructions = Vec::with_capacity(2);

        if self.needs_token_account(mint, user).await {
            instructions.push(create_associated_token_account(
                user,
                user,
                mint,
                &TOKEN_PROGRAM_ID,
            ));
        }

        let multiplier = basis_points_to_multiplier(slippage_bps);
        let amount = quote_buy(lamports_in, snapshot, multiplier).context("Failed to quote buy")?;
        log::debug!(
            "buy quote: {} lamports -> at least {} tokens",
            lamports_in,
            amount
        );

        instructions.push(buy_ix(&BuyParamsIx {
            mint: *mint,
            user: *user,
            fee_recipient: self.config.fee_recipient(),
            amount,
            max_sol_cost: lamports_in,
        })?);

        Ok(instructions)
    }
}
