use anyhow::{Context, Result};
use solana_sdk::{
    instruction::Instruction,
    message::{VersionedMessage, v0},
    pubkey::Pubkey,
    signature::Signature,
    signer::Signer,
    transaction::VersionedTransaction,
};

use crate::{
    assembler::{InstructionAssembler, TradePlan},
    bonding_curve::{ReserveSnapshot, fetch_reserve_snapshot},
    config::SdkConfig,
    ledger::{LedgerClient, RpcLedgerClient},
    math::{basis_points_to_multiplier, quote_buy, quote_sell},
    params::SellAmount,
    pda::derive_curve_addresses,
    signer::SignerSet,
};

pub struct PumpFunSDK<L: LedgerClient = RpcLedgerClient> {
    client: L,
    config: SdkConfig,
}

impl PumpFunSDK<RpcLedgerClient> {
    /// Create a new pump.fun SDK instance backed by an RPC endpoint
    pub fn new(rpc_endpoint: &str, config: SdkConfig) -> Self {
        let client = RpcLedgerClient::new(rpc_endpoint, config.commitment);
        Self { client, config }
    }
}

impl<L: LedgerClient> PumpFunSDK<L> {
    /// Create an SDK instance over any ledger client
    pub fn with_client(client: L, config: SdkConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn client(&self) -> &L {
        &self.client
    }

    /// Instruction-level access to the buy, sell and create flows
    pub fn assembler(&self) -> InstructionAssembler<'_, L> {
        InstructionAssembler::new(&self.client, &self.config)
    }

    /// Current reserves of the bonding curve of `mint`
    pub async fn reserves(&self, mint: &Pubkey) -> Result<ReserveSnapshot> {
        let curve = derive_curve_addresses(mint)?;
        fetch_reserve_snapshot(&self.client, &curve.bonding_curve)
            .await
            .with_context(|| format!("Failed to fetch bonding curve for mint {}", mint))
    }

    /// Get a buy quote
    ///
    /// # Arguments
    /// * `mint` - The token mint
    /// * `lamports_in` - Lamports to spend
    /// * `slippage_bps` - Slippage tolerance in basis points
    ///
    /// # Returns
    /// Returns the minimum number of tokens accepted for `lamports_in`
    pub async fn quote_buy(
        &self,
        mint: &Pubkey,
        lamports_in: u64,
        slippage_bps: u64,
    ) -> Result<u64> {
        let snapshot = self.reserves(mint).await?;
        Ok(quote_buy(
            lamports_in,
            &snapshot,
            basis_points_to_multiplier(slippage_bps),
        )?)
    }

    /// Get a sell quote
    ///
    /// # Arguments
    /// * `mint` - The token mint
    /// * `tokens_in` - Raw token amount to sell
    /// * `slippage_bps` - Slippage tolerance in basis points
    ///
    /// # Returns
    /// Returns the minimum number of lamports accepted for `tokens_in`
    pub async fn quote_sell(
        &self,
        mint: &Pubkey,
        tokens_in: u64,
        slippage_bps: u64,
    ) -> Result<u64> {
        let snapshot = self.reserves(mint).await?;
        Ok(quote_sell(
            tokens_in,
            &snapshot,
            basis_points_to_multiplier(slippage_bps),
        )?)
    }

    /// Build and sign a buy
    ///
    /// # Arguments
    /// * `user` - The buyer, also the fee payer
    /// * `mint` - The token mint
    /// * `lamports_in` - Lamports to spend, also the max SOL cost
    /// * `slippage_bps` - Slippage tolerance in basis points
    ///
    /// # Returns
    /// Returns a signed `VersionedTransaction` ready to be sent
    pub async fn buy_tx(
        &self,
        user: &(dyn Signer + Sync),
        mint: &Pubkey,
        lamports_in: u64,
        slippage_bps: u64,
    ) -> Result<VersionedTransaction> {
        let user_key = user.pubkey();
        let plan = self
            .assembler()
            .buy_plan(mint, &user_key, lamports_in, slippage_bps)
            .await
            .context("Failed to build buy instructions")?;

        self.sign_plan(&user_key, plan, SignerSet::new(vec![user]))
            .await
    }

    /// Build and sign a sell
    ///
    /// # Arguments
    /// * `user` - The seller, also the fee payer
    /// * `mint` - The token mint
    /// * `amount` - Exact raw amount, or everything the user's token account holds
    /// * `slippage_bps` - Slippage tolerance in basis points
    ///
    /// # Returns
    /// Returns a signed `VersionedTransaction` ready to be sent
    pub async fn sell_tx(
        &self,
        user: &(dyn Signer + Sync),
        mint: &Pubkey,
        amount: SellAmount,
        slippage_bps: u64,
    ) -> Result<VersionedTransaction> {
        let user_key = user.pubkey();
        let plan = self
            .assembler()
            .sell_plan(mint, &user_key, amount, slippage_bps)
            .await
            .context("Failed to build sell instructions")?;

        self.sign_plan(&user_key, plan, SignerSet::new(vec![user]))
            .await
    }

    /// Build and sign a token creation, optionally with an initial buy
    ///
    /// # Arguments
    /// * `user` - The creator, also the fee payer
    /// * `mint` - Keypair of the new mint, co-signs the transaction
    /// * `name` - Token name
    /// * `symbol` - Token symbol
    /// * `uri` - Metadata uri, see `metadata::upload_metadata`
    /// * `initial_buy_lamports` - Lamports for an initial buy, 0 to skip it
    /// * `slippage_bps` - Slippage tolerance of the initial buy in basis points
    ///
    /// # Returns
    /// Returns a signed `VersionedTransaction` ready to be sent
    #[allow(clippy::too_many_arguments)]
    pub async fn create_tx(
        &self,
        user: &(dyn Signer + Sync),
        mint: &(dyn Signer + Sync),
        name: &str,
        symbol: &str,
        uri: &str,
        initial_buy_lamports: u64,
        slippage_bps: u64,
    ) -> Result<VersionedTransaction> {
        let user_key = user.pubkey();
        let plan = self
            .assembler()
            .create_plan(
                &mint.pubkey(),
                &user_key,
                name,
                symbol,
                uri,
                initial_buy_lamports,
                slippage_bps,
            )
            .await
            .context("Failed to build create instructions")?;

        self.sign_plan(&user_key, plan, SignerSet::new(vec![user, mint]))
            .await
    }

    /// Buy tokens and return as soon as the transaction is sent
    pub async fn buy_token(
        &self,
        user: &(dyn Signer + Sync),
        mint: &Pubkey,
        lamports_in: u64,
        slippage_bps: u64,
    ) -> Result<Signature> {
        let tx = self.buy_tx(user, mint, lamports_in, slippage_bps).await?;
        let signature = self
            .client
            .send_transaction(&tx)
            .await
            .context("Failed to send buy transaction")?;

        log::info!("buy of {} sent: {}", mint, signature);
        Ok(signature)
    }

    /// Sell tokens and return as soon as the transaction is sent
    pub async fn sell_token(
        &self,
        user: &(dyn Signer + Sync),
        mint: &Pubkey,
        amount: SellAmount,
        slippage_bps: u64,
    ) -> Result<Signature> {
        let tx = self.sell_tx(user, mint, amount, slippage_bps).await?;
        let signature = self
            .client
            .send_transaction(&tx)
            .await
            .context("Failed to send sell transaction")?;

        log::info!("sell of {} sent: {}", mint, signature);
        Ok(signature)
    }

    /// Create a token and wait for the transaction to be confirmed.
    ///
    /// If the transaction was sent but the wait failed, the error downcasts to
    /// `SdkError::Unconfirmed` carrying the signature.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_token(
        &self,
        user: &(dyn Signer + Sync),
        mint: &(dyn Signer + Sync),
        name: &str,
        symbol: &str,
        uri: &str,
        initial_buy_lamports: u64,
        slippage_bps: u64,
    ) -> Result<Signature> {
        let tx = self
            .create_tx(
                user,
                mint,
                name,
                symbol,
                uri,
                initial_buy_lamports,
                slippage_bps,
            )
            .await?;
        let signature = self
            .client
            .send_and_confirm_transaction(&tx)
            .await
            .context("Failed to create token")?;

        log::info!("token {} created: {}", mint.pubkey(), signature);
        Ok(signature)
    }

    async fn sign_plan(
        &self,
        payer: &Pubkey,
        plan: TradePlan,
        signers: SignerSet<'_>,
    ) -> Result<VersionedTransaction> {
        // every required identity must be among the supplied signers
        for key in &plan.signers {
            signers.find(key)?;
        }

        let message = self.compile(payer, &plan.instructions).await?;
        Ok(signers.sign(message)?)
    }

    async fn compile(
        &self,
        payer: &Pubkey,
        instructions: &[Instruction],
    ) -> Result<VersionedMessage> {
        let recent_blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .context("Failed to fetch latest blockhash")?;

        let message_v0 = v0::Message::try_compile(payer, instructions, &[], recent_blockhash)?;
        Ok(VersionedMessage::V0(message_v0))
    }
}
