// Instruction-level params: amounts are final, no quoting happens here

use solana_sdk::pubkey::Pubkey;

/// Buy instruction parameters
#[derive(Debug, Clone)]
pub struct BuyParamsIx {
    pub mint: Pubkey,
    pub user: Pubkey,
    pub fee_recipient: Pubkey,
    pub amount: u64,       // tokens to receive
    pub max_sol_cost: u64, // lamports
}

/// Sell instruction parameters
#[derive(Debug, Clone)]
pub struct SellParamsIx {
    pub mint: Pubkey,
    pub user: Pubkey,
    pub fee_recipient: Pubkey,
    pub amount: u64,         // tokens to sell
    pub min_sol_output: u64, // lamports
}

/// Create instruction parameters
#[derive(Debug, Clone)]
pub struct CreateParamsIx {
    pub mint: Pubkey,
    pub user: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

/// How much to sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellAmount {
    Exact(u64),
    /// Whatever the seller's token account holds when the plan is built.
    All,
}
