use std::time::Duration;

use solana_sdk::{pubkey, pubkey::Pubkey, system_program, sysvar};

pub const PUMP_PROGRAM_ID: Pubkey = pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");
pub const METADATA_PROGRAM_ID: Pubkey = pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

// fixed pump.fun accounts, not derived on the client
pub const GLOBAL_ACCOUNT: Pubkey = pubkey!("4wTV1YmiEkRvAtNtsSGPtUrqRYQMe5SKy2uB4Jjaxnjf");
pub const MINT_AUTHORITY: Pubkey = pubkey!("TSLvdd1pWpHVjahSpsvCXUbgwsL3JAcvokwaKt1eokM");
pub const EVENT_AUTHORITY: Pubkey = pubkey!("Ce6TQqeHC9p8KetsN6JsjHK7UTZk7nasjjnr7XxXp9F1");

pub const MAINNET_FEE_RECIPIENT: Pubkey = pubkey!("CebN5WGQ4jvEPvsVU4EoHEpgzq1VV7AbicfhtW4xC9iM");
// the mainnet fee recipient is not initialized on devnet
pub const DEVNET_FEE_RECIPIENT: Pubkey = pubkey!("68yFSZxzLWJXkxxRGydZ63C6mHx1NLEDWmwN9Lb5yySg");

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
pub const SYSTEM_PROGRAM_ID: Pubkey = system_program::ID;
pub const RENT_SYSVAR_ID: Pubkey = sysvar::rent::ID;

// SEEDS
pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";
pub const METADATA_SEED: &[u8] = b"metadata";

// DISCRIMINATORS
pub const BUY_DISCRIMINATOR: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];
pub const SELL_DISCRIMINATOR: [u8; 8] = [51, 230, 133, 164, 1, 127, 131, 173];
pub const CREATE_DISCRIMINATOR: [u8; 8] = [24, 30, 200, 40, 5, 28, 7, 119];

// pump.fun's own default compute limit
pub const DEFAULT_COMPUTE_UNIT_LIMIT: u32 = 250_000;
pub const DEFAULT_BUY_COMPUTE_UNIT_PRICE: u64 = 100_000; // micro-lamports
pub const DEFAULT_SELL_COMPUTE_UNIT_PRICE: u64 = 10_000; // micro-lamports

pub const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub const BASIS_POINTS_DIVISOR: f64 = 10_000.0;

/// Bonding curve reserve layout read by the decoder: 3 x u64
pub const RESERVES_LAYOUT_LEN: usize = 24;
/// discriminator (8) + initialized (1) + authority (32) + fee_recipient (32)
pub const GLOBAL_INITIAL_RESERVES_OFFSET: usize = 73;

pub const METADATA_UPLOAD_URL: &str = "https://pump.fun/api/ipfs";
