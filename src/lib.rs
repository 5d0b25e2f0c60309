//! # pump.fun SDK
//!
//! A standalone SDK for trading on and launching pump.fun bonding curves on Solana. It quotes
//! against the curve's virtual reserves, derives every account involved and assembles the
//! instructions and signers of a transaction. This SDK provides two main usage flows:
//!
//! 1. **Transaction Functions (`_tx`, `_token`)**: Return a signed transaction, or send it and return the signature
//! 2. **Instruction Functions (`InstructionAssembler`, `*_ix`)**: Return instructions and required signers, allowing users to compose transactions themselves
//!
//! ## 🚀 Quick Start
//!
//! ### Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pumpfun-sdk = "0.1.0"
//! ```
//!
//! ### Basic Setup
//!
//! ```rust,ignore
//! use pumpfun_sdk::{PumpFunSDK, SdkConfig};
//!
//! // Mainnet fee recipient and compute budget defaults
//! let sdk = PumpFunSDK::new("https://api.mainnet-beta.solana.com", SdkConfig::default());
//!
//! // Devnet uses its own fee recipient
//! let devnet_sdk = PumpFunSDK::new("https://api.devnet.solana.com", SdkConfig::devnet());
//! ```
//!
//! ## ⚠️ Important: Slippage and Quotes
//!
//! Slippage is given in basis points (`100` = 1%). It is applied to the quoted amount:
//! - **Buy**: the SOL amount is spent as-is (`max_sol_cost`), the token amount is reduced by the slippage
//! - **Sell**: the token amount is sold as-is, the minimum SOL output is reduced by the slippage
//!
//! Quotes are computed from a snapshot of the bonding curve read just before the transaction is
//! built. The program applies the authoritative reserve update when the transaction lands.
//!
//! ## 📖 Usage Patterns
//!
//! ### 1. Transaction Functions
//!
//! #### Trading
//!
//! ```rust,ignore
//! use pumpfun_sdk::SellAmount;
//! use solana_sdk::signer::keypair::Keypair;
//!
//! let user = Keypair::new(); // Your wallet keypair
//!
//! // Get a quote first
//! let tokens = sdk.quote_buy(&mint, 1_000_000, 100).await?; // 0.001 SOL, 1% slippage
//! println!("At least {} tokens", tokens);
//!
//! // Buy - sends and returns immediately
//! let signature = sdk.buy_token(&user, &mint, 1_000_000, 100).await?;
//!
//! // Sell everything the wallet holds
//! let signature = sdk.sell_token(&user, &mint, SellAmount::All, 100).await?;
//! ```
//!
//! #### Token Creation
//!
//! ```rust,ignore
//! use pumpfun_sdk::metadata::{upload_metadata, CreateTokenMetadataRequest};
//!
//! let metadata = upload_metadata(&reqwest::Client::new(), &CreateTokenMetadataRequest {
//!     file: "https://example.com/pepe.png".to_string(),
//!     name: "Pepe".to_string(),
//!     symbol: "PEPE".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! let mint = Keypair::new();
//!
//! // Create with a 0.01 SOL initial buy - waits for confirmation
//! let signature = sdk.create_token(
//!     &user,
//!     &mint,
//!     "Pepe",
//!     "PEPE",
//!     &metadata.metadata_uri,
//!     10_000_000,
//!     500,
//! ).await?;
//! ```
//!
//! If a creation was sent but could not be confirmed, the error carries the signature:
//!
//! ```rust,ignore
//! if let Some(SdkError::Unconfirmed { signature, .. }) = err.downcast_ref::<SdkError>() {
//!     // look the signature up before retrying
//! }
//! ```
//!
//! ### 2. Instruction Functions
//!
//! ```rust,ignore
//! let plan = sdk.assembler().buy_plan(&mint, &user.pubkey(), 1_000_000, 100).await?;
//!
//! // plan.instructions: [compute unit limit, compute unit price, (create ATA)?, buy]
//! // plan.signers:      [user]
//! ```
//!
//! ## Ledger Access
//!
//! All chain reads and submissions go through the `LedgerClient` trait. `PumpFunSDK::new` uses
//! `RpcLedgerClient` over the nonblocking Solana RPC client; `PumpFunSDK::with_client` accepts
//! any other implementation.

mod account_metas;
pub mod assembler;
pub mod bonding_curve;
pub mod config;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod metadata;
mod params;
pub mod pda;
pub mod priority_fee;
mod sdk;
pub mod signer;

pub use sdk::PumpFunSDK;

pub use assembler::{InstructionAssembler, TradePlan};
pub use bonding_curve::ReserveSnapshot;
pub use config::{Network, SdkConfig};
pub use error::SdkError;
pub use ledger::{LedgerClient, RpcLedgerClient};
pub use pda::CurveAddresses;
pub use signer::SignerSet;

// Instruction-level params
pub use params::{BuyParamsIx, CreateParamsIx, SellAmount, SellParamsIx};
