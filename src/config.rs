use std::{fmt, str::FromStr};

use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

use crate::{
    constants::{
        DEFAULT_BUY_COMPUTE_UNIT_PRICE, DEFAULT_COMPUTE_UNIT_LIMIT,
        DEFAULT_SELL_COMPUTE_UNIT_PRICE, DEVNET_FEE_RECIPIENT, MAINNET_FEE_RECIPIENT,
    },
    error::SdkError,
};

/// Cluster the SDK trades against. Only the fee recipient differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Devnet,
}

impl Network {
    pub fn fee_recipient(&self) -> Pubkey {
        match self {
            Network::Mainnet => MAINNET_FEE_RECIPIENT,
            Network::Devnet => DEVNET_FEE_RECIPIENT,
        }
    }
}

impl FromStr for Network {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Network::Mainnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(SdkError::InvalidNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Devnet => write!(f, "devnet"),
        }
    }
}

/// SDK configuration, fixed for the lifetime of a `PumpFunSDK`.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    pub network: Network,
    pub commitment: CommitmentLevel,
    pub compute_unit_limit: u32,
    /// micro-lamports per compute unit
    pub buy_compute_unit_price: u64,
    /// micro-lamports per compute unit
    pub sell_compute_unit_price: u64,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            commitment: CommitmentLevel::Confirmed,
            compute_unit_limit: DEFAULT_COMPUTE_UNIT_LIMIT,
            buy_compute_unit_price: DEFAULT_BUY_COMPUTE_UNIT_PRICE,
            sell_compute_unit_price: DEFAULT_SELL_COMPUTE_UNIT_PRICE,
        }
    }
}

impl SdkConfig {
    pub fn devnet() -> Self {
        Self {
            network: Network::Devnet,
            ..Self::default()
        }
    }

    pub fn fee_recipient(&self) -> Pubkey {
        self.network.fee_recipient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mainnet_fee_recipient() {
        let config = SdkConfig::default();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.fee_recipient(), MAINNET_FEE_RECIPIENT);
        assert_eq!(SdkConfig::devnet().fee_recipient(), DEVNET_FEE_RECIPIENT);
    }

    #[test]
    fn parses_network_names() {
        assert_eq!("mainnet-beta".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(" Devnet ".parse::<Network>().unwrap(), Network::Devnet);
        assert!("testnet".parse::<Network>().is_err());
    }
}
