use std::fmt;

use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{GLOBAL_INITIAL_RESERVES_OFFSET, RESERVES_LAYOUT_LEN},
    error::SdkError,
    ledger::LedgerClient,
};

/// Point-in-time reserves of a bonding curve, as stored on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReserveSnapshot {
    pub real_token_reserves: u64,
    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,
}

impl ReserveSnapshot {
    /// Decode the leading reserve fields of a bonding curve account.
    ///
    /// Layout is three little-endian u64 values with no padding:
    /// real token reserves, virtual token reserves, virtual SOL reserves.
    /// Anything after the first 24 bytes is ignored.
    pub fn decode(data: &[u8]) -> Result<Self, SdkError> {
        if data.len() < RESERVES_LAYOUT_LEN {
            return Err(SdkError::InsufficientData {
                expected: RESERVES_LAYOUT_LEN,
                actual: data.len(),
            });
        }

        Ok(Self {
            real_token_reserves: read_u64_le(data, 0),
            virtual_token_reserves: read_u64_le(data, 8),
            virtual_sol_reserves: read_u64_le(data, 16),
        })
    }

    /// Reserves a freshly created curve starts with, read from the global
    /// config account (`initial_virtual_token_reserves`,
    /// `initial_virtual_sol_reserves`, `initial_real_token_reserves`).
    pub fn decode_initial(global_data: &[u8]) -> Result<Self, SdkError> {
        let start = GLOBAL_INITIAL_RESERVES_OFFSET;
        if global_data.len() < start + RESERVES_LAYOUT_LEN {
            return Err(SdkError::InsufficientData {
                expected: start + RESERVES_LAYOUT_LEN,
                actual: global_data.len(),
            });
        }

        Ok(Self {
            virtual_token_reserves: read_u64_le(global_data, start),
            virtual_sol_reserves: read_u64_le(global_data, start + 8),
            real_token_reserves: read_u64_le(global_data, start + 16),
        })
    }

    /// Whether the curve can be quoted against.
    pub fn is_initialized(&self) -> bool {
        self.virtual_sol_reserves > 0 && self.virtual_token_reserves > 0
    }
}

impl fmt::Display for ReserveSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RealTokenReserves={}, VirtualTokenReserves={}, VirtualSolReserves={}",
            self.real_token_reserves, self.virtual_token_reserves, self.virtual_sol_reserves
        )
    }
}

fn read_u64_le(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Read a bonding curve account through the ledger client and decode its reserves.
pub async fn fetch_reserve_snapshot<L: LedgerClient + ?Sized>(
    client: &L,
    bonding_curve: &Pubkey,
) -> Result<ReserveSnapshot, SdkError> {
    let data = client
        .get_account_data(bonding_curve)
        .await?
        .ok_or_else(|| SdkError::account_lookup(bonding_curve, "bonding curve account not found"))?;

    let snapshot = ReserveSnapshot::decode(&data)?;
    log::debug!("bonding curve {}: {}", bonding_curve, snapshot);

    Ok(snapshot)
}

/// Initial reserves of curves created right now, from the global config account.
pub async fn fetch_initial_reserves<L: LedgerClient + ?Sized>(
    client: &L,
    global: &Pubkey,
) -> Result<ReserveSnapshot, SdkError> {
    let data = client
        .get_account_data(global)
        .await?
        .ok_or_else(|| SdkError::account_lookup(global, "global config account not found"))?;

    ReserveSnapshot::decode_initial(&data)
}
