use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{bonding_curve::ReserveSnapshot, constants::BASIS_POINTS_DIVISOR, error::SdkError};

/// Convert slippage in basis points to the multiplier applied to quoted amounts.
///
/// `0` -> `1.0` (no slippage), `100` -> `0.99`, `10_000` -> `0.0`. Values above
/// 10 000 produce a negative multiplier; the quote functions turn that into a
/// zero bound instead of rejecting it.
pub fn basis_points_to_multiplier(basis_points: u64) -> f64 {
    1.0 - basis_points as f64 / BASIS_POINTS_DIVISOR
}

/// Minimum number of tokens to accept when spending `sol_in` lamports.
///
/// Constant product against the virtual reserves, with the same truncating
/// integer division the program performs:
/// ```text
/// k          = virtual_sol * virtual_token
/// new_token  = k / (virtual_sol + sol_in)
/// tokens_out = (virtual_token - new_token) * multiplier
/// ```
pub fn quote_buy(
    sol_in: u64,
    snapshot: &ReserveSnapshot,
    multiplier: f64,
) -> Result<u64, SdkError> {
    if !snapshot.is_initialized() {
        return Err(SdkError::DivisionByZero);
    }

    let virtual_sol = u128::from(snapshot.virtual_sol_reserves);
    let virtual_token = u128::from(snapshot.virtual_token_reserves);

    let new_virtual_sol = virtual_sol
        .checked_add(u128::from(sol_in))
        .ok_or(SdkError::MathOverflow)?;
    let invariant = virtual_sol
        .checked_mul(virtual_token)
        .ok_or(SdkError::MathOverflow)?;
    let new_virtual_token = invariant
        .checked_div(new_virtual_sol)
        .ok_or(SdkError::DivisionByZero)?;

    let tokens_out = virtual_token
        .checked_sub(new_virtual_token)
        .ok_or(SdkError::MathOverflow)?;

    apply_slippage(tokens_out, multiplier)
}

/// Minimum lamports to accept when selling `tokens_in`.
///
/// Spot price against the current virtual reserves; the reserves are not
/// stepped forward, the program does the authoritative update.
pub fn quote_sell(
    tokens_in: u64,
    snapshot: &ReserveSnapshot,
    multiplier: f64,
) -> Result<u64, SdkError> {
    if !snapshot.is_initialized() {
        return Err(SdkError::DivisionByZero);
    }

    let virtual_sol = u128::from(snapshot.virtual_sol_reserves);
    let virtual_token = u128::from(snapshot.virtual_token_reserves);
    let amount = u128::from(tokens_in);

    let x = virtual_sol.checked_mul(amount).ok_or(SdkError::MathOverflow)?;
    let y = virtual_token.checked_add(amount).ok_or(SdkError::MathOverflow)?;
    let sol_out = x.checked_div(y).ok_or(SdkError::DivisionByZero)?;

    apply_slippage(sol_out, multiplier)
}

/// `floor(amount * multiplier)`, clamped at zero.
///
/// The multiplier enters as its exact binary value and the product is kept in
/// a 96-bit decimal before truncation, so `100 * 0.99` floors to 98 the same
/// way an extended-precision float would.
fn apply_slippage(amount: u128, multiplier: f64) -> Result<u64, SdkError> {
    // NaN lands here too
    if !(multiplier > 0.0) {
        return Ok(0);
    }

    let amount = u64::try_from(amount).map_err(|_| SdkError::MathOverflow)?;
    let multiplier = Decimal::from_f64_retain(multiplier).ok_or(SdkError::MathOverflow)?;

    Decimal::from(amount)
        .checked_mul(multiplier)
        .and_then(|product| product.trunc().to_u64())
        .ok_or(SdkError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn snapshot(virtual_sol: u64, virtual_token: u64) -> ReserveSnapshot {
        ReserveSnapshot {
            real_token_reserves: 0,
            virtual_token_reserves: virtual_token,
            virtual_sol_reserves: virtual_sol,
        }
    }

    #[test]
    fn multiplier_from_basis_points() {
        assert_eq!(basis_points_to_multiplier(0), 1.0);
        assert_eq!(basis_points_to_multiplier(100), 0.99);
        assert_eq!(basis_points_to_multiplier(10_000), 0.0);
        assert!(basis_points_to_multiplier(15_000) < 0.0);
    }

    #[test]
    fn buy_quote_follows_constant_product() {
        let curve = snapshot(1_000_000, 1_000_000_000);
        let invariant: u128 = 1_000_000u128 * 1_000_000_000u128;
        let new_token = invariant / 1_001_000;
        let expected = (1_000_000_000 - new_token) as u64;

        assert_eq!(quote_buy(1_000, &curve, 1.0).unwrap(), expected);
        assert_eq!(expected, 999_001);
    }

    #[test]
    fn slippage_truncates_toward_zero() {
        assert_eq!(apply_slippage(100, 0.99).unwrap(), 98);
        assert_eq!(apply_slippage(999_001, 1.0).unwrap(), 999_001);
        assert_eq!(apply_slippage(1_000, 0.5).unwrap(), 500);
    }

    #[test]
    fn non_positive_multiplier_yields_zero_bound() {
        let curve = snapshot(1_000_000, 1_000_000_000);
        assert_eq!(quote_buy(1_000, &curve, 0.0).unwrap(), 0);
        assert_eq!(quote_sell(1_000, &curve, -0.5).unwrap(), 0);
    }

    #[test]
    fn sell_quote_uses_spot_price() {
        let curve = snapshot(1_000_000, 1_000_000_000);
        // 1_000_000 * 999_001 / 1_000_999_001
        assert_eq!(quote_sell(999_001, &curve, 1.0).unwrap(), 998);
        assert_eq!(quote_sell(0, &curve, 1.0).unwrap(), 0);
    }

    #[test]
    fn uninitialized_curve_cannot_be_quoted() {
        let empty = ReserveSnapshot::default();
        assert_matches!(quote_buy(1, &empty, 1.0), Err(SdkError::DivisionByZero));
        assert_matches!(quote_sell(1, &empty, 1.0), Err(SdkError::DivisionByZero));
        assert_matches!(
            quote_buy(1, &snapshot(0, 1_000), 1.0),
            Err(SdkError::DivisionByZero)
        );
    }

    #[test]
    fn handles_full_u64_reserves() {
        let curve = snapshot(u64::MAX, u64::MAX);
        assert!(quote_buy(u64::MAX, &curve, 1.0).is_ok());
        assert!(quote_sell(u64::MAX, &curve, 1.0).is_ok());
    }
}
