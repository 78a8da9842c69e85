use cosmwasm_std::{OverflowError, OverflowOperation, StdError, StdResult, Uint128, Uint256};

use beacon::{helper::checked_ceil_div, staking::StakeRecord};

/// Applies a deposit of `amount` at `now` to a stake record.
///
/// A record without balance restarts vesting at `now`. Otherwise the vesting start moves towards
/// `now` by the weight of the deposit in the new balance:
///
/// `timestamp + ceil(amount * (now - timestamp) / (balance + amount))`
///
/// Rounding up keeps the vested amount after a top-up from ever exceeding what a weighted
/// average of the deposits would allow. The vesting duration is re-read on every deposit.
pub fn deposit(
    record: &StakeRecord,
    amount: Uint128,
    now: u64,
    vesting_length: u64,
) -> StdResult<StakeRecord> {
    if record.balance.is_zero() {
        return Ok(StakeRecord {
            balance: amount,
            timestamp: now,
            duration: vesting_length,
        });
    }

    let balance = record.balance.checked_add(amount)?;
    let elapsed = now.saturating_sub(record.timestamp);

    // bounded by `elapsed` since amount <= balance
    let shift = checked_ceil_div(amount.full_mul(elapsed), Uint256::from(balance))?;
    let shift = u64::try_from(Uint128::try_from(shift)?.u128())
        .map_err(|_| StdError::generic_err("Vesting anchor shift does not fit in u64"))?;

    let timestamp = record.timestamp.checked_add(shift).ok_or_else(|| {
        StdError::overflow(OverflowError::new(
            OverflowOperation::Add,
            record.timestamp,
            shift,
        ))
    })?;

    Ok(StakeRecord {
        balance,
        timestamp,
        duration: vesting_length,
    })
}

/// Vested part of the balance at `now`, linear over `duration` from `timestamp`.
pub fn available(record: &StakeRecord, now: u64) -> Uint128 {
    let elapsed = now.saturating_sub(record.timestamp);
    if elapsed >= record.duration {
        return record.balance;
    }
    record.balance.multiply_ratio(elapsed, record.duration)
}
