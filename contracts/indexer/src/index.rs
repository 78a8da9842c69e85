//! Ranked locator set of a single index.
//!
//! Every index keeps at most one locator per account. Entries are stored twice: under
//! [`LOCATORS`] for lookups by account and under [`RANKING`] for iteration by score.
//! The two maps are always updated together.

use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};
use cw_storage_plus::Bound;

use beacon::indexer::{IndexInfo, LocatorEntry};

use crate::{
    contract::ContractResult,
    error::ContractError,
    state::{next_locator_nonce, LocatorRecord, LOCATORS, RANKING},
};

fn ranking_key(index_id: u64, record: &LocatorRecord) -> (u64, u128, u64) {
    (index_id, u128::MAX - record.score.u128(), record.nonce)
}

/// Inserts or replaces the locator of `account`.
/// An updated entry is re-ranked as the most recent write among equal scores.
/// Returns the replaced record, if any.
pub fn set_locator(
    store: &mut dyn Storage,
    index: &mut IndexInfo,
    account: &Addr,
    score: Uint128,
    locator: String,
) -> StdResult<Option<LocatorRecord>> {
    let previous = LOCATORS.may_load(store, (index.id, account))?;
    match &previous {
        Some(record) => RANKING.remove(store, ranking_key(index.id, record)),
        None => index.length += 1,
    }

    let record = LocatorRecord {
        score,
        locator,
        nonce: next_locator_nonce(store)?,
    };
    RANKING.save(store, ranking_key(index.id, &record), account)?;
    LOCATORS.save(store, (index.id, account), &record)?;

    Ok(previous)
}

/// Removes the locator of `account` and returns it.
pub fn unset_locator(
    store: &mut dyn Storage,
    index: &mut IndexInfo,
    account: &Addr,
) -> ContractResult<LocatorRecord> {
    let record = LOCATORS
        .may_load(store, (index.id, account))?
        .ok_or_else(|| ContractError::EntryDoesNotExist {
            account: account.to_string(),
        })?;

    RANKING.remove(store, ranking_key(index.id, &record));
    LOCATORS.remove(store, (index.id, account));
    index.length -= 1;

    Ok(record)
}

pub fn get_locator(
    store: &dyn Storage,
    index_id: u64,
    account: &Addr,
) -> StdResult<Option<LocatorRecord>> {
    LOCATORS.may_load(store, (index_id, account))
}

/// Score of `account`, zero if it never set a locator.
pub fn get_score(store: &dyn Storage, index_id: u64, account: &Addr) -> StdResult<Uint128> {
    Ok(get_locator(store, index_id, account)?
        .map(|record| record.score)
        .unwrap_or_default())
}

/// Returns up to `limit` entries by descending score. When `start_after` is given the page
/// starts right after that account's entry; an account without an entry yields an empty page.
pub fn get_locators(
    store: &dyn Storage,
    index_id: u64,
    start_after: Option<&Addr>,
    limit: usize,
) -> StdResult<Vec<LocatorEntry>> {
    let min = match start_after {
        Some(account) => match get_locator(store, index_id, account)? {
            Some(record) => {
                let (_, inverted_score, nonce) = ranking_key(index_id, &record);
                Some(Bound::exclusive((inverted_score, nonce)))
            }
            None => return Ok(vec![]),
        },
        None => None,
    };

    RANKING
        .sub_prefix(index_id)
        .range(store, min, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, account) = item?;
            let record = LOCATORS.load(store, (index_id, &account))?;
            Ok(LocatorEntry {
                account,
                score: record.score,
                locator: record.locator,
            })
        })
        .collect()
}
