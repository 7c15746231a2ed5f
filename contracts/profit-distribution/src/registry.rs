//! Dense shareholder registry.
//!
//! Records live in `Slot(0..active_count)`; slots at or past `active_count`
//! are inert leftovers of earlier removals and are reused by `insert`. The
//! `SlotId` index is the only authority on whether an address is a holder.

use shared::constants::{MIN_UNIT, TOTAL_UNITS};
use shared::errors::Error;
use shared::events::HOLDER_ADDED;
use shared::types::{Amount, ShareholderRecord, Units};
use soroban_sdk::{Address, Env, Vec};

use crate::storage::*;

pub fn shareholder_count(env: &Env) -> u32 {
    get_active_count(env)
}

pub fn is_shareholder(env: &Env, holder: &Address) -> bool {
    get_slot_id(env, holder) != 0
}

/// Resolve a holder to its 0-based slot index
pub fn locate(env: &Env, holder: &Address) -> Result<u32, Error> {
    match get_slot_id(env, holder) {
        0 => Err(Error::NotAShareholder),
        id => Ok(id - 1),
    }
}

/// Retrieve the active record at a slot index
pub fn record_at(env: &Env, index: u32) -> Result<ShareholderRecord, Error> {
    if index >= get_active_count(env) {
        return Err(Error::SlotOutOfRange);
    }
    get_slot(env, index)
}

/// Retrieve the active record of a holder
pub fn record_of(env: &Env, holder: &Address) -> Result<ShareholderRecord, Error> {
    let index = locate(env, holder)?;
    get_slot(env, index)
}

/// All active records in slot order
pub fn active_records(env: &Env) -> Result<Vec<ShareholderRecord>, Error> {
    let mut records = Vec::new(env);
    for index in 0..get_active_count(env) {
        records.push_back(get_slot(env, index)?);
    }
    Ok(records)
}

/// Add a new holder with a zero balance, reusing an inert slot when one
/// exists. Returns the slot index the holder was placed at.
pub fn insert(env: &Env, holder: &Address, units: Units, parent: &Address) -> Result<u32, Error> {
    if is_shareholder(env, holder) {
        return Err(Error::AlreadyAShareholder);
    }
    if units < MIN_UNIT || units > TOTAL_UNITS {
        return Err(Error::InvalidAmount);
    }

    let index = get_active_count(env);
    let capacity = get_slot_capacity(env);
    let next_count = index.checked_add(1).ok_or(Error::ArithmeticOverflow)?;

    let record = ShareholderRecord {
        holder: holder.clone(),
        units,
        balance: 0,
    };
    set_slot(env, index, &record);

    // No inert slot left, the array grows by one
    if index == capacity {
        set_slot_capacity(env, next_count);
    }

    set_slot_id(env, holder, next_count);
    set_active_count(env, next_count);

    env.events()
        .publish((HOLDER_ADDED,), (holder.clone(), parent.clone(), units));

    Ok(index)
}

/// Swap-delete a holder: the last active record moves into the freed slot.
///
/// Does not look at the holder's units; callers drain them first.
pub fn remove(env: &Env, holder: &Address) -> Result<(), Error> {
    let index = locate(env, holder)?;
    let last = get_active_count(env)
        .checked_sub(1)
        .ok_or(Error::ArithmeticUnderflow)?;

    if index != last {
        let moved = get_slot(env, last)?;
        set_slot(env, index, &moved);
        set_slot_id(env, &moved.holder, index + 1);
    }

    clear_slot_id(env, holder);
    set_active_count(env, last);

    Ok(())
}

/// Apply a signed delta to a holder's units and return the new count.
///
/// Zero is accepted here; it only ever exists right before `remove`.
pub fn adjust_units(env: &Env, holder: &Address, delta: i64) -> Result<Units, Error> {
    let index = locate(env, holder)?;
    let mut record = get_slot(env, index)?;

    let updated = i64::from(record.units)
        .checked_add(delta)
        .ok_or(Error::ArithmeticOverflow)?;
    if updated < 0 {
        return Err(Error::ArithmeticUnderflow);
    }
    if updated > i64::from(TOTAL_UNITS) {
        return Err(Error::ArithmeticOverflow);
    }

    record.units = Units::try_from(updated).map_err(|_| Error::ArithmeticOverflow)?;
    set_slot(env, index, &record);

    Ok(record.units)
}

/// Credit the record at an active slot, returning the updated record
fn credit_at(env: &Env, index: u32, amount: Amount) -> Result<ShareholderRecord, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let mut record = record_at(env, index)?;
    record.balance = record
        .balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    set_slot(env, index, &record);
    Ok(record)
}

pub fn credit_balance(env: &Env, holder: &Address, amount: Amount) -> Result<Amount, Error> {
    let index = locate(env, holder)?;
    Ok(credit_at(env, index, amount)?.balance)
}

/// Debit a holder's balance, returning what is left
pub fn debit_balance(env: &Env, holder: &Address, amount: Amount) -> Result<Amount, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let index = locate(env, holder)?;
    let mut record = get_slot(env, index)?;
    if amount > record.balance {
        return Err(Error::InsufficientBalance);
    }
    record.balance = record
        .balance
        .checked_sub(amount)
        .ok_or(Error::ArithmeticUnderflow)?;
    set_slot(env, index, &record);
    Ok(record.balance)
}
