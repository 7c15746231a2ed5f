use shared::errors::Error;
use shared::types::{Amount, ShareholderRecord};
use soroban_sdk::{Address, Env};

use crate::types::DataKey;

/// Store the token deposits and payouts are made in
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Retrieve the configured token
pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Token)
        .ok_or(Error::NotInit)
}

/// Check if the contract has been bootstrapped
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn set_founder(env: &Env, founder: &Address) {
    env.storage().instance().set(&DataKey::Founder, founder);
}

pub fn get_founder(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Founder)
        .ok_or(Error::NotInit)
}

/// Retrieve the pooled fund, defaults to 0
pub fn get_pool(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::Pool)
        .unwrap_or(0)
}

pub fn set_pool(env: &Env, pool: Amount) {
    env.storage().instance().set(&DataKey::Pool, &pool);
}

pub fn get_active_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::ActiveCount)
        .unwrap_or(0)
}

pub fn set_active_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ActiveCount, &count);
}

/// Physical number of slots ever written, active or inert
pub fn get_slot_capacity(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::SlotCapacity)
        .unwrap_or(0)
}

pub fn set_slot_capacity(env: &Env, capacity: u32) {
    env.storage().instance().set(&DataKey::SlotCapacity, &capacity);
}

/// Store a record at a physical slot
pub fn set_slot(env: &Env, index: u32, record: &ShareholderRecord) {
    env.storage().persistent().set(&DataKey::Slot(index), record);
}

/// Retrieve the record at a physical slot
pub fn get_slot(env: &Env, index: u32) -> Result<ShareholderRecord, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, ShareholderRecord>(&DataKey::Slot(index))
        .ok_or(Error::SlotOutOfRange)
}

/// Retrieve the 1-based slot id of a holder, 0 when absent
pub fn get_slot_id(env: &Env, holder: &Address) -> u32 {
    env.storage()
        .persistent()
        .get::<DataKey, u32>(&DataKey::SlotId(holder.clone()))
        .unwrap_or(0)
}

pub fn set_slot_id(env: &Env, holder: &Address, id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::SlotId(holder.clone()), &id);
}

pub fn clear_slot_id(env: &Env, holder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::SlotId(holder.clone()));
}
