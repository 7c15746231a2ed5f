//! Proportional distribution of the pooled fund and ownership transfers.

use shared::constants::TOTAL_UNITS;
use shared::errors::Error;
use shared::events::{DEPOSITED, FUNDS_RECEIVED, HOLDER_REMOVED, UNITS_MOVED, WITHDRAWN};
use shared::types::{Amount, Units};
use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::registry;
use crate::storage::{get_pool, get_token, set_pool};
use crate::validation::{validate_recipient, validate_units, validate_withdrawal};

/// Add freshly received funds to the pool and split it. Returns the amount
/// credited to holders.
pub fn on_deposit(env: &Env, amount: Amount) -> Result<Amount, Error> {
    let pool = get_pool(env)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    set_pool(env, pool);
    split(env)
}

/// Credit every active holder `floor(pool / TOTAL_UNITS) * units`.
///
/// The per-unit rate is truncated once for the whole round, so the sum of
/// shares never exceeds the pool. Whatever cannot be attributed per unit
/// stays pooled for the next round.
pub fn split(env: &Env) -> Result<Amount, Error> {
    let pool = get_pool(env);
    let rate = pool / Amount::from(TOTAL_UNITS);
    if rate == 0 {
        return Ok(0);
    }

    let mut distributed: Amount = 0;
    for index in 0..registry::shareholder_count(env) {
        let record = registry::record_at(env, index)?;
        let share = rate
            .checked_mul(Amount::from(record.units))
            .ok_or(Error::ArithmeticOverflow)?;

        registry::credit_balance(env, &record.holder, share)?;
        distributed = distributed
            .checked_add(share)
            .ok_or(Error::ArithmeticOverflow)?;

        env.events().publish((FUNDS_RECEIVED,), (record.holder, share));
    }

    let remaining = pool
        .checked_sub(distributed)
        .ok_or(Error::ArithmeticUnderflow)?;
    set_pool(env, remaining);

    log!(env, "split", pool, distributed, remaining);
    Ok(distributed)
}

/// Fold tokens that reached the contract without going through `deposit`
/// into the pool and split them. Returns the amount credited to holders.
pub fn sync(env: &Env) -> Result<Amount, Error> {
    let token = get_token(env)?;
    let contract = env.current_contract_address();
    let held = TokenClient::new(env, &token).balance(&contract);

    let mut owed = get_pool(env);
    for record in registry::active_records(env)?.iter() {
        owed = owed
            .checked_add(record.balance)
            .ok_or(Error::ArithmeticOverflow)?;
    }
    if held <= owed {
        return Ok(0);
    }

    let surplus = held - owed;
    env.events().publish((DEPOSITED,), (contract, surplus));
    on_deposit(env, surplus)
}

/// Debit a holder's balance and pay it out. Returns the balance left.
pub fn withdraw(env: &Env, holder: &Address, amount: Amount) -> Result<Amount, Error> {
    validate_withdrawal(amount)?;
    let remaining = registry::debit_balance(env, holder, amount)?;
    pay_to(env, holder, amount)?;
    Ok(remaining)
}

/// Withdraw a holder's whole balance
pub fn withdraw_all(env: &Env, holder: &Address) -> Result<Amount, Error> {
    let balance = registry::record_of(env, holder)?.balance;
    withdraw(env, holder, balance)?;
    Ok(balance)
}

/// Move `amount` from the contract to `holder` in the configured token.
pub fn pay_to(env: &Env, holder: &Address, amount: Amount) -> Result<(), Error> {
    let token = get_token(env)?;
    let client = TokenClient::new(env, &token);

    match client.try_transfer(&env.current_contract_address(), holder, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "payout failed", holder.clone(), amount);
            return Err(Error::PayoutFailed);
        }
    }

    env.events().publish((WITHDRAWN,), (holder.clone(), amount));
    Ok(())
}

/// Move ownership units from one holder to another.
///
/// Every check runs before the first write, so a rejected transfer leaves
/// both records as they were. A sender left with zero units is settled and
/// erased from the registry.
pub fn transfer_units(env: &Env, from: &Address, to: &Address, amount: Units) -> Result<(), Error> {
    validate_units(amount)?;
    validate_recipient(env, to)?;

    let sender = registry::record_of(env, from)?;
    if amount > sender.units {
        return Err(Error::InsufficientUnits);
    }
    if from == to {
        return Ok(());
    }

    let receiver_exists = registry::is_shareholder(env, to);
    if receiver_exists {
        registry::record_of(env, to)?
            .units
            .checked_add(amount)
            .filter(|units| *units <= TOTAL_UNITS)
            .ok_or(Error::ArithmeticOverflow)?;
    }

    let delta = i64::from(amount);
    let remaining = registry::adjust_units(env, from, -delta)?;
    if receiver_exists {
        registry::adjust_units(env, to, delta)?;
    } else {
        registry::insert(env, to, amount, from)?;
    }

    env.events()
        .publish((UNITS_MOVED,), (from.clone(), to.clone(), amount));

    if remaining == 0 {
        settle_exit(env, from)?;
    }

    Ok(())
}

/// Pay out whatever a departing holder is still owed, then erase its record.
fn settle_exit(env: &Env, holder: &Address) -> Result<(), Error> {
    let owed = registry::record_of(env, holder)?.balance;
    if owed > 0 {
        registry::debit_balance(env, holder, owed)?;
        pay_to(env, holder, owed)?;
    }

    registry::remove(env, holder)?;
    env.events().publish((HOLDER_REMOVED,), holder.clone());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::get_slot_id;
    use crate::ProfitDistribution;
    use soroban_sdk::testutils::Address as _;

    fn setup() -> (Env, Address, Address) {
        let env = Env::default();
        let contract_id = env.register_contract(None, ProfitDistribution);
        let parent = Address::generate(&env);
        (env, contract_id, parent)
    }

    #[test]
    fn test_split_keeps_remainder_in_pool() {
        let (env, contract_id, parent) = setup();
        let holders = [
            (Address::generate(&env), 4300),
            (Address::generate(&env), 1700),
            (Address::generate(&env), 3700),
            (Address::generate(&env), 300),
        ];

        env.as_contract(&contract_id, || {
            for (holder, units) in holders.iter() {
                registry::insert(&env, holder, *units, &parent).unwrap();
            }

            set_pool(&env, 20_011);
            assert_eq!(split(&env), Ok(20_000));
            assert_eq!(get_pool(&env), 11);

            for (holder, units) in holders.iter() {
                let record = registry::record_of(&env, holder).unwrap();
                assert_eq!(record.balance, Amount::from(*units) * 2);
            }
        });
    }

    #[test]
    fn test_split_below_one_per_unit_credits_nothing() {
        let (env, contract_id, parent) = setup();
        let holder = Address::generate(&env);

        env.as_contract(&contract_id, || {
            registry::insert(&env, &holder, TOTAL_UNITS, &parent).unwrap();

            assert_eq!(on_deposit(&env, 9_999), Ok(0));
            assert_eq!(get_pool(&env), 9_999);
            assert_eq!(registry::record_of(&env, &holder).unwrap().balance, 0);

            // the next deposit picks up what was deferred
            assert_eq!(on_deposit(&env, 1), Ok(10_000));
            assert_eq!(get_pool(&env), 0);
        });
    }

    #[test]
    fn test_transfer_overflow_leaves_sender_untouched() {
        let (env, contract_id, parent) = setup();
        let sender = Address::generate(&env);
        let receiver = Address::generate(&env);

        env.as_contract(&contract_id, || {
            // Only reachable by seeding the registry past the fixed supply
            registry::insert(&env, &sender, 10, &parent).unwrap();
            registry::insert(&env, &receiver, TOTAL_UNITS, &parent).unwrap();

            assert_eq!(
                transfer_units(&env, &sender, &receiver, 5),
                Err(Error::ArithmeticOverflow)
            );
            assert_eq!(registry::record_of(&env, &sender).unwrap().units, 10);
            assert_eq!(registry::record_of(&env, &receiver).unwrap().units, TOTAL_UNITS);
        });
    }

    #[test]
    fn test_transfer_validation_order() {
        let (env, contract_id, parent) = setup();
        let holder = Address::generate(&env);
        let stranger = Address::generate(&env);

        env.as_contract(&contract_id, || {
            registry::insert(&env, &holder, 100, &parent).unwrap();

            assert_eq!(
                transfer_units(&env, &holder, &stranger, 0),
                Err(Error::InvalidAmount)
            );
            assert_eq!(
                transfer_units(&env, &holder, &contract_id, 1),
                Err(Error::InvalidAmount)
            );
            assert_eq!(
                transfer_units(&env, &stranger, &holder, 1),
                Err(Error::NotAShareholder)
            );
            assert_eq!(
                transfer_units(&env, &stranger, &holder, TOTAL_UNITS + 1),
                Err(Error::NotAShareholder)
            );
            assert_eq!(
                transfer_units(&env, &holder, &stranger, TOTAL_UNITS + 1),
                Err(Error::InsufficientUnits)
            );
            assert_eq!(
                transfer_units(&env, &holder, &stranger, 101),
                Err(Error::InsufficientUnits)
            );
            assert_eq!(get_slot_id(&env, &stranger), 0);
        });
    }

    #[test]
    fn test_self_transfer_is_a_no_op() {
        let (env, contract_id, parent) = setup();
        let holder = Address::generate(&env);

        env.as_contract(&contract_id, || {
            registry::insert(&env, &holder, 100, &parent).unwrap();

            assert_eq!(transfer_units(&env, &holder, &holder, 100), Ok(()));
            assert_eq!(registry::record_of(&env, &holder).unwrap().units, 100);
            assert_eq!(registry::shareholder_count(&env), 1);
        });
    }
}
