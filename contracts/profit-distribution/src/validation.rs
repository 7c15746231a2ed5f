use shared::constants::MIN_UNIT;
use shared::errors::Error;
use shared::types::{Amount, Units};
use soroban_sdk::{Address, Env};

use crate::storage::is_initialized;

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if is_initialized(env) {
        Ok(())
    } else {
        Err(Error::NotInit)
    }
}

/// Units moved between holders must be at least one whole unit. The upper
/// bound is the sender's own holding, checked once the sender is known.
pub fn validate_units(amount: Units) -> Result<(), Error> {
    if amount < MIN_UNIT {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// The contract itself plays the role of the null recipient: units sent
/// there could never be moved again.
pub fn validate_recipient(env: &Env, to: &Address) -> Result<(), Error> {
    if *to == env.current_contract_address() {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn validate_deposit(amount: Amount) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn validate_withdrawal(amount: Amount) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}
