#![no_std]

use shared::{
    constants::TOTAL_UNITS,
    errors::Error,
    events::{DEPOSITED, INITIALIZED},
    types::{Amount, ShareholderRecord, Units},
};
use soroban_sdk::{contract, contractimpl, contractmeta, token::TokenClient, Address, Env, Vec};

mod distribution;
mod registry;
mod storage;
mod types;
mod validation;


use storage::*;
use validation::{require_initialized, validate_deposit};

contractmeta!(
    key = "name",
    val = "Profit Distribution Contract"
);

#[contract]
pub struct ProfitDistribution;

#[contractimpl]
impl ProfitDistribution {
    /// Bootstrap the registry: the founder receives every ownership unit.
    ///
    /// # Arguments
    /// * `founder` - Sole initial holder
    /// * `token` - Token that deposits and payouts are made in
    pub fn initialize(env: Env, founder: Address, token: Address) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInit);
        }
        founder.require_auth();

        set_token(&env, &token);
        set_founder(&env, &founder);
        registry::insert(&env, &founder, TOTAL_UNITS, &founder)?;

        env.events().publish((INITIALIZED,), (founder, token));

        Ok(())
    }

    /// Deposit funds and split them across current holders
    ///
    /// # Arguments
    /// * `from` - Address the tokens are pulled from
    /// * `amount` - Non-negative amount; zero only re-runs the split
    ///
    /// # Returns
    /// The amount credited to holder balances in this round
    pub fn deposit(env: Env, from: Address, amount: Amount) -> Result<Amount, Error> {
        require_initialized(&env)?;
        from.require_auth();
        validate_deposit(amount)?;

        if amount > 0 {
            let token_client = TokenClient::new(&env, &get_token(&env)?);
            token_client.transfer(&from, &env.current_contract_address(), &amount);
        }

        env.events().publish((DEPOSITED,), (from, amount));

        distribution::on_deposit(&env, amount)
    }

    /// Pick up tokens transferred straight to the contract and split them.
    /// Anyone may call this.
    pub fn sync(env: Env) -> Result<Amount, Error> {
        require_initialized(&env)?;
        distribution::sync(&env)
    }

    /// Withdraw part of the caller's accumulated balance
    ///
    /// # Arguments
    /// * `holder` - Shareholder withdrawing its own balance
    /// * `amount` - Positive amount, at most the current balance
    ///
    /// # Errors
    /// * `InsufficientBalance` - Amount exceeds the balance
    /// * `PayoutFailed` - The token refused the transfer; nothing is debited
    pub fn withdraw(env: Env, holder: Address, amount: Amount) -> Result<Amount, Error> {
        require_initialized(&env)?;
        holder.require_auth();
        distribution::withdraw(&env, &holder, amount)
    }

    /// Withdraw the caller's whole balance and return how much was paid
    pub fn withdraw_all(env: Env, holder: Address) -> Result<Amount, Error> {
        require_initialized(&env)?;
        holder.require_auth();
        distribution::withdraw_all(&env, &holder)
    }

    /// Transfer ownership units to another address
    ///
    /// # Arguments
    /// * `from` - Current holder giving up units
    /// * `to` - Receiver, added to the registry if unknown
    /// * `amount` - Units to move
    ///
    /// # Errors
    /// * `InvalidAmount` - Zero units, or the contract itself as receiver
    /// * `NotAShareholder` - `from` holds nothing
    /// * `InsufficientUnits` - `from` holds fewer than `amount`
    pub fn transfer_units(env: Env, from: Address, to: Address, amount: Units) -> Result<(), Error> {
        require_initialized(&env)?;
        from.require_auth();
        distribution::transfer_units(&env, &from, &to, amount)
    }

    pub fn shareholder_count(env: Env) -> u32 {
        registry::shareholder_count(&env)
    }

    pub fn units_of(env: Env, holder: Address) -> Result<Units, Error> {
        Ok(registry::record_of(&env, &holder)?.units)
    }

    pub fn balance_of(env: Env, holder: Address) -> Result<Amount, Error> {
        Ok(registry::record_of(&env, &holder)?.balance)
    }

    pub fn shareholder(env: Env, holder: Address) -> Result<ShareholderRecord, Error> {
        registry::record_of(&env, &holder)
    }

    /// Record at an active slot. Slot order changes whenever a holder leaves.
    pub fn shareholder_at(env: Env, index: u32) -> Result<ShareholderRecord, Error> {
        registry::record_at(&env, index)
    }

    pub fn shareholders(env: Env) -> Result<Vec<ShareholderRecord>, Error> {
        registry::active_records(&env)
    }

    /// Funds received but not yet attributed to any holder
    pub fn pool(env: Env) -> Amount {
        get_pool(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }

    pub fn founder(env: Env) -> Result<Address, Error> {
        get_founder(&env)
    }

    pub fn total_units(_env: Env) -> Units {
        TOTAL_UNITS
    }
}
