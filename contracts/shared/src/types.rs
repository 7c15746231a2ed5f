use soroban_sdk::{contracttype, Address};

/// Token amounts, in the token's minor units.
pub type Amount = i128;

/// Ownership units out of `TOTAL_UNITS`.
pub type Units = u32;

/// One holder's slot in the shareholder registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareholderRecord {
    pub holder: Address,
    pub units: Units,  // always in [MIN_UNIT, TOTAL_UNITS] while active
    pub balance: Amount,  // withdrawable, never negative
}
