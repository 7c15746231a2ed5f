use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,            // deposit and payout token
    Founder,          // identity that received TOTAL_UNITS at bootstrap
    Pool,             // undistributed funds awaiting split
    ActiveCount,      // number of active slots
    SlotCapacity,     // physical length of the slot array
    Slot(u32),        // slot index -> ShareholderRecord
    SlotId(Address),  // holder -> 1-based slot id, absent means not a holder
}
