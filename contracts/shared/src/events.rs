use soroban_sdk::{symbol_short, Symbol};

// Lifecycle Events
pub const INITIALIZED: Symbol = symbol_short!("init");
pub const HOLDER_ADDED: Symbol = symbol_short!("hldr_add");
pub const HOLDER_REMOVED: Symbol = symbol_short!("hldr_rem");

// Distribution Events
pub const DEPOSITED: Symbol = symbol_short!("deposit");
pub const FUNDS_RECEIVED: Symbol = symbol_short!("funds_rcv");
pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");

// Ownership Events
pub const UNITS_MOVED: Symbol = symbol_short!("units_mv");
