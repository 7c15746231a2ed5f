use crate::types::Units;

/// Fixed supply of ownership units shared by all holders.
pub const TOTAL_UNITS: Units = 10_000;

/// Smallest transferable amount of units.
pub const MIN_UNIT: Units = 1;
