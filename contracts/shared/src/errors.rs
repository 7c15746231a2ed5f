use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,

    // Registry Errors
    NotAShareholder = 3,
    AlreadyAShareholder = 4,
    InsufficientUnits = 5,
    InsufficientBalance = 6,
    InvalidAmount = 7,

    // Arithmetic guards around units and balances
    ArithmeticOverflow = 8,
    ArithmeticUnderflow = 9,

    // Payout Errors
    PayoutFailed = 10,

    SlotOutOfRange = 11,
}
