//! Contract error types for the two-party price wager.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Caller is neither of the two designated parties
    UnknownParty = 1,
    /// Party has already deposited its stake
    AlreadyDeposited = 2,
    /// Operation is not allowed in the wager's current phase
    InvalidPhase = 3,
    /// Oracle reading is missing or older than the staleness bound
    StaleOracleData = 4,
    /// Asset ledger rejected a transfer, or escrow does not cover it
    TransferFailed = 5,
    /// Both party addresses are the same
    InvalidParties = 6,
    /// Both asset identifiers are the same
    InvalidAssets = 7,
    /// Stake must be greater than zero
    InvalidAmount = 8,
    /// Wager condition or payout rule is out of range
    InvalidTerms = 9,
    /// Oracle reported a non-positive price
    InvalidPrice = 10,
    /// Arithmetic overflow occurred
    Overflow = 11,
    /// Settlement time has not been reached
    SettlementNotDue = 12,
    /// Wager state missing from storage
    NotInitialized = 13,
}
