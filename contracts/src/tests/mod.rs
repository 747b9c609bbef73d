//! Test modules for the two-party price wager contract.

mod cancellation;
