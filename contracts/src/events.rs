//! Contract events for deposits, cancellation and settlement.
//!
//! Topics are plain tuples. `Events::publish` is deprecated in soroban-sdk 23.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::Payout;

#[allow(deprecated)]
pub fn deposited(env: &Env, party: Address, amount: i128) {
    env.events().publish((symbol_short!("deposit"), party), amount);
}

#[allow(deprecated)]
pub fn cancelled(env: &Env, caller: Address, refunded: i128) {
    env.events().publish((symbol_short!("cancel"), caller), refunded);
}

#[allow(deprecated)]
pub fn settled(env: &Env, payout: &Payout) {
    env.events().publish((symbol_short!("settle"),), payout.clone());
}
