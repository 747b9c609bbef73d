//! Typed access to the wager's persisted state.

use soroban_sdk::Env;

use crate::errors::ContractError;
use crate::types::{DataKey, Party, Payout, Phase, Wager, WagerTerms};

const DAY_IN_LEDGERS: u32 = 17_280;
/// Entries are extended once their remaining TTL drops below a week
pub(crate) const WAGER_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const WAGER_TTL_BUMP: u32 = 30 * DAY_IN_LEDGERS;

pub fn wager(env: &Env) -> Result<Wager, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Wager)
        .ok_or(ContractError::NotInitialized)
}

pub fn terms(env: &Env) -> Result<WagerTerms, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Terms)
        .ok_or(ContractError::NotInitialized)
}

pub fn phase(env: &Env) -> Result<Phase, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Phase)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_phase(env: &Env, phase: Phase) {
    env.storage().persistent().set(&DataKey::Phase, &phase);
}

pub fn deposit(env: &Env, party: Party) -> Option<i128> {
    env.storage().persistent().get(&DataKey::Deposit(party))
}

pub fn set_deposit(env: &Env, party: Party, amount: i128) {
    env.storage().persistent().set(&DataKey::Deposit(party), &amount);
}

pub fn payout(env: &Env) -> Option<Payout> {
    env.storage().persistent().get(&DataKey::Payout)
}

pub fn set_payout(env: &Env, payout: &Payout) {
    env.storage().persistent().set(&DataKey::Payout, payout);
}

/// Writes the immutable parts of the wager plus its starting phase
pub fn init(env: &Env, wager: &Wager, terms: &WagerTerms) {
    env.storage().persistent().set(&DataKey::Wager, wager);
    env.storage().persistent().set(&DataKey::Terms, terms);
    set_phase(env, Phase::Created);
    extend(env);
}

/// Keeps every live wager entry from being archived before settlement
pub fn extend(env: &Env) {
    let persistent = env.storage().persistent();

    for key in [DataKey::Wager, DataKey::Terms, DataKey::Phase] {
        persistent.extend_ttl(&key, WAGER_TTL_THRESHOLD, WAGER_TTL_BUMP);
    }

    for party in [Party::A, Party::B] {
        let key = DataKey::Deposit(party);
        if persistent.has(&key) {
            persistent.extend_ttl(&key, WAGER_TTL_THRESHOLD, WAGER_TTL_BUMP);
        }
    }
}
