//! Escrow ledger: which party has funded, with how much, and what that
//! means for the phase.

use soroban_sdk::{Address, Env};

use crate::asset;
use crate::errors::ContractError;
use crate::storage;
use crate::types::{Party, Phase};

/// Checks that `party` may deposit now. Nothing is written.
///
/// A repeat deposit reports `AlreadyDeposited` regardless of phase.
pub fn check_deposit(env: &Env, party: Party) -> Result<(), ContractError> {
    if storage::deposit(env, party).is_some() {
        return Err(ContractError::AlreadyDeposited);
    }

    if !storage::phase(env)?.is_open() {
        return Err(ContractError::InvalidPhase);
    }

    Ok(())
}

/// Records a deposit whose funds have already been pulled and advances the
/// phase. Returns the new phase.
pub fn record_deposit(env: &Env, party: Party, amount: i128) -> Result<Phase, ContractError> {
    check_deposit(env, party)?;

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    storage::set_deposit(env, party, amount);

    let phase = if storage::deposit(env, party.counterparty()).is_some() {
        Phase::Funded
    } else {
        Phase::PartiallyFunded
    };
    storage::set_phase(env, phase);

    Ok(phase)
}

/// The single deposit an open wager can hold, if any
pub fn open_deposit(env: &Env) -> Option<(Party, i128)> {
    [Party::A, Party::B]
        .into_iter()
        .find_map(|party| storage::deposit(env, party).map(|amount| (party, amount)))
}

/// Fails with `TransferFailed` unless the contract holds at least `amount` of `asset`
pub fn ensure_held(env: &Env, asset: &Address, amount: i128) -> Result<(), ContractError> {
    let held = asset::balance_of(env, asset, &env.current_contract_address());
    if held < amount {
        return Err(ContractError::TransferFailed);
    }
    Ok(())
}
