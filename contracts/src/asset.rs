//! Asset ledger adapter over the Soroban token interface.
//!
//! Transfers go through `try_transfer` so a rejection by the token contract
//! comes back as `TransferFailed` instead of aborting the whole call.

use soroban_sdk::{token, Address, Env};

use crate::errors::ContractError;

/// Moves `amount` of `asset` from `from` into the contract's escrow
pub fn transfer_in(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    let client = token::Client::new(env, asset);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Pays `amount` of `asset` out of escrow to `to`. Zero amounts are skipped.
pub fn transfer_out(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }

    let client = token::Client::new(env, asset);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

pub fn balance_of(env: &Env, asset: &Address, holder: &Address) -> i128 {
    token::Client::new(env, asset).balance(holder)
}

pub fn decimals_of(env: &Env, asset: &Address) -> u32 {
    token::Client::new(env, asset).decimals()
}
