//! Tests for aborting the wager before it is funded.

use super::setup::{Setup, STAKE, STARTING_BALANCE};
use crate::errors::ContractError;
use crate::types::Phase;
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_cancel_without_deposits() {
    let setup = Setup::new();

    let refunded = setup.client.cancel_before_initiation(&setup.party_b);

    assert_eq!(refunded, 0);
    assert_eq!(setup.client.get_phase(), Phase::Cancelled);
}

#[test]
fn test_cancel_refunds_single_deposit() {
    let setup = Setup::new();

    // STEP 1: only party A commits
    setup.client.deposit(&setup.party_a);
    assert_eq!(setup.asset_a.balance(&setup.party_a), STARTING_BALANCE - STAKE);

    // STEP 2: party B backs out
    let refunded = setup.client.cancel_before_initiation(&setup.party_b);
    assert_eq!(refunded, STAKE);
    assert_eq!(setup.client.get_phase(), Phase::Cancelled);

    // STEP 3: A's stake is back with A and escrow is empty
    assert_eq!(setup.asset_a.balance(&setup.party_a), STARTING_BALANCE);
    assert_eq!(setup.asset_a.balance(&setup.client.address), 0);
    assert_eq!(setup.asset_b.balance(&setup.party_b), STARTING_BALANCE);

    // STEP 4: the wager is closed to further deposits
    let result = setup.client.try_deposit(&setup.party_b);
    assert_eq!(result, Err(Ok(ContractError::InvalidPhase)));
}

#[test]
fn test_cancel_by_depositor() {
    let setup = Setup::new();

    setup.client.deposit(&setup.party_b);

    let refunded = setup.client.cancel_before_initiation(&setup.party_b);
    assert_eq!(refunded, STAKE);
    assert_eq!(setup.asset_b.balance(&setup.party_b), STARTING_BALANCE);
}

#[test]
fn test_cancel_twice() {
    let setup = Setup::new();
    setup.client.deposit(&setup.party_a);

    setup.client.cancel_before_initiation(&setup.party_a);

    let result = setup.client.try_cancel_before_initiation(&setup.party_a);
    assert_eq!(result, Err(Ok(ContractError::InvalidPhase)));

    // No second refund was paid
    assert_eq!(setup.asset_a.balance(&setup.party_a), STARTING_BALANCE);
}

#[test]
fn test_cancel_after_funded() {
    let setup = Setup::new();
    setup.fund();

    let result = setup.client.try_cancel_before_initiation(&setup.party_a);
    assert_eq!(result, Err(Ok(ContractError::InvalidPhase)));

    // Both stakes stay in escrow
    assert_eq!(setup.client.get_phase(), Phase::Funded);
    assert_eq!(setup.asset_a.balance(&setup.client.address), STAKE);
    assert_eq!(setup.asset_b.balance(&setup.client.address), STAKE);
}

#[test]
fn test_cancel_after_settled() {
    let setup = Setup::new();
    setup.fund();
    setup.client.settle_bet();

    let result = setup.client.try_cancel_before_initiation(&setup.party_b);
    assert_eq!(result, Err(Ok(ContractError::InvalidPhase)));
    assert_eq!(setup.client.get_phase(), Phase::Settled);
}

#[test]
fn test_cancel_by_unknown_party() {
    let setup = Setup::new();
    let stranger = Address::generate(&setup.env);

    setup.client.deposit(&setup.party_a);

    let result = setup.client.try_cancel_before_initiation(&stranger);
    assert_eq!(result, Err(Ok(ContractError::UnknownParty)));
    assert_eq!(setup.client.get_phase(), Phase::PartiallyFunded);
}

#[test]
fn test_settle_after_cancel() {
    let setup = Setup::new();

    setup.client.cancel_before_initiation(&setup.party_a);

    let result = setup.client.try_settle_bet();
    assert_eq!(result, Err(Ok(ContractError::InvalidPhase)));
    assert_eq!(setup.client.get_payout(), None);
}

#[test]
fn test_deposit_records_survive_cancel() {
    let setup = Setup::new();
    setup.client.deposit(&setup.party_a);
    setup.client.cancel_before_initiation(&setup.party_a);

    // The record stays as history; a repeat deposit is still a repeat
    assert_eq!(setup.client.get_deposit(&setup.party_a), Some(STAKE));
    let result = setup.client.try_deposit(&setup.party_a);
    assert_eq!(result, Err(Ok(ContractError::AlreadyDeposited)));
}

#[test]
fn test_cancel_rolls_back_when_refund_rejected() {
    let setup = Setup::new();
    setup.client.deposit(&setup.party_a);

    // Depositor A can no longer receive its refund
    setup.set_authorized(&setup.sac_a, &setup.party_a, false);

    let result = setup.client.try_cancel_before_initiation(&setup.party_b);
    assert_eq!(result, Err(Ok(ContractError::TransferFailed)));

    assert_eq!(setup.client.get_phase(), Phase::PartiallyFunded);
    assert_eq!(setup.asset_a.balance(&setup.client.address), STAKE);

    setup.set_authorized(&setup.sac_a, &setup.party_a, true);

    let refunded = setup.client.cancel_before_initiation(&setup.party_b);
    assert_eq!(refunded, STAKE);
    assert_eq!(setup.asset_a.balance(&setup.party_a), STARTING_BALANCE);
}

#[test]
fn test_cancel_with_escrow_shortfall() {
    let setup = Setup::new();
    setup.client.deposit(&setup.party_a);

    setup.claw_back_escrow(&setup.sac_a, 1);

    let result = setup.client.try_cancel_before_initiation(&setup.party_a);
    assert_eq!(result, Err(Ok(ContractError::TransferFailed)));

    assert_eq!(setup.client.get_phase(), Phase::PartiallyFunded);
    assert_eq!(setup.asset_a.balance(&setup.client.address), STAKE - 1);
    assert_eq!(setup.asset_a.balance(&setup.party_a), STARTING_BALANCE - STAKE);
}
