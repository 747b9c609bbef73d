//! Core contract implementation for the two-party price wager.

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};

use crate::asset;
use crate::errors::ContractError;
use crate::escrow;
use crate::events;
use crate::oracle;
use crate::payout::{self, Stake};
use crate::storage;
use crate::types::{Party, Payout, Phase, PriceReading, Wager, WagerTerms};

#[contract]
pub struct BetContract;

#[contractimpl]
impl BetContract {
    /// Creates the wager between two fixed parties (deployment only)
    ///
    /// The six addresses identify the parties, their assets and the price
    /// feeds. `terms` is the creation-time configuration: committed stakes,
    /// the winning condition, the payout rule, the oracle staleness bound and
    /// the earliest settlement time. None of it can change afterwards.
    ///
    /// Aborts deployment if the parties or assets coincide, or if the terms
    /// are out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        env: Env,
        party_a: Address,
        party_b: Address,
        asset_a: Address,
        asset_b: Address,
        oracle_a: Address,
        oracle_b: Address,
        terms: WagerTerms,
    ) {
        if party_a == party_b {
            panic_with_error!(&env, ContractError::InvalidParties);
        }

        if asset_a == asset_b {
            panic_with_error!(&env, ContractError::InvalidAssets);
        }

        if let Err(err) = payout::validate_terms(&terms) {
            panic_with_error!(&env, err);
        }

        let wager = Wager {
            party_a,
            party_b,
            asset_a,
            asset_b,
            oracle_a,
            oracle_b,
            created_at: env.ledger().timestamp(),
        };

        storage::init(&env, &wager, &terms);
    }

    /// Pulls the caller's committed stake into escrow and records it
    pub fn deposit(env: Env, from: Address) -> Result<Phase, ContractError> {
        from.require_auth();

        let wager = storage::wager(&env)?;
        let party = wager.party_of(&from).ok_or(ContractError::UnknownParty)?;

        escrow::check_deposit(&env, party)?;

        let amount = storage::terms(&env)?.stake(party);
        asset::transfer_in(&env, wager.asset(party), &from, amount)?;

        let phase = escrow::record_deposit(&env, party, amount)?;
        storage::extend(&env);

        events::deposited(&env, from, amount);
        log!(&env, "deposit recorded", party, phase);

        Ok(phase)
    }

    /// Aborts the wager before both stakes are in and refunds the one
    /// deposit already made, if any. Returns the refunded amount.
    pub fn cancel_before_initiation(env: Env, caller: Address) -> Result<i128, ContractError> {
        caller.require_auth();

        let wager = storage::wager(&env)?;
        if wager.party_of(&caller).is_none() {
            return Err(ContractError::UnknownParty);
        }

        if !storage::phase(&env)?.is_open() {
            return Err(ContractError::InvalidPhase);
        }

        let refund = escrow::open_deposit(&env);
        if let Some((party, amount)) = refund {
            escrow::ensure_held(&env, wager.asset(party), amount)?;
        }

        // Terminal before any funds leave escrow
        storage::set_phase(&env, Phase::Cancelled);

        let refunded = match refund {
            Some((party, amount)) => {
                asset::transfer_out(&env, wager.asset(party), wager.address(party), amount)?;
                amount
            },
            None => 0,
        };

        events::cancelled(&env, caller, refunded);
        log!(&env, "wager cancelled", refunded);

        Ok(refunded)
    }

    /// Settles a funded wager against fresh oracle prices (callable by anyone)
    ///
    /// The outcome depends only on stored stakes, terms and oracle data.
    pub fn settle_bet(env: Env) -> Result<Payout, ContractError> {
        if storage::phase(&env)? != Phase::Funded {
            return Err(ContractError::InvalidPhase);
        }

        let wager = storage::wager(&env)?;
        let terms = storage::terms(&env)?;

        if env.ledger().timestamp() < terms.settle_after {
            return Err(ContractError::SettlementNotDue);
        }

        let reading_a = oracle::fresh_price(&env, &wager.oracle_a, terms.max_staleness)?;
        let reading_b = oracle::fresh_price(&env, &wager.oracle_b, terms.max_staleness)?;

        let stake_a = Stake {
            amount: storage::deposit(&env, Party::A).ok_or(ContractError::InvalidPhase)?,
            decimals: asset::decimals_of(&env, &wager.asset_a),
        };
        let stake_b = Stake {
            amount: storage::deposit(&env, Party::B).ok_or(ContractError::InvalidPhase)?,
            decimals: asset::decimals_of(&env, &wager.asset_b),
        };

        let payout = payout::compute(&stake_a, &stake_b, &reading_a.quote(), &reading_b.quote(), &terms)?;

        escrow::ensure_held(&env, &wager.asset_a, stake_a.amount)?;
        escrow::ensure_held(&env, &wager.asset_b, stake_b.amount)?;

        // Phase advances before any transfer is issued
        storage::set_phase(&env, Phase::Settled);
        storage::set_payout(&env, &payout);

        for party in [Party::A, Party::B] {
            let share = payout.share(party);
            let to = wager.address(party);
            asset::transfer_out(&env, &wager.asset_a, to, share.asset_a)?;
            asset::transfer_out(&env, &wager.asset_b, to, share.asset_b)?;
        }

        events::settled(&env, &payout);
        log!(&env, "wager settled", payout.outcome);

        Ok(payout)
    }

    pub fn get_wager(env: Env) -> Result<Wager, ContractError> {
        storage::wager(&env)
    }

    pub fn get_terms(env: Env) -> Result<WagerTerms, ContractError> {
        storage::terms(&env)
    }

    pub fn get_phase(env: Env) -> Result<Phase, ContractError> {
        storage::phase(&env)
    }

    /// Returns the amount `party` has deposited, if any
    pub fn get_deposit(env: Env, party: Address) -> Result<Option<i128>, ContractError> {
        let wager = storage::wager(&env)?;
        let party = wager.party_of(&party).ok_or(ContractError::UnknownParty)?;
        Ok(storage::deposit(&env, party))
    }

    /// Returns the recorded payout once the wager is settled
    pub fn get_payout(env: Env) -> Option<Payout> {
        storage::payout(&env)
    }

    /// Latest reading of asset A's feed, unchecked for staleness
    pub fn get_price_feed_a(env: Env) -> Result<PriceReading, ContractError> {
        let wager = storage::wager(&env)?;
        oracle::latest_price(&env, &wager.oracle_a)
    }

    /// Latest reading of asset B's feed, unchecked for staleness
    pub fn get_price_feed_b(env: Env) -> Result<PriceReading, ContractError> {
        let wager = storage::wager(&env)?;
        oracle::latest_price(&env, &wager.oracle_b)
    }

    /// Current price of asset A in units of asset B, at `PRICE_DECIMALS`
    pub fn price_a_in_b(env: Env) -> Result<i128, ContractError> {
        let wager = storage::wager(&env)?;
        let reading_a = oracle::latest_price(&env, &wager.oracle_a)?;
        let reading_b = oracle::latest_price(&env, &wager.oracle_b)?;
        payout::cross_price(&reading_a.quote(), &reading_b.quote())
    }
}
