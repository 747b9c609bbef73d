//! Type definitions for the two-party price wager.

use soroban_sdk::{contracttype, Address};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Wager,
    Terms,
    Phase,
    Deposit(Party),
    Payout,
}

/// One of the two designated sides of the wager
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Party {
    A,
    B,
}

impl Party {
    pub fn counterparty(self) -> Party {
        match self {
            Party::A => Party::B,
            Party::B => Party::A,
        }
    }
}

/// Lifecycle of the wager. `Settled` and `Cancelled` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Phase {
    Created = 0,
    PartiallyFunded = 1,
    Funded = 2,
    Settled = 3,
    Cancelled = 4,
}

impl Phase {
    /// Deposits and cancellation are only possible before both stakes are in.
    pub fn is_open(self) -> bool {
        matches!(self, Phase::Created | Phase::PartiallyFunded)
    }
}

/// Identity of the wager, fixed at construction
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Wager {
    pub party_a: Address,
    pub party_b: Address,
    pub asset_a: Address,  // Token committed by party A
    pub asset_b: Address,  // Token committed by party B
    pub oracle_a: Address, // Price feed for asset A
    pub oracle_b: Address, // Price feed for asset B
    pub created_at: u64,   // Ledger timestamp at construction
}

impl Wager {
    pub fn party_of(&self, who: &Address) -> Option<Party> {
        if *who == self.party_a {
            Some(Party::A)
        } else if *who == self.party_b {
            Some(Party::B)
        } else {
            None
        }
    }

    pub fn address(&self, party: Party) -> &Address {
        match party {
            Party::A => &self.party_a,
            Party::B => &self.party_b,
        }
    }

    pub fn asset(&self, party: Party) -> &Address {
        match party {
            Party::A => &self.asset_a,
            Party::B => &self.asset_b,
        }
    }
}

/// Rule deciding whether party A wins, evaluated on normalized oracle prices.
/// Thresholds use `PRICE_DECIMALS`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum WagerCondition {
    /// A wins when the price of asset A quoted in asset B is at or above the threshold
    CrossPriceAtLeast(i128),
    /// A wins when the price of asset A quoted in asset B is below the threshold
    CrossPriceBelow(i128),
    /// A wins when its stake is worth more than B's; equal value is a draw
    ValueExceeds,
}

/// How the escrow is divided once a winner is known
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum PayoutRule {
    WinnerTakesAll,
    /// Winner takes this many basis points of the loser's stake
    Split(u32),
}

/// Creation-time configuration of the wager
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WagerTerms {
    pub stake_a: i128,
    pub stake_b: i128,
    pub condition: WagerCondition,
    pub payout_rule: PayoutRule,
    pub max_staleness: u64, // Seconds
    pub settle_after: u64,  // Ledger timestamp, 0 = no gate
}

impl WagerTerms {
    pub fn stake(&self, party: Party) -> i128 {
        match party {
            Party::A => self.stake_a,
            Party::B => self.stake_b,
        }
    }
}

/// Raw oracle reading plus the feed's decimal scale
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceReading {
    pub price: i128,
    pub decimals: u32,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PartyA,
    PartyB,
    Draw,
}

/// Amounts of each asset owed to one party
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub asset_a: i128,
    pub asset_b: i128,
}

/// Transfer instructions produced by the payout calculator
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payout {
    pub outcome: Outcome,
    pub to_a: Share,
    pub to_b: Share,
}

impl Payout {
    pub fn share(&self, party: Party) -> &Share {
        match party {
            Party::A => &self.to_a,
            Party::B => &self.to_b,
        }
    }
}
