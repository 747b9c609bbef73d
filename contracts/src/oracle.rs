//! Price oracle adapter. Each asset has its own feed contract.

use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::errors::ContractError;
use crate::payout::Quote;
use crate::types::PriceReading;

/// Price record as published by a feed
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceData {
    pub price: i128,    // asset price at given point in time
    pub timestamp: u64, // recording timestamp
}

/// Interface a price feed contract must expose
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn decimals(env: Env) -> u32;
    fn latest_price(env: Env) -> Option<PriceData>;
}

/// Reads the latest price without any freshness requirement
pub fn latest_price(env: &Env, feed: &Address) -> Result<PriceReading, ContractError> {
    let client = PriceFeedClient::new(env, feed);

    let data = client.latest_price().ok_or(ContractError::StaleOracleData)?;
    if data.price <= 0 {
        return Err(ContractError::InvalidPrice);
    }

    Ok(PriceReading {
        price: data.price,
        decimals: client.decimals(),
        updated_at: data.timestamp,
    })
}

/// Reads the latest price and rejects it if older than `max_staleness` seconds
pub fn fresh_price(env: &Env, feed: &Address, max_staleness: u64) -> Result<PriceReading, ContractError> {
    let reading = latest_price(env, feed)?;

    let age = env.ledger().timestamp().saturating_sub(reading.updated_at);
    if age > max_staleness {
        return Err(ContractError::StaleOracleData);
    }

    Ok(reading)
}

impl PriceReading {
    pub fn quote(&self) -> Quote {
        Quote {
            price: self.price,
            decimals: self.decimals,
        }
    }
}
