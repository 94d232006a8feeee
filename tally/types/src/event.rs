use {
    crate::{Addr, OracleName, Symbol},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    tally_math::Udec128,
};

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// A participant supplied an amount into a pool.
    Deposited(EvtDeposited),
    /// A participant took back part of their supplied balance.
    Withdrawn(EvtWithdrawn),
    /// A participant took on debt in an asset.
    Borrowed(EvtBorrowed),
    /// A participant paid down part of their debt.
    Repaid(EvtRepaid),
    /// A price was pushed into a feed.
    PriceSet(EvtPriceSet),
}

impl Event {
    pub fn deposited(address: Addr, symbol: Symbol, amount: Udec128) -> Self {
        Self::Deposited(EvtDeposited {
            address,
            symbol,
            amount,
        })
    }

    pub fn withdrawn(address: Addr, symbol: Symbol, amount: Udec128) -> Self {
        Self::Withdrawn(EvtWithdrawn {
            address,
            symbol,
            amount,
        })
    }

    pub fn borrowed(address: Addr, symbol: Symbol, amount: Udec128) -> Self {
        Self::Borrowed(EvtBorrowed {
            address,
            symbol,
            amount,
        })
    }

    pub fn repaid(address: Addr, symbol: Symbol, amount: Udec128) -> Self {
        Self::Repaid(EvtRepaid {
            address,
            symbol,
            amount,
        })
    }

    pub fn price_set(name: OracleName, symbol: Symbol, price: Udec128) -> Self {
        Self::PriceSet(EvtPriceSet {
            name,
            symbol,
            price,
        })
    }
}

/// An event indicating that a participant supplied an amount into a pool.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtDeposited {
    pub address: Addr,
    pub symbol: Symbol,
    pub amount: Udec128,
}

/// An event indicating that a participant took back part of their supplied
/// balance.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtWithdrawn {
    pub address: Addr,
    pub symbol: Symbol,
    pub amount: Udec128,
}

/// An event indicating that a participant took on debt in an asset.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtBorrowed {
    pub address: Addr,
    pub symbol: Symbol,
    pub amount: Udec128,
}

/// An event indicating that a participant paid down part of their debt.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtRepaid {
    pub address: Addr,
    pub symbol: Symbol,
    pub amount: Udec128,
}

/// An event indicating that a price was pushed into a feed.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtPriceSet {
    pub name: OracleName,
    pub symbol: Symbol,
    pub price: Udec128,
}
