use {
    crate::{Addr, OracleName, Symbol},
    serde::{Deserialize, Serialize},
    tally_math::Udec128,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Supply an amount of the asset into its pool. The sender's supplied
    /// balance and the pool's supplied total both grow by the amount.
    Deposit { amount: Udec128, symbol: Symbol },
    /// Take back part of the sender's supplied balance. Fails if the sender
    /// has supplied less than the requested amount.
    Withdraw { amount: Udec128, symbol: Symbol },
    /// Take on debt in the asset. The sender's borrowed balance and the
    /// pool's borrowed total both grow by the amount.
    Borrow { amount: Udec128, symbol: Symbol },
    /// Pay down part of the sender's debt. Fails if the sender owes less
    /// than the requested amount.
    Repay { amount: Udec128, symbol: Symbol },
    /// Push a price for a symbol into the named price feed, overwriting any
    /// previous price. The feed is created on first use.
    SetPrice {
        name: OracleName,
        symbol: Symbol,
        price: Udec128,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// The current price of a symbol in the named feed; zero if never pushed.
    OraclePrice { name: OracleName, symbol: Symbol },
    /// The participant's total supplied value minus total borrowed value
    /// across all symbols, at current prices. May be negative.
    NetValue { address: Addr },
    /// The participant's borrowed balance in the symbol.
    BorrowBalance { symbol: Symbol, address: Addr },
    /// The participant's borrowed balance in the symbol, valued at the
    /// current price.
    BorrowValue { symbol: Symbol, address: Addr },
    /// The value of a hypothetical amount of the symbol at the current
    /// price. Reads no balances.
    BorrowValueEstimate { amount: Udec128, symbol: Symbol },
    /// The participant's supplied balance in the symbol.
    SupplyBalance { symbol: Symbol, address: Addr },
    /// The participant's supplied balance in the symbol, valued at the
    /// current price.
    SupplyValue { symbol: Symbol, address: Addr },
}

/// The response shape shared by all queries: a single decimal string.
///
/// Amounts, prices, and values are all rendered through their `Display`
/// impls, so the string never carries a unit or a symbol.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValueResponse {
    pub value: String,
}

impl ValueResponse {
    pub fn new<T>(value: T) -> Self
    where
        T: ToString,
    {
        Self {
            value: value.to_string(),
        }
    }
}

// ----------------------------------- tests -----------------------------------
