use {
    crate::{Addr, Symbol},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
    tally_math::Udec128,
};

/// A participant's supplied and borrowed amounts for one asset symbol.
///
/// A participant with no activity in a symbol is equivalent to the zero
/// position; fully zero positions are never stored.
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
pub struct Position {
    pub supplied: Udec128,
    pub borrowed: Udec128,
}

impl Position {
    pub fn is_empty(&self) -> bool {
        self.supplied.is_zero() && self.borrowed.is_zero()
    }
}

/// The sub-ledger for one asset symbol: aggregate totals plus every
/// participant's position.
///
/// The totals are maintained by every mutation and always equal the sums of
/// the corresponding position fields.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Default, Debug, Clone, PartialEq, Eq,
)]
pub struct TokenPool {
    pub total_supplied: Udec128,
    pub total_borrowed: Udec128,
    pub positions: BTreeMap<Addr, Position>,
}

/// The ledger aggregate: one pool per asset symbol.
///
/// This is a single unit of persistence. Every mutation loads the entire
/// ledger, modifies it in memory, and writes the entire ledger back; there is
/// no partial or field-level write.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Default, Debug, Clone, PartialEq, Eq,
)]
pub struct BillBank {
    pub pools: BTreeMap<Symbol, TokenPool>,
}

impl BillBank {
    pub fn pool(&self, symbol: &Symbol) -> Option<&TokenPool> {
        self.pools.get(symbol)
    }

    pub fn position(&self, symbol: &Symbol, address: Addr) -> Option<&Position> {
        self.pools
            .get(symbol)
            .and_then(|pool| pool.positions.get(&address))
    }

    /// The participant's supplied balance in the symbol; zero if absent.
    pub fn supply_balance_of(&self, symbol: &Symbol, address: Addr) -> Udec128 {
        self.position(symbol, address)
            .map(|position| position.supplied)
            .unwrap_or(Udec128::ZERO)
    }

    /// The participant's borrowed balance in the symbol; zero if absent.
    pub fn borrow_balance_of(&self, symbol: &Symbol, address: Addr) -> Udec128 {
        self.position(symbol, address)
            .map(|position| position.borrowed)
            .unwrap_or(Udec128::ZERO)
    }
}

// ----------------------------------- tests -----------------------------------
