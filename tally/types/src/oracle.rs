use {
    crate::Symbol,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
    tally_math::Udec128,
};

/// One named price feed: a map of asset symbol to its most recently pushed
/// price.
///
/// Prices only exist once pushed. A symbol that has never been priced reads
/// as zero, which in turn values any balance held in it at zero.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Default, Debug, Clone, PartialEq, Eq,
)]
pub struct Oracle {
    pub prices: BTreeMap<Symbol, Udec128>,
}

impl Oracle {
    /// The current price for the symbol; zero if never pushed.
    pub fn price_of(&self, symbol: &Symbol) -> Udec128 {
        self.prices.get(symbol).copied().unwrap_or(Udec128::ZERO)
    }

    /// Overwrite the price for the symbol. Later pushes win; there is no
    /// history.
    pub fn set_price(&mut self, symbol: Symbol, price: Udec128) {
        self.prices.insert(symbol, price);
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_prices_read_as_zero() {
        let oracle = Oracle::default();

        assert_eq!(
            oracle.price_of(&Symbol::new_unchecked("btc")),
            Udec128::ZERO
        );
    }

    #[test]
    fn later_pushes_overwrite() {
        let btc = Symbol::new_unchecked("btc");

        let mut oracle = Oracle::default();
        oracle.set_price(btc.clone(), Udec128::new(9_000));
        oracle.set_price(btc.clone(), Udec128::new(10_000));

        assert_eq!(oracle.price_of(&btc), Udec128::new(10_000));
    }
}
