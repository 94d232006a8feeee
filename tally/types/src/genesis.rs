use {
    crate::{BillBank, Oracle, OracleName, StdError, StdResult},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
    tally_math::Udec128,
};

/// The full state of the ledger and the price feeds, as imported at genesis
/// or exported for a snapshot.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenesisState {
    pub bank: BillBank,
    pub oracles: BTreeMap<OracleName, Oracle>,
}

impl GenesisState {
    /// Reject states that the ledger could never have produced itself: pool
    /// totals that don't equal the sums of their positions, or stored
    /// positions that are fully zero.
    pub fn validate(&self) -> StdResult<()> {
        for (symbol, pool) in &self.bank.pools {
            let mut supplied_sum = Udec128::ZERO;
            let mut borrowed_sum = Udec128::ZERO;

            for (address, position) in &pool.positions {
                if position.is_empty() {
                    return Err(StdError::invalid_genesis(format!(
                        "pool `{symbol}` stores an all-zero position for {address}"
                    )));
                }

                supplied_sum = supplied_sum.checked_add(position.supplied)?;
                borrowed_sum = borrowed_sum.checked_add(position.borrowed)?;
            }

            if pool.total_supplied != supplied_sum {
                return Err(StdError::invalid_genesis(format!(
                    "pool `{symbol}` supplied total {} does not equal sum of positions {}",
                    pool.total_supplied, supplied_sum
                )));
            }

            if pool.total_borrowed != borrowed_sum {
                return Err(StdError::invalid_genesis(format!(
                    "pool `{symbol}` borrowed total {} does not equal sum of positions {}",
                    pool.total_borrowed, borrowed_sum
                )));
            }
        }

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{Addr, Position, Symbol},
    };

    fn valid_genesis() -> GenesisState {
        let mut genesis = GenesisState::default();

        let pool = genesis
            .bank
            .pools
            .entry(Symbol::new_unchecked("btc"))
            .or_default();
        pool.positions.insert(Addr::mock(1), Position {
            supplied: Udec128::new(2),
            borrowed: Udec128::ZERO,
        });
        pool.positions.insert(Addr::mock(2), Position {
            supplied: Udec128::new(3),
            borrowed: Udec128::new(1),
        });
        pool.total_supplied = Udec128::new(5);
        pool.total_borrowed = Udec128::new(1);

        let mut oracle = Oracle::default();
        oracle.set_price(Symbol::new_unchecked("btc"), Udec128::new(10_000));
        genesis
            .oracles
            .insert(OracleName::new_unchecked("bank"), oracle);

        genesis
    }

    #[test]
    fn consistent_states_pass() {
        assert!(valid_genesis().validate().is_ok());
        assert!(GenesisState::default().validate().is_ok());
    }

    #[test]
    fn mismatched_totals_are_rejected() {
        let mut genesis = valid_genesis();
        genesis
            .bank
            .pools
            .get_mut(&Symbol::new_unchecked("btc"))
            .unwrap()
            .total_supplied = Udec128::new(6);

        assert!(matches!(
            genesis.validate(),
            Err(StdError::InvalidGenesis { reason }) if reason.contains("supplied total")
        ));
    }

    #[test]
    fn all_zero_positions_are_rejected() {
        let mut genesis = valid_genesis();
        genesis
            .bank
            .pools
            .get_mut(&Symbol::new_unchecked("btc"))
            .unwrap()
            .positions
            .insert(Addr::mock(3), Position::default());

        assert!(matches!(
            genesis.validate(),
            Err(StdError::InvalidGenesis { reason }) if reason.contains("all-zero")
        ));
    }
}
