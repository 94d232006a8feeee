use {
    tally_math::{Dec128, MathResult, Udec128},
    tally_types::{Addr, BillBank, Oracle, Symbol},
};

/// The participant's supplied balance valued at the oracle's price for the
/// symbol. Zero balance or an unset price both value at zero.
pub fn supply_value_of(
    bank: &BillBank,
    oracle: &Oracle,
    symbol: &Symbol,
    address: Addr,
) -> MathResult<Udec128> {
    bank.supply_balance_of(symbol, address)
        .checked_mul(oracle.price_of(symbol))
}

/// The participant's borrowed balance valued at the oracle's price for the
/// symbol.
pub fn borrow_value_of(
    bank: &BillBank,
    oracle: &Oracle,
    symbol: &Symbol,
    address: Addr,
) -> MathResult<Udec128> {
    bank.borrow_balance_of(symbol, address)
        .checked_mul(oracle.price_of(symbol))
}

/// What a hypothetical borrow of the given amount would cost at the oracle's
/// current price. Reads no participant state.
pub fn borrow_value_estimate(
    oracle: &Oracle,
    amount: Udec128,
    symbol: &Symbol,
) -> MathResult<Udec128> {
    amount.checked_mul(oracle.price_of(symbol))
}

/// The participant's supplied value minus borrowed value, summed over every
/// pool the ledger knows about. Negative when borrows outweigh supplies.
pub fn net_value_of(bank: &BillBank, oracle: &Oracle, address: Addr) -> MathResult<Dec128> {
    let mut net = Dec128::ZERO;
    for (symbol, pool) in &bank.pools {
        let Some(position) = pool.positions.get(&address) else {
            continue;
        };

        let price = oracle.price_of(symbol);
        let supplied = Dec128::try_from(position.supplied.checked_mul(price)?)?;
        let borrowed = Dec128::try_from(position.borrowed.checked_mul(price)?)?;

        net = net.checked_add(supplied)?.checked_sub(borrowed)?;
    }

    Ok(net)
}

// ----------------------------------- tests -----------------------------------
