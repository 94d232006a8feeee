use {
    crate::{BankError, BankResult},
    tally_math::Udec128,
    tally_types::{Addr, BillBank, Symbol},
};

/// Add the amount to the participant's supplied balance and to the pool's
/// supplied total. The amount must be positive.
pub fn deposit(
    bank: &mut BillBank,
    address: Addr,
    symbol: &Symbol,
    amount: Udec128,
) -> BankResult<()> {
    if amount.is_zero() {
        return Err(BankError::ZeroAmount);
    }

    let pool = bank.pools.entry(symbol.clone()).or_default();
    let position = pool.positions.entry(address).or_default();

    position.supplied = position.supplied.checked_add(amount)?;
    pool.total_supplied = pool.total_supplied.checked_add(amount)?;

    Ok(())
}

/// Subtract the amount from the participant's supplied balance and from the
/// pool's supplied total.
///
/// Fails without touching the ledger if the participant has supplied less
/// than the amount. Positions that end up fully zero are removed, as are
/// pools that end up with no positions.
pub fn withdraw(
    bank: &mut BillBank,
    address: Addr,
    symbol: &Symbol,
    amount: Udec128,
) -> BankResult<()> {
    if amount.is_zero() {
        return Ok(());
    }

    // A participant who never touched the symbol has a zero balance, which
    // can't cover a non-zero withdrawal.
    let Some(pool) = bank.pools.get_mut(symbol) else {
        return Err(BankError::InsufficientSupply {
            symbol: symbol.clone(),
            available: Udec128::ZERO,
            requested: amount,
        });
    };
    let Some(position) = pool.positions.get_mut(&address) else {
        return Err(BankError::InsufficientSupply {
            symbol: symbol.clone(),
            available: Udec128::ZERO,
            requested: amount,
        });
    };

    if position.supplied < amount {
        return Err(BankError::InsufficientSupply {
            symbol: symbol.clone(),
            available: position.supplied,
            requested: amount,
        });
    }

    position.supplied = position.supplied.checked_sub(amount)?;
    pool.total_supplied = pool.total_supplied.checked_sub(amount)?;

    if position.is_empty() {
        pool.positions.remove(&address);
    }
    if pool.positions.is_empty() && pool.total_supplied.is_zero() && pool.total_borrowed.is_zero() {
        bank.pools.remove(symbol);
    }

    Ok(())
}

// ----------------------------------- tests -----------------------------------
