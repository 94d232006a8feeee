use {
    crate::{BankError, BankResult},
    tally_math::Udec128,
    tally_types::{Addr, BillBank, Symbol},
};

/// Add the amount to the participant's borrowed balance and to the pool's
/// borrowed total. The amount must be positive.
///
/// There is no collateral requirement. A borrow is recorded even if it pushes
/// the participant's net value negative.
pub fn borrow(
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

    position.borrowed = position.borrowed.checked_add(amount)?;
    pool.total_borrowed = pool.total_borrowed.checked_add(amount)?;

    Ok(())
}

/// Subtract the amount from the participant's borrowed balance and from the
/// pool's borrowed total.
///
/// Fails without touching the ledger if the participant owes less than the
/// amount. Positions that end up fully zero are removed, as are pools that
/// end up with no positions.
pub fn repay(
    bank: &mut BillBank,
    address: Addr,
    symbol: &Symbol,
    amount: Udec128,
) -> BankResult<()> {
    if amount.is_zero() {
        return Ok(());
    }

    let Some(pool) = bank.pools.get_mut(symbol) else {
        return Err(BankError::InsufficientDebt {
            symbol: symbol.clone(),
            outstanding: Udec128::ZERO,
            requested: amount,
        });
    };
    let Some(position) = pool.positions.get_mut(&address) else {
        return Err(BankError::InsufficientDebt {
            symbol: symbol.clone(),
            outstanding: Udec128::ZERO,
            requested: amount,
        });
    };

    if position.borrowed < amount {
        return Err(BankError::InsufficientDebt {
            symbol: symbol.clone(),
            outstanding: position.borrowed,
            requested: amount,
        });
    }

    position.borrowed = position.borrowed.checked_sub(amount)?;
    pool.total_borrowed = pool.total_borrowed.checked_sub(amount)?;

    if position.is_empty() {
        pool.positions.remove(&address);
    }
    if pool.positions.is_empty() && pool.total_supplied.is_zero() && pool.total_borrowed.is_zero() {
        bank.pools.remove(symbol);
    }

    Ok(())
}

// ----------------------------------- tests -----------------------------------
