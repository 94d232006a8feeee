use {
    crate::{BankResult, Keeper},
    tally_math::Udec128,
    tally_types::{Event, ExecuteMsg, MutableCtx, OracleName, Response, Symbol},
};

pub fn execute(keeper: &Keeper, ctx: MutableCtx, msg: ExecuteMsg) -> BankResult<Response> {
    let res = match msg {
        ExecuteMsg::Deposit { amount, symbol } => deposit(keeper, ctx, symbol, amount),
        ExecuteMsg::Withdraw { amount, symbol } => withdraw(keeper, ctx, symbol, amount),
        ExecuteMsg::Borrow { amount, symbol } => borrow(keeper, ctx, symbol, amount),
        ExecuteMsg::Repay { amount, symbol } => repay(keeper, ctx, symbol, amount),
        ExecuteMsg::SetPrice {
            name,
            symbol,
            price,
        } => set_price(keeper, ctx, name, symbol, price),
    };

    #[cfg(feature = "tracing")]
    if let Err(err) = &res {
        tracing::warn!(err = err.to_string(), "Mutation rejected");
    }

    res
}

fn deposit(
    keeper: &Keeper,
    ctx: MutableCtx,
    symbol: Symbol,
    amount: Udec128,
) -> BankResult<Response> {
    keeper.deposit(ctx.storage, ctx.sender, &symbol, amount)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(address = %ctx.sender, %symbol, %amount, "Deposited into pool");

    Ok(Response::new().add_event(Event::deposited(ctx.sender, symbol, amount)))
}

fn withdraw(
    keeper: &Keeper,
    ctx: MutableCtx,
    symbol: Symbol,
    amount: Udec128,
) -> BankResult<Response> {
    keeper.withdraw(ctx.storage, ctx.sender, &symbol, amount)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(address = %ctx.sender, %symbol, %amount, "Withdrew from pool");

    Ok(Response::new().add_event(Event::withdrawn(ctx.sender, symbol, amount)))
}

fn borrow(
    keeper: &Keeper,
    ctx: MutableCtx,
    symbol: Symbol,
    amount: Udec128,
) -> BankResult<Response> {
    keeper.borrow(ctx.storage, ctx.sender, &symbol, amount)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(address = %ctx.sender, %symbol, %amount, "Borrowed from pool");

    Ok(Response::new().add_event(Event::borrowed(ctx.sender, symbol, amount)))
}

fn repay(
    keeper: &Keeper,
    ctx: MutableCtx,
    symbol: Symbol,
    amount: Udec128,
) -> BankResult<Response> {
    keeper.repay(ctx.storage, ctx.sender, &symbol, amount)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(address = %ctx.sender, %symbol, %amount, "Repaid to pool");

    Ok(Response::new().add_event(Event::repaid(ctx.sender, symbol, amount)))
}

fn set_price(
    keeper: &Keeper,
    ctx: MutableCtx,
    name: OracleName,
    symbol: Symbol,
    price: Udec128,
) -> BankResult<Response> {
    keeper.set_price(ctx.storage, &name, symbol.clone(), price)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%name, %symbol, %price, "Oracle price set");

    Ok(Response::new().add_event(Event::price_set(name, symbol, price)))
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        tally_types::{Addr, MockStorage},
    };

    #[test]
    fn execute_routes_and_emits_events() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();
        let btc = Symbol::new_unchecked("btc");

        let res = execute(&keeper, MutableCtx {
            storage: &mut storage,
            sender: Addr::mock(1),
        }, ExecuteMsg::Deposit {
            amount: Udec128::new(2),
            symbol: btc.clone(),
        })
        .unwrap();

        assert_eq!(res.events, vec![Event::deposited(
            Addr::mock(1),
            btc.clone(),
            Udec128::new(2)
        )]);
        assert_eq!(
            keeper
                .supply_balance_of(&storage, &btc, Addr::mock(1))
                .unwrap(),
            Udec128::new(2)
        );
    }

    #[test]
    fn mutations_are_attributed_to_the_sender() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();
        let eth = Symbol::new_unchecked("eth");

        execute(&keeper, MutableCtx {
            storage: &mut storage,
            sender: Addr::mock(7),
        }, ExecuteMsg::Borrow {
            amount: Udec128::new(1),
            symbol: eth.clone(),
        })
        .unwrap();

        assert_eq!(
            keeper
                .borrow_balance_of(&storage, &eth, Addr::mock(7))
                .unwrap(),
            Udec128::new(1)
        );
        assert!(
            keeper
                .borrow_balance_of(&storage, &eth, Addr::mock(1))
                .unwrap()
                .is_zero()
        );
    }

    #[test]
    fn price_pushes_land_in_the_named_oracle() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();
        let btc = Symbol::new_unchecked("btc");

        let res = execute(&keeper, MutableCtx {
            storage: &mut storage,
            sender: Addr::mock(1),
        }, ExecuteMsg::SetPrice {
            name: keeper.price_feed().clone(),
            symbol: btc.clone(),
            price: Udec128::new(10_000),
        })
        .unwrap();

        assert_eq!(res.events, vec![Event::price_set(
            keeper.price_feed().clone(),
            btc.clone(),
            Udec128::new(10_000)
        )]);
        assert_eq!(
            keeper
                .oracle_price(&storage, keeper.price_feed(), &btc)
                .unwrap(),
            Udec128::new(10_000)
        );
    }
}
