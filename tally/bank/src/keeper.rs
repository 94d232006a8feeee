use {
    crate::{BankResult, DEFAULT_PRICE_FEED, LEDGER, ORACLES, core},
    tally_math::{Dec128, Udec128},
    tally_types::{Addr, BillBank, Oracle, OracleName, StdResult, Storage, Symbol},
};

/// Entry point for all ledger mutations and reads.
///
/// Every mutation follows the same shape: load the whole ledger from storage,
/// apply the change in memory, write the whole ledger back. Either the entire
/// mutation lands or, on error, the stored ledger is untouched. Callers must
/// apply mutations one at a time; nothing below this layer guards against
/// interleaving.
#[derive(Clone, Debug)]
pub struct Keeper {
    /// The oracle consulted for every valuation.
    price_feed: OracleName,
}

impl Keeper {
    pub fn new(price_feed: OracleName) -> Self {
        Self { price_feed }
    }

    pub fn price_feed(&self) -> &OracleName {
        &self.price_feed
    }

    fn ledger(&self, storage: &dyn Storage) -> StdResult<BillBank> {
        // An engine that has never recorded a deposit or borrow simply has an
        // empty ledger.
        Ok(LEDGER.may_load(storage)?.unwrap_or_default())
    }

    fn feed(&self, storage: &dyn Storage, name: &OracleName) -> StdResult<Oracle> {
        Ok(ORACLES.may_load(storage, name)?.unwrap_or_default())
    }

    // ------------------------------ mutations ------------------------------

    pub fn deposit(
        &self,
        storage: &mut dyn Storage,
        address: Addr,
        symbol: &Symbol,
        amount: Udec128,
    ) -> BankResult<()> {
        let mut bank = self.ledger(storage)?;
        core::deposit(&mut bank, address, symbol, amount)?;

        Ok(LEDGER.save(storage, &bank)?)
    }

    pub fn withdraw(
        &self,
        storage: &mut dyn Storage,
        address: Addr,
        symbol: &Symbol,
        amount: Udec128,
    ) -> BankResult<()> {
        let mut bank = self.ledger(storage)?;
        core::withdraw(&mut bank, address, symbol, amount)?;

        Ok(LEDGER.save(storage, &bank)?)
    }

    pub fn borrow(
        &self,
        storage: &mut dyn Storage,
        address: Addr,
        symbol: &Symbol,
        amount: Udec128,
    ) -> BankResult<()> {
        let mut bank = self.ledger(storage)?;
        core::borrow(&mut bank, address, symbol, amount)?;

        Ok(LEDGER.save(storage, &bank)?)
    }

    pub fn repay(
        &self,
        storage: &mut dyn Storage,
        address: Addr,
        symbol: &Symbol,
        amount: Udec128,
    ) -> BankResult<()> {
        let mut bank = self.ledger(storage)?;
        core::repay(&mut bank, address, symbol, amount)?;

        Ok(LEDGER.save(storage, &bank)?)
    }

    /// Record a price push, creating the named oracle on its first use.
    /// A later push for the same symbol overwrites the earlier one.
    pub fn set_price(
        &self,
        storage: &mut dyn Storage,
        name: &OracleName,
        symbol: Symbol,
        price: Udec128,
    ) -> BankResult<()> {
        let mut oracle = self.feed(storage, name)?;
        oracle.set_price(symbol, price);

        Ok(ORACLES.save(storage, name, &oracle)?)
    }

    // -------------------------------- reads --------------------------------

    /// The price the named oracle holds for the symbol. Zero if the oracle or
    /// the symbol is unknown.
    pub fn oracle_price(
        &self,
        storage: &dyn Storage,
        name: &OracleName,
        symbol: &Symbol,
    ) -> StdResult<Udec128> {
        Ok(self.feed(storage, name)?.price_of(symbol))
    }

    pub fn supply_balance_of(
        &self,
        storage: &dyn Storage,
        symbol: &Symbol,
        address: Addr,
    ) -> StdResult<Udec128> {
        Ok(self.ledger(storage)?.supply_balance_of(symbol, address))
    }

    pub fn borrow_balance_of(
        &self,
        storage: &dyn Storage,
        symbol: &Symbol,
        address: Addr,
    ) -> StdResult<Udec128> {
        Ok(self.ledger(storage)?.borrow_balance_of(symbol, address))
    }

    /// The participant's supplied balance valued at the configured feed's
    /// price.
    pub fn supply_value_of(
        &self,
        storage: &dyn Storage,
        symbol: &Symbol,
        address: Addr,
    ) -> StdResult<Udec128> {
        let bank = self.ledger(storage)?;
        let oracle = self.feed(storage, &self.price_feed)?;

        Ok(core::supply_value_of(&bank, &oracle, symbol, address)?)
    }

    /// The participant's borrowed balance valued at the configured feed's
    /// price.
    pub fn borrow_value_of(
        &self,
        storage: &dyn Storage,
        symbol: &Symbol,
        address: Addr,
    ) -> StdResult<Udec128> {
        let bank = self.ledger(storage)?;
        let oracle = self.feed(storage, &self.price_feed)?;

        Ok(core::borrow_value_of(&bank, &oracle, symbol, address)?)
    }

    /// What a hypothetical borrow of the given amount would be worth at the
    /// configured feed's current price.
    pub fn borrow_value_estimate(
        &self,
        storage: &dyn Storage,
        amount: Udec128,
        symbol: &Symbol,
    ) -> StdResult<Udec128> {
        let oracle = self.feed(storage, &self.price_feed)?;

        Ok(core::borrow_value_estimate(&oracle, amount, symbol)?)
    }

    /// The participant's supplied value minus borrowed value, summed across
    /// every pool. Negative when borrows outweigh supplies.
    pub fn net_value_of(&self, storage: &dyn Storage, address: Addr) -> StdResult<Dec128> {
        let bank = self.ledger(storage)?;
        let oracle = self.feed(storage, &self.price_feed)?;

        Ok(core::net_value_of(&bank, &oracle, address)?)
    }
}

impl Default for Keeper {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_FEED.clone())
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, tally_types::MockStorage};

    fn btc() -> Symbol {
        Symbol::new_unchecked("btc")
    }

    fn eth() -> Symbol {
        Symbol::new_unchecked("eth")
    }

    #[test]
    fn mutations_persist_the_whole_ledger() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();

        keeper
            .deposit(&mut storage, Addr::mock(1), &btc(), Udec128::new(2))
            .unwrap();
        keeper
            .borrow(&mut storage, Addr::mock(1), &eth(), Udec128::new(1))
            .unwrap();

        // Reads go through storage, not through any in-memory cache.
        assert_eq!(
            keeper
                .supply_balance_of(&storage, &btc(), Addr::mock(1))
                .unwrap(),
            Udec128::new(2)
        );
        assert_eq!(
            keeper
                .borrow_balance_of(&storage, &eth(), Addr::mock(1))
                .unwrap(),
            Udec128::new(1)
        );

        // The stored object is the entire ledger under a single key.
        let bank = LEDGER.load(&storage).unwrap();
        assert_eq!(bank.pools.len(), 2);
    }

    #[test]
    fn failed_mutation_leaves_storage_untouched() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();

        keeper
            .deposit(&mut storage, Addr::mock(1), &btc(), Udec128::new(2))
            .unwrap();
        keeper
            .withdraw(&mut storage, Addr::mock(1), &btc(), Udec128::new(5))
            .unwrap_err();

        assert_eq!(
            keeper
                .supply_balance_of(&storage, &btc(), Addr::mock(1))
                .unwrap(),
            Udec128::new(2)
        );
    }

    #[test]
    fn price_pushes_create_feeds_lazily() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();
        let pyth = OracleName::new_unchecked("pyth");

        assert!(ORACLES.may_load(&storage, &pyth).unwrap().is_none());

        keeper
            .set_price(&mut storage, &pyth, btc(), Udec128::new(10_000))
            .unwrap();
        keeper
            .set_price(&mut storage, &pyth, btc(), Udec128::new(11_000))
            .unwrap();

        // Feeds are independent: the push to `pyth` is invisible elsewhere.
        assert_eq!(
            keeper.oracle_price(&storage, &pyth, &btc()).unwrap(),
            Udec128::new(11_000)
        );
        assert_eq!(
            keeper
                .oracle_price(&storage, keeper.price_feed(), &btc())
                .unwrap(),
            Udec128::ZERO
        );
    }

    #[test]
    fn valuations_use_the_configured_feed() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();

        keeper
            .deposit(&mut storage, Addr::mock(1), &btc(), Udec128::new(2))
            .unwrap();

        // No price pushed yet, so the position values at zero.
        assert_eq!(
            keeper
                .supply_value_of(&storage, &btc(), Addr::mock(1))
                .unwrap(),
            Udec128::ZERO
        );

        keeper
            .set_price(
                &mut storage,
                keeper.price_feed(),
                btc(),
                Udec128::new(10_000),
            )
            .unwrap();

        assert_eq!(
            keeper
                .supply_value_of(&storage, &btc(), Addr::mock(1))
                .unwrap(),
            Udec128::new(20_000)
        );
        assert_eq!(
            keeper
                .borrow_value_estimate(&storage, "0.5".parse().unwrap(), &btc())
                .unwrap(),
            Udec128::new(5_000)
        );
    }

    #[test]
    fn net_value_nets_supplies_against_borrows() {
        let mut storage = MockStorage::new();
        let keeper = Keeper::default();

        keeper
            .set_price(
                &mut storage,
                keeper.price_feed(),
                btc(),
                Udec128::new(10_000),
            )
            .unwrap();
        keeper
            .set_price(&mut storage, keeper.price_feed(), eth(), Udec128::new(2_000))
            .unwrap();

        keeper
            .deposit(&mut storage, Addr::mock(1), &btc(), Udec128::new(2))
            .unwrap();
        keeper
            .borrow(&mut storage, Addr::mock(1), &eth(), Udec128::new(1))
            .unwrap();

        assert_eq!(
            keeper.net_value_of(&storage, Addr::mock(1)).unwrap(),
            Dec128::new(18_000)
        );

        // An unpriced borrow contributes nothing.
        keeper
            .borrow(
                &mut storage,
                Addr::mock(1),
                &Symbol::new_unchecked("doge"),
                Udec128::new(1_000_000),
            )
            .unwrap();
        assert_eq!(
            keeper.net_value_of(&storage, Addr::mock(1)).unwrap(),
            Dec128::new(18_000)
        );

        // Borrows can push the net below zero.
        keeper
            .borrow(&mut storage, Addr::mock(2), &eth(), Udec128::new(3))
            .unwrap();
        assert_eq!(
            keeper.net_value_of(&storage, Addr::mock(2)).unwrap(),
            Dec128::new(-6_000)
        );
    }
}
