use {
    std::sync::LazyLock,
    tally_storage::{Item, Map},
    tally_types::{BillBank, Oracle, OracleName},
};

/// The entire lending ledger, stored as one object under a fixed key.
pub const LEDGER: Item<BillBank> = Item::new("bill_bank");

/// One price feed per namespace name, each stored as a whole object under its
/// name. A feed comes into existence the first time a price is pushed into it.
pub const ORACLES: Map<&OracleName, Oracle> = Map::new("oracle");

/// The feed that valuation queries read prices from, unless the keeper is
/// configured with a different one.
pub static DEFAULT_PRICE_FEED: LazyLock<OracleName> =
    LazyLock::new(|| OracleName::new_unchecked("bank"));
