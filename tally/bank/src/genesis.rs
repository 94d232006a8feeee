use {
    crate::{BankResult, LEDGER, ORACLES},
    std::collections::BTreeMap,
    tally_types::{GenesisState, Order, StdResult, Storage},
};

/// Write a genesis state into storage, rejecting internally inconsistent
/// ledgers before anything is persisted.
pub fn init_genesis(storage: &mut dyn Storage, genesis: GenesisState) -> BankResult<()> {
    genesis.validate()?;

    LEDGER.save(storage, &genesis.bank)?;
    for (name, oracle) in &genesis.oracles {
        ORACLES.save(storage, name, oracle)?;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        pools = genesis.bank.pools.len(),
        oracles = genesis.oracles.len(),
        "Genesis state initialized"
    );

    Ok(())
}

/// Read the complete engine state back out of storage, in a form that
/// [`init_genesis`] accepts as-is.
pub fn export_genesis(storage: &dyn Storage) -> BankResult<GenesisState> {
    let bank = LEDGER.may_load(storage)?.unwrap_or_default();
    let oracles: BTreeMap<_, _> = ORACLES
        .range(storage, None, None, Order::Ascending)
        .collect::<StdResult<_>>()?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        pools = bank.pools.len(),
        oracles = oracles.len(),
        "Genesis state exported"
    );

    Ok(GenesisState { bank, oracles })
}

// ----------------------------------- tests -----------------------------------
