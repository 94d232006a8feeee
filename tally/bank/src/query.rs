use {
    crate::{BankResult, Keeper},
    tally_types::{Json, JsonSerExt, QueryMsg, Storage, ValueResponse},
};

/// Answer a typed query. Every endpoint resolves to a single decimal figure,
/// returned as `{"value": "<decimal>"}`.
pub fn query(keeper: &Keeper, storage: &dyn Storage, msg: QueryMsg) -> BankResult<Json> {
    let res = match msg {
        QueryMsg::OraclePrice { name, symbol } => {
            ValueResponse::new(keeper.oracle_price(storage, &name, &symbol)?)
        },
        QueryMsg::NetValue { address } => {
            ValueResponse::new(keeper.net_value_of(storage, address)?)
        },
        QueryMsg::BorrowBalance { symbol, address } => {
            ValueResponse::new(keeper.borrow_balance_of(storage, &symbol, address)?)
        },
        QueryMsg::BorrowValue { symbol, address } => {
            ValueResponse::new(keeper.borrow_value_of(storage, &symbol, address)?)
        },
        QueryMsg::BorrowValueEstimate { amount, symbol } => {
            ValueResponse::new(keeper.borrow_value_estimate(storage, amount, &symbol)?)
        },
        QueryMsg::SupplyBalance { symbol, address } => {
            ValueResponse::new(keeper.supply_balance_of(storage, &symbol, address)?)
        },
        QueryMsg::SupplyValue { symbol, address } => {
            ValueResponse::new(keeper.supply_value_of(storage, &symbol, address)?)
        },
    };

    Ok(res.to_json_value()?)
}

// ----------------------------------- tests -----------------------------------
