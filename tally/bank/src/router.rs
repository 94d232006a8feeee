use {
    crate::{BankError, BankResult, Keeper, query},
    tally_types::{Json, QueryMsg, Storage},
};

// Route segments, kept verbatim from the original REST surface so existing
// clients keep working.
pub const ORACLE_PRICE: &str = "oracleprice";
pub const NET_VALUE: &str = "netvalue";
pub const BORROW_BALANCE: &str = "borrowbalance";
pub const BORROW_VALUE: &str = "borrowvalue";
pub const BORROW_VALUE_ESTIMATE: &str = "borrowvalueestimate";
pub const SUPPLY_BALANCE: &str = "supplybalance";
pub const SUPPLY_VALUE: &str = "supplyvalue";

/// Answer a query given as path segments: the endpoint name followed by its
/// arguments, e.g. `["supplyvalue", "btc", "0x00…01"]`.
///
/// The balance and value endpoints take `[symbol, address]`; the estimate
/// takes `[amount, symbol]`; `netvalue` takes `[address]`; `oracleprice`
/// takes `[oracle, symbol]`.
pub fn route(keeper: &Keeper, storage: &dyn Storage, path: &[&str]) -> BankResult<Json> {
    let Some((endpoint, args)) = path.split_first() else {
        return Err(BankError::UnknownQueryEndpoint {
            endpoint: String::new(),
        });
    };

    let msg = match *endpoint {
        ORACLE_PRICE => {
            let [name, symbol] = expect_args(endpoint, args)?;
            QueryMsg::OraclePrice {
                name: name.parse()?,
                symbol: symbol.parse()?,
            }
        },
        NET_VALUE => {
            let [address] = expect_args(endpoint, args)?;
            QueryMsg::NetValue {
                address: address.parse()?,
            }
        },
        BORROW_BALANCE => {
            let [symbol, address] = expect_args(endpoint, args)?;
            QueryMsg::BorrowBalance {
                symbol: symbol.parse()?,
                address: address.parse()?,
            }
        },
        BORROW_VALUE => {
            let [symbol, address] = expect_args(endpoint, args)?;
            QueryMsg::BorrowValue {
                symbol: symbol.parse()?,
                address: address.parse()?,
            }
        },
        BORROW_VALUE_ESTIMATE => {
            let [amount, symbol] = expect_args(endpoint, args)?;
            QueryMsg::BorrowValueEstimate {
                amount: amount.parse()?,
                symbol: symbol.parse()?,
            }
        },
        SUPPLY_BALANCE => {
            let [symbol, address] = expect_args(endpoint, args)?;
            QueryMsg::SupplyBalance {
                symbol: symbol.parse()?,
                address: address.parse()?,
            }
        },
        SUPPLY_VALUE => {
            let [symbol, address] = expect_args(endpoint, args)?;
            QueryMsg::SupplyValue {
                symbol: symbol.parse()?,
                address: address.parse()?,
            }
        },
        _ => {
            return Err(BankError::UnknownQueryEndpoint {
                endpoint: endpoint.to_string(),
            });
        },
    };

    query(keeper, storage, msg)
}

fn expect_args<'a, const N: usize>(endpoint: &str, args: &[&'a str]) -> BankResult<[&'a str; N]> {
    args.try_into().map_err(|_| BankError::UnexpectedArgCount {
        endpoint: endpoint.to_string(),
        expect: N,
        actual: args.len(),
    })
}

// ----------------------------------- tests -----------------------------------
