use {
    tally_math::{MathError, Udec128},
    tally_types::{StdError, Symbol},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("amount must be positive")]
    ZeroAmount,

    #[error(
        "insufficient supplied balance! symbol: {symbol}, available: {available}, requested: {requested}"
    )]
    InsufficientSupply {
        symbol: Symbol,
        available: Udec128,
        requested: Udec128,
    },

    #[error(
        "insufficient debt! symbol: {symbol}, outstanding: {outstanding}, requested: {requested}"
    )]
    InsufficientDebt {
        symbol: Symbol,
        outstanding: Udec128,
        requested: Udec128,
    },

    #[error("unknown query endpoint: {endpoint}")]
    UnknownQueryEndpoint { endpoint: String },

    #[error("incorrect number of arguments for `{endpoint}`! expecting: {expect}, actual: {actual}")]
    UnexpectedArgCount {
        endpoint: String,
        expect: usize,
        actual: usize,
    },
}

pub type BankResult<T> = core::result::Result<T, BankError>;
