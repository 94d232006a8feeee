mod address;
mod bank;
mod context;
mod error;
mod event;
mod genesis;
mod msg;
mod name;
mod oracle;
mod response;
mod serializers;
mod storage;

pub use {
    address::*, bank::*, context::*, error::*, event::*, genesis::*, msg::*, name::*, oracle::*,
    response::*, serializers::*, storage::*,
};

// ---------------------------------- testing ----------------------------------

mod testing;

pub use testing::*;

// -------------------------------- re-exports ---------------------------------

pub use serde_json::{json, Value as Json};
