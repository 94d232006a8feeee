mod core;
mod error;
mod execute;
mod genesis;
mod keeper;
mod query;
mod router;
mod state;

pub use {
    crate::core::*, error::*, execute::*, genesis::*, keeper::*, query::*, router::*, state::*,
};
