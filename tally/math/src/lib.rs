mod dec128;
mod error;
mod macros;
mod udec128;

pub use {dec128::*, error::*, udec128::*};
