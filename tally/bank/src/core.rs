mod borrow;
mod deposit;
mod value;

pub use {borrow::*, deposit::*, value::*};
