use crate::{Addr, Storage};

/// The context passed to every state-mutating entry point: a mutable handle
/// to the store, plus the address the mutation is attributed to.
///
/// Queries don't get a context. They take an immutable `&dyn Storage`
/// directly, which makes it impossible for a query handler to write.
pub struct MutableCtx<'a> {
    pub storage: &'a mut dyn Storage,
    pub sender: Addr,
}
