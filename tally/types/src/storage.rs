/// A shorthand for an owned KV pair.
pub type Record = (Vec<u8>, Vec<u8>);

/// Describing iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Describing a KV store that supports read, write, and iteration.
///
/// The module is storage-agnostic: the embedding state machine supplies the
/// concrete store, typically a view over its replicated, committed state.
/// Read-only entry points take `&dyn Storage`, mutating ones take
/// `&mut dyn Storage`.
///
/// Writers rely on the embedding environment's guarantee that mutations are
/// applied strictly sequentially; see the keeper docs for the contract.
pub trait Storage {
    /// Read a single key-value pair from the storage.
    ///
    /// Return `None` if the key doesn't exist.
    fn read(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Iterate over data in the KV store under the given bounds and order.
    ///
    /// Minimum bound is inclusive, maximum bound is exclusive. If `min` >
    /// `max`, an empty iterator is to be returned.
    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a>;

    /// Write a single key-value pair to the storage.
    fn write(&mut self, key: &[u8], value: &[u8]);

    /// Delete a single key-value pair from the storage.
    ///
    /// No-op if the key doesn't exist.
    fn remove(&mut self, key: &[u8]);
}
