use crate::PrimaryKey;

// --------------------------------- raw bound ---------------------------------

/// Like `Bound` but only with the raw binary variants.
pub enum RawBound {
    Inclusive(Vec<u8>),
    Exclusive(Vec<u8>),
}

// ----------------------------------- bound -----------------------------------

/// Describe the limit for iteration.
///
/// Compared to `std::ops::Bound`, it removes the unbounded option (which is
/// to be represented by a `None`), and introduces the "raw" variant.
pub enum Bound<K> {
    Inclusive(K),
    Exclusive(K),
}

impl<K> Bound<K> {
    pub fn inclusive<T>(t: T) -> Self
    where
        T: Into<K>,
    {
        Self::Inclusive(t.into())
    }

    pub fn exclusive<T>(t: T) -> Self
    where
        T: Into<K>,
    {
        Self::Exclusive(t.into())
    }
}

impl<K> From<Bound<K>> for RawBound
where
    K: PrimaryKey,
{
    fn from(bound: Bound<K>) -> Self {
        match bound {
            Bound::Inclusive(k) => RawBound::Inclusive(k.joined_key()),
            Bound::Exclusive(k) => RawBound::Exclusive(k.joined_key()),
        }
    }
}
