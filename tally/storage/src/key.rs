use {
    crate::nested_namespaces_with_key,
    std::{borrow::Cow, str},
    tally_types::{Addr, OracleName, StdError, StdResult, Symbol},
};

/// Describes a key used in mapping data structures, i.e. [`Map`](crate::Map).
///
/// The key needs to be serialized to or deserialized from raw bytes. However,
/// we don't want to use `serde` here because it's slow, not compact, and
/// faillable.
pub trait PrimaryKey {
    /// The type that raw keys deserialize into, which may be different from
    /// the key itself.
    ///
    /// E.g. when `&str` is used as the key, it deserializes into `String`.
    type Output;

    /// Convert the key into one or more _raw keys_. Each raw key is a byte
    /// slice, either owned or a reference, represented as a `Cow<[u8]>`.
    fn raw_keys(&self) -> Vec<Cow<[u8]>>;

    /// Serialize the raw keys into bytes.
    ///
    /// Each raw key, other than the last one, is prefixed by its length. This
    /// is such that when deserializing, we can tell where a raw key ends and
    /// where the next one starts.
    fn joined_key(&self) -> Vec<u8> {
        let mut raw_keys = self.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(None, &raw_keys, last_raw_key.as_ref())
    }

    /// Deserialize the raw bytes into the output.
    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output>;
}

impl PrimaryKey for &str {
    type Output = String;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Borrowed(self.as_bytes())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        String::from_utf8(bytes.to_vec())
            .map_err(|err| StdError::deserialize::<Self::Output>("key", err))
    }
}

impl PrimaryKey for String {
    type Output = String;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Borrowed(self.as_bytes())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        <&str as PrimaryKey>::from_slice(bytes)
    }
}

impl PrimaryKey for Addr {
    type Output = Addr;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Borrowed(self.as_ref())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        bytes.try_into()
    }
}

macro_rules! impl_name_primary_key {
    ($($t:ty),+ $(,)?) => {
        $(impl PrimaryKey for &$t {
            type Output = $t;

            fn raw_keys(&self) -> Vec<Cow<[u8]>> {
                vec![Cow::Borrowed(self.as_ref().as_bytes())]
            }

            fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
                str::from_utf8(bytes)
                    .map_err(|err| StdError::deserialize::<Self::Output>("key", err))?
                    .try_into()
            }
        })*
    }
}

impl_name_primary_key!(Symbol, OracleName);

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_keys_are_raw_bytes() {
        assert_eq!("bank".joined_key(), b"bank");
        assert_eq!("bank".to_string().joined_key(), b"bank");
        assert_eq!(
            (&OracleName::new_unchecked("bank")).joined_key(),
            b"bank"
        );
        assert_eq!(Addr::mock(1).joined_key(), Addr::mock(1).as_ref());
    }

    #[test]
    fn name_keys_validate_on_the_way_out() {
        let name = <&OracleName>::from_slice(b"bank").unwrap();
        assert_eq!(name, OracleName::new_unchecked("bank"));

        // Raw bytes that don't pass name validation must be rejected rather
        // than silently produce an invalid name.
        assert!(<&Symbol>::from_slice(b"NOT VALID").is_err());
        assert!(<&Symbol>::from_slice(&[0xff, 0xfe]).is_err());
    }
}
