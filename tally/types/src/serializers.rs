use {
    crate::{Json, StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de::DeserializeOwned, ser::Serialize},
};

// ----------------------------------- json ------------------------------------

/// Represents a Rust value that can be serialized into JSON.
pub trait JsonSerExt: Sized {
    /// Serialize the Rust value into JSON bytes.
    fn to_json_vec(&self) -> StdResult<Vec<u8>>;

    /// Serialize the Rust value into a JSON string.
    fn to_json_string(&self) -> StdResult<String>;

    /// Serialize the Rust value into a JSON value.
    fn to_json_value(&self) -> StdResult<Json>;
}

impl<T> JsonSerExt for T
where
    T: Serialize,
{
    fn to_json_vec(&self) -> StdResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|err| StdError::serialize::<T>("json", err))
    }

    fn to_json_string(&self) -> StdResult<String> {
        serde_json::to_string(self).map_err(|err| StdError::serialize::<T>("json", err))
    }

    fn to_json_value(&self) -> StdResult<Json> {
        serde_json::to_value(self).map_err(|err| StdError::serialize::<T>("json", err))
    }
}

/// Represents raw JSON data that can be deserialized into a Rust value.
pub trait JsonDeExt {
    /// Deserialize the raw data into a Rust value.
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned;
}

impl<T> JsonDeExt for &T
where
    T: AsRef<[u8]>,
{
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned,
    {
        serde_json::from_slice(self.as_ref())
            .map_err(|err| StdError::deserialize::<D>("json", err))
    }
}

impl JsonDeExt for Json {
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned,
    {
        serde_json::from_value(self).map_err(|err| StdError::deserialize::<D>("json", err))
    }
}

// ----------------------------------- borsh -----------------------------------

/// Represents a Rust value that can be serialized into raw bytes using the
/// [Borsh](https://github.com/near/borsh) encoding.
pub trait BorshSerExt: Sized {
    /// Serialize the Rust value into Borsh bytes.
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>>;
}

impl<T> BorshSerExt for T
where
    T: BorshSerialize,
{
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>> {
        borsh::to_vec(self).map_err(|err| StdError::serialize::<T>("borsh", err))
    }
}

/// Represents raw bytes that can be deserialized into a Rust value using the
/// [Borsh](https://github.com/near/borsh) encoding.
pub trait BorshDeExt {
    fn deserialize_borsh<D>(self) -> StdResult<D>
    where
        D: BorshDeserialize;
}

impl<T> BorshDeExt for &T
where
    T: AsRef<[u8]>,
{
    fn deserialize_borsh<D>(self) -> StdResult<D>
    where
        D: BorshDeserialize,
    {
        borsh::from_slice(self.as_ref()).map_err(|err| StdError::deserialize::<D>("borsh", err))
    }
}
