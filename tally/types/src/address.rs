use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE},
    serde::{de, ser},
    std::{
        fmt::{self, Debug, Display},
        str::FromStr,
    },
};

/// A participant address: 20 bytes, rendered as lowercase hex with the `0x`
/// prefix.
///
/// Addresses are validated during deserialization. If deserialization doesn't
/// throw an error, the address is well formed, so it is safe to use `Addr`s
/// directly in messages.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr([u8; 20]);

impl Addr {
    pub const LENGTH: usize = 20;

    /// Create a new address from a 20-byte array.
    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self(array)
    }

    /// Generate a mock address for use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self(bytes)
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Addr {
    type Error = StdError;

    fn try_from(bytes: &[u8]) -> StdResult<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| StdError::invalid_address(HEXLOWER.encode(bytes), "incorrect length"))
    }
}

impl FromStr for Addr {
    type Err = StdError;

    /// Parse an address from hex. The `0x` prefix is optional; both hex cases
    /// are accepted.
    fn from_str(s: &str) -> StdResult<Self> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        let bytes = HEXLOWER_PERMISSIVE
            .decode(hex.as_bytes())
            .map_err(|err| StdError::invalid_address(s, err))?;
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| StdError::invalid_address(s, "incorrect length"))
    }
}

impl Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", HEXLOWER.encode(&self.0))
    }
}

impl Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Addr({self})")
    }
}

impl ser::Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(AddrVisitor)
    }
}

struct AddrVisitor;

impl de::Visitor<'_> for AddrVisitor {
    type Value = Addr;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded 20-byte hex address")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Addr::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn formatting_works() {
        assert_eq!(
            Addr::mock(1).to_string(),
            "0x0000000000000000000000000000000000000001",
        );
    }

    #[test_case("0x000000000000000000000000000000000000000a"; "lowercase with prefix")]
    #[test_case("000000000000000000000000000000000000000a"; "without prefix")]
    #[test_case("0x000000000000000000000000000000000000000A"; "uppercase hex digits")]
    fn parsing_works(input: &str) {
        assert_eq!(Addr::from_str(input).unwrap(), Addr::mock(10));
    }

    #[test_case("0x1234"; "too short")]
    #[test_case("zzzz"; "not hex")]
    #[test_case(""; "empty")]
    fn parsing_fails(input: &str) {
        assert!(matches!(
            Addr::from_str(input),
            Err(StdError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn serde_round_trip_works() {
        let addr = Addr::mock(7);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x0000000000000000000000000000000000000007\"");
        assert_eq!(serde_json::from_str::<Addr>(&json).unwrap(), addr);
    }
}
