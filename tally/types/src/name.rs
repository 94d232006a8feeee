use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
};

const MAX_NAME_LENGTH: usize = 16;

fn validate_name(s: &str) -> Result<(), &'static str> {
    if s.is_empty() {
        return Err("empty");
    }

    if s.len() > MAX_NAME_LENGTH {
        return Err("longer than 16 characters");
    }

    if s.chars().any(|ch| !matches!(ch, 'a'..='z' | '0'..='9')) {
        return Err("must be lowercase alphanumeric");
    }

    Ok(())
}

// The two name types are identical in form but deliberately distinct in type,
// so an asset ticker can't be passed where a feed namespace is expected.
macro_rules! generate_name {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(
            serde::Serialize, BorshSerialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        pub struct $name(String);

        impl $name {
            pub fn new_unchecked<T>(s: T) -> Self
            where
                T: Into<String>,
            {
                Self(s.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl TryFrom<String> for $name {
            type Error = StdError;

            fn try_from(s: String) -> StdResult<Self> {
                match validate_name(&s) {
                    Ok(()) => Ok(Self(s)),
                    Err(reason) => Err(StdError::invalid_name::<Self>(s, reason)),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = StdError;

            fn try_from(s: &str) -> StdResult<Self> {
                Self::try_from(s.to_string())
            }
        }

        impl std::str::FromStr for $name {
            type Err = StdError;

            fn from_str(s: &str) -> StdResult<Self> {
                Self::try_from(s.to_string())
            }
        }

        impl<'de> serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                <String as serde::de::Deserialize>::deserialize(deserializer)?
                    .try_into()
                    .map_err(serde::de::Error::custom)
            }
        }

        impl BorshDeserialize for $name {
            fn deserialize_reader<R>(reader: &mut R) -> std::io::Result<Self>
            where
                R: std::io::Read,
            {
                <String as BorshDeserialize>::deserialize_reader(reader)?
                    .try_into()
                    .map_err(std::io::Error::other)
            }
        }
    };
}

generate_name! {
    /// An asset ticker: 1-16 lowercase alphanumeric ASCII characters, e.g.
    /// `btc`.
    Symbol
}

generate_name! {
    /// A price-feed namespace name, same form as [`Symbol`]. Each namespace
    /// holds an independently persisted symbol-to-price map.
    OracleName
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("btc"; "short ticker")]
    #[test_case("token0"; "with digit")]
    #[test_case("aaaaaaaaaaaaaaaa"; "sixteen characters")]
    fn validation_accepts(input: &str) {
        assert_eq!(Symbol::try_from(input).unwrap().as_ref(), input);
    }

    #[test_case(""; "empty")]
    #[test_case("BTC"; "uppercase")]
    #[test_case("btc/usd"; "punctuation")]
    #[test_case("aaaaaaaaaaaaaaaaa"; "seventeen characters")]
    fn validation_rejects(input: &str) {
        assert!(matches!(
            Symbol::try_from(input),
            Err(StdError::InvalidName { .. })
        ));
    }

    #[test]
    fn deserialization_validates() {
        assert_eq!(
            serde_json::from_str::<Symbol>("\"eth\"").unwrap(),
            Symbol::new_unchecked("eth"),
        );
        assert!(serde_json::from_str::<OracleName>("\"NOT VALID\"").is_err());
    }
}
