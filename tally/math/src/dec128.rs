use {
    crate::{
        macros::{impl_assign_op, impl_op},
        MathError, MathResult, Udec128,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display, Write},
        str::FromStr,
    },
};

/// A signed fixed-point decimal number with 18 decimal places, backed by an
/// `i128` mantissa.
///
/// Balances and prices are unsigned ([`Udec128`]); this type exists for the
/// few figures that can legitimately go below zero, such as a participant's
/// net value when borrows outweigh supplies. It deliberately carries only the
/// operations needed for such accumulations.
#[derive(
    BorshSerialize, BorshDeserialize, Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Dec128(i128);

impl Dec128 {
    pub const DECIMAL_FRACTION: i128 = 10i128.pow(Self::DECIMAL_PLACES);
    pub const DECIMAL_PLACES: u32 = 18;
    pub const ZERO: Self = Self(0);

    /// Create a new [`Dec128`] from a number of whole units.
    pub const fn new(whole: i128) -> Self {
        Self(whole * Self::DECIMAL_FRACTION)
    }

    /// Create a new [`Dec128`] from a raw mantissa, _without_ adding decimal
    /// places.
    pub const fn raw(mantissa: i128) -> Self {
        Self(mantissa)
    }

    pub const fn mantissa(self) -> i128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow_add(self, other))
    }

    pub fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow_sub(self, other))
    }
}

impl TryFrom<Udec128> for Dec128 {
    type Error = MathError;

    fn try_from(value: Udec128) -> MathResult<Self> {
        i128::try_from(value.mantissa())
            .map(Self)
            .map_err(|_| MathError::overflow_conversion::<_, Self>(value))
    }
}

impl Display for Dec128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 < 0 {
            f.write_char('-')?;
        }

        Display::fmt(&Udec128::raw(self.0.unsigned_abs()), f)
    }
}

impl FromStr for Dec128 {
    type Err = MathError;

    /// Parse a decimal string into a [`Dec128`]. Same format as [`Udec128`],
    /// with an optional leading minus sign.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (unsigned, negative) = match input.strip_prefix('-') {
            Some(rest) => (Udec128::from_str(rest)?, true),
            None => (Udec128::from_str(input)?, false),
        };

        let mantissa = i128::try_from(unsigned.mantissa())
            .map_err(|_| MathError::overflow_conversion::<_, Self>(unsigned))?;

        Ok(Self(if negative { -mantissa } else { mantissa }))
    }
}

impl ser::Serialize for Dec128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Dec128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(Dec128Visitor)
    }
}

struct Dec128Visitor;

impl de::Visitor<'_> for Dec128Visitor {
    type Value = Dec128;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded signed decimal")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Dec128::from_str(v).map_err(E::custom)
    }
}

impl_op!(Dec128, Add, add, checked_add);
impl_op!(Dec128, Sub, sub, checked_sub);
impl_assign_op!(Dec128, AddAssign, add_assign, checked_add);
impl_assign_op!(Dec128, SubAssign, sub_assign, checked_sub);

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("0", 0; "zero")]
    #[test_case("18000", 18_000 * Dec128::DECIMAL_FRACTION; "positive whole")]
    #[test_case("-2", -2 * Dec128::DECIMAL_FRACTION; "negative whole")]
    #[test_case("-0.5", -500_000_000_000_000_000; "negative fractional")]
    fn parsing_works(input: &str, mantissa: i128) {
        assert_eq!(Dec128::from_str(input).unwrap(), Dec128::raw(mantissa));
    }

    #[test_case(Dec128::new(-2), "-2"; "negative whole")]
    #[test_case(Dec128::raw(-500_000_000_000_000_000), "-0.5"; "negative fractional")]
    #[test_case(Dec128::new(18_000), "18000"; "positive whole")]
    fn formatting_works(value: Dec128, expect: &str) {
        assert_eq!(value.to_string(), expect);
    }

    #[test]
    fn signed_arithmetic_works() {
        let supplied = Dec128::new(20_000);
        let borrowed = Dec128::new(2_000);
        assert_eq!(supplied - borrowed, Dec128::new(18_000));

        // Crossing zero is fine.
        assert_eq!(Dec128::new(5) - Dec128::new(8), Dec128::new(-3));
        assert!(Dec128::new(-3).is_negative());
    }

    #[test]
    fn conversion_from_unsigned_works() {
        let value = Udec128::new(123);
        assert_eq!(Dec128::try_from(value).unwrap(), Dec128::new(123));

        // A mantissa beyond `i128::MAX` must not wrap around.
        assert!(matches!(
            Dec128::try_from(Udec128::MAX),
            Err(MathError::OverflowConversion { .. })
        ));
    }

    #[test]
    fn serde_round_trip_works() {
        let value = Dec128::from_str("-0.5").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-0.5\"");
        assert_eq!(serde_json::from_str::<Dec128>(&json).unwrap(), value);
    }
}
