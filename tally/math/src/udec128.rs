use {
    crate::{
        macros::{impl_assign_op, impl_op},
        MathError, MathResult,
    },
    bnum::types::U256,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display, Write},
        str::FromStr,
    },
};

/// An unsigned fixed-point decimal number with 18 decimal places, backed by
/// a `u128` mantissa.
///
/// All amounts, prices, and values in the ledger are of this type. Arithmetic
/// is exact and deterministic: multiplication and division widen to 256 bits
/// internally, so the full intermediate product never overflows; results are
/// floored to 18 decimal places.
#[derive(
    BorshSerialize, BorshDeserialize, Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Udec128(u128);

impl Udec128 {
    /// Number of decimal digits interpreted as decimal places.
    pub const DECIMAL_PLACES: u32 = 18;
    /// Ratio between the mantissa and the decimal value it represents.
    pub const DECIMAL_FRACTION: u128 = 10u128.pow(Self::DECIMAL_PLACES);
    pub const MAX: Self = Self(u128::MAX);
    pub const ONE: Self = Self(Self::DECIMAL_FRACTION);
    pub const ZERO: Self = Self(0);

    /// Create a new [`Udec128`] from a number of whole units.
    ///
    /// ```rust
    /// use {std::str::FromStr, tally_math::Udec128};
    ///
    /// assert_eq!(Udec128::new(100), Udec128::from_str("100").unwrap());
    /// ```
    pub const fn new(whole: u128) -> Self {
        Self(whole * Self::DECIMAL_FRACTION)
    }

    /// Create a new [`Udec128`] from a raw mantissa, _without_ adding decimal
    /// places.
    ///
    /// ```rust
    /// use {std::str::FromStr, tally_math::Udec128};
    ///
    /// assert_eq!(
    ///     Udec128::raw(100),
    ///     Udec128::from_str("0.0000000000000001").unwrap(),
    /// );
    /// ```
    pub const fn raw(mantissa: u128) -> Self {
        Self(mantissa)
    }

    pub const fn mantissa(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
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

    pub fn checked_mul(self, other: Self) -> MathResult<Self> {
        let product = U256::from(self.0) * U256::from(other.0) / U256::from(Self::DECIMAL_FRACTION);
        u128::try_from(product)
            .map(Self)
            .map_err(|_| MathError::overflow_conversion::<_, Self>(product))
    }

    pub fn checked_div(self, other: Self) -> MathResult<Self> {
        if other.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        let quotient =
            U256::from(self.0) * U256::from(Self::DECIMAL_FRACTION) / U256::from(other.0);
        u128::try_from(quotient)
            .map(Self)
            .map_err(|_| MathError::overflow_conversion::<_, Self>(quotient))
    }
}

impl Display for Udec128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let whole = self.0 / Self::DECIMAL_FRACTION;
        let fractional = self.0 % Self::DECIMAL_FRACTION;

        if fractional == 0 {
            write!(f, "{whole}")
        } else {
            let fractional = format!("{fractional:0>width$}", width = Self::DECIMAL_PLACES as usize);
            f.write_str(&whole.to_string())?;
            f.write_char('.')?;
            f.write_str(fractional.trim_end_matches('0'))
        }
    }
}

impl FromStr for Udec128 {
    type Err = MathError;

    /// Parse a decimal string into a [`Udec128`].
    ///
    /// Accepted inputs: `"1.23"`, `"1"`, `"000012"`, `"1.123000000"`.
    /// Disallowed: `""`, `".23"`, anything negative, more than 18 fractional
    /// digits (no rounding is ever performed).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split('.');

        let mut mantissa = parts
            .next()
            .unwrap() // `split` always returns at least one element
            .parse::<u128>()
            .map_err(|err| MathError::parse_number::<Self>(input, err))?
            .checked_mul(Self::DECIMAL_FRACTION)
            .ok_or_else(|| MathError::parse_number::<Self>(input, "whole part too large"))?;

        if let Some(fractional_part) = parts.next() {
            let fractional = fractional_part
                .parse::<u128>()
                .map_err(|err| MathError::parse_number::<Self>(input, err))?;
            let exp = Self::DECIMAL_PLACES
                .checked_sub(fractional_part.len() as u32)
                .ok_or_else(|| {
                    MathError::parse_number::<Self>(
                        input,
                        format!(
                            "cannot have more than {} fractional digits",
                            Self::DECIMAL_PLACES
                        ),
                    )
                })?;

            // Can't overflow: `fractional < 10^18` and `10^exp <= 10^18`.
            let fractional = fractional * 10u128.pow(exp);
            mantissa = mantissa
                .checked_add(fractional)
                .ok_or_else(|| MathError::parse_number::<Self>(input, "value too large"))?;
        }

        if parts.next().is_some() {
            return Err(MathError::parse_number::<Self>(input, "too many decimal points"));
        }

        Ok(Self(mantissa))
    }
}

impl ser::Serialize for Udec128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Udec128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(Udec128Visitor)
    }
}

struct Udec128Visitor;

impl de::Visitor<'_> for Udec128Visitor {
    type Value = Udec128;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded unsigned decimal")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Udec128::from_str(v).map_err(E::custom)
    }
}

impl_op!(Udec128, Add, add, checked_add);
impl_op!(Udec128, Sub, sub, checked_sub);
impl_op!(Udec128, Mul, mul, checked_mul);
impl_op!(Udec128, Div, div, checked_div);
impl_assign_op!(Udec128, AddAssign, add_assign, checked_add);
impl_assign_op!(Udec128, SubAssign, sub_assign, checked_sub);
impl_assign_op!(Udec128, MulAssign, mul_assign, checked_mul);
impl_assign_op!(Udec128, DivAssign, div_assign, checked_div);

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        proptest::prelude::*,
        test_case::test_case,
    };

    #[test_case("0", 0; "zero")]
    #[test_case("1", Udec128::DECIMAL_FRACTION; "one")]
    #[test_case("000012", 12 * Udec128::DECIMAL_FRACTION; "leading zeros")]
    #[test_case("1.5", 1_500_000_000_000_000_000; "one and a half")]
    #[test_case("0.000000000000000001", 1; "smallest step")]
    #[test_case("123.456", 123_456_000_000_000_000_000; "three fractional digits")]
    #[test_case("1.123000000", 1_123_000_000_000_000_000; "trailing fractional zeros")]
    fn parsing_works(input: &str, mantissa: u128) {
        assert_eq!(Udec128::from_str(input).unwrap(), Udec128::raw(mantissa));
    }

    #[test_case(""; "empty")]
    #[test_case(".5"; "missing whole part")]
    #[test_case("1."; "missing fractional part")]
    #[test_case("1.2.3"; "too many dots")]
    #[test_case("-1"; "negative")]
    #[test_case("foo"; "not a number")]
    #[test_case("0.0000000000000000001"; "too many fractional digits")]
    #[test_case("340282366920938463464"; "whole part too large")]
    fn parsing_fails(input: &str) {
        assert!(matches!(
            Udec128::from_str(input),
            Err(MathError::ParseNumber { .. })
        ));
    }

    #[test_case(Udec128::ZERO, "0"; "zero")]
    #[test_case(Udec128::new(75), "75"; "whole")]
    #[test_case(Udec128::raw(1_500_000_000_000_000_000), "1.5"; "trims trailing zeros")]
    #[test_case(Udec128::raw(1), "0.000000000000000001"; "smallest step")]
    fn formatting_works(value: Udec128, expect: &str) {
        assert_eq!(value.to_string(), expect);
    }

    #[test]
    fn serde_round_trip_works() {
        let value = Udec128::from_str("123.456").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"123.456\"");
        assert_eq!(serde_json::from_str::<Udec128>(&json).unwrap(), value);
    }

    #[test]
    fn addition_works() {
        assert_eq!(Udec128::new(10) + Udec128::new(20), Udec128::new(30));
        assert!(matches!(
            Udec128::MAX.checked_add(Udec128::raw(1)),
            Err(MathError::OverflowAdd { .. })
        ));
    }

    #[test]
    fn subtraction_works() {
        assert_eq!(Udec128::new(30) - Udec128::new(20), Udec128::new(10));
        assert!(matches!(
            Udec128::new(1).checked_sub(Udec128::new(2)),
            Err(MathError::OverflowSub { .. })
        ));
    }

    #[test_case(Udec128::new(2), Udec128::new(10_000), Udec128::new(20_000); "whole units")]
    #[test_case(
        Udec128::from_str("1.5").unwrap(),
        Udec128::new(2),
        Udec128::new(3);
        "fractional lhs"
    )]
    #[test_case(
        Udec128::from_str("0.1").unwrap(),
        Udec128::from_str("0.1").unwrap(),
        Udec128::from_str("0.01").unwrap();
        "both fractional"
    )]
    #[test_case(Udec128::MAX, Udec128::ONE, Udec128::MAX; "identity at max")]
    fn multiplication_works(a: Udec128, b: Udec128, expect: Udec128) {
        assert_eq!(a * b, expect);
    }

    #[test]
    fn multiplication_overflow_is_caught() {
        assert!(matches!(
            Udec128::MAX.checked_mul(Udec128::new(2)),
            Err(MathError::OverflowConversion { .. })
        ));
    }

    #[test]
    fn division_works() {
        assert_eq!(Udec128::new(20_000) / Udec128::new(2), Udec128::new(10_000));
        // Floored at the 18th decimal place.
        assert_eq!(
            Udec128::new(1) / Udec128::new(3),
            Udec128::raw(333_333_333_333_333_333),
        );
        assert!(matches!(
            Udec128::new(1).checked_div(Udec128::ZERO),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    proptest! {
        #[test]
        fn parse_is_inverse_of_format(mantissa in any::<u128>()) {
            let value = Udec128::raw(mantissa);
            prop_assert_eq!(Udec128::from_str(&value.to_string()).unwrap(), value);
        }

        #[test]
        fn add_then_sub_is_identity(a in any::<u64>(), b in any::<u64>()) {
            let a = Udec128::raw(a as u128);
            let b = Udec128::raw(b as u128);
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn mul_matches_widened_reference(a in any::<u64>(), b in any::<u64>()) {
            let expect = (a as u128) * (b as u128) / Udec128::DECIMAL_FRACTION;
            let got = Udec128::raw(a as u128) * Udec128::raw(b as u128);
            prop_assert_eq!(got.mantissa(), expect);
        }
    }
}
