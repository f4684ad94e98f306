use {
    crate::{
        MathResult, NextNumber, Number, NumberConst, PrevNumber, RAY_DECIMAL_PLACES, Uint256,
        Uint512,
    },
    bnum::types::U512,
};

/// Upper bound on the number of terms summed by the series expansions.
///
/// For arguments up to `1.0` both series converge to the last decimal place
/// in fewer than 64 terms.
pub const MAX_SERIES_TERMS: u32 = 256;

/// A 54-decimal unsigned fixed-point number backed by a [`Uint512`].
///
/// Precise has twice the decimal places of a ray, so that a ray can be
/// converted into it losslessly and the intermediate results of logarithm and
/// exponential series stay exact well beyond the 27th decimal. Every
/// operation rounds towards zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precise(Uint512);

impl Precise {
    pub const DECIMAL_PLACES: u32 = 2 * RAY_DECIMAL_PLACES;
    pub const ONE: Self = Self(Self::PRECISION);
    /// `10^54`
    pub const PRECISION: Uint512 = Uint512::new(U512::from_digits([
        0x9240000000000000,
        0xc51999090b65f67d,
        0x000a70c3c40a64e6,
        0,
        0,
        0,
        0,
        0,
    ]));
    pub const ZERO: Self = Self(Uint512::ZERO);

    /// Ratio between the precision of a precise number and that of a ray.
    const RAY_TO_PRECISE: Uint512 = Uint512::new_from_u128(1_000_000_000_000_000_000_000_000_000);

    pub const fn raw(inner: Uint512) -> Self {
        Self(inner)
    }

    pub const fn inner(&self) -> &Uint512 {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Uint512::ZERO
    }

    /// Create a precise number from the ratio `numerator / denominator`,
    /// rounded down.
    pub fn checked_from_ratio(
        numerator: impl Into<Uint512>,
        denominator: impl Into<Uint512>,
    ) -> MathResult<Self> {
        numerator
            .into()
            .checked_mul(Self::PRECISION)?
            .checked_div(denominator.into())
            .map(Self)
    }

    /// Losslessly convert a ray into a precise number.
    pub fn from_ray(ray: Uint256) -> MathResult<Self> {
        ray.into_next().checked_mul(Self::RAY_TO_PRECISE).map(Self)
    }

    /// Truncate to ray precision.
    pub fn into_ray_floor(self) -> MathResult<Uint256> {
        self.0.checked_div(Self::RAY_TO_PRECISE)?.checked_into_prev()
    }

    /// Truncate to an integer.
    pub fn into_int_floor(self) -> MathResult<Uint512> {
        self.0.checked_div(Self::PRECISION)
    }

    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn checked_mul(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_mul(rhs.0)?
            .checked_div(Self::PRECISION)
            .map(Self)
    }

    pub fn checked_mul_int(self, rhs: impl Into<Uint512>) -> MathResult<Self> {
        self.0.checked_mul(rhs.into()).map(Self)
    }

    pub fn checked_div_int(self, rhs: impl Into<Uint512>) -> MathResult<Self> {
        self.0.checked_div(rhs.into()).map(Self)
    }

    /// Natural logarithm of `1 + self`.
    ///
    /// Uses `ln(1 + y) = 2 * atanh(y / (2 + y))`, whose series has only odd
    /// powers of an argument below `1/3` for `y <= 1`. The result never
    /// exceeds the exact value.
    pub fn ln_1p(self) -> MathResult<Self> {
        if self.is_zero() {
            return Ok(Self::ZERO);
        }

        let two = Self::PRECISION.checked_mul(Uint512::from(2_u32))?;
        let z = Self::checked_from_ratio(self.0, two.checked_add(self.0)?)?;
        let z_squared = z.checked_mul(z)?;

        let mut sum = Self::ZERO;
        let mut power = z;

        for k in 0..MAX_SERIES_TERMS {
            if power.is_zero() {
                break;
            }

            sum = sum.checked_add(power.checked_div_int(2 * k + 1)?)?;
            power = power.checked_mul(z_squared)?;
        }

        sum.checked_mul_int(2_u32)
    }

    /// `e^self - 1`, by its Taylor series. The result never exceeds the exact
    /// value.
    pub fn exp_m1(self) -> MathResult<Self> {
        let mut sum = Self::ZERO;
        let mut term = self;

        for k in 2..MAX_SERIES_TERMS + 2 {
            if term.is_zero() {
                break;
            }

            sum = sum.checked_add(term)?;
            term = term.checked_mul(self)?.checked_div_int(k)?;
        }

        Ok(sum)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        proptest::prelude::*,
        std::str::FromStr,
        test_case::test_case,
    };

    fn precise(s: &str) -> Precise {
        Precise::raw(Uint512::from_str(s).unwrap())
    }

    fn assert_close(actual: Precise, expect: Precise, tolerance: u32) {
        let diff = if actual > expect {
            actual.checked_sub(expect).unwrap()
        } else {
            expect.checked_sub(actual).unwrap()
        };
        assert!(
            diff.inner() <= &Uint512::from(tolerance),
            "actual: {actual:?}, expect: {expect:?}"
        );
    }

    #[test]
    fn precision_is_ten_to_the_54() {
        assert_eq!(Precise::PRECISION, Uint512::TEN.checked_pow(54).unwrap());
    }

    #[test_case(
        Precise::ONE,
        "693147180559945309417232121458176568075500134360255254" ;
        "ln 2"
    )]
    #[test_case(
        Precise::checked_from_ratio(1_u32, 2_u32).unwrap(),
        "405465108108164381978013115464349136571990423462494197" ;
        "ln 1.5"
    )]
    #[test_case(
        Precise::ZERO,
        "0" ;
        "ln 1"
    )]
    fn ln_1p_works(y: Precise, expect: &str) {
        assert_close(y.ln_1p().unwrap(), precise(expect), 100);
        assert!(y.ln_1p().unwrap() <= precise(expect));
    }

    #[test_case(
        Precise::ONE,
        "1718281828459045235360287471352662497757247093699959574" ;
        "e minus one"
    )]
    #[test_case(
        Precise::ZERO,
        "0" ;
        "zero"
    )]
    fn exp_m1_works(x: Precise, expect: &str) {
        assert_close(x.exp_m1().unwrap(), precise(expect), 100);
        assert!(x.exp_m1().unwrap() <= precise(expect));
    }

    #[test]
    fn ray_round_trip() {
        let ray = Uint256::new_from_u128(1_000_000_001_547_125_957_863_212_448);
        let value = Precise::from_ray(ray).unwrap();
        assert_eq!(value.into_ray_floor().unwrap(), ray);
        assert_eq!(value.into_int_floor().unwrap(), Uint512::ONE);
        assert_eq!(
            Precise::checked_from_ratio(3_u32, 2_u32)
                .unwrap()
                .into_int_floor()
                .unwrap(),
            Uint512::ONE
        );
    }

    proptest! {
        /// `exp_m1` undoes `ln_1p` up to the rounding of both series.
        #[test]
        fn exp_m1_inverts_ln_1p(numerator in 0..=1_000_000_u32) {
            let y = Precise::checked_from_ratio(numerator, 1_000_000_u32).unwrap();
            assert_close(y.ln_1p().unwrap().exp_m1().unwrap(), y, 1_000);
        }

        /// The logarithm is increasing.
        #[test]
        fn ln_1p_is_monotonic(a in 0..1_000_000_u32, b in 0..1_000_000_u32) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = Precise::checked_from_ratio(lo, 1_000_000_u32).unwrap();
            let hi = Precise::checked_from_ratio(hi, 1_000_000_u32).unwrap();
            prop_assert!(lo.ln_1p().unwrap() <= hi.ln_1p().unwrap());
        }
    }
}
