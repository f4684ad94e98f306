use {
    crate::{BPS_PER_UNIT, RAY, RateError, RateResult, SECONDS_PER_YEAR},
    conv_math::{HALF_RAY, MathError, Number, PrevNumber, Uint256, checked_rpow},
};

/// Annualize a per-second rate and express it in basis points, rounded to
/// the nearest one.
///
/// This is how an on-chain consumer reads a rate back: the rate is raised to
/// the number of seconds in a year with [`checked_rpow`], which rounds half up
/// at every step, and the excess over `1.0` is rounded half up to a basis
/// point. Unlike [`to_bps`](crate::to_bps), the result isn't capped by
/// [`MAX_BPS`](crate::MAX_BPS).
///
/// Fails with [`RateError::RateTooLow`] if `rate` is below [`RAY`], or with a
/// math error if the yearly rate overflows.
pub fn yearly_bps(rate: Uint256) -> RateResult<u32> {
    if rate < RAY {
        return Err(RateError::rate_too_low(rate));
    }

    let yearly = checked_rpow(rate, SECONDS_PER_YEAR)?;

    let bps = yearly
        .checked_sub(RAY)?
        .checked_mul(Uint256::from(BPS_PER_UNIT))?
        .checked_add(HALF_RAY)?
        .checked_div(RAY)?;

    let bps = bps.checked_into_prev()?.into_inner();

    u32::try_from(bps)
        .map_err(|_| MathError::overflow_conversion::<_, u32>(bps).into())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{MAX_BPS, to_rate},
        conv_math::NumberConst,
        test_case::test_case,
    };

    #[test_case(0 ; "zero")]
    #[test_case(1 ; "one bps")]
    #[test_case(500 ; "five percent")]
    #[test_case(5000 ; "fifty percent")]
    #[test_case(MAX_BPS ; "max")]
    fn yearly_bps_inverts_to_rate(bps: u32) {
        assert_eq!(yearly_bps(to_rate(bps).unwrap()).unwrap(), bps);
    }

    #[test]
    fn yearly_bps_rejects_low_rates() {
        assert!(matches!(
            yearly_bps(RAY - Uint256::ONE),
            Err(RateError::RateTooLow { .. })
        ));
    }

    /// Rates above the converter's domain still annualize.
    #[test]
    fn yearly_bps_beyond_max() {
        // 4 * 10^-8 per second compounds to about 253% a year.
        let rate = RAY + Uint256::new_from_u128(40_000_000_000_000_000_000);
        let bps = yearly_bps(rate).unwrap();
        assert!(bps > MAX_BPS);
    }

    #[test]
    fn yearly_bps_overflow() {
        assert!(matches!(
            yearly_bps(RAY * Uint256::from(2_u32)),
            Err(RateError::Math(_))
        ));
    }
}
