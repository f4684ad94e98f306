//! Conversion between a yearly rate in basis points and the equivalent
//! per-second rate in ray precision.
//!
//! The per-second rate `r` of a yearly rate of `bps` basis points is the one
//! that, compounded every second for a year, grows `1.0` into
//! `1 + bps / 10000`:
//!
//! ```text
//! r = exp(ln(1 + bps / 10000) / SECONDS_PER_YEAR)
//! ```
//!
//! The logarithm, the division, and the exponential are each truncated to 27
//! decimal places. Those truncations are part of the result: they make every
//! rate equal, to the last digit, to the published rate tables lending
//! protocols configure their markets with. For example, 5% is
//! `1.000000001547125957863212448`, even though the exact value rounds to
//! `...449` in the last place.
//!
//! The conversion is strictly increasing over `0..=MAX_BPS`, so [`to_bps`]
//! inverts [`to_rate`] exactly.

use {
    crate::{BPS_PER_UNIT, MAX_BPS, MAX_RATE, RAY, RateError, RateResult, SECONDS_PER_YEAR},
    conv_math::{Number, Precise, PrevNumber, Uint256, Uint512},
};

/// Convert a yearly rate in basis points to a per-second rate in ray
/// precision.
///
/// Fails with [`RateError::BpsTooHigh`] if `bps` exceeds [`MAX_BPS`].
pub fn to_rate(bps: u32) -> RateResult<Uint256> {
    if bps > MAX_BPS {
        return Err(RateError::bps_too_high(bps, MAX_BPS));
    }

    rate_at(bps)
}

/// Convert a per-second rate in ray precision to a yearly rate in basis
/// points.
///
/// Returns the largest `bps` such that `to_rate(bps) <= rate`. For a rate
/// returned by [`to_rate`], this is exactly the `bps` it was computed from; a
/// rate falling between two consecutive basis points is rounded down.
///
/// Fails with [`RateError::RateTooLow`] if `rate` is below [`RAY`] (a negative
/// yearly rate), and with [`RateError::RateTooHigh`] if it is above
/// [`MAX_RATE`].
pub fn to_bps(rate: Uint256) -> RateResult<u32> {
    if rate < RAY {
        return Err(RateError::rate_too_low(rate));
    }

    if rate > MAX_RATE {
        return Err(RateError::rate_too_high(rate, MAX_RATE));
    }

    let estimate = estimate_bps(rate)?;
    let mut bps = estimate;

    // The estimate is off by at most one in either direction. Walk it onto
    // the floor; both loops are bounded by the domain.
    while bps > 0 && rate_at(bps)? > rate {
        bps -= 1;
    }

    while bps < MAX_BPS && rate_at(bps + 1)? <= rate {
        bps += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(%rate, estimate, bps, "Resolved rate to bps");

    Ok(bps)
}

/// The per-second rate of `bps`, without the domain check.
fn rate_at(bps: u32) -> RateResult<Uint256> {
    let log = Precise::checked_from_ratio(bps, BPS_PER_UNIT)?
        .ln_1p()?
        .into_ray_floor()?;

    let per_second = log.checked_div(Uint256::from(SECONDS_PER_YEAR))?;

    let excess = Precise::from_ray(per_second)?.exp_m1()?.into_ray_floor()?;

    Ok(RAY.checked_add(excess)?)
}

/// `floor(10000 * (rate ^ SECONDS_PER_YEAR - 1))`, clamped to [`MAX_BPS`],
/// evaluated with the logarithm and exponential in 54-decimal precision.
///
/// Since rates are truncated, the estimate of an exact rate may fall one
/// basis point short.
fn estimate_bps(rate: Uint256) -> RateResult<u32> {
    let estimate = Precise::from_ray(rate.checked_sub(RAY)?)?
        .ln_1p()?
        .checked_mul_int(SECONDS_PER_YEAR)?
        .exp_m1()?
        .checked_mul_int(BPS_PER_UNIT)?
        .into_int_floor()?;

    if estimate >= Uint512::from(MAX_BPS) {
        return Ok(MAX_BPS);
    }

    // Lower than `MAX_BPS`, so it fits in a `u32`.
    Ok(estimate.checked_into_prev()?.checked_into_prev()?.into_inner() as u32)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        conv_math::NumberConst,
        std::str::FromStr,
        test_case::test_case,
    };

    fn ray(s: &str) -> Uint256 {
        Uint256::from_str(s).unwrap()
    }

    #[test_case(0, "1000000000000000000000000000" ; "zero")]
    #[test_case(1, "1000000000003170820659990704" ; "one bps")]
    #[test_case(100, "1000000000315522921573372069" ; "one percent")]
    #[test_case(200, "1000000000627937192491029810" ; "two percent")]
    #[test_case(500, "1000000001547125957863212448" ; "five percent")]
    #[test_case(1000, "1000000003022265980097387650" ; "ten percent")]
    #[test_case(5000, "1000000012857214317438491659" ; "fifty percent")]
    #[test_case(10000, "1000000021979553151239153027" ; "one hundred percent")]
    fn to_rate_works(bps: u32, expect: &str) {
        assert_eq!(to_rate(bps).unwrap(), ray(expect));
        assert_eq!(to_bps(ray(expect)).unwrap(), bps);
    }

    #[test_case(MAX_BPS + 1 ; "one above max")]
    #[test_case(u32::MAX ; "u32 max")]
    fn to_rate_rejects_high_bps(bps: u32) {
        assert_eq!(
            to_rate(bps),
            Err(RateError::BpsTooHigh { bps, max: MAX_BPS })
        );
    }

    #[test]
    fn max_rate_is_the_rate_of_max_bps() {
        assert_eq!(to_rate(MAX_BPS).unwrap(), MAX_RATE);
        assert_eq!(to_bps(MAX_RATE).unwrap(), MAX_BPS);
    }

    #[test]
    fn to_bps_boundaries() {
        assert_eq!(to_bps(RAY).unwrap(), 0);
        assert_eq!(to_bps(RAY + Uint256::ONE).unwrap(), 0);

        assert_eq!(
            to_bps(RAY - Uint256::ONE),
            Err(RateError::RateTooLow {
                rate: RAY - Uint256::ONE
            })
        );
        assert!(matches!(
            to_bps(Uint256::ZERO),
            Err(RateError::RateTooLow { .. })
        ));

        assert_eq!(
            to_bps(MAX_RATE + Uint256::ONE),
            Err(RateError::RateTooHigh {
                rate: MAX_RATE + Uint256::ONE,
                max: MAX_RATE,
            })
        );
        assert!(matches!(
            to_bps(Uint256::MAX),
            Err(RateError::RateTooHigh { .. })
        ));
    }

    /// Rates strictly between two image points resolve to the lower one.
    #[test_case(0 ; "bottom of the domain")]
    #[test_case(499 ; "just below five percent")]
    #[test_case(500 ; "five percent")]
    #[test_case(MAX_BPS - 1 ; "top of the domain")]
    fn to_bps_rounds_down(bps: u32) {
        let lo = to_rate(bps).unwrap();
        let hi = to_rate(bps + 1).unwrap();
        let mid = (lo + hi) / Uint256::from(2_u32);

        assert_eq!(to_bps(lo + Uint256::ONE).unwrap(), bps);
        assert_eq!(to_bps(mid).unwrap(), bps);
        assert_eq!(to_bps(hi - Uint256::ONE).unwrap(), bps);
        assert_eq!(to_bps(hi).unwrap(), bps + 1);
    }
}
