//! Arithmetic on _rays_: unsigned fixed-point numbers with 27 decimal places,
//! stored in a [`Uint256`].
//!
//! A ray of `10^27` represents `1.0`. Multiplications round half up, which
//! is the convention lending protocols use for per-second rate accumulators.

use crate::{MathResult, Number, NumberConst, Uint256};

/// Number of decimal places of a ray.
pub const RAY_DECIMAL_PLACES: u32 = 27;

/// `1.0` in ray precision.
pub const RAY: Uint256 = Uint256::new_from_u128(1_000_000_000_000_000_000_000_000_000);

/// `0.5` in ray precision, used for rounding half up.
pub const HALF_RAY: Uint256 = Uint256::new_from_u128(500_000_000_000_000_000_000_000_000);

/// Multiply two rays, rounding half up.
pub fn checked_rmul(a: Uint256, b: Uint256) -> MathResult<Uint256> {
    a.checked_mul(b)?.checked_add(HALF_RAY)?.checked_div(RAY)
}

/// Raise a ray `x` to an integer power `n` by repeated squaring.
///
/// Every intermediate product is rounded half up. `0^0` is defined as `1.0`.
/// Fails if an intermediate product overflows 256 bits.
pub fn checked_rpow(mut x: Uint256, mut n: u32) -> MathResult<Uint256> {
    if x == Uint256::ZERO {
        return Ok(if n == 0 { RAY } else { Uint256::ZERO });
    }

    let mut z = if n % 2 == 1 { x } else { RAY };

    n /= 2;

    while n > 0 {
        x = checked_rmul(x, x)?;

        if n % 2 == 1 {
            z = checked_rmul(z, x)?;
        }

        n /= 2;
    }

    Ok(z)
}

// ----------------------------------- tests -----------------------------------
