use conv_math::Uint256;

pub use conv_math::RAY;

/// The highest yearly rate, in basis points, that [`to_rate`](crate::to_rate)
/// accepts: 100%.
pub const MAX_BPS: u32 = 10_000;

/// Number of basis points in a unit (100%).
pub const BPS_PER_UNIT: u32 = 10_000;

/// Number of seconds a yearly rate is compounded over: 365 days.
pub const SECONDS_PER_YEAR: u32 = 365 * 24 * 60 * 60;

/// The per-second rate of [`MAX_BPS`], i.e. the largest rate that
/// [`to_bps`](crate::to_bps) accepts.
pub const MAX_RATE: Uint256 = Uint256::new_from_u128(1_000_000_021_979_553_151_239_153_027);

/// Default width of a [`CompactRates`](crate::CompactRates) table.
///
/// Each rate is stored as its excess over [`RAY`] in 64 bits, which holds up
/// to 7891 bps. The on-chain table stops at 50%.
pub const COMPACT_MAX_BPS: u32 = 5_000;
