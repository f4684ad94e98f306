use conv_math::{MathError, Uint256};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    FromHex(#[from] hex::FromHexError),

    #[error("bps too high: {bps} > {max}")]
    BpsTooHigh { bps: u32, max: u32 },

    #[error("rate too low: {rate} < RAY")]
    RateTooLow { rate: Uint256 },

    #[error("rate too high: {rate} > {max}")]
    RateTooHigh { rate: Uint256, max: Uint256 },

    #[error("rate of {bps} bps exceeds RAY by more than 64 bits can hold")]
    DeltaOverflow { bps: u32 },

    #[error("invalid compact rate table length: expecting {expect} bytes, found {actual}")]
    InvalidTableLength { expect: usize, actual: usize },
}

impl RateError {
    pub fn bps_too_high(bps: u32, max: u32) -> Self {
        Self::BpsTooHigh { bps, max }
    }

    pub fn rate_too_low(rate: Uint256) -> Self {
        Self::RateTooLow { rate }
    }

    pub fn rate_too_high(rate: Uint256, max: Uint256) -> Self {
        Self::RateTooHigh { rate, max }
    }
}

pub type RateResult<T> = Result<T, RateError>;
