use {
    clap::Subcommand,
    conv_math::Uint256,
    conv_rates::{to_bps, to_rate, yearly_bps},
};

#[derive(Subcommand)]
pub enum ConvertCmd {
    /// Convert a yearly rate in basis points to a per-second rate in ray
    ToRate {
        /// Yearly rate in basis points, e.g. 500 for 5%
        bps: u32,
    },
    /// Convert a per-second rate in ray to basis points, rounding down
    ToBps {
        /// Per-second rate as a 27-decimal integer, e.g. 1000000001547125957863212448
        rate: Uint256,
    },
    /// Compound a per-second rate over a year, rounding to the nearest basis point
    YearlyBps {
        /// Per-second rate as a 27-decimal integer
        rate: Uint256,
    },
}

impl ConvertCmd {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            ConvertCmd::ToRate { bps } => {
                println!("{}", to_rate(bps)?);
            },
            ConvertCmd::ToBps { rate } => {
                println!("{}", to_bps(rate)?);
            },
            ConvertCmd::YearlyBps { rate } => {
                println!("{}", yearly_bps(rate)?);
            },
        }

        Ok(())
    }
}
