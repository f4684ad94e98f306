use {
    conv_math::Uint256,
    std::sync::LazyLock,
};

static REFERENCE_TABLE: LazyLock<ReferenceTable> = LazyLock::new(|| {
    let rates = serde_json::from_str(include_str!("../data/rates.json"))
        .unwrap_or_else(|err| panic!("failed to parse reference rate table: {err}"));

    ReferenceTable { rates }
});

/// Per-second rates of every yearly rate from 0% to 100%, in steps of one
/// basis point, as published for lending markets to configure their rates
/// with.
///
/// Each rate was computed with arbitrary-precision arithmetic, truncating the
/// logarithm, the division by the number of seconds in a year, and the
/// exponential to 27 decimal places each. It is used as an oracle to check
/// the converter against and never by the converter itself.
pub struct ReferenceTable {
    rates: Vec<Uint256>,
}

impl ReferenceTable {
    /// The shared table, parsed on first use.
    pub fn get() -> &'static Self {
        &REFERENCE_TABLE
    }

    /// The published rate of `bps`, if the table covers it.
    pub fn rate_at(&self, bps: u32) -> Option<Uint256> {
        self.rates.get(bps as usize).copied()
    }

    /// Highest basis point value in the table.
    pub fn max_bps(&self) -> u32 {
        (self.rates.len() - 1) as u32
    }

    /// Iterate over `(bps, rate)` pairs in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Uint256)> + '_ {
        self.rates
            .iter()
            .enumerate()
            .map(|(bps, rate)| (bps as u32, *rate))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, conv_math::RAY, std::str::FromStr};

    #[test]
    fn table_covers_zero_to_one_hundred_percent() {
        let table = ReferenceTable::get();

        assert_eq!(table.max_bps(), 10_000);
        assert_eq!(table.rate_at(0), Some(RAY));
        assert_eq!(
            table.rate_at(100),
            Some(Uint256::from_str("1000000000315522921573372069").unwrap())
        );
        assert_eq!(table.rate_at(10_001), None);
        assert_eq!(table.iter().count(), 10_001);
    }
}
