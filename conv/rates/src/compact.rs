//! A packed table of per-second rates, in the layout the rate converter
//! contract keeps in storage.
//!
//! Every rate from `0` to `max_bps` is stored as its excess over [`RAY`], in 8
//! big-endian bytes. Four rates share a 32-byte storage word; the last word is
//! padded with zeros. Looking a rate up is then a single word read, a shift,
//! and an addition.

use {
    crate::{MAX_BPS, RAY, RateError, RateResult, to_rate},
    conv_math::{Number, PrevNumber, Uint256},
    serde::{Deserialize, Serialize},
};

/// Number of bytes a rate takes in the table.
pub const RATE_SIZE: usize = 8;

/// Number of bytes in a storage word.
pub const WORD_SIZE: usize = 32;

/// Number of rates packed into a storage word.
pub const RATES_PER_WORD: usize = WORD_SIZE / RATE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCompactRates")]
pub struct CompactRates {
    max_bps: u32,
    #[serde(with = "hex::serde")]
    rates: Vec<u8>,
}

#[derive(Deserialize)]
struct UncheckedCompactRates {
    max_bps: u32,
    #[serde(with = "hex::serde")]
    rates: Vec<u8>,
}

impl TryFrom<UncheckedCompactRates> for CompactRates {
    type Error = RateError;

    fn try_from(unchecked: UncheckedCompactRates) -> RateResult<Self> {
        Self::from_bytes(unchecked.max_bps, unchecked.rates)
    }
}

impl CompactRates {
    /// Compute the rates of `0..=max_bps` and pack them.
    pub fn generate(max_bps: u32) -> RateResult<Self> {
        if max_bps > MAX_BPS {
            return Err(RateError::bps_too_high(max_bps, MAX_BPS));
        }

        let mut rates = Vec::with_capacity(table_len(max_bps));

        for bps in 0..=max_bps {
            let excess = to_rate(bps)?.checked_sub(RAY)?.checked_into_prev()?;
            let excess =
                u64::try_from(excess.into_inner()).map_err(|_| RateError::DeltaOverflow { bps })?;

            rates.extend_from_slice(&excess.to_be_bytes());
        }

        rates.resize(table_len(max_bps), 0);

        #[cfg(feature = "tracing")]
        tracing::debug!(max_bps, bytes = rates.len(), "Generated compact rate table");

        Ok(Self { max_bps, rates })
    }

    /// Wrap an already packed table, checking its length.
    pub fn from_bytes(max_bps: u32, rates: Vec<u8>) -> RateResult<Self> {
        let expect = table_len(max_bps);

        if rates.len() != expect {
            return Err(RateError::InvalidTableLength {
                expect,
                actual: rates.len(),
            });
        }

        Ok(Self { max_bps, rates })
    }

    /// Decode a hex-encoded packed table, with or without a `0x` prefix.
    pub fn from_hex(max_bps: u32, hex_str: &str) -> RateResult<Self> {
        let rates = hex::decode(hex_str.trim_start_matches("0x"))?;

        Self::from_bytes(max_bps, rates)
    }

    /// Look up the per-second rate of `bps`.
    pub fn turn(&self, bps: u32) -> RateResult<Uint256> {
        if bps > self.max_bps {
            return Err(RateError::bps_too_high(bps, self.max_bps));
        }

        let offset = bps as usize * RATE_SIZE;
        let mut excess = [0; RATE_SIZE];
        excess.copy_from_slice(&self.rates[offset..offset + RATE_SIZE]);

        Ok(RAY.checked_add(Uint256::from(u64::from_be_bytes(excess)))?)
    }

    pub fn max_bps(&self) -> u32 {
        self.max_bps
    }

    /// Number of rates in the table, padding excluded.
    pub fn num_rates(&self) -> usize {
        self.max_bps as usize + 1
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.rates
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.rates)
    }
}

/// Length in bytes of a table of `0..=max_bps`, padded to whole words.
fn table_len(max_bps: u32) -> usize {
    (max_bps as usize + 1).div_ceil(RATES_PER_WORD) * WORD_SIZE
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(0, 32 ; "one rate")]
    #[test_case(3, 32 ; "one full word")]
    #[test_case(4, 64 ; "one rate spills over")]
    #[test_case(5000, 40_032 ; "default width")]
    fn table_len_is_padded_to_words(max_bps: u32, expect: usize) {
        assert_eq!(table_len(max_bps), expect);
    }

    #[test]
    fn small_table_layout() {
        let table = CompactRates::generate(4).unwrap();

        assert_eq!(table.num_rates(), 5);
        assert_eq!(table.as_bytes().len(), 64);

        // bps 0 is RAY itself, so its excess is zero.
        assert_eq!(&table.as_bytes()[..RATE_SIZE], &[0; RATE_SIZE]);
        // bps 1 is 1.000000000003170820659990704.
        assert_eq!(
            &table.as_bytes()[RATE_SIZE..2 * RATE_SIZE],
            &3_170_820_659_990_704_u64.to_be_bytes()
        );
        // Padding after the fifth rate.
        assert!(table.as_bytes()[5 * RATE_SIZE..].iter().all(|b| *b == 0));

        for bps in 0..=4 {
            assert_eq!(table.turn(bps).unwrap(), to_rate(bps).unwrap());
        }

        assert_eq!(table.turn(5), Err(RateError::BpsTooHigh { bps: 5, max: 4 }));
    }

    #[test]
    fn generate_rejects_out_of_domain_widths() {
        assert_eq!(
            CompactRates::generate(MAX_BPS + 1),
            Err(RateError::BpsTooHigh {
                bps: MAX_BPS + 1,
                max: MAX_BPS,
            })
        );
    }

    #[test]
    fn excess_must_fit_64_bits() {
        assert_eq!(
            CompactRates::generate(7892),
            Err(RateError::DeltaOverflow { bps: 7892 })
        );
    }

    #[test]
    fn hex_round_trip() {
        let table = CompactRates::generate(7).unwrap();
        let hex_str = table.to_hex();

        assert_eq!(CompactRates::from_hex(7, &hex_str).unwrap(), table);
        assert_eq!(CompactRates::from_hex(7, &format!("0x{hex_str}")).unwrap(), table);

        assert!(matches!(
            CompactRates::from_hex(8, &hex_str),
            Err(RateError::InvalidTableLength {
                expect: 96,
                actual: 64,
            })
        ));
        assert!(matches!(
            CompactRates::from_hex(7, "zz"),
            Err(RateError::FromHex(_))
        ));
    }

    #[test]
    fn serde_validates_length() {
        let table = CompactRates::generate(3).unwrap();
        let json = serde_json::to_value(&table).unwrap();

        assert_eq!(json["max_bps"], 3);
        assert_eq!(json["rates"], table.to_hex());
        assert_eq!(serde_json::from_value::<CompactRates>(json).unwrap(), table);

        let truncated = serde_json::json!({ "max_bps": 3, "rates": "00" });
        serde_json::from_value::<CompactRates>(truncated).unwrap_err();
    }
}
