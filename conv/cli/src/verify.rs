use {
    anyhow::bail,
    conv_rates::{MAX_BPS, to_bps, to_rate, yearly_bps},
    std::time::Instant,
};

/// Walk the whole domain, checking that rates are strictly increasing and that
/// both `to_bps` and `yearly_bps` read every rate back as the basis points it
/// came from.
pub fn run() -> anyhow::Result<()> {
    let start = Instant::now();
    let mut failures = 0_u32;
    let mut prev = None;

    for bps in 0..=MAX_BPS {
        let rate = to_rate(bps)?;

        if let Some(prev) = prev {
            if rate <= prev {
                tracing::error!(bps, %rate, %prev, "Rate is not increasing");
                failures += 1;
            }
        }

        let floor = to_bps(rate)?;
        if floor != bps {
            tracing::error!(bps, %rate, floor, "to_bps doesn't invert to_rate");
            failures += 1;
        }

        let yearly = yearly_bps(rate)?;
        if yearly != bps {
            tracing::error!(bps, %rate, yearly, "yearly_bps doesn't invert to_rate");
            failures += 1;
        }

        tracing::debug!(bps, %rate, "Checked");

        prev = Some(rate);
    }

    tracing::info!(
        max_bps = MAX_BPS,
        failures,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Verification finished"
    );

    if failures > 0 {
        bail!("{failures} check(s) failed");
    }

    println!("ok: 0..={MAX_BPS}");

    Ok(())
}
