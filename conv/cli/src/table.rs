use {crate::config::TableConfig, clap::Parser, conv_rates::CompactRates};

#[derive(Parser)]
pub struct TableCmd {
    /// Highest basis point to include [default: from config]
    #[arg(long)]
    max_bps: Option<u32>,

    /// Print the table as JSON instead of a hex literal
    #[arg(long)]
    json: bool,
}

impl TableCmd {
    pub fn run(self, cfg: &TableConfig) -> anyhow::Result<()> {
        let max_bps = self.max_bps.unwrap_or(cfg.max_bps);
        let table = CompactRates::generate(max_bps)?;

        tracing::info!(
            max_bps,
            rates = table.num_rates(),
            bytes = table.as_bytes().len(),
            "Generated rate table"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&table)?);
        } else {
            println!("hex\"{}\"", table.to_hex());
        }

        Ok(())
    }
}
