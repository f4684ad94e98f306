use {
    conv_rates::COMPACT_MAX_BPS,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub table: TableConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            table: TableConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Highest basis point included in a generated table.
    pub max_bps: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_bps: COMPACT_MAX_BPS,
        }
    }
}
