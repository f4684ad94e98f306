use {
    crate::error::Error,
    config::{Config, Environment, File},
    std::path::Path,
};

/// Load a configuration of type `D` from a TOML file, then apply overrides
/// from environment variables.
///
/// Environment variables are named `{PREFIX}_{SECTION}__{KEY}`, e.g.
/// `CONV_TABLE__MAX_BPS`. Keys absent from both sources fall back to the
/// `serde` defaults of `D`. A missing file is not an error if `required` is
/// false.
pub fn parse_config<D>(
    path: impl AsRef<Path>,
    env_prefix: &str,
    required: bool,
) -> Result<D, Error>
where
    D: serde::de::DeserializeOwned,
{
    let env_override = Environment::with_prefix(env_prefix)
        .prefix_separator("_")
        .separator("__");

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).required(required))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}
