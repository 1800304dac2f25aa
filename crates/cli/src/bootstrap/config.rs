use helm_broker_domain::{CliOverrides, Config};

/// Resolves the config file actually in use, for the startup log.
pub fn config_source(path: Option<&str>) -> String {
    path.map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "defaults".to_string())
}

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
