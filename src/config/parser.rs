// Author: Dustin Pilgrim
// License: MIT

use eyre::{Result, WrapErr};
use rune_cfg::RuneConfig;
use std::path::Path;

use crate::config::model::{OutputFormat, TickwatchConfig};
use crate::sdebug;

pub fn load_file(path: &Path) -> Result<TickwatchConfig> {
    let config = RuneConfig::from_file(path)
        .wrap_err_with(|| format!("failed to load config from {}", path.display()))?;
    sdebug!("config", "loaded config from {}", path.display());
    parse_config(&config)
}

pub fn parse_str(text: &str) -> Result<TickwatchConfig> {
    let config = RuneConfig::from_str(text).wrap_err("failed to parse config")?;
    parse_config(&config)
}

/// Reads the `tickwatch:` block. Missing keys keep their defaults; both
/// `snake_case` and `kebab-case` spellings are accepted.
pub fn parse_config(config: &RuneConfig) -> Result<TickwatchConfig> {
    let defaults = TickwatchConfig::default();

    let tick_interval_ms = config
        .get::<u64>("tickwatch.tick_interval_ms")
        .or_else(|_| config.get::<u64>("tickwatch.tick-interval-ms"))
        .unwrap_or(defaults.tick_interval_ms);

    if tick_interval_ms == 0 {
        return Err(eyre::eyre!("tickwatch.tick_interval_ms must be greater than 0"));
    }

    let alarm_bell = config
        .get::<bool>("tickwatch.alarm_bell")
        .or_else(|_| config.get::<bool>("tickwatch.alarm-bell"))
        .unwrap_or(defaults.alarm_bell);

    let output = match config.get::<String>("tickwatch.output").ok() {
        None => defaults.output,
        Some(s) => parse_output(&s)?,
    };

    let log_file = config
        .get::<bool>("tickwatch.log_file")
        .or_else(|_| config.get::<bool>("tickwatch.log-file"))
        .unwrap_or(defaults.log_file);

    Ok(TickwatchConfig {
        tick_interval_ms,
        alarm_bell,
        output,
        log_file,
    })
}

fn parse_output(s: &str) -> Result<OutputFormat> {
    match s.trim().to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(eyre::eyre!("unknown output format {:?} (expected text or json)", other)),
    }
}
