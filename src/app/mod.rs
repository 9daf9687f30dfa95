// Author: Dustin Pilgrim
// License: MIT

pub mod command;
pub mod console;
pub mod session_mode;

use crate::cli::Args;
use crate::config::{OutputFormat, TickwatchConfig};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// Loads the config file and applies command line overrides.
pub fn effective_config(args: &Args) -> Result<TickwatchConfig, AnyError> {
    let mut cfg = crate::config::load(args.config.as_deref())
        .map_err(|e| -> AnyError { format!("{e:#}").into() })?;
    apply_overrides(&mut cfg, args)?;
    Ok(cfg)
}

fn apply_overrides(cfg: &mut TickwatchConfig, args: &Args) -> Result<(), AnyError> {
    if let Some(ms) = args.interval_ms {
        if ms == 0 {
            return Err("--interval-ms must be greater than 0".into());
        }
        cfg.tick_interval_ms = ms;
    }
    if args.json {
        cfg.output = OutputFormat::Json;
    }
    if args.no_bell {
        cfg.alarm_bell = false;
    }
    if args.no_log_file {
        cfg.log_file = false;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_file_values() {
        let args = Args::parse_from(["tickwatch", "--interval-ms", "50", "--json", "--no-bell", "--no-log-file"]);
        let mut cfg = TickwatchConfig::default();
        apply_overrides(&mut cfg, &args).unwrap();

        assert_eq!(cfg.tick_interval_ms, 50);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(!cfg.alarm_bell);
        assert!(!cfg.log_file);
    }

    #[test]
    fn no_flags_keep_file_values() {
        let args = Args::parse_from(["tickwatch"]);
        let mut cfg = TickwatchConfig::default();
        apply_overrides(&mut cfg, &args).unwrap();
        assert_eq!(cfg, TickwatchConfig::default());
    }

    #[test]
    fn zero_interval_flag_is_rejected() {
        let args = Args::parse_from(["tickwatch", "--interval-ms", "0"]);
        let mut cfg = TickwatchConfig::default();
        assert!(apply_overrides(&mut cfg, &args).is_err());
    }
}
