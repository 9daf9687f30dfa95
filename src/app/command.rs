// Author: Dustin Pilgrim
// License: MIT

use crate::cli::{Args, Command};
use crate::config::OutputFormat;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub fn run(args: Args) -> Result<(), AnyError> {
    let Some(cmd) = args.command.as_ref() else {
        return Ok(());
    };

    match cmd {
        Command::Config => {
            let cfg = super::effective_config(&args)?;
            let output = match cfg.output {
                OutputFormat::Text => "text",
                OutputFormat::Json => "json",
            };

            println!("tickwatch:");
            println!("  tick_interval_ms {}", cfg.tick_interval_ms);
            println!("  alarm_bell {}", cfg.alarm_bell);
            println!("  output \"{}\"", output);
            println!("  log_file {}", cfg.log_file);
            println!("end");
            Ok(())
        }
    }
}
