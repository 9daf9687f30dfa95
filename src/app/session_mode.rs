// Author: Dustin Pilgrim
// License: MIT

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::app::console::ConsoleListener;
use crate::cli::Args;
use crate::log::{self, LogPolicy};
use crate::services::input::{spawn_input_reader, UserEntry};
use crate::session::Session;
use crate::{serror, sinfo, swarn};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    log::set_verbose(args.verbose);

    let cfg = super::effective_config(&args).map_err(|e| {
        serror!("config", "{}", e);
        e
    })?;

    if cfg.log_file {
        let path = log::default_log_path();
        match log::init_file_logging(&path, LogPolicy::default()) {
            Ok(()) => sinfo!("log", "file logging enabled: {}", path.display()),
            Err(e) => swarn!("log", "failed to enable file logging at {}: {}", path.display(), e),
        }
    }

    sinfo!(
        "tickwatch",
        "starting (tick={}ms, output={:?}, bell={})",
        cfg.tick_interval_ms,
        cfg.output,
        cfg.alarm_bell
    );

    let entry = UserEntry::default();
    let listener = ConsoleListener::stdout(cfg.output, cfg.alarm_bell, entry.clone());
    let mut session = Session::new(Handle::current(), cfg.tick_period(), Box::new(listener), entry);

    spawn_input_reader(session.sender())?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut session_task = tokio::spawn(async move { session.run(shutdown_rx).await });

    tokio::select! {
        res = &mut session_task => {
            res??;
            Ok(())
        }

        _ = tokio::signal::ctrl_c() => {
            sinfo!("tickwatch", "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);
            session_task.await??;
            Ok(())
        }
    }
}
