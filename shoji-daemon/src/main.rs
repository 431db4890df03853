//! shoji-daemon: tiling window-manager daemon
//!
//! Hosts the command-protocol front end behind a Unix socket. Incoming
//! messages are parsed into validated command chains or typed config
//! updates and routed to the window/space handlers and the cvar store.

mod cvar;
mod daemon;
mod dispatch;
mod handlers;
mod ipc;
mod router;
mod settings;

use tokio::sync::mpsc;
use tracing::{error, info};

use shoji_utils::{init_logging_with_config, paths, LogConfig, Result};

use crate::cvar::CvarStore;
use crate::handlers::{LoggingSpaceHandler, LoggingWindowHandler};
use crate::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_and_validate()?;

    let mut log_config = LogConfig::daemon();
    if std::env::var("SHOJI_LOG").is_err() {
        if let Some(filter) = &settings.general.log_filter {
            log_config.filter = filter.clone();
        }
    }
    init_logging_with_config(log_config)?;

    info!(version = env!("CARGO_PKG_VERSION"), "shoji-daemon starting");

    let mut cvars = CvarStore::new();
    settings.defaults.apply(&mut cvars);

    let socket_path = settings
        .general
        .socket_path
        .clone()
        .unwrap_or_else(paths::socket_path);

    let (tx, rx) = mpsc::channel(64);
    let mut accept = tokio::spawn(ipc::run_accept_loop(socket_path.clone(), tx));
    let mut dispatch = tokio::spawn(ipc::run_dispatch_loop(
        rx,
        LoggingWindowHandler,
        LoggingSpaceHandler,
        cvars,
    ));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
        result = &mut accept => {
            if let Ok(Err(e)) = result {
                error!("listener failed: {}", e);
            }
        }
        _ = &mut dispatch => {}
    }

    accept.abort();
    dispatch.abort();
    let _ = std::fs::remove_file(&socket_path);

    Ok(())
}
