//! Unix socket host for the command protocol
//!
//! Connections write newline-terminated messages; every line is forwarded
//! to the single dispatch task, so the command front end only ever sees
//! one message at a time and needs no locking of its own. No replies are
//! written back to the connection.

use std::path::PathBuf;

use futures::StreamExt;
use tokio::net::UnixListener;
use tokio::sync::mpsc;
use tokio_util::codec::{Framed, LinesCodec};
use tracing::{debug, error, info, warn};

use shoji_utils::{paths, Result};

use crate::cvar::ConfigStore;
use crate::daemon::handle_message;
use crate::handlers::{SpaceHandler, WindowHandler};

/// Accept connections and forward every received line to `tx`.
///
/// Runs until the listener fails or the receiving side goes away.
pub async fn run_accept_loop(socket_path: PathBuf, tx: mpsc::Sender<String>) -> Result<()> {
    if let Some(parent) = socket_path.parent() {
        paths::ensure_dir(parent)?;
    }
    // A stale socket from a previous run blocks bind
    if socket_path.exists() {
        std::fs::remove_file(&socket_path)?;
    }

    let listener = UnixListener::bind(&socket_path)?;
    info!(path = %socket_path.display(), "listening");

    loop {
        match listener.accept().await {
            Ok((stream, _addr)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let mut lines = Framed::new(stream, LinesCodec::new());
                    while let Some(line) = lines.next().await {
                        match line {
                            Ok(line) => {
                                if tx.send(line).await.is_err() {
                                    return;
                                }
                            }
                            Err(e) => {
                                warn!("codec error: {}", e);
                                return;
                            }
                        }
                    }
                });
            }
            Err(e) => error!("accept error: {}", e),
        }
    }
}

/// Drain the message channel, processing messages strictly in order.
///
/// This task owns the handlers and the store; it exits when every sender
/// is gone.
pub async fn run_dispatch_loop(
    mut rx: mpsc::Receiver<String>,
    mut windows: impl WindowHandler + Send + 'static,
    mut spaces: impl SpaceHandler + Send + 'static,
    mut cvars: impl ConfigStore + Send + 'static,
) {
    while let Some(message) = rx.recv().await {
        debug!(%message, "message received");
        if let Err(err) = handle_message(&message, &mut windows, &mut spaces, &mut cvars) {
            warn!("{}", err);
        }
    }
}
