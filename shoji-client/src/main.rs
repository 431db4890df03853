//! shojic: command-line client for the shoji daemon
//!
//! Joins its arguments into one protocol message and writes it to the
//! daemon socket:
//!
//! ```text
//! shojic window -f east
//! shojic space -r 90
//! shojic config bsp_split_ratio 0.5
//! ```
//!
//! The daemon sends no reply; success means the message was delivered.

use tokio::io::AsyncWriteExt;
use tokio::net::UnixStream;
use tracing::debug;

use shoji_utils::{init_logging_with_config, paths, LogConfig, Result, ShojiError};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging_with_config(LogConfig::client())?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: shojic <message>...");
        std::process::exit(2);
    }
    let message = args.join(" ");

    let socket_path = paths::socket_path();
    debug!(path = %socket_path.display(), %message, "sending");

    let mut stream = UnixStream::connect(&socket_path)
        .await
        .map_err(|_| ShojiError::DaemonNotRunning {
            path: socket_path.clone(),
        })?;

    stream.write_all(message.as_bytes()).await?;
    stream.write_all(b"\n").await?;
    stream.shutdown().await?;

    Ok(())
}
