//! Line-protocol transport.
//!
//! Each line a client sends is one command. Each reply is the narration
//! followed by an end-of-transmission marker on its own line, so clients
//! can tell where a multi-line narration ends.

use std::net::SocketAddr;

use stag_engine::domain::commands::SubmitCommand;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Marks the end of one reply.
pub const END_OF_TRANSMISSION: char = '\u{4}';

/// Frames a narration for the wire.
#[must_use]
pub fn frame_reply(narration: &str) -> String {
    format!("{narration}\n{END_OF_TRANSMISSION}\n")
}

/// Accepts connections until the listener fails, serving each on its own task.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    info!(addr = ?listener.local_addr().ok(), "line server listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer, state).await {
                warn!(peer = %peer, err = %e, "line session failed");
            }
        });
    }
}

/// Serves one client until it disconnects.
///
/// # Errors
///
/// Returns any I/O error on the connection.
pub async fn handle_connection<S>(
    stream: S,
    peer: SocketAddr,
    state: AppState,
) -> std::io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (rd, mut wr) = tokio::io::split(stream);
    let mut rd = BufReader::new(rd);
    let mut line = String::new();

    debug!(peer = %peer, "line session opened");
    loop {
        line.clear();
        if rd.read_line(&mut line).await? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = SubmitCommand::new(input);
        // The lock is released before the reply is written.
        let narration = state.with_game(|game| game.execute(&command));

        wr.write_all(frame_reply(&narration).as_bytes()).await?;
        wr.flush().await?;
    }
    debug!(peer = %peer, "line session closed");

    Ok(())
}
