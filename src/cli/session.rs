//! The interactive read-eval-print loop.
//!
//! Reads one command per line, runs it and writes the reply. Failed
//! commands print their error and the loop carries on; the session ends on
//! `close`/`exit` or at end of input.

use super::handlers::{Assistant, Outcome};
use super::parser::{parse_command, COMMANDS};
use crate::clock::Clock;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// Banner printed once when the session starts.
pub fn welcome_text() -> String {
    let mut text = String::from("Welcome to the assistant bot!\nAvailable commands:\n");
    for (_, usage, description) in COMMANDS {
        text.push_str(&format!("{}: {}\n", usage, description));
    }
    text
}

/// Drive a session until exit or end of input.
///
/// # Errors
///
/// Only I/O failures on `reader` or `writer` end the session early.
pub async fn run_session<C, R, W>(
    assistant: &mut Assistant<C>,
    mut reader: R,
    mut writer: W,
    prompt: &str,
) -> std::io::Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Session started");
    writer.write_all(welcome_text().as_bytes()).await?;

    let mut buf = Vec::new();
    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input");
            break;
        }
        // Undecodable bytes become U+FFFD and fail as an ordinary bad command.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "Rejected input");
                write_line(&mut writer, &e.to_string()).await?;
                continue;
            }
        };

        match assistant.handle(command) {
            Ok(Outcome::Reply(text)) => write_line(&mut writer, &text).await?,
            Ok(Outcome::Exit(text)) => {
                write_line(&mut writer, &text).await?;
                break;
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                write_line(&mut writer, &e.to_string()).await?;
            }
        }
    }

    writer.flush().await?;
    info!("Session finished");
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await
}
