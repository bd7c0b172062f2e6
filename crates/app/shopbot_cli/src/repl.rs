//! Interactive chat loop.
//!
//! Reads one message per line. Lines starting with `/` are commands:
//! `/api` prints the API trace, `/history` reprints the transcript,
//! `/help` lists commands and `/quit` leaves. End of input also leaves.

use std::io::Write;

use shopbot_core::client::ChatApi;
use shopbot_core::render::{render_api_log, render_message, render_transcript};
use shopbot_core::session::ChatSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::Result;

const HELP: &str = "Commands: /api (API trace), /history (transcript), /help, /quit";

/// Run the chat loop until `/quit` or end of input.
pub async fn run<A, R, W>(
    session: &mut ChatSession<A>,
    base_url: &str,
    input: R,
    out: &mut W,
) -> Result<()>
where
    A: ChatApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", render_transcript(session.state()))?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => writeln!(out, "{HELP}")?,
            "/history" => write!(out, "{}", render_transcript(session.state()))?,
            "/api" => {
                if !session.options().record_api_log {
                    writeln!(out, "API trace is not recorded in this session.")?;
                } else {
                    write!(out, "{}", render_api_log(session.logs(), base_url))?;
                }
            }
            _ => {
                session.set_input(line.as_str());
                let Some(pending) = session.begin(&line) else {
                    continue;
                };
                writeln!(out, "Assistant: ...")?;
                out.flush()?;

                let result = session.api().post_chat(pending.request()).await;
                session.complete(pending, result);

                if let Some(reply) = session.transcript().last() {
                    writeln!(out, "{}", render_message(reply))?;
                }
            }
        }
    }

    Ok(())
}
