//! REPL Module
//!
//! Prompt loop, command registry and the per-run session state.

pub mod catch;
pub mod commands;
mod input;
mod pokedex;
mod session;

pub use commands::{Action, Command, CommandRegistry, Flow, GOODBYE};
pub use input::clean_input;
pub use pokedex::Pokedex;
pub use session::{PageCursor, Session};

use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::error::Result;

/// Printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Reads commands from `input` until `exit` or end of input.
///
/// Command failures are printed as `Error: ...` and the loop carries on;
/// only I/O errors on `input` or `out` end it early.
pub async fn run<R, I, W>(
    registry: &CommandRegistry,
    session: &mut Session<R>,
    input: I,
    out: &mut W,
) -> Result<()>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            writeln!(out, "{}", GOODBYE)?;
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = registry.get(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match registry.execute(command, session, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!("Command {} failed: {}", command.name, err);
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
