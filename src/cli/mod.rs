//! Interactive shell around a [`Session`].
//!
//! Reads one command per line, writes the session's output, and stops at
//! `EXIT`, end of input, or the first read error.

pub mod config;
pub mod logger;

pub use config::CliConfig;

use crate::session::{Control, Session};
use std::io::{self, BufRead, Write};

pub const GREETING: [&str; 2] = [
    "Blip blop, welcome to Gridbot! Where you can move a robot around.",
    "Type 'HELP' to see all available commands.",
];

pub const FAREWELL: &str = "Goodbye!";

/// Drive `session` from `input` until `EXIT` or end of input.
///
/// Only failures writing to `output` are returned. A failing reader ends
/// the loop the same way end of input does. Lines that are not valid UTF-8
/// are decoded lossily and handled like any other line.
///
/// # Example
///
/// ```rust
/// use gridbot::cli;
/// use gridbot::core::Plane;
/// use gridbot::session::Session;
/// use std::io::Cursor;
///
/// let mut session = Session::new(Plane::default());
/// let mut output = Vec::new();
/// cli::run(&mut session, Cursor::new("PLACE 1,1,NORTH\nREPORT\nEXIT\n"), &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Output: 1,1,NORTH\n"));
/// assert!(text.ends_with("Goodbye!\n"));
/// ```
pub fn run<R, W>(session: &mut Session, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in GREETING {
        writeln!(output, "{line}")?;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(%error, "failed to read command, stopping");
                break;
            }
        }

        // Undecodable bytes become U+FFFD and fall through to the grammar.
        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);

        let outcome = session.handle_line(line);
        for text in &outcome.output {
            writeln!(output, "{text}")?;
        }
        output.flush()?;

        if outcome.control == Control::Exit {
            break;
        }
    }

    tracing::info!(
        transitions = session.history().len(),
        elapsed = ?session.history().duration(),
        "session finished"
    );
    writeln!(output, "{FAREWELL}")?;
    output.flush()
}
