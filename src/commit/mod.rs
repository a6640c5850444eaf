//! Interactive commit-message flow.
//!
//! A small explicit state machine over a generic reader/writer pair so
//! scripted tests can drive every path. The caller owns the terminal
//! handles and the resulting git side effect; this module only decides
//! what message, if any, should be committed.

use std::io::{self, BufRead, Write};

use crate::output;

/// Final outcome of the interactive flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Create a commit with this message.
    Commit(String),
    /// No commit.
    Cancel,
}

/// Flow states: `Generated → [Editing] → Confirm → {Commit | Cancel}`.
enum State {
    Generated,
    Editing,
    Confirm(String),
}

/// Run the accept/edit/confirm flow for a generated commit message.
///
/// The edit prompt defaults to "no": anything but an explicit yes keeps
/// the generated message. The confirm prompt also defaults to "no": only
/// an explicit yes produces [`Decision::Commit`].
pub fn run_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    generated: &str,
) -> io::Result<Decision> {
    let mut state = State::Generated;

    loop {
        state = match state {
            State::Generated => {
                writeln!(out, "Generated commit message:")?;
                write!(out, "{}", output::render_block(generated))?;
                write!(out, "Edit the message? [y/N] ")?;
                out.flush()?;

                if read_yes(input)? {
                    State::Editing
                } else {
                    State::Confirm(generated.to_string())
                }
            }
            State::Editing => {
                writeln!(out, "Enter the commit message, ending with two empty lines:")?;
                out.flush()?;
                State::Confirm(read_message(input)?)
            }
            State::Confirm(message) => {
                writeln!(out, "Commit message:")?;
                write!(out, "{}", output::render_block(&message))?;
                write!(out, "Create commit with this message? [y/N] ")?;
                out.flush()?;

                return if read_yes(input)? {
                    Ok(Decision::Commit(message))
                } else {
                    Ok(Decision::Cancel)
                };
            }
        };
    }
}

/// Read one line and interpret it as a yes/no answer, defaulting to no.
fn read_yes<R: BufRead>(input: &mut R) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Read free-text lines until two consecutive empty lines (or EOF).
///
/// The two terminating blanks are excluded; a single blank line inside the
/// message is kept.
fn read_message<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_run = 0usize;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if line.is_empty() {
            blank_run += 1;
            if blank_run == 2 {
                break;
            }
        } else {
            if blank_run == 1 {
                lines.push(String::new());
            }
            blank_run = 0;
            lines.push(line.to_string());
        }
    }

    Ok(lines.join("\n"))
}
