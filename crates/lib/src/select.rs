//! Interactive target selection.
//!
//! The operator is asked to pick a board from a two-item menu. Anything other
//! than an exact menu token is rejected and the menu is shown again. There is
//! no default and no timeout: the prompt blocks until a valid answer arrives
//! or input is closed.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::target::Target;

/// Printed after an unrecognized answer, before the menu is shown again.
pub const REJECTION_MESSAGE: &str = "Invalid choice. Please enter 1 or 2.";

/// Errors that can occur while selecting a target.
#[derive(Debug, Error)]
pub enum SelectError {
  /// Input reached end-of-file before a valid choice was made.
  #[error("input closed before a Raspberry Pi version was selected")]
  InputClosed,

  #[error("failed to read selection: {0}")]
  Io(#[from] io::Error),
}

/// Prompt on `output` and read answers from `input` until one names a target.
///
/// Surrounding whitespace is stripped from each answer; the remaining token
/// must match a menu entry exactly.
///
/// # Errors
///
/// Returns [`SelectError::InputClosed`] if `input` is exhausted, or
/// [`SelectError::Io`] if reading or writing fails.
pub fn select_target<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Target, SelectError> {
  let mut line = Vec::new();

  loop {
    write_menu(output)?;

    line.clear();
    if input.read_until(b'\n', &mut line)? == 0 {
      writeln!(output)?;
      return Err(SelectError::InputClosed);
    }

    // Undecodable bytes can never match a menu token, so they fall through to a rejection
    let decoded = String::from_utf8_lossy(&line);
    let answer = decoded.trim();
    match Target::from_choice(answer) {
      Some(target) => {
        debug!(answer, target = %target, "target selected");
        return Ok(target);
      }
      None => {
        debug!(answer, "rejected selection");
        writeln!(output, "{}", REJECTION_MESSAGE)?;
      }
    }
  }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
  writeln!(output)?;
  writeln!(output, "Select Raspberry Pi version:")?;
  for target in Target::ALL {
    writeln!(output, "{}) {}", target.choice(), target.label())?;
  }
  write!(output, "Enter choice (1 or 2): ")?;
  output.flush()
}
