//! Keyboard and line input: "press any key" pauses and the bit-width prompt

use crate::cli::parse_bit_width;
use crate::error::{GrayError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, Write};

pub const PAUSE_PROMPT: &str = "Press any key to continue . . .";

/// Block until a key is pressed. `q`, `Esc` and `Ctrl-C` report
/// [`GrayError::Interrupted`].
pub fn wait_for_key() -> Result<()> {
    enable_raw_mode()?;
    let res = read_key();
    disable_raw_mode()?;
    res
}

fn read_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    Err(GrayError::Interrupted)
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Err(GrayError::Interrupted)
                }
                _ => Ok(()),
            };
        }
    }
}

/// Print the pause prompt on stdout and wait for a key
pub fn pause() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", PAUSE_PROMPT)?;
    stdout.flush()?;
    wait_for_key()?;
    writeln!(stdout)?;
    Ok(())
}

/// Ask for a bit-width until `input` yields one in `0..=max`.
///
/// Each rejection prints its reason and asks again. A closed input stream is
/// an error.
pub fn prompt_bit_width<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    max: u32,
) -> Result<u32> {
    loop {
        write!(out, "\nEnter the number of bits for Gray code: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(GrayError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a bit-width was entered",
            )));
        }

        match parse_bit_width(&line, max) {
            Ok(n) => return Ok(n),
            Err(reason) => {
                tracing::debug!(input = line.trim(), %reason, "rejected bit-width");
                writeln!(out, "\n{}", reason)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reprompts_until_valid() {
        let mut input = Cursor::new("abc\n-2\n9\n3\n");
        let mut out = Vec::new();

        let n = prompt_bit_width(&mut input, &mut out, 5).unwrap();
        assert_eq!(n, 3);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter the number of bits").count(), 4);
        assert!(text.contains("Please input an integer."));
        assert!(text.contains("Number of bits must be a positive integer."));
        assert!(text.contains("please choose a number below 6."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("x\n");
        let mut out = Vec::new();
        let err = prompt_bit_width(&mut input, &mut out, 5).unwrap_err();
        assert!(matches!(err, GrayError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
