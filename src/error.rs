//! Error types
//!
//! [`InputError`] covers rejected bit-width input at the prompt boundary; its
//! `Display` text is shown to the user verbatim before re-prompting.
//! [`GrayError`] covers everything past the boundary: visualizer
//! preconditions and terminal I/O.

use std::io;
use thiserror::Error;

/// Rejected bit-width input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please input an integer.")]
    NotAnInteger { input: String },

    #[error("Number of bits must be a positive integer.")]
    Negative { value: i64 },

    #[error("Recursion tree will be too long, please choose a number below {}.", .max + 1)]
    TooLarge { value: i64, max: u32 },
}

/// Errors raised by the visualizer and the terminal stage
#[derive(Debug, Error)]
pub enum GrayError {
    /// `animate` was handed no codes at all
    #[error("cannot animate an empty code sequence")]
    EmptySequence,

    /// A code's length differs from the first code's length
    #[error("code {index} has {got} bits, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    /// The user asked to quit while a pause was waiting for a key
    #[error("interrupted by user")]
    Interrupted,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_message_names_the_first_rejected_width() {
        let err = InputError::TooLarge { value: 9, max: 5 };
        assert_eq!(
            err.to_string(),
            "Recursion tree will be too long, please choose a number below 6."
        );
    }

    #[test]
    fn length_mismatch_message() {
        let err = GrayError::LengthMismatch {
            index: 3,
            expected: 2,
            got: 1,
        };
        assert_eq!(err.to_string(), "code 3 has 1 bits, expected 2");
    }
}
