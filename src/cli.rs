//! Command-line flags and resolved runtime settings

use crate::error::InputError;
use clap::Parser;
use std::time::Duration;

/// Default largest bit-width accepted; keeps the recursion tree readable
pub const DEFAULT_MAX_BITS: u32 = 5;

/// Largest bit-width `--max-bits` may raise the limit to
pub const HARD_MAX_BITS: u32 = 16;

#[derive(Parser, Debug)]
#[command(
    name = "brgc",
    version,
    about = "Build Binary Reflected Gray Codes step by step and animate their single-bit changes"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        help = "Bit-width to generate; prompts interactively when omitted"
    )]
    pub bits: Option<i64>,
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_BITS,
        value_parser = clap::value_parser!(u32).range(..=HARD_MAX_BITS as i64),
        help = "Largest bit-width accepted"
    )]
    pub max_bits: u32,
    #[arg(long, default_value_t = 800, help = "Delay between animation steps in milliseconds")]
    pub delay_ms: u64,
    #[arg(long, default_value_t = 2, help = "How many times the animation loops")]
    pub cycles: usize,
    #[arg(
        long,
        default_value_t = 1000,
        help = "Pause before each base-case verdict in the recursion tree, in milliseconds"
    )]
    pub check_delay_ms: u64,
    #[arg(long, help = "Skip the recursion tree")]
    pub no_trace: bool,
    #[arg(long, help = "Skip the introductory lesson text")]
    pub no_intro: bool,
    #[arg(long, help = "Never wait for a key press between sections")]
    pub no_pause: bool,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Preselected bit-width, already validated against `max_bits`
    pub bits: Option<u32>,
    pub max_bits: u32,
    pub step_delay: Duration,
    pub cycles: usize,
    pub check_delay: Duration,
    pub trace: bool,
    pub intro: bool,
    pub pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bits: None,
            max_bits: DEFAULT_MAX_BITS,
            step_delay: Duration::from_millis(800),
            cycles: 2,
            check_delay: Duration::from_millis(1000),
            trace: true,
            intro: true,
            pause: true,
        }
    }
}

impl Cli {
    /// Resolve flags into [`Settings`], rejecting an out-of-range `--bits`
    pub fn into_settings(self) -> Result<Settings, InputError> {
        let bits = self
            .bits
            .map(|value| check_bit_width(value, self.max_bits))
            .transpose()?;

        Ok(Settings {
            bits,
            max_bits: self.max_bits,
            step_delay: Duration::from_millis(self.delay_ms),
            cycles: self.cycles,
            check_delay: Duration::from_millis(self.check_delay_ms),
            trace: !self.no_trace,
            intro: !self.no_intro,
            pause: !self.no_pause,
        })
    }
}

/// Parse one line of user input as a bit-width in `0..=max`
pub fn parse_bit_width(input: &str, max: u32) -> Result<u32, InputError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| InputError::NotAnInteger {
        input: trimmed.to_string(),
    })?;
    check_bit_width(value, max)
}

/// Check an integer bit-width against `0..=max`
pub fn check_bit_width(value: i64, max: u32) -> Result<u32, InputError> {
    if value < 0 {
        return Err(InputError::Negative { value });
    }
    if value > max as i64 {
        return Err(InputError::TooLarge { value, max });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_widths_up_to_max() {
        assert_eq!(parse_bit_width(" 3\n", 5), Ok(3));
        assert_eq!(parse_bit_width("0", 5), Ok(0));
        assert_eq!(parse_bit_width("5", 5), Ok(5));
    }

    #[test]
    fn rejects_bad_input_with_the_reprompt_reason() {
        assert!(matches!(
            parse_bit_width("three", 5),
            Err(InputError::NotAnInteger { .. })
        ));
        assert_eq!(
            parse_bit_width("-1", 5),
            Err(InputError::Negative { value: -1 })
        );
        assert_eq!(
            parse_bit_width("6", 5),
            Err(InputError::TooLarge { value: 6, max: 5 })
        );
        assert!(matches!(
            parse_bit_width("2.5", 5),
            Err(InputError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn flags_resolve_into_settings() {
        let cli = Cli::parse_from([
            "brgc",
            "--bits",
            "4",
            "--delay-ms",
            "10",
            "--cycles",
            "3",
            "--no-trace",
            "--no-pause",
        ]);
        let settings = cli.into_settings().unwrap();
        assert_eq!(settings.bits, Some(4));
        assert_eq!(settings.step_delay, Duration::from_millis(10));
        assert_eq!(settings.cycles, 3);
        assert!(!settings.trace);
        assert!(settings.intro);
        assert!(!settings.pause);
    }

    #[test]
    fn defaults_match_settings_default() {
        let settings = Cli::parse_from(["brgc"]).into_settings().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn bits_flag_is_checked_against_max_bits() {
        let cli = Cli::parse_from(["brgc", "--bits", "8"]);
        assert_eq!(
            cli.into_settings(),
            Err(InputError::TooLarge { value: 8, max: 5 })
        );

        let cli = Cli::parse_from(["brgc", "--bits", "8", "--max-bits", "10"]);
        assert_eq!(cli.into_settings().unwrap().bits, Some(8));
    }

    #[test]
    fn max_bits_above_hard_cap_is_a_parse_error() {
        assert!(Cli::try_parse_from(["brgc", "--max-bits", "17"]).is_err());
    }
}
