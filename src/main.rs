// brgc: Binary Reflected Gray Code construction and bit-change animation

use brgc::cli::Cli;
use brgc::ui::theme::DEFAULT_THEME;
use brgc::ui::App;
use brgc::GrayError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BRGC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match Cli::parse().into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let mut app = App::new(settings, DEFAULT_THEME);
    match app.run() {
        Ok(()) => Ok(()),
        Err(GrayError::Interrupted) => {
            eprintln!();
            eprintln!("Goodbye!");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
