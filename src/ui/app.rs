//! Lesson flow: intro text, bit-width prompt, recursion trace, animation

use super::input;
use super::stage::{viewport_height, Stage};
use super::theme::Theme;
use crate::cli::Settings;
use crate::error::Result;
use crate::generator::{generate_traced, NoTrace, TraceEvent};
use crate::lesson;
use crate::visualizer::animate;
use std::io;

/// The application state
pub struct App {
    pub settings: Settings,
    pub theme: Theme,
}

impl App {
    pub fn new(settings: Settings, theme: Theme) -> Self {
        App { settings, theme }
    }

    /// Run the whole lesson
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(settings = ?self.settings, "starting lesson");

        if self.settings.intro {
            self.intro()?;
        }
        self.demonstration()
    }

    fn intro(&self) -> Result<()> {
        print_block(lesson::WELCOME);
        self.pause()?;
        println!("{}", lesson::SEPARATOR);

        print_block(lesson::OVERVIEW);
        self.pause()?;
        println!("{}", lesson::SEPARATOR);

        print_block(lesson::APPLICATIONS);
        self.pause()?;
        println!("{}", lesson::SEPARATOR);
        Ok(())
    }

    fn demonstration(&self) -> Result<()> {
        print_block(lesson::PROCEDURE);
        self.pause()?;
        println!("{}", lesson::SEPARATOR);
        println!("\nLet's generate Gray code step-by-step!");

        let n = match self.settings.bits {
            Some(n) => n,
            None => {
                let stdin = io::stdin();
                let max = self.settings.max_bits;
                input::prompt_bit_width(&mut stdin.lock(), &mut io::stdout(), max)?
            }
        };

        let mut events: Vec<TraceEvent> = Vec::new();
        let codes = if self.settings.trace {
            println!("\nRecursive call tree and steps:");
            generate_traced(n, &mut events)
        } else {
            generate_traced(n, &mut NoTrace)
        };

        let (width, _) = crossterm::terminal::size()?;
        let bits = codes.first().map(|c| c.chars().count()).unwrap_or(0);
        let height = viewport_height(codes.len(), bits, width);
        let mut stage = Stage::inline(height, self.theme, self.settings.check_delay)?;

        stage.play_trace(&events)?;
        stage.print("")?;
        stage.print(&format!("Final Gray code for {} bits:", n))?;
        stage.print(&lesson::format_code_list(&codes))?;
        stage.print("")?;
        if self.settings.pause {
            stage.pause()?;
        }

        stage.print(lesson::SEPARATOR)?;
        stage.print("")?;
        stage.print("You can see that each successive code differs by exactly")?;
        stage.print("one bit, including the final code and first code:")?;
        stage.print("")?;

        animate(
            &codes,
            self.settings.step_delay,
            self.settings.cycles,
            &mut stage,
        )?;

        stage.print("")?;
        stage.print(&format!(
            "Thus we have successfully created Binary Reflected Gray Code for {} bits!",
            n
        ))?;
        stage.close()?;

        println!("{}\n", lesson::SEPARATOR);
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        if self.settings.pause {
            input::pause()?;
        }
        Ok(())
    }
}

fn print_block(lines: &[&str]) {
    for line in lines {
        println!("{}", line);
    }
}
