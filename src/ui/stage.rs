//! Inline terminal stage
//!
//! The stage owns a ratatui terminal with an inline viewport at the bottom of
//! the normal screen. Finished text (trace lines, listings) is inserted above
//! the viewport and scrolls like ordinary output; transient content (a pending
//! base-case check, a pause prompt, animation frames) is drawn inside it and
//! overwritten in place.

use super::input;
use super::panes::{self, utils::fold_line, TreeRenderer};
use super::theme::Theme;
use crate::error::Result;
use crate::generator::TraceEvent;
use crate::visualizer::{AnimationStep, FramePresenter, ScheduledFrame};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
    Terminal, TerminalOptions, Viewport,
};
use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

/// Viewport rows needed to animate `count` codes of `bits` bits at `width` columns
pub fn viewport_height(count: usize, bits: usize, width: u16) -> u16 {
    // borders + left padding take three columns, borders two rows, status bar one
    let rows = panes::rows_needed(count, bits, width.saturating_sub(3));
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(3)
        .max(4)
}

/// Most rows a single `insert_before` call can take
const MAX_INSERT_ROWS: usize = u16::MAX as usize;

pub struct Stage<B: Backend> {
    terminal: Terminal<B>,
    width: u16,
    theme: Theme,
    check_delay: Duration,
    /// Plain codes of the running animation, printed once it finishes
    animated: Vec<String>,
}

impl Stage<CrosstermBackend<Stdout>> {
    /// Open an inline viewport of `height` rows on stdout
    pub fn inline(height: u16, theme: Theme, check_delay: Duration) -> Result<Self> {
        let (width, _) = crossterm::terminal::size()?;
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(Stage::with_terminal(terminal, width, theme, check_delay))
    }
}

impl<B: Backend> Stage<B> {
    pub fn with_terminal(
        terminal: Terminal<B>,
        width: u16,
        theme: Theme,
        check_delay: Duration,
    ) -> Self {
        Stage {
            terminal,
            width,
            theme,
            check_delay,
            animated: Vec::new(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Insert `line` above the viewport, hard-wrapped to the terminal width
    pub fn print_line(&mut self, line: Line<'static>) -> Result<()> {
        let mut rows = fold_line(line, self.width);
        while !rows.is_empty() {
            let rest = rows.split_off(rows.len().min(MAX_INSERT_ROWS));
            let chunk = std::mem::replace(&mut rows, rest);
            let height = u16::try_from(chunk.len()).unwrap_or(u16::MAX);
            self.terminal.insert_before(height, |buf| {
                Paragraph::new(chunk).render(buf.area, buf);
            })?;
        }
        Ok(())
    }

    /// Insert unstyled `text` above the viewport
    pub fn print(&mut self, text: &str) -> Result<()> {
        let style = Style::default().fg(self.theme.fg);
        self.print_line(Line::styled(text.to_string(), style))
    }

    /// Draw transient lines into the viewport
    fn show(&mut self, lines: Vec<Line<'static>>) -> Result<()> {
        let width = self.width;
        let rows: Vec<Line<'static>> = lines
            .into_iter()
            .flat_map(|line| fold_line(line, width))
            .collect();
        self.terminal.draw(|f| {
            f.render_widget(Paragraph::new(rows), f.area());
        })?;
        Ok(())
    }

    /// Replay the recursion trace, pausing before each base-case verdict
    pub fn play_trace(&mut self, events: &[TraceEvent]) -> Result<()> {
        let theme = self.theme;
        let renderer = TreeRenderer::new(&theme);

        for event in events {
            if !self.check_delay.is_zero() {
                if let Some(pending) = renderer.pending_check(event) {
                    self.show(vec![pending])?;
                    thread::sleep(self.check_delay);
                }
            }
            for line in renderer.lines(event) {
                self.print_line(line)?;
            }
        }

        self.terminal.clear()?;
        Ok(())
    }

    /// Show the pause prompt in the viewport and wait for a key
    pub fn pause(&mut self) -> Result<()> {
        let style = Style::default().fg(self.theme.comment);
        self.show(vec![Line::styled(input::PAUSE_PROMPT, style)])?;
        let res = input::wait_for_key();
        self.terminal.clear()?;
        res
    }

    /// Blank the viewport and leave the cursor at its top for plain output
    pub fn close(mut self) -> Result<()> {
        self.terminal.clear()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<B: Backend> FramePresenter for Stage<B> {
    fn present(&mut self, codes: &[String], frame: &ScheduledFrame<'_>) -> Result<()> {
        if self.animated.is_empty() {
            self.animated = codes.to_vec();
        }

        let theme = self.theme;
        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(f.area());
            panes::render_codes_pane(f, chunks[0], codes, frame.step, &theme);
            panes::render_status_bar(f, chunks[1], frame, codes, &theme);
        })?;

        if !frame.hold.is_zero() {
            thread::sleep(frame.hold);
        }
        Ok(())
    }

    /// Keep the unhighlighted sequence in the scrollback, then clear the viewport
    fn finish(&mut self) -> Result<()> {
        let codes = std::mem::take(&mut self.animated);
        if let Some(first) = codes.first() {
            let initial = AnimationStep::initial(codes.len(), first.chars().count());
            let theme = self.theme;
            for line in panes::code_rows(&codes, &initial, &theme, self.width) {
                self.print_line(line)?;
            }
        }
        self.terminal.clear()?;
        Ok(())
    }
}
