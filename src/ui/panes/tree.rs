//! Recursion tree rendering
//!
//! Turns [`TraceEvent`]s into box-drawing tree lines:
//!
//! ```text
//! └── gray_code(2)
//!     ├── Check if n == 0 ✕
//!     ├── Check if n == 1 ✕
//!     ├── Recursing on n-1 = 1
//!     │   └── gray_code(1)
//!     │       ├── Check if n == 0 ✕
//!     │       ├── Check if n == 1 ✓
//!     │       ├── Return ['0', '1']
//!     └── Reflect and prefix results:
//!         ├── Original (prefix 0):  ['00', '01']
//!         ├── Reflected (prefix 1): ['11', '10']
//! ```
//!
//! Indentation is derived from each event's depth alone, so the renderer keeps
//! no state between events.

use crate::generator::TraceEvent;
use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Renders trace events as styled tree lines
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer<'t> {
    theme: &'t Theme,
}

impl<'t> TreeRenderer<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        TreeRenderer { theme }
    }

    /// All finished lines for `event`
    pub fn lines(&self, event: &TraceEvent) -> Vec<Line<'static>> {
        match event {
            TraceEvent::CallEntered { depth, n } => vec![self.node(
                node_prefix(*depth),
                LAST_BRANCH,
                vec![Span::styled(
                    format!("gray_code({})", n),
                    Style::default().fg(self.theme.function),
                )],
            )],
            TraceEvent::BaseCheck { passed, .. } => {
                let mut line = self.pending_check(event).unwrap_or_default();
                line.spans.push(if *passed {
                    Span::styled(
                        "✓",
                        Style::default()
                            .fg(self.theme.success)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(
                        "✕",
                        Style::default()
                            .fg(self.theme.error)
                            .add_modifier(Modifier::BOLD),
                    )
                });
                vec![line]
            }
            TraceEvent::BaseReturned { depth, codes } => {
                let mut spans = vec![self.text("Return ")];
                spans.extend(self.code_list(codes, None));
                vec![self.node(child_prefix(*depth), BRANCH, spans)]
            }
            TraceEvent::Recursing { depth, next } => vec![self.node(
                child_prefix(*depth),
                BRANCH,
                vec![self.text(format!("Recursing on n-1 = {}", next))],
            )],
            TraceEvent::HalvesComputed {
                depth,
                original,
                reflected,
            } => {
                let results_prefix = format!("{}{}", child_prefix(*depth), BLANK);
                let zero = Style::default().fg(self.theme.primary);
                let one = Style::default().fg(self.theme.secondary);

                let mut original_spans = vec![
                    self.text("Original ("),
                    Span::styled("prefix 0", zero),
                    self.text("):  "),
                ];
                original_spans.extend(self.code_list(original, Some(zero)));

                let mut reflected_spans = vec![
                    self.text("Reflected ("),
                    Span::styled("prefix 1", one),
                    self.text("): "),
                ];
                reflected_spans.extend(self.code_list(reflected, Some(one)));

                vec![
                    self.node(
                        child_prefix(*depth),
                        LAST_BRANCH,
                        vec![self.text("Reflect and prefix results:")],
                    ),
                    self.node(results_prefix.clone(), BRANCH, original_spans),
                    self.node(results_prefix, BRANCH, reflected_spans),
                ]
            }
        }
    }

    /// The part of a check line shown while its result is still pending
    pub fn pending_check(&self, event: &TraceEvent) -> Option<Line<'static>> {
        match event {
            TraceEvent::BaseCheck { depth, case, .. } => Some(self.node(
                child_prefix(*depth),
                BRANCH,
                vec![self.text(format!("Check if n == {} ", case.width()))],
            )),
            _ => None,
        }
    }

    fn node(
        &self,
        prefix: String,
        branch: &'static str,
        body: Vec<Span<'static>>,
    ) -> Line<'static> {
        let branch_style = Style::default().fg(self.theme.comment);
        let mut spans = vec![
            Span::styled(prefix, branch_style),
            Span::styled(branch, branch_style),
        ];
        spans.extend(body);
        Line::from(spans)
    }

    fn text(&self, text: impl Into<String>) -> Span<'static> {
        Span::styled(text.into(), Style::default().fg(self.theme.fg))
    }

    /// `['a', 'b']`, optionally coloring the leading bit of every code
    fn code_list(&self, codes: &[String], lead: Option<Style>) -> Vec<Span<'static>> {
        let mut spans = vec![self.text("[")];
        for (i, code) in codes.iter().enumerate() {
            if i > 0 {
                spans.push(self.text(", "));
            }
            spans.push(self.text("'"));
            match (lead, code.chars().next()) {
                (Some(style), Some(first)) => {
                    spans.push(Span::styled(first.to_string(), style));
                    spans.push(self.text(&code[first.len_utf8()..]));
                }
                _ => spans.push(self.text(code.as_str())),
            }
            spans.push(self.text("'"));
        }
        spans.push(self.text("]"));
        spans
    }
}

fn node_prefix(depth: usize) -> String {
    format!("{}{}", BLANK, PIPE).repeat(depth)
}

fn child_prefix(depth: usize) -> String {
    format!("{}{}", node_prefix(depth), BLANK)
}
