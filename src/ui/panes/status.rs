//! Status bar rendering with step position and transition description

use crate::ui::theme::Theme;
use crate::visualizer::{ScheduledFrame, TransitionKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Describe what the frame highlights, e.g. `'01' → '11': bit 0 flips`
pub fn describe(frame: &ScheduledFrame<'_>, codes: &[String]) -> String {
    let Some(transition) = frame.step.transition else {
        return "all codes, nothing highlighted".to_string();
    };

    let code = |row: usize| codes.get(row).map(String::as_str).unwrap_or("?");
    let flip = format!(
        "'{}' → '{}': bit {} flips",
        code(transition.from),
        code(transition.to),
        transition.position
    );

    match transition.kind {
        TransitionKind::Forward => flip,
        TransitionKind::Wrap => format!("wrap around, {}", flip),
    }
}

/// Render the status bar below the code pane.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    scheduled: &ScheduledFrame<'_>,
    codes: &[String],
    theme: &Theme,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let is_wrap = scheduled
        .step
        .transition
        .is_some_and(|t| t.kind == TransitionKind::Wrap);

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", scheduled.index + 1, scheduled.total),
            Style::default()
                .bg(if is_wrap {
                    theme.secondary
                } else {
                    theme.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default().bg(theme.status_bg).fg(theme.comment),
        ),
        Span::styled(
            format!(" {} ", describe(scheduled, codes)),
            Style::default().bg(theme.status_bg).fg(theme.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let right_spans = vec![
        Span::styled(
            " cycle ",
            Style::default().bg(theme.status_bg).fg(theme.fg),
        ),
        Span::styled(
            format!(" {}/{} ", scheduled.cycle + 1, scheduled.cycles),
            Style::default()
                .bg(theme.comment)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::{compute_steps, schedule};
    use std::time::Duration;

    #[test]
    fn describes_forward_and_wrap_steps() {
        let codes: Vec<String> = ["00", "01", "11", "10"].map(String::from).to_vec();
        let steps = compute_steps(&codes).unwrap();
        let frames: Vec<_> = schedule(&steps, Duration::ZERO, 1).collect();

        assert_eq!(describe(&frames[0], &codes), "all codes, nothing highlighted");
        assert_eq!(describe(&frames[1], &codes), "'00' → '01': bit 1 flips");
        assert_eq!(
            describe(&frames[4], &codes),
            "wrap around, '10' → '00': bit 0 flips"
        );
    }
}
