//! Code sequence pane
//!
//! Draws the whole sequence as a bracketed list, packed several codes per row
//! to fit the pane width, with the current step's flipped bit highlighted in
//! both codes of the transition.

use crate::ui::theme::Theme;
use crate::visualizer::AnimationStep;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Columns taken by one code: quotes, the bits, a trailing `,`/`]` and a space
fn item_width(bits: usize) -> usize {
    bits + 4
}

/// How many codes fit on one row of `width` columns
pub fn codes_per_row(bits: usize, width: u16) -> usize {
    (width as usize / item_width(bits)).max(1)
}

/// Rows needed to show `count` codes of `bits` bits in `width` columns
pub fn rows_needed(count: usize, bits: usize, width: u16) -> usize {
    count.div_ceil(codes_per_row(bits, width)).max(1)
}

/// Style the bits of one code, highlighting what `step` marks in `row`
fn code_spans(
    code: &str,
    row: usize,
    step: &AnimationStep,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let normal = Style::default().fg(theme.fg);
    let lit = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled("'", normal)];
    for (pos, bit) in code.chars().enumerate() {
        let style = if step.is_highlighted(row, pos) {
            lit
        } else {
            normal
        };
        spans.push(Span::styled(bit.to_string(), style));
    }
    spans.push(Span::styled("'", normal));
    spans
}

/// Lay out `codes` as `['a', 'b', ...]` across as many rows as `width` needs
pub fn code_rows(
    codes: &[String],
    step: &AnimationStep,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let bits = codes.first().map(|c| c.chars().count()).unwrap_or(0);
    let per_row = codes_per_row(bits, width);
    let punct = Style::default().fg(theme.comment);

    codes
        .chunks(per_row)
        .enumerate()
        .map(|(chunk_idx, chunk)| {
            let open = if chunk_idx == 0 { "[" } else { " " };
            let mut spans = vec![Span::styled(open, punct)];
            for (offset, code) in chunk.iter().enumerate() {
                let row = chunk_idx * per_row + offset;
                if offset > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.extend(code_spans(code, row, step, theme));
                let closing = if row + 1 == codes.len() { "]" } else { "," };
                spans.push(Span::styled(closing, punct));
            }
            Line::from(spans)
        })
        .collect()
}

/// Pick which packed rows to show when only `visible` of `total` fit.
///
/// `None` marks an elision line. Rows holding the transition's two codes
/// always stay on screen when `visible >= 2`; with a single visible row the
/// destination row wins.
pub fn visible_rows(
    total: usize,
    visible: usize,
    step: &AnimationStep,
    per_row: usize,
) -> Vec<Option<usize>> {
    if total <= visible {
        return (0..total).map(Some).collect();
    }
    if visible == 0 {
        return Vec::new();
    }

    let Some(transition) = step.transition else {
        return (0..visible).map(Some).collect();
    };
    let from = transition.from / per_row;
    let to = transition.to / per_row;
    let (lo, hi) = (from.min(to), from.max(to));

    if hi - lo < visible {
        // Both fit in one window; put `hi` as low as it can go without losing `lo`
        let offset = hi.saturating_sub(visible - 1).min(lo);
        return (offset..offset + visible).map(Some).collect();
    }

    match visible {
        1 => vec![Some(to)],
        2 => vec![Some(lo), Some(hi)],
        _ => {
            let above = (visible - 1) / 2;
            let below = visible - 1 - above;
            let mut rows: Vec<Option<usize>> = (lo..lo + above).map(Some).collect();
            rows.push(None);
            rows.extend((hi + 1 - below..=hi).map(Some));
            rows
        }
    }
}

/// Render the code sequence pane for one animation step
pub fn render_codes_pane(
    frame: &mut Frame,
    area: Rect,
    codes: &[String],
    step: &AnimationStep,
    theme: &Theme,
) {
    let bits = codes.first().map(|c| c.chars().count()).unwrap_or(0);
    let block = Block::default()
        .title(format!(" {}-bit Gray code ", bits))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::new(1, 0, 0, 0));

    let inner_width = area.width.saturating_sub(3);
    let visible_height = area.height.saturating_sub(2) as usize; // Account for borders
    let per_row = codes_per_row(bits, inner_width);

    let mut all_rows = code_rows(codes, step, theme, inner_width);
    let elided = Style::default().fg(theme.comment);
    let shown: Vec<Line<'static>> = visible_rows(all_rows.len(), visible_height, step, per_row)
        .into_iter()
        .map(|row| match row {
            Some(idx) => std::mem::take(&mut all_rows[idx]),
            None => Line::styled(" …", elided),
        })
        .collect();

    frame.render_widget(Paragraph::new(shown).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DEFAULT_THEME;
    use crate::generator::generate;
    use crate::visualizer::compute_steps;
    use ratatui::{backend::TestBackend, Terminal};

    fn lit_cells(codes: &[String], step: &AnimationStep, width: u16, height: u16) -> usize {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_codes_pane(f, area, codes, step, &DEFAULT_THEME);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .filter(|cell| cell.fg == DEFAULT_THEME.highlight)
            .count()
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn packs_codes_into_rows() {
        let codes: Vec<String> = ["00", "01", "11", "10"].map(String::from).to_vec();
        let steps = compute_steps(&codes).unwrap();

        // "'00', " is 6 columns, so 12 columns hold two codes per row
        let rows = code_rows(&codes, &steps[0], &DEFAULT_THEME, 12);
        let text: Vec<String> = rows.iter().map(plain).collect();
        assert_eq!(text, vec!["['00', '01',", " '11', '10']"]);
        assert_eq!(rows_needed(codes.len(), 2, 12), 2);
    }

    #[test]
    fn single_row_when_wide_enough() {
        let codes: Vec<String> = ["0", "1"].map(String::from).to_vec();
        let steps = compute_steps(&codes).unwrap();
        let rows = code_rows(&codes, &steps[0], &DEFAULT_THEME, 80);
        assert_eq!(rows.len(), 1);
        assert_eq!(plain(&rows[0]), "['0', '1']");
    }

    #[test]
    fn highlighted_bits_use_the_highlight_color() {
        let codes: Vec<String> = ["00", "01", "11", "10"].map(String::from).to_vec();
        let steps = compute_steps(&codes).unwrap();

        // step 2 is the 01 -> 11 flip at position 0
        let rows = code_rows(&codes, &steps[2], &DEFAULT_THEME, 80);
        let lit: Vec<String> = rows[0]
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(DEFAULT_THEME.highlight))
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(lit, vec!["0", "1"]);
    }

    #[test]
    fn narrow_width_still_fits_one_code() {
        assert_eq!(codes_per_row(5, 3), 1);
        assert_eq!(rows_needed(32, 5, 3), 32);
    }

    #[test]
    fn wrap_step_keeps_both_rows_in_a_short_pane() {
        let codes = generate(6);
        let steps = compute_steps(&codes).unwrap();

        // 57 inner columns hold 5 six-bit codes per row, so 64 codes need 13 rows
        assert_eq!(rows_needed(codes.len(), 6, 57), 13);
        let wrap = steps.last().unwrap();
        assert_eq!(lit_cells(&codes, wrap, 60, 6), 2);
    }

    #[test]
    fn every_step_shows_its_highlights_in_a_short_pane() {
        let codes = generate(6);
        let steps = compute_steps(&codes).unwrap();
        for step in &steps[1..] {
            assert_eq!(lit_cells(&codes, step, 60, 6), 2, "{:?}", step.transition);
        }
    }

    #[test]
    fn window_follows_the_transition() {
        let codes = generate(6);
        let steps = compute_steps(&codes).unwrap();

        // step 41 flips code 40 -> 41, both on packed row 8
        let step = &steps[41];
        assert_eq!(
            visible_rows(13, 4, step, 5),
            vec![Some(5), Some(6), Some(7), Some(8)]
        );

        // the wrap spans rows 12 and 0, which cannot share a window of 4
        let wrap = steps.last().unwrap();
        assert_eq!(
            visible_rows(13, 4, wrap, 5),
            vec![Some(0), None, Some(11), Some(12)]
        );
        assert_eq!(visible_rows(13, 1, wrap, 5), vec![Some(0)]);
        assert_eq!(visible_rows(13, 2, wrap, 5), vec![Some(0), Some(12)]);

        // the initial step starts from the top
        assert_eq!(
            visible_rows(13, 3, &steps[0], 5),
            vec![Some(0), Some(1), Some(2)]
        );
        assert_eq!(visible_rows(2, 4, &steps[0], 5), vec![Some(0), Some(1)]);
    }
}
