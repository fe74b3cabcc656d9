use ratatui::text::{Line, Span};

/// Hard-wrap a styled line into rows of at most `width` characters.
///
/// Box-drawing characters and check marks are all one column wide, so a char
/// count is a column count for everything the panes produce.
pub(crate) fn fold_line(line: Line<'static>, width: u16) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in line.spans {
        let style = span.style;
        let mut chunk = String::new();
        for c in span.content.chars() {
            if used == width {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                rows.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            chunk.push(c);
            used += 1;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, style));
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(Line::from(current));
    }
    rows
}
