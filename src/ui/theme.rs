use ratatui::style::Color;

/// Colors used by every pane. Renderers take a `&Theme` rather than reaching
/// for escape codes, so codes never carry styling in their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue, the prepended 0
    pub secondary: Color, // Orange, the prepended 1
    pub comment: Color,   // Grey, tree branches
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub highlight: Color, // Changed bit in the animation
    pub function: Color,
    pub border: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    highlight: Color::Rgb(243, 139, 168), // Same red as errors
    function: Color::Rgb(249, 226, 175),  // Yellow for call nodes
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}
