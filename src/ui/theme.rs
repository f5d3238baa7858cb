use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub cursor_bg: Color,   // Background for the cursor cell
    pub status_bg: Color,   // Background for the status bar
    pub fragment: Color,    // Yellow for emitted fragments
    pub base_type: Color,   // Cyan for the base type
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),     // Grey border
    cursor_bg: Color::Rgb(249, 226, 175),  // Yellow cursor cell
    status_bg: Color::Rgb(50, 50, 70),     // Slightly lighter BG for status
    fragment: Color::Rgb(249, 226, 175),   // Yellow for fragments
    base_type: Color::Rgb(148, 226, 213),  // Cyan/teal for the base type
};
