use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub base: Color, // Wooden base and pegs
    pub disks: [Color; 6],
}

impl Theme {
    /// Color for a disk, cycling through the palette by size
    pub fn disk_color(&self, disk: u8) -> Color {
        let index = usize::from(disk.saturating_sub(1)) % self.disks.len();
        self.disks[index]
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),   // Status bar background
    base: Color::Rgb(205, 133, 63),            // Peru
    disks: [
        Color::Rgb(243, 139, 168), // Red
        Color::Rgb(250, 179, 135), // Orange
        Color::Rgb(249, 226, 175), // Yellow
        Color::Rgb(166, 227, 161), // Green
        Color::Rgb(137, 180, 250), // Blue
        Color::Rgb(203, 166, 247), // Purple
    ],
};
