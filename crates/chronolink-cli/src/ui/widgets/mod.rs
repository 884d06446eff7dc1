pub use self::{result_display::*, session_header::*, step_display::*};

mod result_display;
mod session_header;
mod step_display;

mod color {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(0, 200, 0);
    pub const RED: Color = Color::Rgb(230, 40, 40);
    pub const YELLOW: Color = Color::Rgb(255, 210, 0);
    pub const CYAN: Color = Color::Rgb(0, 200, 220);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const DIM: Style = fg_bg(color::GRAY, color::BLACK);
    pub const TITLE: Style = fg_bg(color::CYAN, color::BLACK).add_modifier(Modifier::BOLD);
    pub const CORRECT: Style = fg_bg(color::BLACK, color::GREEN).add_modifier(Modifier::BOLD);
    pub const WRONG: Style = fg_bg(color::WHITE, color::RED).add_modifier(Modifier::BOLD);
    pub const WARNING: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const LIFE: Style = fg_bg(color::RED, color::BLACK);
    pub const GAUGE_OK: Style = fg_bg(color::GREEN, color::BLACK);
    pub const GAUGE_LOW: Style = fg_bg(color::RED, color::BLACK);
}
