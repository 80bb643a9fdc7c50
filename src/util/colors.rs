use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0000c030);
pub const SECONDARY: Color = Color::from_u32(0x00ff8000);
pub const NEUTRAL: Color = Color::from_u32(0x00606060);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ERROR: Color = Color::from_u32(0x00e05252);
