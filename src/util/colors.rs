use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x004285f4);
pub const SECONDARY: Color = Color::from_u32(0x0034a853);
pub const NEUTRAL: Color = Color::from_u32(0x00505050);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x00fbbc05);
pub const DANGER: Color = Color::from_u32(0x00ea4335);
