use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

pub struct Header<'a> {
    title: &'a str,
    /// `Some(expanded)` when the menu toggle is shown.
    toggle: Option<bool>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, toggle: Option<bool>) -> Self {
        Self { title, toggle }
    }

    fn toggle_label(expanded: bool) -> &'static str {
        if expanded { "✕ Menu" } else { "☰ Menu" }
    }

    /// Clickable area of the toggle control; empty when the toggle is hidden.
    pub fn toggle_area(&self, area: Rect) -> Rect {
        match self.toggle {
            Some(expanded) if area.height >= 3 && area.width > 2 => {
                let width = Self::toggle_label(expanded).width() as u16;
                Rect::new(area.x + 2, area.y + 1, width.min(area.width - 2), 1)
            }
            _ => Rect::default(),
        }
    }
}

impl<'a> Widget for Header<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title_top(self.title)
            .title_alignment(Alignment::Center);
        let toggle_area = self.toggle_area(area);
        block.render(area, buf);

        if let Some(expanded) = self.toggle {
            let style = if expanded {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::ACCENT)
            };
            buf.set_stringn(
                toggle_area.x,
                toggle_area.y,
                Self::toggle_label(expanded),
                usize::from(toggle_area.width),
                style,
            );
        }
    }
}
