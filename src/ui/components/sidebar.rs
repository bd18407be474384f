use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::{page::NavLink, ui::util::fit, util::colors};

pub struct Sidebar<'a> {
    links: &'a [NavLink],
    focused: Option<usize>,
}

impl<'a> Sidebar<'a> {
    pub fn new(links: &'a [NavLink], focused: Option<usize>) -> Self {
        Self { links, focused }
    }

    /// One row per link, top to bottom, clipped to `area`.
    pub fn link_areas(&self, area: Rect) -> Vec<Rect> {
        (0..self.links.len() as u16)
            .map(|i| Rect::new(area.x, area.y.saturating_add(i), area.width, 1))
            .filter(|r| r.y < area.bottom())
            .collect()
    }
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width.saturating_sub(4));
        let items: Vec<ListItem> = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let mut style = if link.active {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                let marker = if Some(i) == self.focused {
                    style = style.add_modifier(Modifier::REVERSED);
                    ">"
                } else {
                    " "
                };
                ListItem::new(format!("{marker} {}", fit(&link.label, width))).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
