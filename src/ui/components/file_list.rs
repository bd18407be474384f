use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

use crate::{page::ListItem as Entry, util::colors};

/// Every entry takes two rows, so a click row maps straight to an index.
pub const ENTRY_HEIGHT: u16 = 2;
const SKELETON: &str = "░░░░░░░░░░░░░░░░░░░░░░░░";

pub struct FileList<'a> {
    entries: &'a [Entry],
    focused: bool,
}

impl<'a> FileList<'a> {
    pub fn new(entries: &'a [Entry], focused: bool) -> Self {
        Self { entries, focused }
    }
}

fn entry_text(entry: &Entry) -> Text<'_> {
    match entry {
        Entry::Skeleton => Text::from(vec![
            Line::styled(SKELETON, Style::default().fg(colors::NEUTRAL)),
            Line::default(),
        ]),
        Entry::Notice(message) => Text::from(vec![Line::raw(message.as_str()), Line::default()]),
        Entry::File(file) => Text::from(vec![
            Line::from(vec![
                Span::raw(file.icon),
                Span::raw(" "),
                Span::styled(
                    file.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::styled(
                format!("   Atualizado em {}", file.updated),
                Style::default().fg(colors::NEUTRAL),
            ),
        ]),
    }
}

impl<'a> StatefulWidget for FileList<'a> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(entry_text(entry)))
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::SECONDARY)
        };

        let list = List::new(items)
            .highlight_style(highlight)
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, state);
    }
}
