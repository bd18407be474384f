use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::{
    event::events::Event,
    listing::finish_load,
    page::PageError,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt)?;
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key)?,
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse)?,
            TerminalEvent::Resize(width, _) => app.state.width = width,
            TerminalEvent::Tick => return Ok(app.has_focus),
        }

        Ok(true)
    }

    /// Applies an app event to the page. Missing page regions are fatal.
    pub fn handle_action(app: &mut App, evt: Event) -> Result<(), PageError> {
        match evt {
            Event::FolderFetched {
                generation,
                request,
                outcome,
            } => {
                if generation != app.generation {
                    debug!(list = %request.list_id, "dropping result from a previous page");
                    return Ok(());
                }
                let state = finish_load(&mut app.page, &request, outcome)?;
                debug!(list = %request.list_id, ?state, "listing settled");
            }
            Event::Navigate(location) => app.navigate(location)?,
        }
        Ok(())
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<(), PageError> {
        match InputHandler::handle_key(key, app.state.focus) {
            Some(msg) => app.update(msg),
            None => Ok(()),
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) -> Result<(), PageError> {
        match evt.kind {
            MouseEventKind::Down(MouseButton::Left) => app.update(AppMessage::Click {
                column: evt.column,
                row: evt.row,
            }),
            MouseEventKind::ScrollDown => app.update(AppMessage::SelectNext),
            MouseEventKind::ScrollUp => app.update(AppMessage::SelectPrevious),
            _ => Ok(()),
        }
    }
}
