use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::{Frame, layout::Position};
use tracing::{debug, info, warn};

use crate::{
    bootstrap::initialize,
    config::Config,
    event::events::Event,
    http::{ApiService, DriveSource},
    listing::{FolderListingRequest, on_search_input},
    nav::{
        location::Location,
        menu::{ClickTarget, MenuController},
        router::{NavOutcome, Router},
    },
    page::{HOME_SECTION, ListItem, Page, PageError, SectionKind},
    util::task::TaskManager,
};

use super::{
    components::file_list::ENTRY_HEIGHT,
    layout::AppLayout,
    message::AppMessage,
    state::{Focus, UiState},
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<dyn DriveSource>,
    pub config: Config,
    pub page: Page,
    pub location: Location,
    pub router: Router,
    pub menu: MenuController,
    /// Bumped on every page load so late fetch results from a previous page are dropped.
    pub generation: u64,
    pub task_manager: TaskManager,
    pub state: UiState,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, location: Location) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(&config)?);
        Ok(Self::with_source(config, location, api)?)
    }

    /// Builds the app on an arbitrary drive source and runs the page load.
    /// Must be called from within a tokio runtime.
    pub fn with_source(
        config: Config,
        location: Location,
        api: Arc<dyn DriveSource>,
    ) -> Result<Self, PageError> {
        let (event_tx, event_rx) = flume::unbounded();

        let mut app = Self {
            event_rx,
            event_tx,
            api,
            menu: MenuController::attach(false, config.mobile_breakpoint),
            config,
            page: Page::default(),
            location,
            router: Router::new(HOME_SECTION),
            generation: 0,
            task_manager: TaskManager::new(),
            state: UiState::default(),
            has_focus: true,
            should_quit: false,
        };
        app.load_page()?;
        Ok(app)
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            self.state.width = area.width;
            AppLayout::new(self).render(frame, area);
        }
    }

    fn load_page(&mut self) -> Result<(), PageError> {
        self.page = Page::for_path(&self.location.path);
        let init = initialize(&mut self.page, &self.location, &self.config)?;
        self.router = init.router;
        self.menu = init.menu;
        self.state.nav_index = 0;
        self.state.list_state.select(None);
        self.spawn_fetches(init.pending);
        Ok(())
    }

    fn spawn_fetches(&mut self, pending: Vec<FolderListingRequest>) {
        for request in pending {
            let api = self.api.clone();
            let tx = self.event_tx.clone();
            let generation = self.generation;
            let key = request.list_id.clone();

            self.task_manager.spawn(
                &key,
                tokio::spawn(async move {
                    let outcome = api.list_folder(&request.folder_id).await;
                    let _ = tx.send(Event::FolderFetched {
                        generation,
                        request,
                        outcome,
                    });
                }),
            );
        }
    }

    pub fn navigate(&mut self, location: Location) -> Result<(), PageError> {
        info!(to = %location.href(), "navigating");
        self.task_manager.abort_all();
        self.generation += 1;
        self.location = location;
        self.load_page()
    }

    /// Id of the visible section when it is a category listing.
    pub fn visible_category(&self) -> Option<&str> {
        self.page
            .visible_section()
            .filter(|s| s.kind == SectionKind::Category)
            .map(|s| s.id.as_str())
    }

    pub fn visible_entries(&self) -> &[ListItem] {
        self.visible_category()
            .and_then(|id| self.page.list(&format!("list-{id}")).ok())
            .unwrap_or_default()
    }

    fn search_id(&self) -> Option<String> {
        self.visible_category()
            .map(|id| format!("search-{id}"))
            .filter(|id| self.page.search(id).is_some())
    }

    pub fn update(&mut self, msg: AppMessage) -> Result<(), PageError> {
        let link_count = self.page.links.len().max(1);

        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::ToggleMenu => {
                self.menu.toggle();
                debug!(aria_expanded = self.menu.aria_expanded(), "menu toggled");
            }
            AppMessage::NextLink => {
                self.focus_nav();
                self.state.nav_index = (self.state.nav_index + 1) % link_count;
            }
            AppMessage::PreviousLink => {
                self.focus_nav();
                self.state.nav_index = (self.state.nav_index + link_count - 1) % link_count;
            }
            AppMessage::ActivateLink => {
                // Enter on a collapsed menu opens it instead of following an unseen link.
                if !self.menu.reveal(self.state.width) {
                    self.activate_link(self.state.nav_index);
                }
            }
            AppMessage::FocusNav => self.focus_nav(),
            AppMessage::FocusList => {
                if self.visible_category().is_some() {
                    self.state.focus = Focus::List;
                }
            }
            AppMessage::FocusSearch => {
                if self.search_id().is_some() {
                    self.state.focus = Focus::Search;
                }
            }
            AppMessage::BlurSearch => self.state.focus = Focus::List,
            AppMessage::SearchInput(c) => self.edit_search(|value| value.push(c))?,
            AppMessage::SearchBackspace => self.edit_search(|value| {
                value.pop();
            })?,
            AppMessage::SelectNext => self.move_selection(1),
            AppMessage::SelectPrevious => self.move_selection(-1),
            AppMessage::SelectFirst => self.select_at(0),
            AppMessage::SelectLast => {
                let len = self.visible_entries().len();
                self.select_at(len.saturating_sub(1));
            }
            AppMessage::OpenSelected => {
                if let Some(index) = self.state.list_state.selected() {
                    self.open_entry(index);
                }
            }
            AppMessage::Click { column, row } => self.click(Position::new(column, row)),
        }
        Ok(())
    }

    fn focus_nav(&mut self) {
        self.state.focus = Focus::Nav;
        if self.menu.reveal(self.state.width) {
            debug!(aria_expanded = self.menu.aria_expanded(), "menu revealed for keyboard focus");
        }
    }

    fn activate_link(&mut self, index: usize) {
        self.menu.on_link_click(self.state.width);

        match self.router.click(&mut self.page, index, &mut self.location) {
            NavOutcome::Navigate(location) => {
                let _ = self.event_tx.send(Event::Navigate(location));
            }
            NavOutcome::Section(true) => {
                self.state.list_state.select(None);
                self.state.status = None;
            }
            NavOutcome::Section(false) | NavOutcome::Ignored => {}
        }
    }

    fn edit_search(&mut self, edit: impl FnOnce(&mut String)) -> Result<(), PageError> {
        let Some(id) = self.search_id() else {
            return Ok(());
        };

        let mut value = self
            .page
            .search(&id)
            .map(|input| input.value.clone())
            .unwrap_or_default();
        edit(&mut value);

        on_search_input(&mut self.page, &id, &value)?;
        self.state.list_state.select(None);
        Ok(())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_entries().len();
        if len == 0 {
            return;
        }
        let current = self.state.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.select_at(next);
    }

    fn select_at(&mut self, index: usize) {
        if index < self.visible_entries().len() {
            self.state.focus = Focus::List;
            self.state.list_state.select(Some(index));
        }
    }

    fn open_entry(&mut self, index: usize) {
        let Some(ListItem::File(entry)) = self.visible_entries().get(index) else {
            return;
        };
        let link = entry.link.clone();

        // Detached: the opened browser gets no handle back into this process.
        match open::that_detached(&link) {
            Ok(()) => {
                info!(%link, "opened file link");
                self.state.status = Some(format!("Aberto: {link}"));
            }
            Err(err) => {
                warn!(%link, %err, "failed to open file link");
                self.state.status = Some(format!("Não foi possível abrir {link}"));
            }
        }
    }

    fn click(&mut self, position: Position) {
        let hits = self.state.hits.clone();
        let width = self.state.width;

        if hits.toggle.contains(position) {
            self.menu.dispatch_click(width, ClickTarget::Toggle);
            return;
        }

        if let Some(index) = hits.links.iter().position(|r| r.contains(position)) {
            self.state.nav_index = index;
            self.state.focus = Focus::Nav;
            self.activate_link(index);
        } else if let Some(list) = hits.list.filter(|r| r.contains(position)) {
            let index = self.state.list_state.offset()
                + usize::from((position.y - list.y) / ENTRY_HEIGHT);
            if index < self.visible_entries().len() {
                self.select_at(index);
                self.open_entry(index);
            }
        }

        let target = if hits.menu.is_some_and(|r| r.contains(position)) {
            ClickTarget::Menu
        } else {
            ClickTarget::Outside
        };
        self.menu.dispatch_click(width, target);
    }
}
