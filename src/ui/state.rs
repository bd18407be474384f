use ratatui::{layout::Rect, widgets::ListState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Nav,
    List,
    Search,
}

/// Screen areas from the last frame, used to route mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub toggle: Rect,
    pub menu: Option<Rect>,
    pub links: Vec<Rect>,
    pub list: Option<Rect>,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    pub nav_index: usize,
    pub list_state: ListState,
    pub width: u16,
    pub hits: HitMap,
    pub status: Option<String>,
}
