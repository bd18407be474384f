use tracing::debug;

use crate::{
    nav::location::Location,
    page::{INDEX_PAGE, Page},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The page stayed; `true` when a section was actually shown.
    Section(bool),
    /// The browser-equivalent should load another document.
    Navigate(Location),
    Ignored,
}

/// Tracks which content section is visible and which nav links are active.
#[derive(Debug, Clone)]
pub struct Router {
    home: String,
    current: Option<String>,
}

impl Router {
    pub fn new(home: &str) -> Self {
        Self {
            home: home.to_string(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Shows only section `id`; no-op when the page has no such section.
    pub fn show_section(&mut self, page: &mut Page, id: &str) -> bool {
        if page.section(id).is_none() {
            debug!(id, "no such section");
            return false;
        }

        for section in &mut page.sections {
            section.hidden = section.id != id;
        }

        let is_home = id == self.home;
        for link in &mut page.links {
            link.active = link.data_target.as_deref() == Some(id)
                || (is_home && link.href.as_deref() == Some(INDEX_PAGE));
        }

        self.current = Some(id.to_string());
        true
    }

    pub fn click(&mut self, page: &mut Page, index: usize, location: &mut Location) -> NavOutcome {
        let Some(link) = page.links.get(index) else {
            return NavOutcome::Ignored;
        };

        if let Some(target) = link.data_target.clone() {
            return NavOutcome::Section(self.show_section(page, &target));
        }

        let Some(href) = link.href.clone() else {
            return NavOutcome::Ignored;
        };

        if href.starts_with('#') || href.starts_with(&format!("{INDEX_PAGE}#")) {
            let next = location.join(&href);
            let same_document = next.path == page.path;
            *location = next.clone();

            let shown = next
                .fragment
                .as_deref()
                .is_some_and(|id| self.show_section(page, id));

            if same_document {
                NavOutcome::Section(shown)
            } else {
                NavOutcome::Navigate(next)
            }
        } else {
            NavOutcome::Navigate(location.join(&href))
        }
    }
}
