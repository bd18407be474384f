use std::{collections::HashMap, sync::Arc};

use thiserror::Error;

use crate::{config::CATEGORIES, http::FileRecord};

pub const INDEX_PAGE: &str = "index.html";
pub const ABOUT_PAGE: &str = "sobre.html";
pub const HOME_SECTION: &str = "inicio";
pub const ABOUT_SECTION: &str = "sobre";

#[derive(Debug, Error, PartialEq)]
pub enum PageError {
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongKind { id: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub icon: &'static str,
    pub name: String,
    pub link: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Skeleton,
    Notice(String),
    File(FileEntry),
}

/// Listener installed on a search input once its listing has loaded.
#[derive(Debug, Clone)]
pub struct SearchBinding {
    pub list_id: String,
    pub files: Arc<[FileRecord]>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub value: String,
    pub binding: Option<SearchBinding>,
}

#[derive(Debug, Clone)]
pub enum Element {
    List(Vec<ListItem>),
    Indicator { hidden: bool },
    Search(SearchInput),
}

impl Element {
    fn kind(&self) -> &'static str {
        match self {
            Element::List(_) => "list",
            Element::Indicator { .. } => "indicator",
            Element::Search(_) => "search input",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionKind {
    Home,
    Category,
    About,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub data_target: Option<String>,
    pub href: Option<String>,
    pub active: bool,
}

impl NavLink {
    pub fn to_section(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            data_target: Some(target.to_string()),
            href: None,
            active: false,
        }
    }

    pub fn to_href(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            data_target: None,
            href: Some(href.to_string()),
            active: false,
        }
    }
}

/// In-memory document for one screen: sections, nav links and the id-addressed
/// regions that listings write into.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub path: String,
    pub sections: Vec<Section>,
    pub links: Vec<NavLink>,
    pub has_menu_toggle: bool,
    elements: HashMap<String, Element>,
}

impl Page {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Default::default()
        }
    }

    /// Page document for a location path; anything that isn't the about page is the index.
    pub fn for_path(path: &str) -> Self {
        if path.contains(ABOUT_PAGE) {
            Self::about()
        } else {
            Self::index()
        }
    }

    pub fn index() -> Self {
        let mut page = Self::new(INDEX_PAGE);
        page.has_menu_toggle = true;
        page.add_section(HOME_SECTION, "Início", SectionKind::Home);
        page.links.push(NavLink::to_href("Início", INDEX_PAGE));

        for (id, title) in CATEGORIES {
            page.add_section(id, title, SectionKind::Category);
            page.add_category_regions(id);
            page.links.push(NavLink::to_section(title, id));
        }

        page.links.push(NavLink::to_href("Sobre nós", ABOUT_PAGE));
        page
    }

    pub fn about() -> Self {
        let mut page = Self::new(ABOUT_PAGE);
        page.has_menu_toggle = true;
        page.add_section(ABOUT_SECTION, "Sobre nós", SectionKind::About);
        page.links.push(NavLink::to_href("Início", INDEX_PAGE));

        for (id, title) in CATEGORIES {
            page.links
                .push(NavLink::to_href(title, &format!("{INDEX_PAGE}#{id}")));
        }

        page.links.push(NavLink::to_href("Sobre nós", ABOUT_PAGE));
        page
    }

    pub fn add_section(&mut self, id: &str, title: &str, kind: SectionKind) {
        self.sections.push(Section {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            hidden: false,
        });
    }

    /// Registers `list-<cat>`, `loading-<cat>`, `empty-<cat>`, `error-<cat>` and `search-<cat>`.
    pub fn add_category_regions(&mut self, category: &str) {
        self.insert(format!("list-{category}"), Element::List(Vec::new()));
        self.insert(
            format!("loading-{category}"),
            Element::Indicator { hidden: true },
        );
        self.insert(
            format!("empty-{category}"),
            Element::Indicator { hidden: true },
        );
        self.insert(
            format!("error-{category}"),
            Element::Indicator { hidden: true },
        );
        self.insert(
            format!("search-{category}"),
            Element::Search(SearchInput::default()),
        );
    }

    pub fn insert(&mut self, id: String, element: Element) {
        self.elements.insert(id, element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn visible_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| !s.hidden)
    }

    fn element(&self, id: &str) -> Result<&Element, PageError> {
        self.elements
            .get(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, PageError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }

    pub fn list(&self, id: &str) -> Result<&[ListItem], PageError> {
        match self.element(id)? {
            Element::List(items) => Ok(items),
            other => Err(wrong_kind(id, other, "list")),
        }
    }

    pub fn list_mut(&mut self, id: &str) -> Result<&mut Vec<ListItem>, PageError> {
        match self.element_mut(id)? {
            Element::List(items) => Ok(items),
            other => Err(wrong_kind(id, other, "list")),
        }
    }

    pub fn is_hidden(&self, id: &str) -> Result<bool, PageError> {
        match self.element(id)? {
            Element::Indicator { hidden } => Ok(*hidden),
            other => Err(wrong_kind(id, other, "indicator")),
        }
    }

    pub fn set_hidden(&mut self, id: &str, value: bool) -> Result<(), PageError> {
        match self.element_mut(id)? {
            Element::Indicator { hidden } => {
                *hidden = value;
                Ok(())
            }
            other => Err(wrong_kind(id, other, "indicator")),
        }
    }

    /// Search inputs are optional; a missing or mistyped element yields `None`.
    pub fn search(&self, id: &str) -> Option<&SearchInput> {
        match self.elements.get(id) {
            Some(Element::Search(input)) => Some(input),
            _ => None,
        }
    }

    pub fn search_mut(&mut self, id: &str) -> Option<&mut SearchInput> {
        match self.elements.get_mut(id) {
            Some(Element::Search(input)) => Some(input),
            _ => None,
        }
    }
}

fn wrong_kind(id: &str, element: &Element, expected: &'static str) -> PageError {
    tracing::warn!(id, found = element.kind(), expected, "element kind mismatch");
    PageError::WrongKind {
        id: id.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_page_has_regions_for_every_category() {
        let page = Page::index();
        for (id, _) in CATEGORIES {
            assert!(page.list(&format!("list-{id}")).is_ok());
            assert!(page.is_hidden(&format!("loading-{id}")).is_ok());
            assert!(page.search(&format!("search-{id}")).is_some());
            assert!(page.section(id).is_some());
        }
        assert!(page.section(HOME_SECTION).is_some());
    }

    #[test]
    fn about_page_links_back_to_index_anchors() {
        let page = Page::for_path("/site/sobre.html");
        assert_eq!(page.path, ABOUT_PAGE);
        assert!(!page.contains("list-portugues"));
        assert!(
            page.links
                .iter()
                .any(|l| l.href.as_deref() == Some("index.html#artes"))
        );
    }

    #[test]
    fn lookups_distinguish_missing_and_mistyped_elements() {
        let page = Page::index();
        assert_eq!(
            page.list("list-nope").unwrap_err(),
            PageError::MissingElement("list-nope".into())
        );
        assert!(matches!(
            page.list("loading-artes").unwrap_err(),
            PageError::WrongKind { .. }
        ));
        assert!(page.search("list-artes").is_none());
    }
}
