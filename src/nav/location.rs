use crate::page::INDEX_PAGE;

/// Page path plus optional `#fragment`, e.g. `index.html#artes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub fragment: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: INDEX_PAGE.to_string(),
            fragment: None,
        }
    }
}

impl Location {
    pub fn parse(href: &str) -> Self {
        let (path, fragment) = match href.trim().split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (href.trim(), None),
        };

        Self {
            path: if path.is_empty() {
                INDEX_PAGE.to_string()
            } else {
                path.to_string()
            },
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        }
    }

    /// Resolves `href` against this location; a bare `#x` keeps the current path.
    pub fn join(&self, href: &str) -> Self {
        match href.strip_prefix('#') {
            Some(fragment) => Self {
                path: self.path.clone(),
                fragment: Some(fragment.to_string()).filter(|f| !f.is_empty()),
            },
            None => Self::parse(href),
        }
    }

    pub fn href(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!("{}#{}", self.path, fragment),
            None => self.path.clone(),
        }
    }
}
