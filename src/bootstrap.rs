use tracing::info;

use crate::{
    config::{CATEGORIES, Config},
    listing::{FolderListingRequest, begin_load},
    nav::{location::Location, menu::MenuController, router::Router},
    page::{ABOUT_PAGE, HOME_SECTION, Page, PageError},
};

/// Marker element whose presence identifies the index page.
const INDEX_MARKER: &str = "list-portugues";

pub struct Initialized {
    pub router: Router,
    pub menu: MenuController,
    /// Listings left in their pending state, waiting for a fetch.
    pub pending: Vec<FolderListingRequest>,
}

/// Page-load wiring: menu, one listing per category and the initial section.
pub fn initialize(
    page: &mut Page,
    location: &Location,
    config: &Config,
) -> Result<Initialized, PageError> {
    let menu = MenuController::attach(page.has_menu_toggle, config.mobile_breakpoint);
    let mut router = Router::new(HOME_SECTION);
    let mut pending = Vec::new();

    if page.contains(INDEX_MARKER) {
        for (category, _) in CATEGORIES {
            let request = FolderListingRequest::for_category(category, config.folders.get(category));
            if begin_load(page, &request)? {
                pending.push(request);
            }
        }

        let section = location.fragment.as_deref().unwrap_or(HOME_SECTION);
        router.show_section(page, section);
    }

    if location.path.contains(ABOUT_PAGE) {
        if let Some(link) = page
            .links
            .iter_mut()
            .find(|l| l.href.as_deref() == Some(ABOUT_PAGE))
        {
            link.active = true;
        }
    }

    info!(
        location = %location.href(),
        pending = pending.len(),
        "page initialized"
    );

    Ok(Initialized {
        router,
        menu,
        pending,
    })
}
