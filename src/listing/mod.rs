pub mod icon;
pub mod search;

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{error, info};

use crate::{
    http::{DriveSource, FetchError, FileRecord},
    page::{FileEntry, ListItem, Page, PageError, SearchBinding},
};

pub use icon::icon_for;
pub use search::{NO_RESULTS, filter_files, on_search_input};

pub const SKELETON_COUNT: usize = 3;
pub const NOT_CONFIGURED: &str = "Configurar ID da pasta na configuração";
pub const FALLBACK_VIEW_URL: &str = "https://drive.google.com/file/d";

pub type ListingOutcome = Result<Vec<FileRecord>, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Empty,
    Populated,
    Error,
}

/// One folder and the page regions its listing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListingRequest {
    pub folder_id: String,
    pub list_id: String,
    pub loading_id: String,
    pub empty_id: String,
    pub error_id: String,
    pub search_id: Option<String>,
}

impl FolderListingRequest {
    pub fn for_category(category: &str, folder_id: &str) -> Self {
        Self {
            folder_id: folder_id.to_string(),
            list_id: format!("list-{category}"),
            loading_id: format!("loading-{category}"),
            empty_id: format!("empty-{category}"),
            error_id: format!("error-{category}"),
            search_id: Some(format!("search-{category}")),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.folder_id.is_empty()
    }
}

/// Puts the listing into its pending state.
///
/// Returns `false` when no folder id is configured; the list then carries a static
/// notice and no fetch must follow.
pub fn begin_load(page: &mut Page, request: &FolderListingRequest) -> Result<bool, PageError> {
    if !request.is_configured() {
        *page.list_mut(&request.list_id)? = vec![ListItem::Notice(NOT_CONFIGURED.to_string())];
        return Ok(false);
    }

    *page.list_mut(&request.list_id)? = vec![ListItem::Skeleton; SKELETON_COUNT];
    page.set_hidden(&request.loading_id, false)?;
    page.set_hidden(&request.empty_id, true)?;
    page.set_hidden(&request.error_id, true)?;
    Ok(true)
}

/// Applies a fetch outcome to the listing's regions. The loading indicator is
/// hidden whatever the outcome.
pub fn finish_load(
    page: &mut Page,
    request: &FolderListingRequest,
    outcome: ListingOutcome,
) -> Result<DisplayState, PageError> {
    let state = match outcome {
        Err(err) => {
            error!(folder_id = %request.folder_id, %err, "failed to load folder");
            page.set_hidden(&request.error_id, false)?;
            DisplayState::Error
        }
        Ok(files) if files.is_empty() => {
            page.set_hidden(&request.empty_id, false)?;
            DisplayState::Empty
        }
        Ok(files) => {
            render_files(page.list_mut(&request.list_id)?, &files);
            info!(folder_id = %request.folder_id, count = files.len(), "folder loaded");

            if let Some(input) = request
                .search_id
                .as_deref()
                .and_then(|id| page.search_mut(id))
            {
                input.binding = Some(SearchBinding {
                    list_id: request.list_id.clone(),
                    files: files.into(),
                });
            }
            DisplayState::Populated
        }
    };

    page.set_hidden(&request.loading_id, true)?;
    Ok(state)
}

/// Pending state, fetch and render in one go. `None` means the folder isn't configured.
pub async fn load_files(
    source: &dyn DriveSource,
    page: &mut Page,
    request: &FolderListingRequest,
) -> Result<Option<DisplayState>, PageError> {
    if !begin_load(page, request)? {
        return Ok(None);
    }

    let outcome = source.list_folder(&request.folder_id).await;
    finish_load(page, request, outcome).map(Some)
}

pub fn render_files<'a>(list: &mut Vec<ListItem>, files: impl IntoIterator<Item = &'a FileRecord>) {
    list.clear();
    list.extend(files.into_iter().map(|f| ListItem::File(entry_for(f))));
}

pub fn entry_for(file: &FileRecord) -> FileEntry {
    FileEntry {
        icon: icon_for(&file.mime_type),
        name: file.name.clone(),
        link: link_for(file),
        updated: format_date(&file.modified_time),
    }
}

pub fn link_for(file: &FileRecord) -> String {
    [&file.view_link, &file.download_link]
        .into_iter()
        .flatten()
        .find(|link| !link.is_empty())
        .cloned()
        .unwrap_or_else(|| format!("{FALLBACK_VIEW_URL}/{}/view", file.id))
}

/// Local calendar date in `dd/mm/yyyy`.
pub fn format_date(time: &DateTime<Utc>) -> String {
    format_date_in(time, &Local)
}

/// Calendar date of `time` as seen in `zone`, in `dd/mm/yyyy`.
pub fn format_date_in<Tz>(time: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(zone).format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn record(id: &str, view: Option<&str>, download: Option<&str>) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: format!("{id}.pdf"),
            mime_type: "application/pdf".to_string(),
            modified_time: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
            view_link: view.map(str::to_string),
            download_link: download.map(str::to_string),
            icon_link: None,
        }
    }

    #[test]
    fn link_prefers_view_then_download_then_fallback() {
        assert_eq!(link_for(&record("a", Some("v"), Some("d"))), "v");
        assert_eq!(link_for(&record("a", None, Some("d"))), "d");
        assert_eq!(link_for(&record("a", Some(""), Some("d"))), "d");
        assert_eq!(
            link_for(&record("a1", None, None)),
            "https://drive.google.com/file/d/a1/view"
        );
    }

    #[test]
    fn dates_use_day_month_year() {
        let noon = Local
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&noon), "05/03/2024");
    }

    #[test]
    fn dates_follow_the_given_zone() {
        let late = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let kiritimati = FixedOffset::east_opt(14 * 3600).unwrap();
        let honolulu = FixedOffset::west_opt(10 * 3600).unwrap();

        assert_eq!(format_date_in(&late, &Utc), "05/03/2024");
        assert_eq!(format_date_in(&late, &kiritimati), "06/03/2024");
        assert_eq!(format_date_in(&late, &honolulu), "05/03/2024");
    }

    #[test]
    fn unconfigured_folder_writes_notice_only() {
        let mut page = Page::index();
        let request = FolderListingRequest::for_category("artes", "");

        assert!(!begin_load(&mut page, &request).unwrap());
        assert_eq!(
            page.list("list-artes").unwrap(),
            &[ListItem::Notice(NOT_CONFIGURED.to_string())]
        );
    }

    #[test]
    fn pending_state_shows_skeletons_and_loading() {
        let mut page = Page::index();
        let request = FolderListingRequest::for_category("artes", "folder");
        page.set_hidden("error-artes", false).unwrap();

        assert!(begin_load(&mut page, &request).unwrap());
        assert_eq!(page.list("list-artes").unwrap().len(), SKELETON_COUNT);
        assert!(!page.is_hidden("loading-artes").unwrap());
        assert!(page.is_hidden("empty-artes").unwrap());
        assert!(page.is_hidden("error-artes").unwrap());
    }

    #[test]
    fn missing_list_region_is_fatal() {
        let mut page = Page::index();
        page.remove("list-artes");
        let request = FolderListingRequest::for_category("artes", "folder");
        assert_eq!(
            begin_load(&mut page, &request).unwrap_err(),
            PageError::MissingElement("list-artes".into())
        );
    }

    #[test]
    fn missing_search_input_disables_search_only() {
        let mut page = Page::index();
        page.remove("search-artes");
        let request = FolderListingRequest::for_category("artes", "folder");

        begin_load(&mut page, &request).unwrap();
        let state = finish_load(&mut page, &request, Ok(vec![record("a", None, None)])).unwrap();
        assert_eq!(state, DisplayState::Populated);
        assert_eq!(page.list("list-artes").unwrap().len(), 1);
    }
}
