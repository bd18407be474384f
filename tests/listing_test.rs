//! Folder listing behaviour against a fake drive

mod helpers;

use drivedeck::{
    listing::{
        DisplayState, FolderListingRequest, NO_RESULTS, NOT_CONFIGURED, icon_for, load_files,
        on_search_input,
    },
    page::{ListItem, Page},
};
use helpers::{FakeDrive, Reply, file, sample_files};

fn request(folder_id: &str) -> FolderListingRequest {
    FolderListingRequest::for_category("portugues", folder_id)
}

fn file_names(page: &Page) -> Vec<String> {
    page.list("list-portugues")
        .unwrap()
        .iter()
        .filter_map(|item| match item {
            ListItem::File(entry) => Some(entry.name.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn unconfigured_folder_never_hits_the_network() {
    let drive = FakeDrive::default();
    let mut page = Page::index();

    let state = load_files(&drive, &mut page, &request("")).await.unwrap();

    assert_eq!(state, None);
    assert_eq!(drive.calls(), 0);
    assert_eq!(
        page.list("list-portugues").unwrap(),
        &[ListItem::Notice(NOT_CONFIGURED.to_string())]
    );
}

#[tokio::test]
async fn empty_folder_shows_empty_indicator() {
    let drive = FakeDrive::default().with("folder", Reply::Files(vec![]));
    let mut page = Page::index();

    let state = load_files(&drive, &mut page, &request("folder")).await.unwrap();

    assert_eq!(state, Some(DisplayState::Empty));
    assert!(!page.is_hidden("empty-portugues").unwrap());
    assert!(page.is_hidden("loading-portugues").unwrap());
    assert!(page.is_hidden("error-portugues").unwrap());
    assert!(file_names(&page).is_empty());
}

#[tokio::test]
async fn populated_folder_renders_every_file() {
    let files = sample_files();
    let drive = FakeDrive::default().with("folder", Reply::Files(files.clone()));
    let mut page = Page::index();

    let state = load_files(&drive, &mut page, &request("folder")).await.unwrap();
    assert_eq!(state, Some(DisplayState::Populated));
    assert_eq!(drive.calls(), 1);

    let items = page.list("list-portugues").unwrap();
    assert_eq!(items.len(), files.len());
    for (item, record) in items.iter().zip(&files) {
        let ListItem::File(entry) = item else {
            panic!("expected a file entry, got {item:?}");
        };
        assert_eq!(entry.name, record.name);
        assert_eq!(entry.icon, icon_for(&record.mime_type));
        assert!(!entry.link.is_empty());
        assert_eq!(entry.updated, "20/05/2024");
    }

    assert!(page.is_hidden("loading-portugues").unwrap());
    assert!(page.is_hidden("empty-portugues").unwrap());
    assert!(page.is_hidden("error-portugues").unwrap());
}

#[tokio::test]
async fn search_filters_the_full_fetched_set_each_time() {
    let drive = FakeDrive::default().with("folder", Reply::Files(sample_files()));
    let mut page = Page::index();
    load_files(&drive, &mut page, &request("folder")).await.unwrap();

    let matches = on_search_input(&mut page, "search-portugues", "xyz").unwrap();
    assert_eq!(matches, Some(0));
    assert_eq!(
        page.list("list-portugues").unwrap(),
        &[ListItem::Notice(NO_RESULTS.to_string())]
    );

    on_search_input(&mut page, "search-portugues", "MODERN").unwrap();
    assert_eq!(file_names(&page), vec!["Apresentação Modernismo"]);

    on_search_input(&mut page, "search-portugues", "o").unwrap();
    assert_eq!(file_names(&page).len(), 4);

    on_search_input(&mut page, "search-portugues", "").unwrap();
    assert_eq!(file_names(&page).len(), 4);
}

#[tokio::test]
async fn http_failure_shows_error_and_no_entries() {
    for status in [404, 500] {
        let drive = FakeDrive::default().with("folder", Reply::Status(status));
        let mut page = Page::index();

        let state = load_files(&drive, &mut page, &request("folder")).await.unwrap();

        assert_eq!(state, Some(DisplayState::Error));
        assert!(!page.is_hidden("error-portugues").unwrap());
        assert!(page.is_hidden("loading-portugues").unwrap());
        assert!(page.is_hidden("empty-portugues").unwrap());
        assert!(file_names(&page).is_empty());
        assert!(
            page.list("list-portugues")
                .unwrap()
                .iter()
                .all(|item| *item == ListItem::Skeleton)
        );
    }
}

#[tokio::test]
async fn failed_load_leaves_search_unwired() {
    let drive = FakeDrive::default().with("folder", Reply::Status(500));
    let mut page = Page::index();
    load_files(&drive, &mut page, &request("folder")).await.unwrap();

    assert_eq!(
        on_search_input(&mut page, "search-portugues", "a").unwrap(),
        None
    );
}

#[tokio::test]
async fn link_falls_back_when_drive_omits_links() {
    let mut record = file("abc", "Sem link", "text/plain");
    record.view_link = None;
    let drive = FakeDrive::default().with("folder", Reply::Files(vec![record]));
    let mut page = Page::index();
    load_files(&drive, &mut page, &request("folder")).await.unwrap();

    let ListItem::File(entry) = &page.list("list-portugues").unwrap()[0] else {
        panic!("expected a file entry");
    };
    assert_eq!(entry.link, "https://drive.google.com/file/d/abc/view");
    assert_eq!(entry.icon, "📄");
}
