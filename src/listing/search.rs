use std::sync::Arc;

use crate::{
    http::FileRecord,
    listing::render_files,
    page::{ListItem, Page, PageError},
};

pub const NO_RESULTS: &str = "Nenhum resultado para a busca.";

/// Files whose name contains the trimmed query, ignoring case.
pub fn filter_files<'a>(files: &'a [FileRecord], query: &str) -> Vec<&'a FileRecord> {
    let query = query.trim().to_lowercase();
    files
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&query))
        .collect()
}

/// Stores the new input value and, once the listing is bound, re-renders it from
/// the full fetched set. Returns the number of matches when a binding exists.
pub fn on_search_input(
    page: &mut Page,
    search_id: &str,
    value: &str,
) -> Result<Option<usize>, PageError> {
    let Some(input) = page.search_mut(search_id) else {
        return Ok(None);
    };
    input.value = value.to_string();

    let Some(binding) = input.binding.clone() else {
        return Ok(None);
    };

    let files: Arc<[FileRecord]> = binding.files;
    let matches = filter_files(&files, value);
    let list = page.list_mut(&binding.list_id)?;

    if matches.is_empty() {
        *list = vec![ListItem::Notice(NO_RESULTS.to_string())];
    } else {
        render_files(list, matches.iter().copied());
    }
    Ok(Some(matches.len()))
}
