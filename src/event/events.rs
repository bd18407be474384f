use crate::{
    listing::{FolderListingRequest, ListingOutcome},
    nav::location::Location,
};

#[derive(Debug)]
pub enum Event {
    /// A spawned folder fetch finished. `generation` identifies the page load
    /// that issued it.
    FolderFetched {
        generation: u64,
        request: FolderListingRequest,
        outcome: ListingOutcome,
    },
    Navigate(Location),
}
