#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    ToggleMenu,

    // Navigation
    NextLink,
    PreviousLink,
    ActivateLink,
    FocusNav,
    FocusList,

    // Search
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,

    // Listing
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    OpenSelected,

    Click { column: u16, row: u16 },
}
