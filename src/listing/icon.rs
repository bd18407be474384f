/// Ordered `(substring, glyph)` rules; the first substring found in a MIME type wins.
pub const MIME_ICONS: [(&str, &str); 6] = [
    ("pdf", "📕"),
    ("spreadsheet", "📊"),
    ("presentation", "📑"),
    ("image", "🖼️"),
    ("video", "🎬"),
    ("audio", "🎵"),
];

pub const DEFAULT_ICON: &str = "📄";

pub fn icon_for(mime_type: &str) -> &'static str {
    MIME_ICONS
        .iter()
        .find(|(needle, _)| mime_type.contains(needle))
        .map_or(DEFAULT_ICON, |(_, icon)| icon)
}
