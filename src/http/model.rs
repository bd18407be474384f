use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Metadata for one file in a Drive folder, as returned by `files.list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub modified_time: DateTime<Utc>,
    #[serde(default, rename = "webViewLink")]
    pub view_link: Option<String>,
    #[serde(default, rename = "webContentLink")]
    pub download_link: Option<String>,
    #[serde(default)]
    pub icon_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Option<Vec<FileRecord>>,
}

impl FileList {
    pub fn into_files(self) -> Vec<FileRecord> {
        self.files.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_field_is_an_empty_listing() {
        let list: FileList = serde_json::from_str("{}").unwrap();
        assert!(list.into_files().is_empty());
    }

    #[test]
    fn decodes_drive_field_names() {
        let body = r#"{
            "files": [{
                "id": "1a",
                "name": "Plano de aula.pdf",
                "mimeType": "application/pdf",
                "modifiedTime": "2024-03-05T12:00:00.000Z",
                "webViewLink": "https://drive.google.com/file/d/1a/view?usp=drivesdk"
            }]
        }"#;
        let files = serde_json::from_str::<FileList>(body).unwrap().into_files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].mime_type, "application/pdf");
        assert_eq!(
            files[0].view_link.as_deref(),
            Some("https://drive.google.com/file/d/1a/view?usp=drivesdk")
        );
        assert_eq!(files[0].download_link, None);
    }
}
