#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use chrono::{Local, TimeZone, Utc};
use drivedeck::{
    config::{Config, FolderIds},
    http::{DriveSource, FetchError, FileRecord},
};
use reqwest::StatusCode;

#[derive(Clone)]
pub enum Reply {
    Files(Vec<FileRecord>),
    Status(u16),
}

/// In-memory drive that answers per folder id and counts requests.
#[derive(Default)]
pub struct FakeDrive {
    replies: Mutex<HashMap<String, Reply>>,
    calls: AtomicUsize,
}

impl FakeDrive {
    pub fn with(self, folder_id: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(folder_id.to_string(), reply);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DriveSource for FakeDrive {
    async fn list_folder(&self, folder_id: &str) -> Result<Vec<FileRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().get(folder_id).cloned();
        match reply {
            Some(Reply::Files(files)) => Ok(files),
            Some(Reply::Status(code)) => Err(FetchError::Status(
                StatusCode::from_u16(code).unwrap(),
            )),
            None => Ok(Vec::new()),
        }
    }
}

pub fn file(id: &str, name: &str, mime_type: &str) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        // Local noon, so the displayed date is 20/05/2024 in every zone.
        modified_time: Local
            .with_ymd_and_hms(2024, 5, 20, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc),
        view_link: Some(format!("https://drive.google.com/file/d/{id}/view")),
        download_link: None,
        icon_link: None,
    }
}

pub fn sample_files() -> Vec<FileRecord> {
    vec![
        file("1", "Gramática - Verbos.pdf", "application/pdf"),
        file("2", "Notas do bimestre", "application/vnd.google-apps.spreadsheet"),
        file("3", "Apresentação Modernismo", "application/vnd.google-apps.presentation"),
        file("4", "Poema ilustrado.png", "image/png"),
    ]
}

pub fn config(folders: FolderIds) -> Config {
    Config {
        api_key: "test-key".to_string(),
        api_base: "http://127.0.0.1:9".to_string(),
        folders,
        mobile_breakpoint: 768,
    }
}
