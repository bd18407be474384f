pub mod model;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub use model::{FileList, FileRecord};

pub const LIST_FIELDS: &str =
    "files(id,name,mimeType,modifiedTime,webViewLink,webContentLink,iconLink)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unreadable response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid API base: {0}")]
    Base(String),
}

/// Anything that can list the children of a remote folder.
#[async_trait]
pub trait DriveSource: Send + Sync {
    async fn list_folder(&self, folder_id: &str) -> Result<Vec<FileRecord>, FetchError>;
}

pub struct ApiService {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl ApiService {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let client = reqwest::Client::builder().gzip(true).build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// One-page, non-trashed children of `folder_id`, newest first.
    pub fn files_url(&self, folder_id: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}/drive/v3/files", self.api_base))
            .map_err(|e| FetchError::Base(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", &format!("'{folder_id}' in parents and trashed=false"))
            .append_pair("orderBy", "modifiedTime desc")
            .append_pair("fields", LIST_FIELDS)
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl DriveSource for ApiService {
    async fn list_folder(&self, folder_id: &str) -> Result<Vec<FileRecord>, FetchError> {
        let url = self.files_url(folder_id)?;
        debug!(folder_id, "listing folder");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let list: FileList = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e)
            } else {
                FetchError::Transport(e)
            }
        })?;
        Ok(list.into_files())
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::oneshot,
    };

    use super::*;
    use crate::config::FolderIds;

    /// Answers a single request with `status` and `body`; yields the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let request = String::from_utf8_lossy(&request).into_owned();
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{addr}"), rx)
    }

    fn service(base: &str) -> ApiService {
        ApiService::new(&Config {
            api_key: "secret key".to_string(),
            api_base: base.to_string(),
            folders: FolderIds::default(),
            mobile_breakpoint: 768,
        })
        .unwrap()
    }

    #[test]
    fn files_url_queries_non_trashed_children() {
        let url = service("https://www.googleapis.com/").files_url("abc123").unwrap();
        assert_eq!(url.path(), "/drive/v3/files");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".into(), "'abc123' in parents and trashed=false".into()),
                ("orderBy".into(), "modifiedTime desc".into()),
                ("fields".into(), LIST_FIELDS.into()),
                ("key".into(), "secret key".into()),
            ]
        );
    }

    #[test]
    fn bad_base_is_reported() {
        let err = service("not a url").files_url("x").unwrap_err();
        assert!(matches!(err, FetchError::Base(_)));
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let (base, request_line) = serve_once("404 Not Found", r#"{"error":{}}"#).await;

        let err = service(&base).list_folder("abc").await.unwrap_err();
        assert!(matches!(err, FetchError::Status(StatusCode::NOT_FOUND)));

        let line = request_line.await.unwrap();
        assert!(line.starts_with("GET /drive/v3/files?q="), "{line}");
    }

    #[tokio::test]
    async fn response_without_files_is_empty() {
        let (base, _) = serve_once("200 OK", "{}").await;
        let files = service(&base).list_folder("abc").await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (base, _) = serve_once("200 OK", "<html>quota</html>").await;
        let err = service(&base).list_folder("abc").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
    }
}
