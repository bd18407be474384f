use thiserror::Error;

use crate::nav::menu::MOBILE_BREAKPOINT;

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com";

/// Categories shown on the index page, in navigation order: `(id, title)`.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("portugues", "Língua Portuguesa"),
    ("ingles", "Inglês"),
    ("espanhol", "Espanhol"),
    ("libras", "Libras"),
    ("artes", "Artes"),
    ("edfisica", "Educação Física"),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderIds {
    pub portugues: String,
    pub ingles: String,
    pub espanhol: String,
    pub libras: String,
    pub artes: String,
    pub edfisica: String,
}

impl FolderIds {
    /// Folder id configured for a category; empty when unset or unknown.
    pub fn get(&self, category: &str) -> &str {
        match category {
            "portugues" => &self.portugues,
            "ingles" => &self.ingles,
            "espanhol" => &self.espanhol,
            "libras" => &self.libras,
            "artes" => &self.artes,
            "edfisica" => &self.edfisica,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub folders: FolderIds,
    pub mobile_breakpoint: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("DRIVE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("DRIVE_API_KEY"))?;

        let api_base = lookup("DRIVE_API_BASE")
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let folder = |name: &str| lookup(name).map(|v| v.trim().to_string()).unwrap_or_default();
        let folders = FolderIds {
            portugues: folder("DRIVE_FOLDER_PORTUGUES"),
            ingles: folder("DRIVE_FOLDER_INGLES"),
            espanhol: folder("DRIVE_FOLDER_ESPANHOL"),
            libras: folder("DRIVE_FOLDER_LIBRAS"),
            artes: folder("DRIVE_FOLDER_ARTES"),
            edfisica: folder("DRIVE_FOLDER_EDFISICA"),
        };

        let mobile_breakpoint = match lookup("DRIVEDECK_MOBILE_BREAKPOINT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    name: "DRIVEDECK_MOBILE_BREAKPOINT",
                    value,
                })?,
            None => MOBILE_BREAKPOINT,
        };

        Ok(Self {
            api_key,
            api_base,
            folders,
            mobile_breakpoint,
        })
    }
}
