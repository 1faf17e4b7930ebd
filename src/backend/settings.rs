use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::constants::{APP_ID, DEFAULT_ENDPOINT};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog endpoint answering with the app list.
    pub endpoint: String,
    /// Hand the install control's URI to the desktop after marking it installed.
    pub open_install_uri: bool,
    /// Entry template read from disk instead of the bundled one.
    pub template_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            open_install_uri: true,
            template_path: None,
        }
    }
}

impl Settings {
    /// Missing file means defaults; an unreadable one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to open {}", path.display()))
            }
        };
        serde_json::from_reader(file)
            .with_context(|| format!("Failed to read settings file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Like `load_from`, but writes the defaults out first so there is a file to edit.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }
        Self::load_from(path)
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir().context("Failed to locate the user data directory")?;
    path.push(APP_ID);
    path.push("settings.json");
    Ok(path)
}

pub fn get() -> Result<Settings> {
    Settings::load_or_init(&settings_path()?)
}
