use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use shared::AppId;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The static dataset directory the dashboard is served from
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    pub fn read_text(&self, file: &str) -> Result<String> {
        let path = self.path(file);
        fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))
    }

    /// Like [`read_text`](Self::read_text), but a missing file is `None`
    pub fn read_optional(&self, file: &str) -> Result<Option<String>> {
        let path = self.path(file);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Failed to read {}", path.display())),
        }
    }

    /// Writes pretty JSON with two-space indentation, non-ASCII left as is
    pub fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.path(file);
        let mut body = serde_json::to_string_pretty(value).context(format!("Failed to serialize {}", file))?;
        body.push('\n');
        fs::write(&path, body).context(format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Review files under `reviews/`, keyed by the appid in their file name
    pub fn review_files(&self) -> Result<Vec<(AppId, PathBuf)>> {
        let dir = self.path("reviews");
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).context(format!("Failed to list {}", dir.display())),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.context(format!("Failed to list {}", dir.display()))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            match stem.parse::<AppId>() {
                Ok(appid) => files.push((appid, path)),
                Err(_) => debug!("Skipping review file with non-numeric name: {}", path.display()),
            }
        }
        files.sort();
        Ok(files)
    }
}
